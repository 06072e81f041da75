//! Application state for the timesheet engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{CompanySettings, ConfigLoader};

/// Shared application state.
///
/// Holds the company settings used whenever a request does not carry its own.
#[derive(Clone)]
pub struct AppState {
    /// The loaded company settings.
    settings: Arc<CompanySettings>,
}

impl AppState {
    /// Creates a new application state from a configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_settings(config.into_settings())
    }

    /// Creates a new application state from already validated settings.
    pub fn with_settings(settings: CompanySettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns the company settings.
    pub fn settings(&self) -> &CompanySettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // axum state must be Clone
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_settings() {
        let settings = CompanySettings::new("Acme", 20, 4).unwrap();
        let state = AppState::with_settings(settings.clone());
        assert_eq!(state.settings(), &settings);
    }
}
