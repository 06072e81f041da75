//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CompanySettings, CompanySettingsFile};

/// Loads and provides access to company settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── company.yaml   # paid rest length, pay week end day, time zone
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Paid rest break: {} minutes", loader.settings().paid_rest_minutes());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: CompanySettings,
}

impl ConfigLoader {
    /// Name of the settings file inside a configuration directory.
    pub const SETTINGS_FILE: &'static str = "company.yaml";

    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `company.yaml` is missing, is not valid YAML, or
    /// holds values outside their permitted ranges.
    ///
    /// ```no_run
    /// use timesheet_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), timesheet_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings_path = path.as_ref().join(Self::SETTINGS_FILE);
        let path_str = settings_path.display().to_string();

        let content = fs::read_to_string(&settings_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            paid_rest_minutes = loader.settings.paid_rest_minutes(),
            pay_week_end_day = loader.settings.pay_week_end_day().number(),
            timezone = loader.settings.timezone().name(),
            "Loaded company settings"
        );
        Ok(loader)
    }

    /// Parses configuration from an inline YAML document.
    ///
    /// ```
    /// use timesheet_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("paid_rest_minutes: 15\npay_week_end_day: 5").unwrap();
    /// assert_eq!(loader.settings().paid_rest_minutes(), 15);
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let file: CompanySettingsFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            settings: CompanySettings::try_from(file)?,
        })
    }

    /// Returns the loaded company settings.
    pub fn settings(&self) -> &CompanySettings {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> CompanySettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().paid_rest_minutes(), 10);
        assert_eq!(loader.settings().pay_week_end_day().weekday(), Weekday::Sun);
        assert_eq!(loader.settings().timezone(), chrono_tz::Pacific::Auckland);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_inline_yaml_overrides() {
        let loader =
            ConfigLoader::from_yaml_str("name: Harbour Joinery\npaid_rest_minutes: 20\npay_week_end_day: 3")
                .unwrap();
        let settings = loader.into_settings();
        assert_eq!(settings.name(), "Harbour Joinery");
        assert_eq!(settings.paid_rest_minutes(), 20);
        assert_eq!(settings.pay_week_end_day().weekday(), Weekday::Wed);
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        match ConfigLoader::from_yaml_str("paid_rest_minutes: [ten") {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "<inline>"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_values_rejected_at_load() {
        match ConfigLoader::from_yaml_str("paid_rest_minutes: 45") {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "paid_rest_minutes")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }

        match ConfigLoader::from_yaml_str("pay_week_end_day: 7") {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "pay_week_end_day")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }

        match ConfigLoader::from_yaml_str("timezone: NZ/Nowhere") {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "timezone"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
