//! Configuration loading and management for the timesheet engine.
//!
//! Company settings supply the paid rest break length, the weekday the pay
//! week ends on and the time zone employees work in. All are validated here,
//! at the configuration boundary, so the calculation functions can take them
//! as plain parameters.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Pay week ends on: {:?}", config.settings().pay_week_end_day().weekday());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanySettings, CompanySettingsFile, DEFAULT_TIMEZONE, MAX_PAID_REST_MINUTES,
    MIN_PAID_REST_MINUTES, PayWeekEndDay, parse_timezone, validate_paid_rest_minutes,
};
