//! Configuration types for company payroll settings.
//!
//! Settings are deserialized into [`CompanySettingsFile`] first and only
//! become a [`CompanySettings`] once every field has been range checked.

use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize, Serializer};

use crate::calculation::DEFAULT_PAID_REST_MINUTES;
use crate::error::{EngineError, EngineResult};

/// Shortest paid rest break a company may configure, in minutes.
pub const MIN_PAID_REST_MINUTES: u32 = 10;

/// Longest paid rest break a company may configure, in minutes.
pub const MAX_PAID_REST_MINUTES: u32 = 30;

/// Time zone employees' wall clocks are read in unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Pacific::Auckland;

/// The weekday on which a company's pay week closes.
///
/// Stored and serialized with Sunday-based numbering (0 = Sunday through
/// 6 = Saturday), which is how company settings record it.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::PayWeekEndDay;
/// use chrono::Weekday;
///
/// let day = PayWeekEndDay::try_from(3).unwrap();
/// assert_eq!(day.weekday(), Weekday::Wed);
/// assert_eq!(day.number(), 3);
/// assert!(PayWeekEndDay::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PayWeekEndDay(Weekday);

impl PayWeekEndDay {
    /// Pay weeks ending on Sunday.
    pub const SUNDAY: Self = Self(Weekday::Sun);

    /// Returns the weekday the pay week ends on.
    pub fn weekday(self) -> Weekday {
        self.0
    }

    /// Returns the Sunday-based number (0..=6) of the weekday.
    pub fn number(self) -> u8 {
        self.0.num_days_from_sunday() as u8
    }
}

impl Default for PayWeekEndDay {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl From<Weekday> for PayWeekEndDay {
    fn from(weekday: Weekday) -> Self {
        Self(weekday)
    }
}

impl From<PayWeekEndDay> for u8 {
    fn from(day: PayWeekEndDay) -> Self {
        day.number()
    }
}

impl TryFrom<u8> for PayWeekEndDay {
    type Error = EngineError;

    fn try_from(value: u8) -> EngineResult<Self> {
        // chrono numbers from Monday, settings number from Sunday
        let weekday = match value {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => {
                return Err(EngineError::InvalidConfig {
                    field: "pay_week_end_day".to_string(),
                    message: format!("must be between 0 (Sunday) and 6 (Saturday), got {}", value),
                });
            }
        };
        Ok(Self(weekday))
    }
}

/// Company settings as written in `company.yaml` or sent with a request.
///
/// Every field is optional and falls back to the engine default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySettingsFile {
    /// Display name of the company.
    #[serde(default)]
    pub name: String,
    /// Length of one paid rest break in minutes.
    #[serde(default = "default_paid_rest_minutes")]
    pub paid_rest_minutes: u32,
    /// Sunday-based weekday number the pay week ends on.
    #[serde(default)]
    pub pay_week_end_day: u8,
    /// IANA name of the time zone employees work in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for CompanySettingsFile {
    fn default() -> Self {
        Self {
            name: String::new(),
            paid_rest_minutes: DEFAULT_PAID_REST_MINUTES,
            pay_week_end_day: 0,
            timezone: default_timezone(),
        }
    }
}

fn default_paid_rest_minutes() -> u32 {
    DEFAULT_PAID_REST_MINUTES
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}

fn serialize_timezone<S: Serializer>(timezone: &Tz, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(timezone.name())
}

/// Parses an IANA time zone name such as `Pacific/Auckland`.
pub fn parse_timezone(name: &str) -> EngineResult<Tz> {
    name.parse::<Tz>().map_err(|e| EngineError::InvalidConfig {
        field: "timezone".to_string(),
        message: format!("unknown time zone '{}': {}", name, e),
    })
}

/// Validated company settings that parameterize every calculation.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::CompanySettings;
///
/// let settings = CompanySettings::new("Acme Builders", 15, 5).unwrap();
/// assert_eq!(settings.paid_rest_minutes(), 15);
/// assert_eq!(settings.pay_week_end_day().number(), 5);
///
/// assert!(CompanySettings::new("Acme Builders", 45, 5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySettings {
    name: String,
    paid_rest_minutes: u32,
    pay_week_end_day: PayWeekEndDay,
    #[serde(serialize_with = "serialize_timezone")]
    timezone: Tz,
}

impl CompanySettings {
    /// Creates validated settings in the default time zone.
    ///
    /// Returns [`EngineError::InvalidConfig`] when `paid_rest_minutes` is
    /// outside 10..=30 or `pay_week_end_day` is outside 0..=6.
    pub fn new(
        name: impl Into<String>,
        paid_rest_minutes: u32,
        pay_week_end_day: u8,
    ) -> EngineResult<Self> {
        Ok(Self {
            name: name.into(),
            paid_rest_minutes: validate_paid_rest_minutes(paid_rest_minutes)?,
            pay_week_end_day: PayWeekEndDay::try_from(pay_week_end_day)?,
            timezone: DEFAULT_TIMEZONE,
        })
    }

    /// Returns these settings with employees' wall clocks read in `timezone`.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Returns the company name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the length of one paid rest break in minutes.
    pub fn paid_rest_minutes(&self) -> u32 {
        self.paid_rest_minutes
    }

    /// Returns the weekday the pay week ends on.
    pub fn pay_week_end_day(&self) -> PayWeekEndDay {
        self.pay_week_end_day
    }

    /// Returns the time zone pay weeks and local timestamps are read in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            paid_rest_minutes: DEFAULT_PAID_REST_MINUTES,
            pay_week_end_day: PayWeekEndDay::default(),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl TryFrom<CompanySettingsFile> for CompanySettings {
    type Error = EngineError;

    fn try_from(file: CompanySettingsFile) -> EngineResult<Self> {
        let timezone = parse_timezone(&file.timezone)?;
        Ok(Self::new(file.name, file.paid_rest_minutes, file.pay_week_end_day)?.with_timezone(timezone))
    }
}

/// Checks that a paid rest break length is within the configurable range.
pub fn validate_paid_rest_minutes(minutes: u32) -> EngineResult<u32> {
    if (MIN_PAID_REST_MINUTES..=MAX_PAID_REST_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(EngineError::InvalidConfig {
            field: "paid_rest_minutes".to_string(),
            message: format!(
                "must be between {} and {} minutes, got {}",
                MIN_PAID_REST_MINUTES, MAX_PAID_REST_MINUTES, minutes
            ),
        })
    }
}
