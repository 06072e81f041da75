//! Conversion between instants and employees' local wall-clock time.
//!
//! Durations are always measured between instants. The wall clock is only
//! read to decide which calendar day, and so which pay week, a shift belongs
//! to, and to place timestamps recorded without an offset.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};

/// The wall-clock time shown in `timezone` at `instant`.
///
/// ```
/// use timesheet_engine::calculation::to_local_wall_clock;
/// use chrono::{DateTime, NaiveDateTime, Utc};
///
/// let instant: DateTime<Utc> = "2026-01-18T19:00:00Z".parse().unwrap();
/// let local = to_local_wall_clock(instant, chrono_tz::Pacific::Auckland);
///
/// // Monday morning in Auckland, still Sunday in UTC
/// assert_eq!(local, NaiveDateTime::parse_from_str("2026-01-19 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap());
/// ```
pub fn to_local_wall_clock(instant: DateTime<Utc>, timezone: Tz) -> NaiveDateTime {
    instant.with_timezone(&timezone).naive_local()
}

/// The instant a wall-clock time in `timezone` refers to.
///
/// A time repeated when clocks go back resolves to its first occurrence. A
/// time skipped when clocks go forward never happened and is rejected with
/// [`EngineError::InvalidTimestamp`].
pub fn from_local_wall_clock(local: NaiveDateTime, timezone: Tz) -> EngineResult<DateTime<Utc>> {
    timezone
        .from_local_datetime(&local)
        .earliest()
        .map(|zoned| zoned.with_timezone(&Utc))
        .ok_or_else(|| EngineError::InvalidTimestamp {
            message: format!(
                "{} does not exist in {}; clocks went forward past it",
                local,
                timezone.name()
            ),
        })
}
