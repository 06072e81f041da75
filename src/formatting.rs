//! Duration helpers shared by timesheet views and exports.
//!
//! Every figure the engine hands to a report is either a minute count or an
//! hour count; these helpers turn them into the strings shown to employees
//! and managers.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a minute count as `"{h}h {m}m"`.
///
/// The hour part is omitted when there are no whole hours and the minute
/// part is omitted when the remainder is zero. Zero and negative inputs
/// format as `"0m"`.
///
/// # Examples
///
/// ```
/// use timesheet_engine::formatting::format_duration;
///
/// assert_eq!(format_duration(125), "2h 5m");
/// assert_eq!(format_duration(120), "2h");
/// assert_eq!(format_duration(45), "45m");
/// assert_eq!(format_duration(0), "0m");
/// ```
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let remainder = minutes % 60;

    match (hours, remainder) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Rounds an exact minute figure to whole minutes, halves away from zero.
pub fn round_minutes(minutes: Decimal) -> i64 {
    minutes
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Formats an exact minute figure, such as worked minutes, for display.
///
/// ```
/// use timesheet_engine::formatting::format_decimal_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_decimal_minutes(Decimal::new(4905, 1)), "8h 11m");
/// ```
pub fn format_decimal_minutes(minutes: Decimal) -> String {
    format_duration(round_minutes(minutes))
}

/// Fractional hours elapsed from `start` to `end`, or to `now` when `end` is absent.
///
/// An absent end means the interval is still open, so its length grows
/// until it is queried. An open interval that starts after `now` has not
/// begun yet and measures zero. Elapsed time is independent of any wall
/// clock, so a shift spanning a daylight saving change is paid for the
/// hours actually worked.
///
/// ```
/// use timesheet_engine::formatting::hours_between;
/// use chrono::{DateTime, Utc};
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
/// let start = at("2026-01-15T08:00:00+13:00");
///
/// assert_eq!(hours_between(start, Some(at("2026-01-15T09:30:00+13:00")), at("2026-01-15T20:00:00+13:00")), Decimal::new(15, 1));
/// assert_eq!(hours_between(start, None, at("2026-01-15T10:00:00+13:00")), Decimal::from(2));
///
/// // clocks go back at 03:00 on 2026-04-05: 22:00 to 06:00 is 9 hours
/// assert_eq!(
///     hours_between(at("2026-04-04T22:00:00+13:00"), Some(at("2026-04-05T06:00:00+12:00")), start),
///     Decimal::from(9)
/// );
/// ```
pub fn hours_between(start: DateTime<Utc>, end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Decimal {
    let end = end.unwrap_or_else(|| now.max(start));
    Decimal::from((end - start).num_milliseconds()) / Decimal::from(3_600_000)
}

/// Like [`hours_between`], measuring open intervals against the system clock.
pub fn hours_since(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Decimal {
    hours_between(start, end, Utc::now())
}

/// Whole minutes elapsed between two instants, truncated.
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes()
}
