//! Pay week grouping.
//!
//! Shifts are bucketed by the date their pay week ends. Dates are taken from
//! the local wall-clock time of clock in, never from a UTC-normalized value,
//! so a shift starting just before midnight stays in the week it was worked.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::PayWeekEndDay;

/// The date the pay week containing `date` ends on.
///
/// Returns `date` itself when it already falls on the week-ending weekday.
///
/// ```
/// use timesheet_engine::calculation::week_ending_day;
/// use timesheet_engine::config::PayWeekEndDay;
/// use chrono::NaiveDate;
///
/// // 2026-01-15 is a Thursday; Sunday-ending weeks close on the 18th
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(
///     week_ending_day(date, PayWeekEndDay::SUNDAY),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()
/// );
/// ```
pub fn week_ending_day(date: NaiveDate, pay_week_end_day: PayWeekEndDay) -> NaiveDate {
    let current = i64::from(date.weekday().num_days_from_sunday());
    let end = i64::from(pay_week_end_day.number());
    let days_until_end = (end - current).rem_euclid(7);
    date + Duration::days(days_until_end)
}

/// The last instant (23:59:59.999) of the pay week containing `shift_date`.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::get_week_ending_date;
/// use timesheet_engine::config::PayWeekEndDay;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.3f").unwrap();
///
/// // A Friday shift with weeks ending on Friday ends that same day
/// let friday = PayWeekEndDay::try_from(5).unwrap();
/// assert_eq!(
///     get_week_ending_date(at("2026-01-16 07:30:00.000"), friday),
///     at("2026-01-16 23:59:59.999")
/// );
/// ```
pub fn get_week_ending_date(shift_date: NaiveDateTime, pay_week_end_day: PayWeekEndDay) -> NaiveDateTime {
    week_ending_day(shift_date.date(), pay_week_end_day).and_time(end_of_day())
}

/// Stable `YYYY-MM-DD` grouping key for the pay week containing `shift_date`.
///
/// Keys sort lexicographically in chronological order.
///
/// ```
/// use timesheet_engine::calculation::get_week_ending_key;
/// use timesheet_engine::config::PayWeekEndDay;
/// use chrono::NaiveDateTime;
///
/// let at = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_week_ending_key(at, PayWeekEndDay::SUNDAY), "2026-01-18");
/// ```
pub fn get_week_ending_key(shift_date: NaiveDateTime, pay_week_end_day: PayWeekEndDay) -> String {
    week_key(week_ending_day(shift_date.date(), pay_week_end_day))
}

/// Formats a week-ending date as its grouping key.
pub fn week_key(week_ending: NaiveDate) -> String {
    week_ending.format("%Y-%m-%d").to_string()
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("Valid end of day time")
}
