//! Per-shift payroll figures.
//!
//! Worked minutes for a shift are its clocked minutes, less unpaid break
//! minutes, plus any paid rest entitlement the employee did not take. The
//! untaken credit is applied everywhere a worked figure is produced.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::config::CompanySettings;
use crate::models::{ShiftSummary, Shift};

use super::break_allocation::{BreakAllocation, calc_breaks, calc_travel};
use super::entitlement::{BreakEntitlement, get_break_entitlements};
use super::local_time::to_local_wall_clock;
use super::week_grouping::{week_ending_day, week_key};

/// Paid rest entitlement not covered by paid break time actually taken.
pub fn untaken_paid_minutes(entitlement: &BreakEntitlement, allocation: &BreakAllocation) -> i64 {
    (entitlement.paid_minutes - allocation.paid).max(0)
}

/// Payable minutes for a shift of `duration_minutes`.
///
/// ```
/// use timesheet_engine::calculation::{BreakAllocation, BreakEntitlement, worked_minutes};
/// use rust_decimal::Decimal;
///
/// let entitlement = BreakEntitlement { paid_breaks: 2, unpaid_breaks: 1, paid_minutes: 20, unpaid_minutes: 30 };
/// let allocation = BreakAllocation { paid: 10, unpaid: 30, total: 40 };
///
/// // 480 - 30 unpaid + 10 untaken paid rest
/// assert_eq!(worked_minutes(Decimal::from(480), &entitlement, &allocation), Decimal::from(460));
/// ```
pub fn worked_minutes(
    duration_minutes: Decimal,
    entitlement: &BreakEntitlement,
    allocation: &BreakAllocation,
) -> Decimal {
    duration_minutes - Decimal::from(allocation.unpaid)
        + Decimal::from(untaken_paid_minutes(entitlement, allocation))
}

/// Computes every payroll figure for one shift.
///
/// Open shifts are measured against `now`. The pay week is taken from the
/// clock-in date on the wall clock of the company's time zone.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::summarize_shift;
/// use timesheet_engine::config::CompanySettings;
/// use timesheet_engine::models::{Break, Shift};
/// use chrono::{DateTime, Utc};
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     clock_in: at("2026-01-15T08:00:00+13:00"),
///     clock_out: Some(at("2026-01-15T16:30:00+13:00")),
///     breaks: vec![Break::manual(at("2026-01-15T12:00:00+13:00"), 30)],
///     travel_segments: vec![],
/// };
///
/// let summary = summarize_shift(&shift, &CompanySettings::default(), at("2026-01-16T00:00:00+13:00"));
/// assert_eq!(summary.breaks.paid, 20);
/// assert_eq!(summary.breaks.unpaid, 10);
/// assert_eq!(summary.worked_minutes, Decimal::from(500));
/// assert_eq!(summary.week_key, "2026-01-18");
/// ```
pub fn summarize_shift(shift: &Shift, settings: &CompanySettings, now: DateTime<Utc>) -> ShiftSummary {
    let paid_rest_minutes = settings.paid_rest_minutes();
    let duration_minutes = shift.duration_minutes(now);
    let hours = shift.hours_worked(now);

    let entitlement = get_break_entitlements(hours, paid_rest_minutes);
    let breaks = calc_breaks(&shift.breaks, hours, paid_rest_minutes);
    let local_clock_in = to_local_wall_clock(shift.clock_in, settings.timezone());
    let week_ending = week_ending_day(local_clock_in.date(), settings.pay_week_end_day());

    ShiftSummary {
        shift_id: shift.id.clone(),
        clock_in: shift.clock_in,
        clock_out: shift.clock_out,
        local_clock_in,
        is_open: shift.is_open(),
        duration_minutes,
        hours,
        entitlement,
        breaks,
        untaken_paid_minutes: untaken_paid_minutes(&entitlement, &breaks),
        worked_minutes: worked_minutes(duration_minutes, &entitlement, &breaks),
        travel_minutes: calc_travel(&shift.travel_segments),
        week_ending,
        week_key: week_key(week_ending),
    }
}
