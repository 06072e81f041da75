//! Weekly timesheet aggregation.
//!
//! Builds the figures a dashboard timesheet or payroll export needs from a
//! set of raw shifts: one summary per shift, one total per pay week and a
//! grand total.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::config::CompanySettings;
use crate::error::EngineResult;
use crate::models::{
    RecordedSegment, ReportWarning, Shift, ShiftSummary, TimesheetReport, TimesheetTotals,
    WeeklyTotal,
};

use super::shift_summary::summarize_shift;

/// Warning code for a shift that has not been clocked out.
pub const OPEN_SHIFT_WARNING: &str = "OPEN_SHIFT";

/// Warning code for a break that has not been ended.
pub const BREAK_IN_PROGRESS_WARNING: &str = "BREAK_IN_PROGRESS";

/// Warning code for travel that has not been ended.
pub const TRAVEL_IN_PROGRESS_WARNING: &str = "TRAVEL_IN_PROGRESS";

/// Warning code for an open shift clocked in later than the report's `now`.
pub const FUTURE_CLOCK_IN_WARNING: &str = "FUTURE_CLOCK_IN";

/// Groups shift summaries into pay weeks, ordered by week key.
///
/// ```
/// use timesheet_engine::calculation::{group_by_week, summarize_shift};
/// use timesheet_engine::config::CompanySettings;
/// use timesheet_engine::models::Shift;
/// use chrono::{DateTime, Utc};
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
/// let settings = CompanySettings::default();
/// let shifts = [
///     ("a", "2026-01-20T09:00:00+13:00", "2026-01-20T17:00:00+13:00"),
///     ("b", "2026-01-15T09:00:00+13:00", "2026-01-15T17:00:00+13:00"),
///     ("c", "2026-01-16T09:00:00+13:00", "2026-01-16T13:00:00+13:00"),
/// ];
/// let summaries: Vec<_> = shifts
///     .iter()
///     .map(|(id, start, end)| Shift {
///         id: id.to_string(),
///         clock_in: at(*start),
///         clock_out: Some(at(*end)),
///         breaks: vec![],
///         travel_segments: vec![],
///     })
///     .map(|shift| summarize_shift(&shift, &settings, at("2026-02-01T00:00:00+13:00")))
///     .collect();
///
/// let weeks = group_by_week(&summaries);
/// assert_eq!(weeks.len(), 2);
/// assert_eq!(weeks[0].week_key, "2026-01-18");
/// assert_eq!(weeks[0].totals.shift_count, 2);
/// assert_eq!(weeks[1].week_key, "2026-01-25");
/// ```
pub fn group_by_week(summaries: &[ShiftSummary]) -> Vec<WeeklyTotal> {
    let mut weeks: BTreeMap<&str, WeeklyTotal> = BTreeMap::new();

    for summary in summaries {
        weeks
            .entry(summary.week_key.as_str())
            .or_insert_with(|| WeeklyTotal {
                week_key: summary.week_key.clone(),
                week_ending: summary.week_ending,
                totals: TimesheetTotals::default(),
            })
            .totals
            .add_shift(summary);
    }

    weeks.into_values().collect()
}

/// Builds a complete timesheet for one employee.
///
/// Shifts are validated first; a shift that clocks out before it clocks in
/// fails the whole report. Open shifts are measured against `now` and
/// flagged with a warning, as are breaks and travel still in progress. An
/// open shift clocked in after `now` counts as zero minutes and is flagged.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::build_timesheet;
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
/// let report = build_timesheet("emp_001", &[shift], &CompanySettings::default(), at("2026-01-16T00:00:00+13:00")).unwrap();
/// assert_eq!(report.weeks.len(), 1);
/// assert_eq!(report.totals.worked_minutes, Decimal::from(500));
/// assert!(report.warnings.is_empty());
/// ```
pub fn build_timesheet(
    employee_id: &str,
    shifts: &[Shift],
    settings: &CompanySettings,
    now: DateTime<Utc>,
) -> EngineResult<TimesheetReport> {
    for shift in shifts {
        shift.validate()?;
    }

    let mut ordered: Vec<&Shift> = shifts.iter().collect();
    ordered.sort_by(|a, b| a.clock_in.cmp(&b.clock_in).then_with(|| a.id.cmp(&b.id)));

    let mut warnings = Vec::new();
    let mut summaries = Vec::with_capacity(ordered.len());
    let mut totals = TimesheetTotals::default();

    for shift in ordered {
        warnings.extend(shift_warnings(shift, now));
        let summary = summarize_shift(shift, settings, now);
        debug!(
            shift_id = %summary.shift_id,
            week_key = %summary.week_key,
            worked_minutes = %summary.worked_minutes,
            unpaid_break_minutes = summary.breaks.unpaid,
            "Summarized shift"
        );
        totals.add_shift(&summary);
        summaries.push(summary);
    }

    let weeks = group_by_week(&summaries);

    Ok(TimesheetReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee_id.to_string(),
        paid_rest_minutes: settings.paid_rest_minutes(),
        pay_week_end_day: settings.pay_week_end_day(),
        timezone: settings.timezone().name().to_string(),
        shifts: summaries,
        weeks,
        totals,
        warnings,
    })
}

fn shift_warnings(shift: &Shift, now: DateTime<Utc>) -> Vec<ReportWarning> {
    let mut warnings = Vec::new();

    if shift.is_open() {
        warnings.push(ReportWarning {
            code: OPEN_SHIFT_WARNING.to_string(),
            message: format!(
                "Shift '{}' has not been clocked out; figures are measured to now",
                shift.id
            ),
            severity: "medium".to_string(),
            shift_id: Some(shift.id.clone()),
        });
    }

    if shift.starts_after(now) {
        warnings.push(ReportWarning {
            code: FUTURE_CLOCK_IN_WARNING.to_string(),
            message: format!(
                "Shift '{}' clocks in at {} which is after {}; it counts as 0 minutes",
                shift.id, shift.clock_in, now
            ),
            severity: "high".to_string(),
            shift_id: Some(shift.id.clone()),
        });
    }

    let running_breaks = shift.breaks.iter().filter(|b| b.is_in_progress()).count();
    if running_breaks > 0 {
        warnings.push(ReportWarning {
            code: BREAK_IN_PROGRESS_WARNING.to_string(),
            message: format!(
                "Shift '{}' has {} break(s) in progress that count as 0 minutes",
                shift.id, running_breaks
            ),
            severity: "low".to_string(),
            shift_id: Some(shift.id.clone()),
        });
    }

    let running_travel = shift
        .travel_segments
        .iter()
        .filter(|t| t.is_in_progress())
        .count();
    if running_travel > 0 {
        warnings.push(ReportWarning {
            code: TRAVEL_IN_PROGRESS_WARNING.to_string(),
            message: format!(
                "Shift '{}' has {} travel segment(s) in progress that count as 0 minutes",
                shift.id, running_travel
            ),
            severity: "low".to_string(),
            shift_id: Some(shift.id.clone()),
        });
    }

    warnings
}
