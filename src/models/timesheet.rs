//! Timesheet result models.
//!
//! These are the numeric and structural figures handed to the export and
//! report layer. Nothing here is formatted for a particular output; CSV, PDF
//! and on-screen views build their own strings from these values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{BreakAllocation, BreakEntitlement};
use crate::config::PayWeekEndDay;

/// Per-shift figures used by timesheets and payroll exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// The ID of the summarized shift.
    pub shift_id: String,
    /// When the employee clocked in.
    pub clock_in: DateTime<Utc>,
    /// When the employee clocked out, if they have.
    pub clock_out: Option<DateTime<Utc>>,
    /// Clock in on the company's wall clock; its date decides the pay week.
    pub local_clock_in: NaiveDateTime,
    /// Whether the shift was still open when summarized.
    pub is_open: bool,
    /// Clock in to clock out (or now) in minutes.
    pub duration_minutes: Decimal,
    /// Clock in to clock out (or now) in hours.
    pub hours: Decimal,
    /// Statutory break entitlement for the shift length.
    pub entitlement: BreakEntitlement,
    /// Recorded break minutes split into paid and unpaid time.
    pub breaks: BreakAllocation,
    /// Paid rest entitlement the employee did not take.
    pub untaken_paid_minutes: i64,
    /// Payable minutes: duration, less unpaid breaks, plus untaken paid rest.
    pub worked_minutes: Decimal,
    /// Recorded travel minutes, reported on top of worked time.
    pub travel_minutes: i64,
    /// The date the shift's pay week ends.
    pub week_ending: NaiveDate,
    /// Grouping key (`YYYY-MM-DD`) of the shift's pay week.
    pub week_key: String,
}

/// Summed figures over a set of shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetTotals {
    /// Number of shifts included.
    pub shift_count: u32,
    /// Total clocked minutes.
    pub duration_minutes: Decimal,
    /// Total payable minutes.
    pub worked_minutes: Decimal,
    /// Total paid break minutes taken.
    pub paid_break_minutes: i64,
    /// Total unpaid break minutes.
    pub unpaid_break_minutes: i64,
    /// Total recorded break minutes.
    pub total_break_minutes: i64,
    /// Total paid rest entitlement not taken.
    pub untaken_paid_minutes: i64,
    /// Total travel minutes.
    pub travel_minutes: i64,
}

impl TimesheetTotals {
    /// Adds one shift's figures to the running totals.
    pub fn add_shift(&mut self, summary: &ShiftSummary) {
        self.shift_count += 1;
        self.duration_minutes += summary.duration_minutes;
        self.worked_minutes += summary.worked_minutes;
        self.paid_break_minutes += summary.breaks.paid;
        self.unpaid_break_minutes += summary.breaks.unpaid;
        self.total_break_minutes += summary.breaks.total;
        self.untaken_paid_minutes += summary.untaken_paid_minutes;
        self.travel_minutes += summary.travel_minutes;
    }
}

/// Totals for one pay week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTotal {
    /// Grouping key (`YYYY-MM-DD`) of the week-ending date.
    pub week_key: String,
    /// The date the pay week ends.
    pub week_ending: NaiveDate,
    /// Summed figures for shifts in this week.
    #[serde(flatten)]
    pub totals: TimesheetTotals,
}

/// A condition worth flagging on a timesheet that does not stop it being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
    /// The shift the warning relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_id: Option<String>,
}

/// A complete timesheet for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that built the report.
    pub engine_version: String,
    /// The employee the timesheet belongs to.
    pub employee_id: String,
    /// Paid rest break length the report was calculated with.
    pub paid_rest_minutes: u32,
    /// Pay week end day the report was grouped with.
    pub pay_week_end_day: PayWeekEndDay,
    /// IANA time zone whose wall clock the pay weeks follow.
    pub timezone: String,
    /// Per-shift figures ordered by clock in.
    pub shifts: Vec<ShiftSummary>,
    /// Per-week totals ordered by week key.
    pub weeks: Vec<WeeklyTotal>,
    /// Totals across every shift.
    pub totals: TimesheetTotals,
    /// Conditions flagged while building the report.
    pub warnings: Vec<ReportWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_summary(worked: &str, paid: i64, unpaid: i64, travel: i64) -> ShiftSummary {
        let local_clock_in =
            NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        ShiftSummary {
            shift_id: "shift_001".to_string(),
            clock_in: "2026-01-14T19:00:00Z".parse().unwrap(),
            clock_out: None,
            local_clock_in,
            is_open: true,
            duration_minutes: dec("510"),
            hours: dec("8.5"),
            entitlement: BreakEntitlement {
                paid_breaks: 2,
                unpaid_breaks: 1,
                paid_minutes: 20,
                unpaid_minutes: 30,
            },
            breaks: BreakAllocation {
                paid,
                unpaid,
                total: paid + unpaid,
            },
            untaken_paid_minutes: 20 - paid,
            worked_minutes: dec(worked),
            travel_minutes: travel,
            week_ending: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
            week_key: "2026-01-18".to_string(),
        }
    }

    #[test]
    fn test_totals_accumulate_shifts() {
        let mut totals = TimesheetTotals::default();
        totals.add_shift(&sample_summary("500", 20, 10, 15));
        totals.add_shift(&sample_summary("510", 0, 0, 0));

        assert_eq!(totals.shift_count, 2);
        assert_eq!(totals.duration_minutes, dec("1020"));
        assert_eq!(totals.worked_minutes, dec("1010"));
        assert_eq!(totals.paid_break_minutes, 20);
        assert_eq!(totals.unpaid_break_minutes, 10);
        assert_eq!(totals.total_break_minutes, 30);
        assert_eq!(totals.untaken_paid_minutes, 20);
        assert_eq!(totals.travel_minutes, 15);
    }

    #[test]
    fn test_weekly_total_flattens_totals() {
        let week = WeeklyTotal {
            week_key: "2026-01-18".to_string(),
            week_ending: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
            totals: TimesheetTotals {
                shift_count: 3,
                ..TimesheetTotals::default()
            },
        };
        let json = serde_json::to_value(&week).unwrap();
        assert_eq!(json["week_key"], "2026-01-18");
        assert_eq!(json["shift_count"], 3);
        assert!(json.get("totals").is_none());
    }

    #[test]
    fn test_warning_omits_missing_shift_id() {
        let warning = ReportWarning {
            code: "OPEN_SHIFT".to_string(),
            message: "Shift has not been clocked out".to_string(),
            severity: "medium".to_string(),
            shift_id: None,
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(!json.contains("shift_id"));
    }

    #[test]
    fn test_summary_serializes_decimals_as_strings() {
        let json = serde_json::to_value(sample_summary("490", 20, 10, 15)).unwrap();
        assert_eq!(json["worked_minutes"], "490");
        assert_eq!(json["breaks"]["unpaid"], 10);
        assert_eq!(json["week_key"], "2026-01-18");
        assert_eq!(json["clock_in"], "2026-01-14T19:00:00Z");
        assert_eq!(json["local_clock_in"], "2026-01-15T08:00:00");
    }
}
