//! Calculation logic for the timesheet engine.
//!
//! This module contains the statutory break entitlement table, the split of
//! recorded break time into paid and unpaid minutes, travel totals, pay week
//! grouping on the company's wall clock, and the per-shift and weekly payroll
//! figures built from them.

mod break_allocation;
mod entitlement;
mod local_time;
mod shift_summary;
mod timesheet;
mod week_grouping;

pub use break_allocation::{BreakAllocation, calc_breaks, calc_travel, sum_recorded_minutes};
pub use entitlement::{
    BreakEntitlement, DEFAULT_PAID_REST_MINUTES, UNPAID_MEAL_BREAK_MINUTES, get_break_entitlements,
};
pub use local_time::{from_local_wall_clock, to_local_wall_clock};
pub use shift_summary::{summarize_shift, untaken_paid_minutes, worked_minutes};
pub use timesheet::{
    BREAK_IN_PROGRESS_WARNING, FUTURE_CLOCK_IN_WARNING, OPEN_SHIFT_WARNING,
    TRAVEL_IN_PROGRESS_WARNING, build_timesheet, group_by_week,
};
pub use week_grouping::{get_week_ending_date, get_week_ending_key, week_ending_day, week_key};
