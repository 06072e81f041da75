//! Core data models for the timesheet engine.
//!
//! Shift records are read-only inputs supplied by the persistence layer;
//! timesheet models are the figures handed back to reports and exports.

mod shift;
mod timesheet;

pub use shift::{Break, RecordedSegment, Shift, TravelSegment};
pub use timesheet::{ReportWarning, ShiftSummary, TimesheetReport, TimesheetTotals, WeeklyTotal};
