//! Break entitlement and timesheet aggregation engine.
//!
//! This crate computes statutory paid rest and unpaid meal break entitlements
//! under New Zealand employment law, splits recorded break time into paid and
//! unpaid minutes, totals travel time, and rolls shifts up into pay weeks for
//! timesheets and payroll exports.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
