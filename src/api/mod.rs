//! HTTP API module for the timesheet engine.
//!
//! This module exposes the calculations to the dashboard's report generation
//! over a small REST surface.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BreakRequest, EntitlementRequest, ShiftRequest, TimesheetRequest, TimestampInput,
    TravelSegmentRequest,
};
pub use response::{ApiError, EntitlementResponse};
pub use state::AppState;
