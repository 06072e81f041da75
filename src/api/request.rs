//! Request types for the timesheet engine API.
//!
//! Shift documents arrive with timestamps in one of three shapes: an RFC 3339
//! date-time with an offset, a wall-clock date-time without one, or a
//! document-store timestamp of seconds and nanoseconds since the Unix epoch.
//! All are resolved to instants here, before any calculation sees them.
//! Wall-clock times are read in the company's time zone.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::from_local_wall_clock;
use crate::config::CompanySettingsFile;
use crate::error::{EngineError, EngineResult};
use crate::models::{Break, Shift, TravelSegment};

/// A timestamp as stored by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampInput {
    /// RFC 3339 date-time with a `Z` or numeric offset, e.g. `"2026-01-14T19:00:00.000Z"`.
    Offset(DateTime<FixedOffset>),
    /// Wall-clock date-time in the company's time zone, e.g. `"2026-01-15T08:00:00"`.
    Local(NaiveDateTime),
    /// Seconds and nanoseconds since the Unix epoch (UTC).
    Stored {
        /// Whole seconds since the epoch.
        #[serde(alias = "_seconds")]
        seconds: i64,
        /// Nanosecond part.
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
}

impl TimestampInput {
    /// Resolves the timestamp to an instant.
    ///
    /// Wall-clock times are read in `timezone`; a time skipped when clocks go
    /// forward is rejected.
    pub fn to_instant(&self, timezone: Tz) -> EngineResult<DateTime<Utc>> {
        match self {
            TimestampInput::Offset(datetime) => Ok(datetime.with_timezone(&Utc)),
            TimestampInput::Local(local) => from_local_wall_clock(*local, timezone),
            TimestampInput::Stored {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds).ok_or_else(|| {
                EngineError::InvalidTimestamp {
                    message: format!(
                        "{} seconds and {} nanoseconds is outside the supported range",
                        seconds, nanoseconds
                    ),
                }
            }),
        }
    }
}

fn to_instant_opt(
    timestamp: Option<&TimestampInput>,
    timezone: Tz,
) -> EngineResult<Option<DateTime<Utc>>> {
    timestamp.map(|t| t.to_instant(timezone)).transpose()
}

/// Request body for the `/timesheet` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// The employee the shifts belong to.
    pub employee_id: String,
    /// Settings to use instead of the server's company settings.
    #[serde(default)]
    pub settings: Option<CompanySettingsFile>,
    /// The shifts to include.
    #[serde(default)]
    pub shifts: Vec<ShiftRequest>,
}

/// Shift information in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// When the employee clocked in.
    pub clock_in: TimestampInput,
    /// When the employee clocked out.
    #[serde(default)]
    pub clock_out: Option<TimestampInput>,
    /// Breaks taken during the shift.
    #[serde(default)]
    pub breaks: Vec<BreakRequest>,
    /// Travel recorded during the shift.
    #[serde(default)]
    pub travel_segments: Vec<TravelSegmentRequest>,
}

impl ShiftRequest {
    /// Converts the request into a [`Shift`], reading wall-clock times in `timezone`.
    pub fn into_shift(self, timezone: Tz) -> EngineResult<Shift> {
        Ok(Shift {
            clock_in: self.clock_in.to_instant(timezone)?,
            clock_out: to_instant_opt(self.clock_out.as_ref(), timezone)?,
            breaks: self
                .breaks
                .into_iter()
                .map(|b| b.into_break(timezone))
                .collect::<EngineResult<_>>()?,
            travel_segments: self
                .travel_segments
                .into_iter()
                .map(|t| t.into_travel_segment(timezone))
                .collect::<EngineResult<_>>()?,
            id: self.id,
        })
    }
}

/// Break information in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakRequest {
    /// The start time of the break.
    pub start_time: TimestampInput,
    /// The end time of the break.
    #[serde(default)]
    pub end_time: Option<TimestampInput>,
    /// The recorded break length.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    /// Whether the break was entered manually.
    #[serde(default)]
    pub manual_entry: bool,
}

impl BreakRequest {
    fn into_break(self, timezone: Tz) -> EngineResult<Break> {
        Ok(Break {
            start_time: self.start_time.to_instant(timezone)?,
            end_time: to_instant_opt(self.end_time.as_ref(), timezone)?,
            duration_minutes: self.duration_minutes,
            manual_entry: self.manual_entry,
        })
    }
}

/// Travel information in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelSegmentRequest {
    /// The start time of the travel.
    pub start_time: TimestampInput,
    /// The end time of the travel.
    #[serde(default)]
    pub end_time: Option<TimestampInput>,
    /// The recorded travel length.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

impl TravelSegmentRequest {
    fn into_travel_segment(self, timezone: Tz) -> EngineResult<TravelSegment> {
        Ok(TravelSegment {
            start_time: self.start_time.to_instant(timezone)?,
            end_time: to_instant_opt(self.end_time.as_ref(), timezone)?,
            duration_minutes: self.duration_minutes,
        })
    }
}

/// Request body for the `/entitlements` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// Hours worked in the shift.
    pub hours_worked: Decimal,
    /// Paid rest break length; the server's setting is used when absent.
    #[serde(default)]
    pub paid_rest_minutes: Option<u32>,
}
