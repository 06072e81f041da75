//! Shift model and related types.
//!
//! This module defines the [`Shift`], [`Break`] and [`TravelSegment`] records
//! the engine reads. All timestamps are instants in UTC; durations are the
//! time elapsed between them. The employee's wall clock only comes into play
//! when a shift is placed in a pay week.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::formatting::{hours_between, minutes_between};

/// A recorded interval inside a shift whose length is stored in minutes.
///
/// Breaks and travel segments share this shape. A missing or negative
/// duration counts as zero minutes.
pub trait RecordedSegment {
    /// The stored duration, if the segment has one.
    fn stored_minutes(&self) -> Option<i64>;

    /// When the segment ended, if it has.
    fn ended_at(&self) -> Option<DateTime<Utc>>;

    /// Minutes this segment contributes to totals.
    fn recorded_minutes(&self) -> i64 {
        self.stored_minutes().unwrap_or(0).max(0)
    }

    /// Whether the segment is still running.
    fn is_in_progress(&self) -> bool {
        self.ended_at().is_none()
    }
}

/// Represents a break taken during a shift.
///
/// Breaks are either timed (started and stopped by the employee) or entered
/// manually afterwards, in which case `start_time == end_time` and the
/// duration is set directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start_time: DateTime<Utc>,
    /// The end time of the break, absent while the break is running.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// The recorded length of the break, set once it has ended.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    /// Whether the break was added manually rather than timed.
    #[serde(default)]
    pub manual_entry: bool,
}

impl Break {
    /// Creates a manually entered break of a fixed length.
    ///
    /// ```
    /// use timesheet_engine::models::{Break, RecordedSegment};
    /// use chrono::{DateTime, Utc};
    ///
    /// let at: DateTime<Utc> = "2026-01-14T23:00:00Z".parse().unwrap();
    /// let b = Break::manual(at, 30);
    /// assert_eq!(b.recorded_minutes(), 30);
    /// assert_eq!(b.end_time, Some(at));
    /// ```
    pub fn manual(at: DateTime<Utc>, minutes: i64) -> Self {
        Self {
            start_time: at,
            end_time: Some(at),
            duration_minutes: Some(minutes),
            manual_entry: true,
        }
    }

    /// Creates a completed timed break, deriving its length from the interval.
    pub fn timed(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time: Some(end_time),
            duration_minutes: Some(minutes_between(start_time, end_time)),
            manual_entry: false,
        }
    }

    /// Label shown next to the break in timesheets.
    ///
    /// The manual flag only changes the label; it never changes the minutes.
    pub fn label(&self) -> &'static str {
        if self.manual_entry {
            "Manual break"
        } else {
            "Break"
        }
    }
}

impl RecordedSegment for Break {
    fn stored_minutes(&self) -> Option<i64> {
        self.duration_minutes
    }

    fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }
}

/// Time spent travelling between job sites during a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelSegment {
    /// The start time of the travel.
    pub start_time: DateTime<Utc>,
    /// The end time of the travel, absent while still travelling.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// The recorded length of the travel, set once it has ended.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

impl TravelSegment {
    /// Creates a completed travel segment, deriving its length from the interval.
    pub fn completed(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time: Some(end_time),
            duration_minutes: Some(minutes_between(start_time, end_time)),
        }
    }
}

impl RecordedSegment for TravelSegment {
    fn stored_minutes(&self) -> Option<i64> {
        self.duration_minutes
    }

    fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }
}

/// One clock-in to clock-out work period for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// When the employee clocked in.
    pub clock_in: DateTime<Utc>,
    /// When the employee clocked out, absent while the shift is open.
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    /// Breaks in the order they were recorded.
    #[serde(default)]
    pub breaks: Vec<Break>,
    /// Travel segments in the order they were recorded.
    #[serde(default)]
    pub travel_segments: Vec<TravelSegment>,
}

impl Shift {
    /// Whether the employee has not yet clocked out.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Length of the shift in minutes, measured against `now` while open.
    ///
    /// An open shift clocked in after `now` measures zero.
    pub fn duration_minutes(&self, now: DateTime<Utc>) -> Decimal {
        let end = self.clock_out.unwrap_or_else(|| now.max(self.clock_in));
        Decimal::from((end - self.clock_in).num_milliseconds()) / Decimal::from(60_000)
    }

    /// Length of the shift in fractional hours, measured against `now` while open.
    ///
    /// ```
    /// use timesheet_engine::models::Shift;
    /// use chrono::{DateTime, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     clock_in: at("2026-01-15T08:00:00+13:00"),
    ///     clock_out: Some(at("2026-01-15T16:30:00+13:00")),
    ///     breaks: vec![],
    ///     travel_segments: vec![],
    /// };
    /// assert_eq!(shift.hours_worked(at("2026-01-20T00:00:00+13:00")), Decimal::new(85, 1));
    /// ```
    pub fn hours_worked(&self, now: DateTime<Utc>) -> Decimal {
        hours_between(self.clock_in, self.clock_out, now)
    }

    /// Whether the shift is open and clocked in later than `now`.
    pub fn starts_after(&self, now: DateTime<Utc>) -> bool {
        self.is_open() && self.clock_in > now
    }

    /// Rejects shifts whose recorded times are inconsistent.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(clock_out) = self.clock_out {
            if clock_out < self.clock_in {
                return Err(EngineError::InvalidShift {
                    shift_id: self.id.clone(),
                    message: format!(
                        "clock out {} is before clock in {}",
                        clock_out, self.clock_in
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};
    use chrono_tz::Pacific::Auckland;

    fn make_datetime(date_str: &str, time_str: &str) -> DateTime<Utc> {
        let local =
            NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
                .unwrap();
        Auckland.from_local_datetime(&local).unwrap().with_timezone(&Utc)
    }

    fn make_shift(clock_in: &str, clock_out: Option<&str>) -> Shift {
        Shift {
            id: "SH-001".to_string(),
            clock_in: make_datetime("2026-01-15", clock_in),
            clock_out: clock_out.map(|t| make_datetime("2026-01-15", t)),
            breaks: vec![],
            travel_segments: vec![],
        }
    }

    #[test]
    fn test_closed_shift_hours() {
        let shift = make_shift("08:00:00", Some("16:30:00"));
        let now = make_datetime("2026-02-01", "00:00:00");
        assert_eq!(shift.hours_worked(now), Decimal::new(85, 1));
        assert_eq!(shift.duration_minutes(now), Decimal::from(510));
        assert!(!shift.is_open());
    }

    #[test]
    fn test_open_shift_measured_against_now() {
        let shift = make_shift("08:00:00", None);
        let now = make_datetime("2026-01-15", "11:15:00");
        assert!(shift.is_open());
        assert_eq!(shift.hours_worked(now), Decimal::new(325, 2));
    }

    #[test]
    fn test_open_shift_clocked_in_after_now_measures_zero() {
        let shift = make_shift("08:00:00", None);
        let now = make_datetime("2026-01-15", "07:58:00");
        assert!(shift.starts_after(now));
        assert_eq!(shift.duration_minutes(now), Decimal::ZERO);
        assert_eq!(shift.hours_worked(now), Decimal::ZERO);
        assert!(!shift.starts_after(make_datetime("2026-01-15", "08:00:00")));
    }

    /// SH-003: clocks go back at 03:00 on 2026-04-05, so the night shift is 9 hours long
    #[test]
    fn test_shift_across_daylight_saving_end_uses_elapsed_time() {
        let shift = Shift {
            id: "SH-003".to_string(),
            clock_in: make_datetime("2026-04-04", "22:00:00"),
            clock_out: Some(make_datetime("2026-04-05", "06:00:00")),
            breaks: vec![],
            travel_segments: vec![],
        };
        let now = make_datetime("2026-04-06", "00:00:00");
        assert_eq!(shift.hours_worked(now), Decimal::from(9));
        assert_eq!(shift.duration_minutes(now), Decimal::from(540));
    }

    #[test]
    fn test_overnight_shift_hours() {
        let shift = Shift {
            id: "SH-002".to_string(),
            clock_in: make_datetime("2026-01-15", "22:00:00"),
            clock_out: Some(make_datetime("2026-01-16", "06:00:00")),
            breaks: vec![],
            travel_segments: vec![],
        };
        assert_eq!(
            shift.hours_worked(make_datetime("2026-01-17", "00:00:00")),
            Decimal::from(8)
        );
    }

    #[test]
    fn test_validate_rejects_clock_out_before_clock_in() {
        let shift = make_shift("16:00:00", Some("08:00:00"));
        match shift.validate() {
            Err(EngineError::InvalidShift { shift_id, .. }) => assert_eq!(shift_id, "SH-001"),
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
        assert!(make_shift("08:00:00", None).validate().is_ok());
    }

    #[test]
    fn test_missing_duration_counts_as_zero() {
        let running = Break {
            start_time: make_datetime("2026-01-15", "12:00:00"),
            end_time: None,
            duration_minutes: None,
            manual_entry: false,
        };
        assert_eq!(running.recorded_minutes(), 0);
        assert!(running.is_in_progress());
    }

    #[test]
    fn test_negative_duration_counts_as_zero() {
        let segment = TravelSegment {
            start_time: make_datetime("2026-01-15", "12:00:00"),
            end_time: Some(make_datetime("2026-01-15", "12:00:00")),
            duration_minutes: Some(-5),
        };
        assert_eq!(segment.recorded_minutes(), 0);
    }

    #[test]
    fn test_manual_and_timed_breaks_count_the_same() {
        let manual = Break::manual(make_datetime("2026-01-15", "12:00:00"), 15);
        let timed = Break::timed(
            make_datetime("2026-01-15", "12:00:00"),
            make_datetime("2026-01-15", "12:15:00"),
        );
        assert_eq!(manual.recorded_minutes(), timed.recorded_minutes());
        assert_eq!(manual.label(), "Manual break");
        assert_eq!(timed.label(), "Break");
    }

    #[test]
    fn test_shift_deserialization_defaults() {
        let json = r#"{
            "id": "shift_001",
            "clock_in": "2026-01-14T20:00:00Z"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert!(shift.is_open());
        assert!(shift.breaks.is_empty());
        assert!(shift.travel_segments.is_empty());
    }

    #[test]
    fn test_shift_deserialization_with_segments() {
        let json = r#"{
            "id": "shift_001",
            "clock_in": "2026-01-14T19:00:00Z",
            "clock_out": "2026-01-15T03:30:00Z",
            "breaks": [
                {
                    "start_time": "2026-01-14T23:00:00Z",
                    "end_time": "2026-01-14T23:00:00Z",
                    "duration_minutes": 30,
                    "manual_entry": true
                }
            ],
            "travel_segments": [
                {
                    "start_time": "2026-01-14T21:00:00Z",
                    "end_time": "2026-01-14T21:15:00Z",
                    "duration_minutes": 15
                }
            ]
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.hours_worked(Utc::now()), Decimal::new(85, 1));
        assert_eq!(shift.breaks.len(), 1);
        assert!(shift.breaks[0].manual_entry);
        assert_eq!(shift.travel_segments[0].recorded_minutes(), 15);
    }
}
