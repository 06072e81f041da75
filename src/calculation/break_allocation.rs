//! Splitting recorded break time into paid and unpaid minutes.
//!
//! Breaks carry no rest/meal type, only a duration, so the split is applied
//! to the shift's aggregate: the first minutes up to the paid rest
//! entitlement are paid, everything after that is unpaid. Travel is summed
//! separately and never split.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Break, RecordedSegment, TravelSegment};

use super::entitlement::get_break_entitlements;

/// How a shift's recorded break minutes divide into paid and unpaid time.
///
/// `paid + unpaid == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakAllocation {
    /// Break minutes paid, capped at the paid rest entitlement.
    pub paid: i64,
    /// Break minutes beyond the paid cap.
    pub unpaid: i64,
    /// All recorded break minutes.
    pub total: i64,
}

/// Sums the recorded minutes of any breaks or travel segments.
pub fn sum_recorded_minutes<S: RecordedSegment>(segments: &[S]) -> i64 {
    segments.iter().map(|s| s.recorded_minutes()).sum()
}

/// Allocates a shift's break minutes between paid and unpaid time.
///
/// `paid` is the recorded total capped at the paid rest entitlement for
/// `hours`; `unpaid` is the rest. Missing durations count as zero.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calc_breaks;
/// use timesheet_engine::models::Break;
/// use chrono::{DateTime, Utc};
/// use rust_decimal::Decimal;
///
/// let at: DateTime<Utc> = "2026-01-14T23:00:00Z".parse().unwrap();
/// let breaks = vec![Break::manual(at, 30)];
///
/// let allocation = calc_breaks(&breaks, Decimal::new(85, 1), 10);
/// assert_eq!(allocation.paid, 20);
/// assert_eq!(allocation.unpaid, 10);
/// assert_eq!(allocation.total, 30);
/// ```
pub fn calc_breaks(breaks: &[Break], hours: Decimal, paid_rest_minutes: u32) -> BreakAllocation {
    let total = sum_recorded_minutes(breaks);
    let entitlement = get_break_entitlements(hours, paid_rest_minutes);

    let paid = total.min(entitlement.paid_minutes);
    let unpaid = (total - paid).max(0);

    BreakAllocation {
        paid,
        unpaid,
        total,
    }
}

/// Total recorded travel minutes for a shift.
///
/// ```
/// use timesheet_engine::calculation::calc_travel;
///
/// assert_eq!(calc_travel(&[]), 0);
/// ```
pub fn calc_travel(travel_segments: &[TravelSegment]) -> i64 {
    sum_recorded_minutes(travel_segments)
}
