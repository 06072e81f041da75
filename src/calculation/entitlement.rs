//! Statutory rest and meal break entitlements.
//!
//! Under the Employment Relations Act 2000 (NZ) an employee is owed paid rest
//! breaks and unpaid meal breaks according to how long they work. This module
//! holds the single canonical table used by every caller.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Default length of one paid rest break, in minutes.
pub const DEFAULT_PAID_REST_MINUTES: u32 = 10;

/// Length of one unpaid meal break, in minutes.
pub const UNPAID_MEAL_BREAK_MINUTES: u32 = 30;

/// Hours in one full entitlement cycle for long shifts.
const CYCLE_HOURS: i64 = 8;

/// Shifts at or beyond this many hours use the repeating 8 hour cycle.
const CYCLIC_FROM_HOURS: i64 = 16;

/// The breaks an employee is entitled to for one shift.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::get_break_entitlements;
/// use rust_decimal::Decimal;
///
/// let entitlement = get_break_entitlements(Decimal::from(8), 10);
/// assert_eq!(entitlement.paid_breaks, 2);
/// assert_eq!(entitlement.unpaid_breaks, 1);
/// assert_eq!(entitlement.paid_minutes, 20);
/// assert_eq!(entitlement.unpaid_minutes, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEntitlement {
    /// Number of paid rest breaks.
    pub paid_breaks: u32,
    /// Number of unpaid meal breaks.
    pub unpaid_breaks: u32,
    /// Paid rest break minutes (`paid_breaks * paid_rest_minutes`).
    pub paid_minutes: i64,
    /// Unpaid meal break minutes (`unpaid_breaks * 30`).
    pub unpaid_minutes: i64,
}

/// Computes the paid rest and unpaid meal break entitlement for a shift.
///
/// | hours worked | paid rest | unpaid meal |
/// |---|---|---|
/// | < 2 | 0 | 0 |
/// | [2, 4) | 1 | 0 |
/// | [4, 6) | 1 | 1 |
/// | [6, 10) | 2 | 1 |
/// | [10, 12) | 3 | 1 |
/// | [12, 14) | 3 | 2 |
/// | [14, 16) | 4 | 2 |
/// | >= 16 | 2 + 1 per full 8 hours, plus the remainder bonus | |
///
/// The remainder bonus for long shifts is 2 paid + 1 unpaid from 6 hours,
/// 1 paid + 1 unpaid from 4 hours and 1 paid from 2 hours.
///
/// Negative hours are treated as zero.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::get_break_entitlements;
/// use rust_decimal::Decimal;
///
/// let short = get_break_entitlements(Decimal::from(3), 10);
/// assert_eq!((short.paid_minutes, short.unpaid_minutes), (10, 0));
///
/// let double = get_break_entitlements(Decimal::from(16), 10);
/// assert_eq!((double.paid_minutes, double.unpaid_minutes), (40, 60));
///
/// let longer_rest = get_break_entitlements(Decimal::from(8), 15);
/// assert_eq!(longer_rest.paid_minutes, 30);
/// ```
pub fn get_break_entitlements(hours_worked: Decimal, paid_rest_minutes: u32) -> BreakEntitlement {
    let hours = hours_worked.max(Decimal::ZERO);
    let (paid_breaks, unpaid_breaks) = entitled_break_counts(hours);

    BreakEntitlement {
        paid_breaks,
        unpaid_breaks,
        paid_minutes: i64::from(paid_breaks) * i64::from(paid_rest_minutes),
        unpaid_minutes: i64::from(unpaid_breaks) * i64::from(UNPAID_MEAL_BREAK_MINUTES),
    }
}

/// Returns `(paid rest breaks, unpaid meal breaks)` for non-negative hours.
fn entitled_break_counts(hours: Decimal) -> (u32, u32) {
    if hours >= Decimal::from(CYCLIC_FROM_HOURS) {
        let cycle = Decimal::from(CYCLE_HOURS);
        let full_cycles = (hours / cycle).floor();
        let remainder = hours - full_cycles * cycle;
        let cycles = full_cycles.to_u32().unwrap_or(u32::MAX);

        let (bonus_paid, bonus_unpaid) = remainder_bonus(remainder);
        return (
            cycles.saturating_mul(2).saturating_add(bonus_paid),
            cycles.saturating_add(bonus_unpaid),
        );
    }

    if hours >= Decimal::from(14) {
        (4, 2)
    } else if hours >= Decimal::from(12) {
        (3, 2)
    } else if hours >= Decimal::from(10) {
        (3, 1)
    } else if hours >= Decimal::from(6) {
        (2, 1)
    } else if hours >= Decimal::from(4) {
        (1, 1)
    } else if hours >= Decimal::from(2) {
        (1, 0)
    } else {
        (0, 0)
    }
}

/// Extra breaks for the hours left over after the full 8 hour cycles.
fn remainder_bonus(remainder: Decimal) -> (u32, u32) {
    if remainder >= Decimal::from(6) {
        (2, 1)
    } else if remainder >= Decimal::from(4) {
        (1, 1)
    } else if remainder >= Decimal::from(2) {
        (1, 0)
    } else {
        (0, 0)
    }
}
