//! Slot Cost Calculator
//!
//! Cost of occupying one court for an interval, stepped in half-hour
//! segments. Promotions and billing both operate on 30-minute granularity,
//! so stepping sidesteps interval-intersection arithmetic between the
//! booking and each promotion window: a promotion starting mid-booking is
//! billed correctly segment by segment.

use super::matcher::active_rule_at;
use shared::models::PromotionRule;

/// Billing granularity in hours.
pub const SEGMENT_HOURS: f64 = 0.5;

/// Compute the cost of `[start_time, start_time + duration)` at
/// `base_rate`, with per-segment promotion overrides.
///
/// Pure function of its inputs. Each half-hour segment accrues half the
/// hourly rate of the first active rule covering the segment start, or
/// half the base rate when no rule matches. Intervals are assumed not to
/// cross past hour 24.
pub fn slot_cost(
    start_time: f64,
    duration: f64,
    base_rate: f64,
    rules: &[PromotionRule],
) -> f64 {
    let mut total = 0.0;
    let mut offset = 0.0;
    while offset < duration {
        let segment_start = start_time + offset;
        let rate = active_rule_at(rules, segment_start)
            .map(|r| r.rate)
            .unwrap_or(base_rate);
        total += rate / 2.0;
        offset += SEGMENT_HOURS;
    }
    total
}
