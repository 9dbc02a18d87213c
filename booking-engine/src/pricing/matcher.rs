//! Promotion Rule Matcher
//!
//! Resolution is deliberately first-match-wins in list order: rules carry
//! no precedence field, so insertion order is the tiebreak for overlapping
//! active windows.

use shared::models::PromotionRule;

/// First active rule whose `[start_time, end_time)` window contains the
/// instant, in list order.
pub fn active_rule_at(rules: &[PromotionRule], instant: f64) -> Option<&PromotionRule> {
    rules.iter().find(|r| r.applies_at(instant))
}
