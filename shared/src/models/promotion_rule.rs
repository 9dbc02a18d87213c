//! Promotion Rule Model

use serde::{Deserialize, Serialize};

/// Promotion rule entity - a named time-window override of the base rate
///
/// Rules may be inactive without being deleted. When several active rules
/// cover the same instant, the first one in list order wins; the engine
/// never reconciles overlaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromotionRule {
    pub id: String,
    pub name: String,
    /// Window start, hour-of-day on a 24-hour clock
    pub start_time: f64,
    /// Window end (exclusive), hour-of-day on a 24-hour clock
    pub end_time: f64,
    /// Override hourly rate inside the window
    pub rate: f64,
    pub is_active: bool,
}

impl PromotionRule {
    /// Whether this rule covers the given instant: active and
    /// `start_time <= instant < end_time`.
    pub fn applies_at(&self, instant: f64) -> bool {
        self.is_active && instant >= self.start_time && instant < self.end_time
    }

    /// Whether two rules' windows intersect (both active).
    pub fn shadows(&self, other: &PromotionRule) -> bool {
        self.is_active
            && other.is_active
            && self.start_time < other.end_time
            && self.end_time > other.start_time
    }
}
