//! Time-of-day pricing
//!
//! - **matcher**: which promotion rule (if any) covers a given instant
//! - **calculator**: segment-wise cost of occupying a court for an interval

pub mod calculator;
pub mod matcher;

pub use calculator::{slot_cost, SEGMENT_HOURS};
pub use matcher::active_rule_at;
