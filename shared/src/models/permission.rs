//! Permission Definitions
//!
//! The engine does not implement authentication; callers inject a
//! capability-check predicate consulted at the start of every mutating
//! entry point.

use serde::{Deserialize, Serialize};

/// Capabilities guarding engine entry points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// Create, edit, cancel, delete bookings
    ManageBookings,
    /// Financial reports
    ViewReports,
    /// Settlement, cash collection, refund
    ManagePayments,
    /// Batch amend / batch refund
    BatchTools,
    /// Court settings, pricing
    ManageSettings,
    /// Wipe, re-index, factory reset
    SystemMaintenance,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageBookings => "manage_bookings",
            Self::ViewReports => "view_reports",
            Self::ManagePayments => "manage_payments",
            Self::BatchTools => "batch_tools",
            Self::ManageSettings => "manage_settings",
            Self::SystemMaintenance => "system_maintenance",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
