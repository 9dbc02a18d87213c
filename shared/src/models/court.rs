//! Court Model

use serde::{Deserialize, Serialize};

/// Court entity - an identifier/name pair
///
/// Purely a label; a court is time-partitioned only through the bookings
/// that reference it. A booking referencing a deleted court is tolerated
/// and displayed as an unresolved label by the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Court {
    pub id: String,
    pub name: String,
}

/// Default court layout for a fresh install.
pub fn default_courts() -> Vec<Court> {
    (1..=4)
        .map(|n| Court {
            id: format!("Court {}", n),
            name: format!("Court {}", n),
        })
        .collect()
}
