//! Booking Engine - single-venue court reservation and billing core
//!
//! # Module structure
//!
//! ```text
//! booking-engine/src/
//! ├── store/         # Injected application state + JSON blob persistence
//! ├── pricing/       # Time-of-day promotional pricing
//! ├── bookings/      # Lifecycle manager, conflict detection, batch tools
//! ├── search         # Free-slot search across a date range
//! └── reports        # Daily statistics and cash-collection queries
//! ```
//!
//! # Execution model
//!
//! Single-threaded, single-writer: operations are synchronous and run to
//! completion without interleaving. The validate-then-commit discipline in
//! the manager and the batch amendment engine is the only safety mechanism;
//! a multi-writer deployment must wrap the plan/commit boundary in its own
//! locking or transaction layer.

pub mod bookings;
pub mod pricing;
pub mod reports;
pub mod search;
pub mod store;

// Re-export public types
pub use bookings::batch::{AmendmentPlan, DateChange, FieldChanges, GlobalChange};
pub use bookings::manager::{BookingManager, CapabilityCheck};
pub use pricing::slot_cost;
pub use store::{BookingStore, StoreState};

// Re-export shared types for convenience
pub use shared::error::{EngineError, EngineResult};
pub use shared::models::{
    Booking, BookingRequest, BookingSlot, CompanyProfile, Court, PaymentStatus, Permission,
    PromotionRule,
};
