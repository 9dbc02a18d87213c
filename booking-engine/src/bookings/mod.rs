//! Booking lifecycle module
//!
//! - **manager**: entry points for create/edit/cancel/refund/settle/
//!   reconcile/delete, each guarded by the injected capability check
//! - **conflict**: double-booking detection over half-open intervals
//! - **batch**: coordinated amendment of many bookings with whole-set
//!   re-validation, plus batch refund
//! - **payment**: partial-payment allocation strategy
//! - **numbering**: receipt/voucher number issuance
//!
//! # Mutation flow
//!
//! ```text
//! operation(args)
//!     ├─ 1. Capability check (injected predicate)
//!     ├─ 2. Build proposed bookings / predicted set
//!     ├─ 3. Validate (conflicts, state preconditions)
//!     ├─ 4. Commit to the store (only after full validation)
//!     └─ 5. Return committed entities for printing
//! ```

pub mod batch;
pub mod conflict;
pub mod manager;
pub mod numbering;
pub mod payment;

// Re-exports
pub use batch::{AmendmentPlan, DateChange, FieldChanges, GlobalChange};
pub use conflict::find_conflict;
pub use manager::{BookingManager, CapabilityCheck};
