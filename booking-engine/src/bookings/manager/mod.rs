//! BookingManager - lifecycle entry points
//!
//! Orchestrates creation, edit, cancellation, refund, settlement,
//! reconciliation and deletion of bookings on top of the injected store.
//!
//! # Operation flow
//!
//! ```text
//! operation(args)
//!     ├─ 1. Capability check (injected authorize predicate)
//!     ├─ 2. Snapshot state under the store lock
//!     ├─ 3. Price candidates / resolve amendments
//!     ├─ 4. Validate conflicts and state preconditions
//!     ├─ 5. Commit (only after the whole batch validates)
//!     └─ 6. Return committed bookings for printing
//! ```
//!
//! A rejected operation returns before step 5, so the booking collection
//! is left untouched; document counters only advance on committed
//! mutations.

use crate::bookings::batch::{plan_amendment, FieldChanges, GlobalChange};
use crate::bookings::conflict::find_conflict;
use crate::bookings::numbering;
use crate::bookings::payment::allocate_partial_payment;
use crate::pricing::slot_cost;
use crate::store::{BookingStore, StoreState};
use shared::error::{EngineError, EngineResult};
use shared::models::{Booking, BookingRequest, PaymentStatus, Permission};
use shared::util::{new_batch_id, new_booking_id};
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Injected capability-check predicate. The engine never authenticates;
/// it only asks whether the current operator holds a capability.
pub type CapabilityCheck = Arc<dyn Fn(Permission) -> bool + Send + Sync>;

/// Booking lifecycle manager
pub struct BookingManager {
    store: Arc<BookingStore>,
    authorize: CapabilityCheck,
}

impl std::fmt::Debug for BookingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingManager")
            .field("store", &self.store)
            .finish()
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl BookingManager {
    pub fn new(store: Arc<BookingStore>, authorize: CapabilityCheck) -> Self {
        Self { store, authorize }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    fn ensure(&self, permission: Permission) -> EngineResult<()> {
        if (self.authorize)(permission) {
            Ok(())
        } else {
            tracing::warn!(permission = %permission, "capability check failed");
            Err(EngineError::PermissionDenied(permission))
        }
    }

    // ========================================================================
    // Create / Edit
    // ========================================================================

    /// Create bookings from one operator submission: the Cartesian product
    /// of `dates x slots`, priced per slot, validated as a whole.
    pub fn create_booking(&self, request: &BookingRequest) -> EngineResult<Vec<Booking>> {
        self.save_booking(request, None)
    }

    /// Re-submit an existing booking. A single-date single-slot edit is
    /// applied in place (id, batch id and creation timestamp preserved);
    /// a multi-slot edit appends new bookings under the original batch id.
    pub fn edit_booking(&self, id: &str, request: &BookingRequest) -> EngineResult<Vec<Booking>> {
        let editing = self
            .store
            .find_booking(id)
            .ok_or_else(|| EngineError::not_found(id))?;
        self.save_booking(request, Some(&editing))
    }

    fn save_booking(
        &self,
        request: &BookingRequest,
        editing: Option<&Booking>,
    ) -> EngineResult<Vec<Booking>> {
        self.ensure(Permission::ManageBookings)?;
        validate_request(request)?;

        self.store.write(|state| {
            let mut candidates = expand_candidates(request, editing, state);

            for candidate in &candidates {
                if let Some(hit) = find_conflict(candidate, &state.bookings, None) {
                    tracing::warn!(
                        date = %candidate.date,
                        court = %candidate.court_id,
                        "booking rejected, slot already taken"
                    );
                    return Err(EngineError::conflict(hit.clone()));
                }
            }

            // Whole batch validated; only now touch counters and collection.
            if request.payment_status == PaymentStatus::Paid
                || request.payment_status == PaymentStatus::Partial
            {
                let receipt =
                    numbering::next_receipt_number(&mut state.company_profile.document_settings);
                let paid_at = now_millis();
                for candidate in &mut candidates {
                    candidate.receipt_number = Some(receipt.clone());
                    candidate.payment_date = Some(paid_at);
                }
            }

            let edit_in_place = editing.is_some() && candidates.len() == 1;
            if edit_in_place {
                let updated = candidates[0].clone();
                if let Some(slot) = state.bookings.iter_mut().find(|b| b.id == updated.id) {
                    *slot = updated;
                }
            } else {
                state.bookings.extend(candidates.iter().cloned());
            }

            tracing::info!(
                count = candidates.len(),
                batch_id = ?candidates[0].batch_id,
                edited = edit_in_place,
                "bookings committed"
            );
            Ok(candidates)
        })
    }

    // ========================================================================
    // Single-booking lifecycle
    // ========================================================================

    /// Transition to CANCELLED. The slot is immediately available again
    /// since cancelled bookings never obstruct.
    pub fn cancel_booking(&self, id: &str) -> EngineResult<()> {
        self.ensure(Permission::ManageBookings)?;
        self.store.write(|state| {
            let booking = find_mut(&mut state.bookings, id)?;
            booking.payment_status = PaymentStatus::Cancelled;
            tracing::info!(id, "booking cancelled");
            Ok(())
        })
    }

    /// Transition PAID/PARTIAL -> REFUNDED, issuing a payment voucher.
    /// Returns the updated booking for voucher printing.
    pub fn refund_booking(&self, id: &str) -> EngineResult<Booking> {
        self.ensure(Permission::ManagePayments)?;
        self.store.write(|state| {
            let status = find_mut(&mut state.bookings, id)?.payment_status;
            if !status.is_refundable() {
                return Err(EngineError::invalid_transition(format!(
                    "refund requires PAID or PARTIAL status, booking {} is {:?}",
                    id, status
                )));
            }
            let voucher =
                numbering::next_voucher_number(&mut state.company_profile.document_settings);
            let booking = find_mut(&mut state.bookings, id)?;
            booking.payment_status = PaymentStatus::Refunded;
            booking.voucher_number = Some(voucher);
            tracing::info!(id, voucher = ?booking.voucher_number, "booking refunded");
            Ok(booking.clone())
        })
    }

    /// Force every listed booking to PAID under one shared receipt number
    /// and payment timestamp, clearing any partial amounts. Used to settle
    /// a customer's accumulated outstanding balance in one action.
    pub fn bulk_settle(&self, ids: &[String]) -> EngineResult<String> {
        self.ensure(Permission::ManagePayments)?;
        if ids.is_empty() {
            return Err(EngineError::invalid_input("no bookings selected"));
        }
        self.store.write(|state| {
            let receipt =
                numbering::next_receipt_number(&mut state.company_profile.document_settings);
            let paid_at = now_millis();
            let mut settled = 0usize;
            for booking in state.bookings.iter_mut().filter(|b| ids.contains(&b.id)) {
                booking.payment_status = PaymentStatus::Paid;
                booking.paid_amount = None;
                booking.receipt_number = Some(receipt.clone());
                booking.payment_date = Some(paid_at);
                settled += 1;
            }
            tracing::info!(receipt = %receipt, settled, "bulk settlement");
            Ok(receipt)
        })
    }

    /// Hard removal, bypassing the state machine. For correcting mistakes,
    /// not a lifecycle transition.
    pub fn delete_booking(&self, id: &str) -> EngineResult<()> {
        self.ensure(Permission::ManageBookings)?;
        self.store.write(|state| {
            let before = state.bookings.len();
            state.bookings.retain(|b| b.id != id);
            if state.bookings.len() == before {
                return Err(EngineError::not_found(id));
            }
            tracing::info!(id, "booking deleted");
            Ok(())
        })
    }

    /// Mark payments as physically counted in a cash-collection pass,
    /// backfilling the payment date where absent. Payment status untouched.
    pub fn reconcile(&self, ids: &[String]) -> EngineResult<()> {
        self.ensure(Permission::ManagePayments)?;
        self.store.write(|state| {
            let now = now_millis();
            for booking in state.bookings.iter_mut().filter(|b| ids.contains(&b.id)) {
                booking.is_reconciled = true;
                booking.payment_date.get_or_insert(now);
            }
            Ok(())
        })
    }

    // ========================================================================
    // Batch tools
    // ========================================================================

    /// Apply a coordinated change across the selected bookings, validating
    /// the entire predicted set before committing any of it.
    pub fn batch_amend(
        &self,
        ids: &[String],
        global: &GlobalChange,
        overrides: &HashMap<String, FieldChanges>,
    ) -> EngineResult<()> {
        self.ensure(Permission::BatchTools)?;
        self.store.write(|state| {
            let plan = plan_amendment(&state.bookings, ids, global, overrides)?;
            state.bookings = plan.into_bookings();
            tracing::info!(count = ids.len(), "batch amendment committed");
            Ok(())
        })
    }

    /// Refund every selected booking that is currently PAID or PARTIAL
    /// under one shared voucher number, silently skipping ineligible
    /// members. Zero eligible bookings is an explicit failure.
    pub fn batch_refund(&self, ids: &[String]) -> EngineResult<usize> {
        self.ensure(Permission::BatchTools)?;
        self.store.write(|state| {
            let eligible: Vec<String> = state
                .bookings
                .iter()
                .filter(|b| ids.contains(&b.id) && b.payment_status.is_refundable())
                .map(|b| b.id.clone())
                .collect();
            if eligible.is_empty() {
                return Err(EngineError::invalid_transition(
                    "no refundable bookings selected",
                ));
            }
            let voucher =
                numbering::next_voucher_number(&mut state.company_profile.document_settings);
            for booking in state
                .bookings
                .iter_mut()
                .filter(|b| eligible.contains(&b.id))
            {
                booking.payment_status = PaymentStatus::Refunded;
                booking.voucher_number = Some(voucher.clone());
            }
            tracing::info!(voucher = %voucher, count = eligible.len(), "batch refund");
            Ok(eligible.len())
        })
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Delete every booking. Settings and courts survive.
    pub fn wipe_bookings(&self) -> EngineResult<()> {
        self.ensure(Permission::SystemMaintenance)?;
        self.store.write(|state| {
            let dropped = state.bookings.len();
            state.bookings.clear();
            tracing::info!(dropped, "booking data wiped");
            Ok(())
        })
    }

    /// Re-sort the collection by date then start time and drop records
    /// damaged by historic imports.
    pub fn reindex(&self) -> EngineResult<()> {
        self.ensure(Permission::SystemMaintenance)?;
        self.store.write(|state| {
            state
                .bookings
                .retain(|b| b.start_time.is_finite() && b.duration > 0.0);
            state.bookings.sort_by(|a, b| {
                a.date
                    .cmp(&b.date)
                    .then(a.start_time.total_cmp(&b.start_time))
            });
            Ok(())
        })
    }
}

// ============================================================================
// Candidate expansion
// ============================================================================

fn validate_request(request: &BookingRequest) -> EngineResult<()> {
    if request.dates.is_empty() {
        return Err(EngineError::invalid_input("at least one date is required"));
    }
    if request.slots.is_empty() {
        return Err(EngineError::invalid_input("at least one slot is required"));
    }
    if request.payment_status.is_terminal() {
        return Err(EngineError::invalid_input(
            "a new booking cannot start in a terminal status",
        ));
    }
    for slot in &request.slots {
        if !is_half_hour_aligned(slot.start_time) || !(0.0..24.0).contains(&slot.start_time) {
            return Err(EngineError::invalid_input(format!(
                "start time {} is not a half-hour step in [0, 24)",
                slot.start_time
            )));
        }
        if !is_half_hour_aligned(slot.duration) || slot.duration <= 0.0 {
            return Err(EngineError::invalid_input(format!(
                "duration {} is not a positive half-hour multiple",
                slot.duration
            )));
        }
    }
    Ok(())
}

fn is_half_hour_aligned(value: f64) -> bool {
    (value * 2.0).fract() == 0.0
}

/// Expand `dates x slots` into priced candidates in generation order.
/// Receipt number and payment date are stamped later, after validation.
fn expand_candidates(
    request: &BookingRequest,
    editing: Option<&Booking>,
    state: &StoreState,
) -> Vec<Booking> {
    let now = now_millis();
    let batch_id = match editing {
        Some(original) => original.batch_id.clone(),
        None => Some(new_batch_id()),
    };
    let single = request.dates.len() == 1 && request.slots.len() == 1;

    let costs: Vec<f64> = request
        .dates
        .iter()
        .flat_map(|_| {
            request.slots.iter().map(|s| {
                slot_cost(
                    s.start_time,
                    s.duration,
                    state.hourly_rate,
                    &state.promotion_rules,
                )
            })
        })
        .collect();

    let paid_split = if request.payment_status == PaymentStatus::Partial {
        allocate_partial_payment(&costs, request.paid_amount.unwrap_or(0.0))
    } else {
        Vec::new()
    };

    let mut candidates = Vec::with_capacity(costs.len());
    for (index, (date, slot)) in request
        .dates
        .iter()
        .flat_map(|d| request.slots.iter().map(move |s| (*d, s)))
        .enumerate()
    {
        let (id, created_at) = match editing {
            Some(original) if single => (original.id.clone(), original.created_at),
            Some(original) => (new_booking_id(), original.created_at),
            None => (new_booking_id(), now),
        };
        candidates.push(Booking {
            id,
            batch_id: batch_id.clone(),
            customer_name: request.customer_name.clone(),
            phone_number: request.phone_number.clone(),
            resident_unit_no: request.resident_unit_no.clone(),
            date,
            start_time: slot.start_time,
            duration: slot.duration,
            court_id: slot.court_id.clone(),
            payment_status: request.payment_status,
            notes: request.notes.clone(),
            created_at,
            payment_date: None,
            is_reconciled: false,
            hourly_rate: state.hourly_rate,
            total_amount: costs[index],
            paid_amount: (request.payment_status == PaymentStatus::Partial)
                .then(|| paid_split[index]),
            receipt_number: None,
            voucher_number: None,
        });
    }
    candidates
}

fn find_mut<'a>(bookings: &'a mut [Booking], id: &str) -> EngineResult<&'a mut Booking> {
    bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| EngineError::not_found(id))
}
