//! Conflict Detector
//!
//! Decides whether a proposed booking collides with any existing booking.
//! Two bookings conflict when they share the same date and court and their
//! half-open `[start, start + duration)` intervals strictly overlap;
//! touching endpoints is not a conflict. CANCELLED and REFUNDED bookings
//! never obstruct.

use shared::models::Booking;

/// First booking obstructing the proposed interval, or `None`.
///
/// Returns the first hit rather than an exhaustive list: callers surface
/// the offending booking (who/when) so the operator can pick another slot.
/// The proposed booking's own id is always excluded; `exclude_id`
/// additionally excludes the booking being edited during re-validation.
pub fn find_conflict<'a>(
    proposed: &Booking,
    bookings: &'a [Booking],
    exclude_id: Option<&str>,
) -> Option<&'a Booking> {
    let p_start = proposed.start_time;
    let p_end = proposed.end_time();

    bookings.iter().find(|b| {
        if b.id == proposed.id {
            return false;
        }
        if exclude_id.is_some_and(|id| b.id == id) {
            return false;
        }
        if !b.obstructs() {
            return false;
        }
        if b.date != proposed.date || b.court_id != proposed.court_id {
            return false;
        }
        p_start < b.end_time() && p_end > b.start_time
    })
}
