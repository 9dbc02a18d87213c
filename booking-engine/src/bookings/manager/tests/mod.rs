use super::*;
use crate::bookings::batch::DateChange;
use shared::models::{BookingSlot, PromotionRule};

fn create_test_manager() -> BookingManager {
    BookingManager::new(Arc::new(BookingStore::default()), Arc::new(|_| true))
}

fn manager_with_permissions(allowed: Vec<Permission>) -> BookingManager {
    BookingManager::new(
        Arc::new(BookingStore::default()),
        Arc::new(move |p| allowed.contains(&p)),
    )
}

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn slot(court: &str, start: f64, duration: f64) -> BookingSlot {
    BookingSlot {
        court_id: court.to_string(),
        start_time: start,
        duration,
    }
}

fn make_request(
    dates: &[chrono::NaiveDate],
    slots: &[BookingSlot],
    status: PaymentStatus,
    paid_amount: Option<f64>,
) -> BookingRequest {
    BookingRequest {
        customer_name: "John Doe".to_string(),
        phone_number: "555-0123".to_string(),
        resident_unit_no: None,
        dates: dates.to_vec(),
        slots: slots.to_vec(),
        payment_status: status,
        paid_amount,
        notes: None,
    }
}

// ========================================================================
// Helper: create one booking and return it
// ========================================================================

fn book_one(
    manager: &BookingManager,
    day: chrono::NaiveDate,
    court: &str,
    start: f64,
    duration: f64,
    status: PaymentStatus,
) -> Booking {
    let request = make_request(&[day], &[slot(court, start, duration)], status, None);
    let created = manager.create_booking(&request).unwrap();
    assert_eq!(created.len(), 1);
    created.into_iter().next().unwrap()
}

mod test_batch;
