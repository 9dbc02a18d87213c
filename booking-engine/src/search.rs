//! Free-slot search
//!
//! Scans a date range across every court on a half-hour grid for intervals
//! of the requested duration that are fully free inside the requested time
//! window. Results feed straight into a booking request.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::models::{Booking, Court};

/// One bookable opening
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableSlot {
    pub date: NaiveDate,
    pub court_id: String,
    pub court_name: String,
    pub start_time: f64,
}

/// Search parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Candidates must start at or after this hour
    pub window_start: f64,
    /// Candidates must end at or before this hour
    pub window_end: f64,
    /// Requested occupancy in hours
    pub duration: f64,
}

/// Whether any open booking covers the given instant on a court.
fn is_occupied(bookings: &[Booking], date: NaiveDate, time: f64, court_id: &str) -> bool {
    bookings.iter().any(|b| {
        b.obstructs()
            && b.date == date
            && b.court_id == court_id
            && time >= b.start_time
            && time < b.end_time()
    })
}

/// Whether every half-hour block of `[start, start + duration)` is free
/// and inside opening hours.
fn is_range_free(bookings: &[Booking], date: NaiveDate, start: f64, duration: f64, court_id: &str) -> bool {
    let mut offset = 0.0;
    while offset < duration {
        let instant = start + offset;
        if instant >= 24.0 {
            return false;
        }
        if is_occupied(bookings, date, instant, court_id) {
            return false;
        }
        offset += 0.5;
    }
    true
}

/// All free openings matching the query, in date/court/time order.
pub fn find_available_slots(
    bookings: &[Booking],
    courts: &[Court],
    query: &SlotQuery,
) -> Vec<AvailableSlot> {
    let mut found = Vec::new();
    let mut date = query.start_date;
    while date <= query.end_date {
        for court in courts {
            for step in 0..48 {
                let start = step as f64 * 0.5;
                let end = start + query.duration;
                if start < query.window_start || end > query.window_end {
                    continue;
                }
                if is_range_free(bookings, date, start, query.duration, &court.id) {
                    found.push(AvailableSlot {
                        date,
                        court_id: court.id.clone(),
                        court_name: court.name.clone(),
                        start_time: start,
                    });
                }
            }
        }
        date = date + Duration::days(1);
    }
    found
}
