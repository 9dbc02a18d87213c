//! Utility functions: identifier generation and display formatting

use crate::models::{DateFormat, TimeFormat};
use chrono::NaiveDate;
use rand::Rng;

/// Generate a unique booking identifier.
pub fn new_booking_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Generate a short batch identifier, e.g. `BID-X4K2QP`.
pub fn new_batch_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("BID-{}", suffix)
}

/// Format a float hour-of-day for display, e.g. `10.5` -> `10:30`.
///
/// Values at or past 24 wrap for display only.
pub fn format_time(time_value: f64, format: TimeFormat) -> String {
    let display = time_value.rem_euclid(24.0);
    let hour = display.floor() as u32;
    let minutes = if (display - display.floor()) >= 0.5 { "30" } else { "00" };

    match format {
        TimeFormat::H12 => {
            let ampm = if hour >= 12 { "PM" } else { "AM" };
            let h12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{} {}", h12, minutes, ampm)
        }
        TimeFormat::H24 => format!("{:02}:{}", hour, minutes),
    }
}

/// Format a calendar date per the configured display preference.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::YearMonthDay => date.format("%Y-%m-%d").to_string(),
        DateFormat::DayMonthYear => date.format("%d/%m/%Y").to_string(),
        DateFormat::MonthDayYear => date.format("%m/%d/%Y").to_string(),
    }
}
