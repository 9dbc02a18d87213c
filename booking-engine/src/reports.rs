//! Reporting queries
//!
//! Read-only aggregations over the booking collection: the daily dashboard
//! numbers, outstanding balances per customer, and the cash-collection
//! worklist. None of these mutate state; reconciliation itself goes through
//! the manager.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::models::{Booking, Court, PaymentStatus};
use std::collections::BTreeMap;

/// Hours of sellable court time per court per day used for utilization.
const SELLABLE_HOURS_PER_COURT: f64 = 12.0;

/// Daily dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Bookings on the date, cancellations excluded
    pub total_bookings: i64,
    /// Sum of PAID totals on the date
    pub revenue_collected: f64,
    pub unpaid_count: i64,
    pub booked_hours: f64,
    /// Booked hours over sellable court hours, 0..=1
    pub utilization: f64,
}

pub fn daily_summary(bookings: &[Booking], courts: &[Court], date: NaiveDate) -> DailySummary {
    let on_day: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.date == date && b.payment_status != PaymentStatus::Cancelled)
        .collect();

    let booked_hours: f64 = on_day.iter().map(|b| b.duration).sum();
    let capacity = courts.len() as f64 * SELLABLE_HOURS_PER_COURT;

    DailySummary {
        date,
        total_bookings: on_day.len() as i64,
        revenue_collected: on_day
            .iter()
            .filter(|b| b.payment_status == PaymentStatus::Paid)
            .map(|b| b.total_amount)
            .sum(),
        unpaid_count: on_day
            .iter()
            .filter(|b| b.payment_status == PaymentStatus::Unpaid)
            .count() as i64,
        booked_hours,
        utilization: if capacity > 0.0 { booked_hours / capacity } else { 0.0 },
    }
}

/// Outstanding balance of one customer, identified by (name, phone)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerBalance {
    pub customer_name: String,
    pub phone_number: String,
    pub outstanding: f64,
    pub booking_ids: Vec<String>,
}

/// Per-customer outstanding UNPAID/PARTIAL balances, sorted by name then
/// phone. PARTIAL bookings owe `total - paid`.
pub fn outstanding_balances(bookings: &[Booking]) -> Vec<CustomerBalance> {
    let mut by_customer: BTreeMap<(String, String), CustomerBalance> = BTreeMap::new();
    for b in bookings {
        if !matches!(b.payment_status, PaymentStatus::Unpaid | PaymentStatus::Partial) {
            continue;
        }
        let key = (b.customer_name.clone(), b.phone_number.clone());
        let entry = by_customer.entry(key).or_insert_with(|| CustomerBalance {
            customer_name: b.customer_name.clone(),
            phone_number: b.phone_number.clone(),
            outstanding: 0.0,
            booking_ids: Vec::new(),
        });
        entry.outstanding += b.outstanding_amount();
        entry.booking_ids.push(b.id.clone());
    }
    by_customer.into_values().collect()
}

/// Local calendar day a timestamp falls on.
fn local_date_of(millis: i64) -> Option<NaiveDate> {
    chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.with_timezone(&Local).date_naive())
}

/// Cash-collection worklist: payments taken on the given local day that
/// have not been reconciled yet. PARTIAL bookings qualify only once money
/// was actually collected. Sorted by collection time.
pub fn unreconciled_collections(bookings: &[Booking], collection_date: NaiveDate) -> Vec<Booking> {
    let mut list: Vec<Booking> = bookings
        .iter()
        .filter(|b| {
            match b.payment_status {
                PaymentStatus::Paid => {}
                PaymentStatus::Partial => {
                    if b.paid_amount.unwrap_or(0.0) <= 0.0 {
                        return false;
                    }
                }
                _ => return false,
            }
            if b.is_reconciled {
                return false;
            }
            let timestamp = b.payment_date.unwrap_or(b.created_at);
            local_date_of(timestamp) == Some(collection_date)
        })
        .cloned()
        .collect();
    list.sort_by_key(|b| b.payment_date.unwrap_or(0));
    list
}

/// Cash actually in the drawer for a collection list: full totals for
/// PAID, collected portion for PARTIAL.
pub fn collected_amount(bookings: &[Booking]) -> f64 {
    bookings
        .iter()
        .map(|b| match b.payment_status {
            PaymentStatus::Paid => b.total_amount,
            PaymentStatus::Partial => b.paid_amount.unwrap_or(0.0),
            _ => 0.0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::court::default_courts;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn local_noon_millis(day: NaiveDate) -> i64 {
        Local
            .from_local_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap()
            .timestamp_millis()
    }

    fn booking(
        id: &str,
        day: NaiveDate,
        duration: f64,
        status: PaymentStatus,
        total: f64,
        paid: Option<f64>,
    ) -> Booking {
        Booking {
            id: id.to_string(),
            batch_id: None,
            customer_name: "John Doe".to_string(),
            phone_number: "555-0123".to_string(),
            resident_unit_no: None,
            date: day,
            start_time: 10.0,
            duration,
            court_id: "Court 1".to_string(),
            payment_status: status,
            notes: None,
            created_at: local_noon_millis(day),
            payment_date: None,
            is_reconciled: false,
            hourly_rate: 20.0,
            total_amount: total,
            paid_amount: paid,
            receipt_number: None,
            voucher_number: None,
        }
    }

    #[test]
    fn test_daily_summary_counts_and_revenue() {
        let day = date(2024, 1, 1);
        let bookings = vec![
            booking("a", day, 2.0, PaymentStatus::Paid, 40.0, None),
            booking("b", day, 1.0, PaymentStatus::Unpaid, 20.0, None),
            booking("c", day, 1.0, PaymentStatus::Cancelled, 20.0, None),
            booking("d", date(2024, 1, 2), 1.0, PaymentStatus::Paid, 20.0, None),
        ];
        let summary = daily_summary(&bookings, &default_courts(), day);
        assert_eq!(summary.total_bookings, 2);
        assert_eq!(summary.revenue_collected, 40.0);
        assert_eq!(summary.unpaid_count, 1);
        assert_eq!(summary.booked_hours, 3.0);
        assert_eq!(summary.utilization, 3.0 / 48.0);
    }

    #[test]
    fn test_outstanding_balances_groups_by_customer() {
        let day = date(2024, 1, 1);
        let mut other = booking("b", day, 1.0, PaymentStatus::Unpaid, 20.0, None);
        other.customer_name = "Jane Smith".to_string();
        other.phone_number = "555-0987".to_string();

        let bookings = vec![
            booking("a1", day, 2.0, PaymentStatus::Unpaid, 40.0, None),
            booking("a2", day, 2.0, PaymentStatus::Partial, 50.0, Some(20.0)),
            booking("a3", day, 1.0, PaymentStatus::Paid, 20.0, None),
            other,
        ];

        let balances = outstanding_balances(&bookings);
        assert_eq!(balances.len(), 2);
        // BTreeMap ordering: "Jane Smith" before "John Doe".
        assert_eq!(balances[0].customer_name, "Jane Smith");
        assert_eq!(balances[0].outstanding, 20.0);
        assert_eq!(balances[1].customer_name, "John Doe");
        assert_eq!(balances[1].outstanding, 70.0); // 40 + (50 - 20)
        assert_eq!(balances[1].booking_ids, vec!["a1", "a2"]);
    }

    #[test]
    fn test_unreconciled_collections_filters_and_sorts() {
        let day = date(2024, 1, 5);
        let noon = local_noon_millis(day);

        let mut early = booking("early", day, 1.0, PaymentStatus::Paid, 20.0, None);
        early.payment_date = Some(noon - 3_600_000);
        let mut late = booking("late", day, 1.0, PaymentStatus::Paid, 20.0, None);
        late.payment_date = Some(noon);
        let mut done = booking("done", day, 1.0, PaymentStatus::Paid, 20.0, None);
        done.payment_date = Some(noon);
        done.is_reconciled = true;
        let mut empty_partial = booking("p0", day, 1.0, PaymentStatus::Partial, 20.0, Some(0.0));
        empty_partial.payment_date = Some(noon);
        let mut other_day = booking("od", day, 1.0, PaymentStatus::Paid, 20.0, None);
        other_day.payment_date = Some(local_noon_millis(date(2024, 1, 6)));

        let bookings = vec![late.clone(), early.clone(), done, empty_partial, other_day];
        let list = unreconciled_collections(&bookings, day);
        let ids: Vec<&str> = list.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[test]
    fn test_collected_amount_counts_partial_portion() {
        let day = date(2024, 1, 1);
        let list = vec![
            booking("a", day, 1.0, PaymentStatus::Paid, 40.0, None),
            booking("b", day, 1.0, PaymentStatus::Partial, 50.0, Some(20.0)),
        ];
        assert_eq!(collected_amount(&list), 60.0);
    }
}
