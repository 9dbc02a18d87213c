//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment status enum
///
/// UNPAID / PARTIAL / PAID are the mutually exclusive open states;
/// CANCELLED and REFUNDED are terminal and never obstruct a slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
    Cancelled,
    Refunded,
}

impl PaymentStatus {
    /// Terminal states are immutable except for the terminal marker itself.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Refunded)
    }

    /// Refund is only reachable from PAID or PARTIAL.
    pub fn is_refundable(&self) -> bool {
        matches!(self, Self::Paid | Self::Partial)
    }

    /// Open states carry outstanding or collected money.
    pub fn is_open(&self) -> bool {
        !self.is_terminal()
    }
}

/// Booking entity - one customer's claim on a court for a date/time interval
///
/// Customers are denormalized onto each booking; the (name, phone) pair is
/// the implicit customer identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    /// Groups bookings created together in one multi-slot/multi-date action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    pub customer_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_unit_no: Option<String>,
    /// Calendar day of play
    pub date: NaiveDate,
    /// Hour-of-day in half-hour steps, range [0, 24)
    pub start_time: f64,
    /// Hours, positive multiple of 0.5
    pub duration: f64,
    pub court_id: String,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
    /// When payment was actually collected (Unix millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<i64>,
    /// Counted in a cash-collection reconciliation pass
    #[serde(default)]
    pub is_reconciled: bool,
    /// Base rate in effect when priced, retained for audit
    pub hourly_rate: f64,
    /// Frozen at creation/amendment time
    pub total_amount: f64,
    /// Defined only while status is PARTIAL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_number: Option<String>,
}

impl Booking {
    /// Exclusive end of the occupied interval.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Whether this booking blocks its slot for others.
    pub fn obstructs(&self) -> bool {
        self.payment_status.is_open()
    }

    /// Amount still owed: full total for UNPAID, remainder for PARTIAL.
    pub fn outstanding_amount(&self) -> f64 {
        match self.payment_status {
            PaymentStatus::Unpaid => self.total_amount,
            PaymentStatus::Partial => self.total_amount - self.paid_amount.unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

/// Slot - (court, start, duration) occupancy independent of date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingSlot {
    pub court_id: String,
    pub start_time: f64,
    pub duration: f64,
}

/// Booking request payload - one operator submission
///
/// Expands to the Cartesian product of `dates x slots`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub phone_number: String,
    pub resident_unit_no: Option<String>,
    pub dates: Vec<NaiveDate>,
    pub slots: Vec<BookingSlot>,
    /// Submitted intent: UNPAID, PARTIAL or PAID
    pub payment_status: PaymentStatus,
    /// Total paid across the batch when status is PARTIAL
    pub paid_amount: Option<f64>,
    pub notes: Option<String>,
}
