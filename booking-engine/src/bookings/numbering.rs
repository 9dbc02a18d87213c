//! Document Numbering
//!
//! Monotonic receipt and voucher numbers from independently configured
//! prefix/counter pairs. Issuance mutates the counter in place; the caller
//! persists the updated settings alongside the booking mutation. Known
//! limitation: a crash between issuance and persistence can repeat or skip
//! a number. Accepted under the single-writer assumption.

use shared::models::DocumentSettings;

/// Issue the next receipt number and advance the counter.
pub fn next_receipt_number(settings: &mut DocumentSettings) -> String {
    let number = format!("{}{}", settings.receipt_prefix, settings.receipt_next_number);
    settings.receipt_next_number += 1;
    number
}

/// Issue the next payment-voucher number and advance the counter.
pub fn next_voucher_number(settings: &mut DocumentSettings) -> String {
    let number = format!("{}{}", settings.voucher_prefix, settings.voucher_next_number);
    settings.voucher_next_number += 1;
    number
}
