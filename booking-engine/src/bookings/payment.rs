//! Partial-payment allocation
//!
//! When a multi-slot batch is submitted as PARTIAL, the operator supplies
//! one total paid amount for the whole batch. The split across candidates
//! is greedy in generation order, not proportional: each candidate absorbs
//! `min(remaining, its_cost)` until the money runs out. The policy lives
//! behind this one function so it can be swapped or tested in isolation.

/// Allocate `total_paid` across candidate costs in order.
///
/// Returns one paid amount per candidate, in the same order. Candidates
/// past the point of exhaustion get 0 (they stay PARTIAL with nothing
/// collected yet).
pub fn allocate_partial_payment(costs: &[f64], total_paid: f64) -> Vec<f64> {
    let mut remaining = total_paid;
    costs
        .iter()
        .map(|cost| {
            let take = remaining.min(*cost);
            remaining -= take;
            take
        })
        .collect()
}
