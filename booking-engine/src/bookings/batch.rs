//! Batch Amendment Engine
//!
//! Applies a coordinated change (date shift, fixed date, explicit pick-date
//! remapping, court/time/duration override) across a selected set of
//! bookings, then validates the entire predicted post-amendment set before
//! anything is committed. The plan/commit boundary is a first-class seam:
//! [`plan_amendment`] produces an [`AmendmentPlan`] or an error with no
//! mutation, and the manager commits the plan atomically.

use super::conflict::find_conflict;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::error::{EngineError, EngineResult};
use shared::models::Booking;
use std::collections::{BTreeSet, HashMap};

/// Date-change component of a batch-wide amendment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateChange {
    /// Shift every selected booking by whole days (negative shifts earlier)
    Shift { days: i64 },
    /// Move every selected booking to one fixed date
    Fixed { date: NaiveDate },
    /// Re-map the distinct original dates onto the picked target dates:
    /// both sides are sorted ascending and paired index by index. The
    /// pick count must equal the number of distinct original dates.
    Pick { dates: Vec<NaiveDate> },
}

/// Batch-wide change applied to every selected booking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalChange {
    pub date_change: Option<DateChange>,
    pub court_id: Option<String>,
    pub start_time: Option<f64>,
    pub duration: Option<f64>,
}

/// Per-booking override, layered on top of the global change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldChanges {
    pub date: Option<NaiveDate>,
    pub court_id: Option<String>,
    pub start_time: Option<f64>,
    pub duration: Option<f64>,
}

/// Validated predicted post-amendment booking set, ready to commit
#[derive(Debug, Clone, PartialEq)]
pub struct AmendmentPlan {
    bookings: Vec<Booking>,
}

impl AmendmentPlan {
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn into_bookings(self) -> Vec<Booking> {
        self.bookings
    }
}

/// Build and validate the predicted post-amendment set.
///
/// Field resolution per booking: per-id override wins over the global
/// change wins over the original value. Every changed booking is checked
/// against the full predicted set (selected bookings with changes applied
/// plus all untouched bookings); the first conflict aborts the plan.
pub fn plan_amendment(
    bookings: &[Booking],
    ids: &[String],
    global: &GlobalChange,
    overrides: &HashMap<String, FieldChanges>,
) -> EngineResult<AmendmentPlan> {
    for id in ids {
        if !bookings.iter().any(|b| b.id == *id) {
            return Err(EngineError::not_found(id.clone()));
        }
    }

    let pick_mapping = build_pick_mapping(bookings, ids, global)?;

    let predicted: Vec<Booking> = bookings
        .iter()
        .map(|b| {
            if !ids.contains(&b.id) {
                return b.clone();
            }
            let override_ = overrides.get(&b.id);
            let mut amended = b.clone();
            amended.date = resolve_date(b, override_, global, pick_mapping.as_ref());
            if let Some(court) = override_
                .and_then(|o| o.court_id.clone())
                .or_else(|| global.court_id.clone())
            {
                amended.court_id = court;
            }
            if let Some(start) = override_.and_then(|o| o.start_time).or(global.start_time) {
                amended.start_time = start;
            }
            if let Some(duration) = override_.and_then(|o| o.duration).or(global.duration) {
                amended.duration = duration;
            }
            amended
        })
        .collect();

    for id in ids {
        // Every selected id resolved above; the lookup cannot miss.
        let proposed = predicted
            .iter()
            .find(|b| b.id == *id)
            .ok_or_else(|| EngineError::not_found(id.clone()))?;
        if let Some(hit) = find_conflict(proposed, &predicted, None) {
            return Err(EngineError::conflict(hit.clone()));
        }
    }

    Ok(AmendmentPlan { bookings: predicted })
}

fn resolve_date(
    original: &Booking,
    override_: Option<&FieldChanges>,
    global: &GlobalChange,
    pick_mapping: Option<&HashMap<NaiveDate, NaiveDate>>,
) -> NaiveDate {
    if let Some(date) = override_.and_then(|o| o.date) {
        return date;
    }
    match &global.date_change {
        Some(DateChange::Fixed { date }) => *date,
        Some(DateChange::Shift { days }) => original.date + Duration::days(*days),
        Some(DateChange::Pick { .. }) => pick_mapping
            .and_then(|m| m.get(&original.date).copied())
            .unwrap_or(original.date),
        None => original.date,
    }
}

/// Sorted pairwise mapping for pick mode; fails fast on count mismatch.
fn build_pick_mapping(
    bookings: &[Booking],
    ids: &[String],
    global: &GlobalChange,
) -> EngineResult<Option<HashMap<NaiveDate, NaiveDate>>> {
    let Some(DateChange::Pick { dates }) = &global.date_change else {
        return Ok(None);
    };

    let original_days: BTreeSet<NaiveDate> = bookings
        .iter()
        .filter(|b| ids.contains(&b.id))
        .map(|b| b.date)
        .collect();

    if original_days.len() != dates.len() {
        return Err(EngineError::invalid_transition(format!(
            "selected bookings span {} unique days but {} target dates were picked",
            original_days.len(),
            dates.len()
        )));
    }

    let mut targets = dates.clone();
    targets.sort();
    Ok(Some(original_days.into_iter().zip(targets).collect()))
}
