//! JSON blob persistence
//!
//! Each top-level collection is serialized as an independent JSON blob in
//! a data directory. Loading tolerates a missing or unreadable blob by
//! falling back to that collection's default (first-run semantics); saving
//! reports failures to the caller, who treats persistence as a
//! fire-and-forget side effect of a committed mutation.

use super::StoreState;
use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

const BOOKINGS_BLOB: &str = "bookings.json";
const COURTS_BLOB: &str = "courts.json";
const PROMOTION_RULES_BLOB: &str = "promotion_rules.json";
const HOURLY_RATE_BLOB: &str = "hourly_rate.json";
const CURRENCY_CODE_BLOB: &str = "currency_code.json";
const COMPANY_PROFILE_BLOB: &str = "company_profile.json";

/// Load the full state from a data directory, defaulting collection by
/// collection. Never fails: a fresh or damaged directory yields defaults.
pub fn load(dir: &Path) -> StoreState {
    let defaults = StoreState::default();
    StoreState {
        bookings: load_blob(dir, BOOKINGS_BLOB, defaults.bookings),
        courts: load_blob(dir, COURTS_BLOB, defaults.courts),
        promotion_rules: load_blob(dir, PROMOTION_RULES_BLOB, defaults.promotion_rules),
        hourly_rate: load_blob(dir, HOURLY_RATE_BLOB, defaults.hourly_rate),
        currency_code: load_blob(dir, CURRENCY_CODE_BLOB, defaults.currency_code),
        company_profile: load_blob(dir, COMPANY_PROFILE_BLOB, defaults.company_profile),
    }
}

/// Save every collection as its own blob.
pub fn save(dir: &Path, state: &StoreState) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating data directory {}", dir.display()))?;
    save_blob(dir, BOOKINGS_BLOB, &state.bookings)?;
    save_blob(dir, COURTS_BLOB, &state.courts)?;
    save_blob(dir, PROMOTION_RULES_BLOB, &state.promotion_rules)?;
    save_blob(dir, HOURLY_RATE_BLOB, &state.hourly_rate)?;
    save_blob(dir, CURRENCY_CODE_BLOB, &state.currency_code)?;
    save_blob(dir, COMPANY_PROFILE_BLOB, &state.company_profile)?;
    Ok(())
}

fn load_blob<T: DeserializeOwned>(dir: &Path, name: &str, fallback: T) -> T {
    let path = dir.join(name);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(_) => return fallback, // first run
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(blob = name, error = %e, "unreadable blob, using default");
            fallback
        }
    }
}

fn save_blob<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let path = dir.join(name);
    let raw = serde_json::to_string(value).with_context(|| format!("serializing {}", name))?;
    fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))
}
