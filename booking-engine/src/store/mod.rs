//! Application state store
//!
//! All top-level collections (bookings, courts, promotion rules, rate,
//! company profile) live behind one injected store object. Mutating engine
//! operations validate against a snapshot and commit through the store;
//! persistence is a fire-and-forget side effect layered on top
//! (see [`persistence`]).

pub mod persistence;

use parking_lot::RwLock;
use shared::models::{
    court::default_courts, Booking, CompanyProfile, Court, PromotionRule,
};

/// Default base rate for a fresh install.
pub const DEFAULT_HOURLY_RATE: f64 = 20.0;

/// The full application state: every top-level collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub bookings: Vec<Booking>,
    pub courts: Vec<Court>,
    pub promotion_rules: Vec<PromotionRule>,
    /// Base hourly rate applied outside promotion windows
    pub hourly_rate: f64,
    pub currency_code: String,
    pub company_profile: CompanyProfile,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            courts: default_courts(),
            promotion_rules: Vec::new(),
            hourly_rate: DEFAULT_HOURLY_RATE,
            currency_code: "USD".to_string(),
            company_profile: CompanyProfile::default(),
        }
    }
}

/// Injected state store guarding all collections
///
/// Single logical writer: the lock serializes engine operations, it does
/// not make the engine multi-writer safe.
pub struct BookingStore {
    state: RwLock<StoreState>,
}

impl std::fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingStore")
            .field("bookings", &self.state.read().bookings.len())
            .finish()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new(StoreState::default())
    }
}

impl BookingStore {
    pub fn new(state: StoreState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Run a closure against an immutable view of the state.
    pub fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        f(&self.state.read())
    }

    /// Run a closure against a mutable view of the state.
    pub fn write<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        f(&mut self.state.write())
    }

    /// Clone the full state. Used for validate-then-commit planning and
    /// for structural before/after comparison in tests.
    pub fn snapshot(&self) -> StoreState {
        self.state.read().clone()
    }

    /// Clone of the booking collection.
    pub fn bookings(&self) -> Vec<Booking> {
        self.state.read().bookings.clone()
    }

    pub fn find_booking(&self, id: &str) -> Option<Booking> {
        self.state.read().bookings.iter().find(|b| b.id == id).cloned()
    }

    /// Clone of the court list.
    pub fn courts(&self) -> Vec<Court> {
        self.state.read().courts.clone()
    }

    /// Clone of the promotion rule list, inactive rules included.
    pub fn promotion_rules(&self) -> Vec<PromotionRule> {
        self.state.read().promotion_rules.clone()
    }

    pub fn hourly_rate(&self) -> f64 {
        self.state.read().hourly_rate
    }

    pub fn set_courts(&self, courts: Vec<Court>) {
        self.state.write().courts = courts;
    }

    pub fn set_hourly_rate(&self, rate: f64) {
        self.state.write().hourly_rate = rate;
    }

    pub fn set_company_profile(&self, profile: CompanyProfile) {
        self.state.write().company_profile = profile;
    }

    /// Atomically replace the whole booking collection (batch commit).
    pub fn replace_bookings(&self, bookings: Vec<Booking>) {
        self.state.write().bookings = bookings;
    }

    /// Replace the promotion rule list.
    ///
    /// Overlapping active rules are legal (first match in list order wins at
    /// pricing time) but usually a configuration mistake, so shadowed pairs
    /// are reported here.
    pub fn set_promotion_rules(&self, rules: Vec<PromotionRule>) {
        for (i, a) in rules.iter().enumerate() {
            for b in rules.iter().skip(i + 1) {
                if a.shadows(b) {
                    tracing::warn!(
                        first = %a.name,
                        shadowed = %b.name,
                        "overlapping active promotion windows; first in list order wins"
                    );
                }
            }
        }
        self.state.write().promotion_rules = rules;
    }

    /// Reset every collection to first-run defaults.
    pub fn factory_reset(&self) {
        *self.state.write() = StoreState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let store = BookingStore::default();
        store.read(|s| {
            assert!(s.bookings.is_empty());
            assert_eq!(s.courts.len(), 4);
            assert_eq!(s.hourly_rate, DEFAULT_HOURLY_RATE);
            assert_eq!(s.currency_code, "USD");
        });
    }

    #[test]
    fn test_replace_bookings_is_atomic_swap() {
        let store = BookingStore::default();
        store.replace_bookings(Vec::new());
        assert!(store.bookings().is_empty());
    }

    #[test]
    fn test_factory_reset_restores_defaults() {
        let store = BookingStore::default();
        store.write(|s| {
            s.hourly_rate = 35.0;
            s.currency_code = "MYR".to_string();
        });
        store.factory_reset();
        store.read(|s| {
            assert_eq!(s.hourly_rate, DEFAULT_HOURLY_RATE);
            assert_eq!(s.currency_code, "USD");
        });
    }
}
