//! Shared types for the court reservation system
//!
//! Data models and the unified error type used by the booking engine
//! and its consumers (UI, printing, reporting).

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{EngineError, EngineResult};
pub use serde::{Deserialize, Serialize};
