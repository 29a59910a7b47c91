//! Prelude module for health_calc crate.
//!
//! Re-exports the derive_more derives used across the crate.

#[allow(unused_imports)]
pub use derive_more::{Add, Display, Into};
