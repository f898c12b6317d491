//! Error handling for the collaboration core
//!
//! One typed error enum is surfaced to callers so permission failures,
//! missing entities, and internal faults stay distinguishable.

mod helpers;
mod types;

pub use types::{CoreError, Result};
