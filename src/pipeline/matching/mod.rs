//! Offline identification against the built-in catalog.

pub mod catalog;
pub mod confidence;
pub mod matcher;

pub use catalog::{MedicationRecord, CATALOG};
pub use matcher::*;
