//! Alert Severity Classification
//!
//! Owns the policy table mapping alert types to severity levels.

mod classifier;

pub use classifier::classify;
