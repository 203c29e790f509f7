//! Validation Error Types

use thiserror::Error;

/// Errors during alert field validation
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Timestamp string matches none of the accepted formats
    #[error("invalid timestamp {0:?}: expected YYYY-MM-DD HH:MM:SS or ISO 8601")]
    InvalidTimestamp(String),

    /// Alert type outside the known enumeration
    #[error("unknown alert type {0:?}: expected LEAK, BLOCKAGE, PRESSURE, TEMPERATURE, or ACOUSTIC")]
    UnknownAlertType(String),

    /// Required identifier is empty
    #[error("required field {0} is empty")]
    EmptyField(&'static str),
}
