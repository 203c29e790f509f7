//! Alert Domain Model
//!
//! Provides the validated, immutable alert value type and the field
//! validators that guard its construction.

mod error;
mod model;
mod validate;

pub use error::ValidationError;
pub use model::{Alert, AlertType, Severity};
pub use validate::{AlertFields, ValidatedFields, TIMESTAMP_FORMATS};
