//! Storage Layer
//!
//! Provides the alert persistence port and its SQLite implementation.

mod memory;
mod repository;
mod store;

pub use memory::MemoryStore;
pub use repository::SqliteRepository;
pub use store::AlertStore;

use thiserror::Error;

/// Storage errors
///
/// The pipeline cannot tell transient failures from permanent ones, so every
/// variant is treated as retryable by callers.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
