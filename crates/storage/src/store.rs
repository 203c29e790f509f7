//! Alert Store Port

use crate::StorageError;
use alert_model::Alert;
use async_trait::async_trait;

/// Abstract persistence port for durably recording one alert.
///
/// Each call is atomic from the caller's point of view: either the alert is
/// durably recorded or the call reports failure. Implementations must keep
/// concurrent inserts from interleaving partial writes.
#[async_trait]
pub trait AlertStore: Send + Sync {
    async fn insert_alert(&self, alert: &Alert) -> Result<(), StorageError>;
}
