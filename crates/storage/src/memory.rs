//! In-Memory Store
//!
//! Lock-guarded vector store for tests and local runs without a database.

use crate::store::AlertStore;
use crate::StorageError;
use alert_model::Alert;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory alert store
#[derive(Default)]
pub struct MemoryStore {
    alerts: Mutex<Vec<Alert>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored alerts
    pub fn alert_count(&self) -> usize {
        self.alerts.lock().map(|a| a.len()).unwrap_or(0)
    }

    /// Snapshot of stored alerts, oldest first
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AlertStore for MemoryStore {
    async fn insert_alert(&self, alert: &Alert) -> Result<(), StorageError> {
        let mut alerts = self
            .alerts
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("lock error: {e}")))?;
        alerts.push(alert.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alert_model::{AlertFields, AlertType, Severity, ValidatedFields};

    #[tokio::test]
    async fn test_insert_and_snapshot() {
        let store = MemoryStore::new();
        let validated = ValidatedFields::validate(AlertFields {
            timestamp: "2024-01-15 10:30:00".to_string(),
            site_id: "WELL-7".to_string(),
            alert_type: "ACOUSTIC".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        })
        .unwrap();
        let alert = Alert::from_validated(validated, Severity::Low);

        store.insert_alert(&alert).await.unwrap();

        assert_eq!(store.alert_count(), 1);
        let stored = &store.alerts()[0];
        assert_eq!(stored.site_id(), "WELL-7");
        assert_eq!(stored.alert_type(), AlertType::Acoustic);
        assert_eq!(stored.severity(), Severity::Low);
    }
}
