//! Retrying Alert Processor

use alert_model::{Alert, AlertFields, ValidatedFields, ValidationError};
use storage::{AlertStore, StorageError};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Additional persistence attempts after the first failure.
    /// Zero means a single attempt with no retry.
    pub max_retries: u32,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self { max_retries: 3 }
    }
}

/// Errors surfaced by [`AlertProcessor::process`]
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Client input failed validation; never retried
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failed on the final permitted attempt
    #[error(transparent)]
    Persistence(#[from] StorageError),
}

/// Outcome of a single persistence attempt, tagged so the loop driver can
/// decide without unwinding.
enum AttemptOutcome {
    Committed,
    Retry(StorageError),
    Exhausted(StorageError),
}

/// Processes one alert reading at a time: validate, classify, persist.
///
/// Holds no mutable state; concurrent `process` calls only share the store.
pub struct AlertProcessor<S> {
    store: S,
    config: ProcessorConfig,
}

impl<S: AlertStore> AlertProcessor<S> {
    pub fn new(store: S, config: ProcessorConfig) -> Self {
        Self { store, config }
    }

    /// The underlying persistence port
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one alert reading through the pipeline to completion or terminal
    /// failure.
    ///
    /// Validation failures propagate immediately. Persistence failures are
    /// retried up to `max_retries` additional times; intermediate failures
    /// are warn-logged and absorbed, exhaustion is error-logged and
    /// surfaced. The returned alert carries the classifier-assigned
    /// severity.
    pub async fn process(&self, fields: AlertFields) -> Result<Alert, ProcessError> {
        debug!(site_id = %fields.site_id, "processing alert reading");

        let validated = match ValidatedFields::validate(fields) {
            Ok(validated) => validated,
            Err(err) => {
                error!(error = %err, "alert rejected by validation");
                return Err(err.into());
            }
        };

        let severity = alerting::classify(validated.alert_type());
        let alert = Alert::from_validated(validated, severity);

        let mut attempt: u32 = 0;
        loop {
            match self.try_persist(&alert, attempt).await {
                AttemptOutcome::Committed => {
                    info!(
                        site_id = alert.site_id(),
                        severity = %alert.severity(),
                        attempt,
                        "alert persisted"
                    );
                    return Ok(alert);
                }
                AttemptOutcome::Retry(err) => {
                    warn!(
                        site_id = alert.site_id(),
                        attempt,
                        error = %err,
                        "persist attempt failed, retrying"
                    );
                    attempt += 1;
                }
                AttemptOutcome::Exhausted(err) => {
                    error!(
                        site_id = alert.site_id(),
                        attempt,
                        error = %err,
                        "persist failed, retries exhausted"
                    );
                    return Err(err.into());
                }
            }
        }
    }

    /// One persistence attempt. A failure on the final permitted attempt
    /// (attempt == max_retries) is exhaustion; earlier failures request a
    /// retry.
    async fn try_persist(&self, alert: &Alert, attempt: u32) -> AttemptOutcome {
        match self.store.insert_alert(alert).await {
            Ok(()) => AttemptOutcome::Committed,
            Err(err) if attempt >= self.config.max_retries => AttemptOutcome::Exhausted(err),
            Err(err) => AttemptOutcome::Retry(err),
        }
    }
}
