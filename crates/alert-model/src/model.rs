//! Alert Value Type

use crate::validate::ValidatedFields;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of anomaly detected at a monitoring site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertType {
    Leak,
    Blockage,
    Pressure,
    Temperature,
    Acoustic,
}

impl AlertType {
    /// All known alert types
    pub const ALL: [AlertType; 5] = [
        AlertType::Leak,
        AlertType::Blockage,
        AlertType::Pressure,
        AlertType::Temperature,
        AlertType::Acoustic,
    ];

    /// Wire representation, as emitted by site sensors
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Leak => "LEAK",
            AlertType::Blockage => "BLOCKAGE",
            AlertType::Pressure => "PRESSURE",
            AlertType::Temperature => "TEMPERATURE",
            AlertType::Acoustic => "ACOUSTIC",
        }
    }
}

impl FromStr for AlertType {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEAK" => Ok(AlertType::Leak),
            "BLOCKAGE" => Ok(AlertType::Blockage),
            "PRESSURE" => Ok(AlertType::Pressure),
            "TEMPERATURE" => Ok(AlertType::Temperature),
            "ACOUSTIC" => Ok(AlertType::Acoustic),
            other => Err(crate::ValidationError::UnknownAlertType(other.to_string())),
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity level assigned to an alert, used for downstream prioritization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated record of one detected anomaly at a monitoring site.
///
/// Fields are private; an `Alert` can only be built from a
/// [`ValidatedFields`] plus a classifier-assigned severity, so any value of
/// this type has already passed every field validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    timestamp: String,
    site_id: String,
    alert_type: AlertType,
    severity: Severity,
    latitude: f64,
    longitude: f64,
}

impl Alert {
    /// Build the final alert from validated fields and a computed severity.
    ///
    /// Severity is always the classifier's output, never caller input.
    pub fn from_validated(fields: ValidatedFields, severity: Severity) -> Self {
        let (timestamp, site_id, alert_type, latitude, longitude) = fields.into_parts();
        Self {
            timestamp,
            site_id,
            alert_type,
            severity,
            latitude,
            longitude,
        }
    }

    /// Original timestamp string, exactly as received
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn alert_type(&self) -> AlertType {
        self.alert_type
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
