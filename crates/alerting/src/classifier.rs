//! Severity Classifier

use alert_model::{AlertType, Severity};

/// Map an alert type to its severity level.
///
/// Pure and total over the alert type enumeration. The table is policy owned
/// by this crate: leaks are the worst case for a well site, flow anomalies
/// (blockage, pressure) demand prompt action, temperature drift is
/// observable before it becomes dangerous, and acoustic hits are usually
/// noise until correlated with something else.
pub fn classify(alert_type: AlertType) -> Severity {
    match alert_type {
        AlertType::Leak => Severity::Critical,
        AlertType::Blockage => Severity::High,
        AlertType::Pressure => Severity::High,
        AlertType::Temperature => Severity::Medium,
        AlertType::Acoustic => Severity::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_pinned_for_every_type() {
        assert_eq!(classify(AlertType::Leak), Severity::Critical);
        assert_eq!(classify(AlertType::Blockage), Severity::High);
        assert_eq!(classify(AlertType::Pressure), Severity::High);
        assert_eq!(classify(AlertType::Temperature), Severity::Medium);
        assert_eq!(classify(AlertType::Acoustic), Severity::Low);
    }

    #[test]
    fn test_classification_is_stable() {
        for ty in AlertType::ALL {
            assert_eq!(classify(ty), classify(ty));
        }
    }
}
