//! Field Validation
//!
//! Validation is an explicit step, decoupled from final alert construction:
//! raw caller input ([`AlertFields`]) either becomes a [`ValidatedFields`]
//! or is rejected whole with the first failing predicate.

use crate::error::ValidationError;
use crate::model::AlertType;
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Accepted timestamp formats (chrono strftime syntax).
///
/// Plain and `T`-separated date-times, with or without fractional seconds,
/// plus ISO 8601 with a literal `Z` suffix. The matched string is stored
/// verbatim, never normalized.
pub const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%SZ",
];

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Raw alert fields as supplied by the caller, before any validation
#[derive(Debug, Clone, Deserialize)]
pub struct AlertFields {
    pub timestamp: String,
    pub site_id: String,
    pub alert_type: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Alert fields that have passed every validator.
///
/// Only constructible through [`ValidatedFields::validate`].
#[derive(Debug, Clone)]
pub struct ValidatedFields {
    timestamp: String,
    site_id: String,
    alert_type: AlertType,
    latitude: f64,
    longitude: f64,
}

impl ValidatedFields {
    /// Validate raw fields, rejecting the whole event on the first failure.
    pub fn validate(fields: AlertFields) -> Result<Self, ValidationError> {
        validate_timestamp(&fields.timestamp)?;
        let site_id = validate_site_id(fields.site_id)?;
        let alert_type: AlertType = fields.alert_type.parse()?;
        validate_range("latitude", fields.latitude, LATITUDE_RANGE)?;
        validate_range("longitude", fields.longitude, LONGITUDE_RANGE)?;

        Ok(Self {
            timestamp: fields.timestamp,
            site_id,
            alert_type,
            latitude: fields.latitude,
            longitude: fields.longitude,
        })
    }

    pub fn alert_type(&self) -> AlertType {
        self.alert_type
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub(crate) fn into_parts(self) -> (String, String, AlertType, f64, f64) {
        (
            self.timestamp,
            self.site_id,
            self.alert_type,
            self.latitude,
            self.longitude,
        )
    }
}

fn validate_timestamp(value: &str) -> Result<(), ValidationError> {
    for format in TIMESTAMP_FORMATS {
        if NaiveDateTime::parse_from_str(value, format).is_ok() {
            return Ok(());
        }
    }
    Err(ValidationError::InvalidTimestamp(value.to_string()))
}

fn validate_site_id(value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField("site_id"))
    } else {
        Ok(value)
    }
}

fn validate_range(
    field: &'static str,
    value: f64,
    range: (f64, f64),
) -> Result<(), ValidationError> {
    if value < range.0 || value > range.1 || value.is_nan() {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: range.0,
            max: range.1,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fields() -> AlertFields {
        AlertFields {
            timestamp: "2024-01-15 10:30:00".to_string(),
            site_id: "WELL-42".to_string(),
            alert_type: "LEAK".to_string(),
            latitude: 29.5,
            longitude: -95.1,
        }
    }

    #[test]
    fn test_valid_fields_round_trip() {
        let validated = ValidatedFields::validate(fields()).unwrap();
        assert_eq!(validated.site_id(), "WELL-42");
        assert_eq!(validated.alert_type(), AlertType::Leak);
        let (ts, site, ty, lat, lon) = validated.into_parts();
        assert_eq!(ts, "2024-01-15 10:30:00");
        assert_eq!(site, "WELL-42");
        assert_eq!(ty, AlertType::Leak);
        assert_eq!(lat, 29.5);
        assert_eq!(lon, -95.1);
    }

    #[test]
    fn test_each_accepted_timestamp_format() {
        let samples = [
            "2024-01-15 10:30:00",
            "2024-01-15 10:30:00.123456",
            "2024-01-15T10:30:00",
            "2024-01-15T10:30:00.123",
            "2024-01-15T10:30:00Z",
        ];
        for ts in samples {
            let mut f = fields();
            f.timestamp = ts.to_string();
            assert!(
                ValidatedFields::validate(f).is_ok(),
                "expected {ts:?} to validate"
            );
        }
    }

    #[test]
    fn test_rejected_timestamps() {
        let samples = [
            "",
            "2024-01-15",
            "15/01/2024 10:30:00",
            "2024-01-15 10:30",
            "2024-01-15T10:30:00+02:00",
            "not a timestamp",
            "2024-13-40 10:30:00",
        ];
        for ts in samples {
            let mut f = fields();
            f.timestamp = ts.to_string();
            assert!(
                matches!(
                    ValidatedFields::validate(f),
                    Err(ValidationError::InvalidTimestamp(_))
                ),
                "expected {ts:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_empty_site_id_rejected() {
        for bad in ["", "   "] {
            let mut f = fields();
            f.site_id = bad.to_string();
            assert!(matches!(
                ValidatedFields::validate(f),
                Err(ValidationError::EmptyField("site_id"))
            ));
        }
    }

    #[test]
    fn test_unknown_alert_type_rejected() {
        let mut f = fields();
        f.alert_type = "VIBRATION".to_string();
        assert!(matches!(
            ValidatedFields::validate(f),
            Err(ValidationError::UnknownAlertType(_))
        ));
    }

    #[test]
    fn test_boundary_coordinates_accepted() {
        for (lat, lon) in [(-90.0, -180.0), (90.0, 180.0), (0.0, 0.0)] {
            let mut f = fields();
            f.latitude = lat;
            f.longitude = lon;
            assert!(ValidatedFields::validate(f).is_ok());
        }
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let mut f = fields();
        f.latitude = 95.0;
        match ValidatedFields::validate(f) {
            Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, "latitude"),
            other => panic!("expected out-of-range latitude, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_in_range_coordinates_validate(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let mut f = fields();
            f.latitude = lat;
            f.longitude = lon;
            prop_assert!(ValidatedFields::validate(f).is_ok());
        }

        #[test]
        fn prop_out_of_range_latitude_rejected(lat in prop_oneof![90.0f64..1e6, -1e6..-90.0f64]) {
            prop_assume!(lat < -90.0 || lat > 90.0);
            let mut f = fields();
            f.latitude = lat;
            prop_assert!(ValidatedFields::validate(f).is_err());
        }

        #[test]
        fn prop_out_of_range_longitude_rejected(lon in prop_oneof![180.0f64..1e6, -1e6..-180.0f64]) {
            prop_assume!(lon < -180.0 || lon > 180.0);
            let mut f = fields();
            f.longitude = lon;
            prop_assert!(ValidatedFields::validate(f).is_err());
        }
    }
}
