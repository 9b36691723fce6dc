use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::{
    ATTR_ADDRESS, ATTR_GIS_ID, ATTR_LATITUDE, ATTR_LONGITUDE, ATTR_NAME, ATTR_OBJECT_ID,
    ATTR_PHONE, ATTR_WARD, ATTR_ZIPCODE, USER_ADDED_ID_PREFIX,
};
use crate::shops::{Feature, Geometry};

/// A validated user submission, ready to be turned into a cache feature.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub ward: Option<String>,
    pub zipcode: Option<String>,
}

/// Rejection reasons surfaced to the submitter. These are user input
/// problems, not system errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidateError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be a number, got `{value}`")]
    InvalidCoordinate { field: &'static str, value: String },
}

impl Submission {
    /// Validate a raw field mapping from the submission form. Name, address,
    /// phone and both coordinates are required and non-empty; coordinates
    /// must parse as finite floats so they can live in the JSON cache. No
    /// range check is applied to either coordinate.
    pub fn parse(fields: &HashMap<String, String>) -> Result<Self, ValidateError> {
        let required = |name: &'static str| -> Result<&str, ValidateError> {
            match fields.get(name).map(String::as_str) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ValidateError::MissingField(name)),
            }
        };
        let coordinate = |name: &'static str| -> Result<f64, ValidateError> {
            let raw = required(name)?;
            raw.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ValidateError::InvalidCoordinate {
                    field: name,
                    value: raw.to_string(),
                })
        };
        let optional = |name: &str| -> Option<String> {
            fields.get(name).filter(|value| !value.is_empty()).cloned()
        };
        Ok(Self {
            name: required("name")?.to_string(),
            address: required("address")?.to_string(),
            phone: required("phone")?.to_string(),
            latitude: coordinate("latitude")?,
            longitude: coordinate("longitude")?,
            ward: optional("ward"),
            zipcode: optional("zipcode"),
        })
    }

    /// Build the cache-schema feature for this submission. `existing` is the
    /// current cache length; the generated identifiers are derived from it,
    /// so the caller must hold the cache lock from load through save.
    pub fn to_feature(&self, existing: usize) -> Feature {
        let next_id = existing + 1;
        let mut attributes = Map::new();
        attributes.insert(ATTR_NAME.to_string(), Value::from(self.name.clone()));
        attributes.insert(ATTR_ADDRESS.to_string(), Value::from(self.address.clone()));
        attributes.insert(ATTR_PHONE.to_string(), Value::from(self.phone.clone()));
        attributes.insert(ATTR_LATITUDE.to_string(), Value::from(self.latitude));
        attributes.insert(ATTR_LONGITUDE.to_string(), Value::from(self.longitude));
        if let Some(ward) = &self.ward {
            attributes.insert(ATTR_WARD.to_string(), Value::from(ward.clone()));
        }
        if let Some(zipcode) = &self.zipcode {
            attributes.insert(ATTR_ZIPCODE.to_string(), Value::from(zipcode.clone()));
        }
        attributes.insert(
            ATTR_GIS_ID.to_string(),
            Value::from(format!("{USER_ADDED_ID_PREFIX}{next_id}")),
        );
        attributes.insert(ATTR_OBJECT_ID.to_string(), Value::from(next_id));
        Feature {
            attributes,
            geometry: Some(Geometry {
                x: self.longitude,
                y: self.latitude,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), "Joe's".to_string()),
            ("address".to_string(), "1 Main St".to_string()),
            ("phone".to_string(), "555-0100".to_string()),
            ("latitude".to_string(), "38.9".to_string()),
            ("longitude".to_string(), "-77.0".to_string()),
            ("ward".to_string(), "Ward 2".to_string()),
            ("zipcode".to_string(), "20001".to_string()),
        ])
    }

    #[test]
    fn parse_accepts_full_form() {
        let submission = Submission::parse(&full_form());

        assert!(
            submission.is_ok(),
            "Failed to parse submission: {:?}",
            submission.unwrap_err()
        );
        let submission = submission.unwrap();
        assert_eq!(submission.name, "Joe's");
        assert_eq!(submission.latitude, 38.9);
        assert_eq!(submission.longitude, -77.0);
        assert_eq!(submission.ward.as_deref(), Some("Ward 2"));
    }

    #[test]
    fn parse_rejects_missing_required_fields() {
        for field in ["name", "address", "phone", "latitude", "longitude"] {
            let mut form = full_form();
            form.remove(field);

            let submission = Submission::parse(&form);

            assert_eq!(
                submission.unwrap_err(),
                ValidateError::MissingField(field),
                "expected `{field}` to be required"
            );
        }
    }

    #[test]
    fn parse_rejects_empty_required_field() {
        let mut form = full_form();
        form.insert("phone".to_string(), String::new());

        let submission = Submission::parse(&form);

        assert_eq!(
            submission.unwrap_err(),
            ValidateError::MissingField("phone")
        );
    }

    #[test]
    fn parse_rejects_non_numeric_latitude() {
        let mut form = full_form();
        form.insert("latitude".to_string(), "abc".to_string());

        let submission = Submission::parse(&form);

        assert_eq!(
            submission.unwrap_err(),
            ValidateError::InvalidCoordinate {
                field: "latitude",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_non_finite_longitude() {
        // "NaN" parses as f64 but cannot be stored in the JSON cache.
        let mut form = full_form();
        form.insert("longitude".to_string(), "NaN".to_string());

        let submission = Submission::parse(&form);

        assert!(matches!(
            submission.unwrap_err(),
            ValidateError::InvalidCoordinate { field: "longitude", .. }
        ));
    }

    #[test]
    fn parse_allows_absent_optional_fields() {
        let mut form = full_form();
        form.remove("ward");
        form.remove("zipcode");

        let submission = Submission::parse(&form).unwrap();

        assert_eq!(submission.ward, None);
        assert_eq!(submission.zipcode, None);
    }

    #[test]
    fn to_feature_builds_cache_schema() {
        let submission = Submission::parse(&full_form()).unwrap();

        let feature = submission.to_feature(3);

        assert_eq!(feature.attributes["BARBERSHOP"], "Joe's");
        assert_eq!(feature.attributes["ADDRESS"], "1 Main St");
        assert_eq!(feature.attributes["PHONE"], "555-0100");
        assert_eq!(feature.attributes["WARD"], "Ward 2");
        assert_eq!(feature.attributes["ZIPCODE"], "20001");
        assert_eq!(feature.attributes["GIS_ID"], "UserAddedShop_4");
        assert_eq!(feature.attributes["OBJECTID"], 4);
        let geometry = feature.geometry.unwrap();
        assert_eq!(geometry.x, -77.0);
        assert_eq!(geometry.y, 38.9);
    }
}
