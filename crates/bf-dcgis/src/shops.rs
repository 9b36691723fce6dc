use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{ATTR_ADDRESS, ATTR_NAME, ATTR_PHONE};

/// A single feature as returned by the geodata service or built from a user
/// submission. Attributes are carried opaquely so administrative metadata
/// (ward, zip code, internal identifiers) survives a cache round trip.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

/// WGS84 point geometry: `x` is longitude, `y` is latitude.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
}

/// Normalized record ready for display.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Barbershop {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Feature {
    fn attr_str(&self, key: &str) -> String {
        self.attributes
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Normalize this feature for display. A feature without a geometry has
    /// no usable position and maps to `None`; missing textual attributes
    /// pass through as empty strings.
    pub fn to_shop(&self) -> Option<Barbershop> {
        let geometry = self.geometry?;
        Some(Barbershop {
            name: self.attr_str(ATTR_NAME),
            address: self.attr_str(ATTR_ADDRESS),
            phone: self.attr_str(ATTR_PHONE),
            latitude: geometry.y,
            longitude: geometry.x,
        })
    }
}

/// Normalize a batch of features, silently excluding those without a
/// geometry.
pub fn normalize(features: &[Feature]) -> Vec<Barbershop> {
    features.iter().filter_map(Feature::to_shop).collect()
}
