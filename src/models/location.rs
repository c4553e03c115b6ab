//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geographic coordinates in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a "lat, lon" string
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A destination returned by a provider search
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Provider-side identifier
    pub id: String,
    /// Display name (city, landmark, etc.)
    pub name: String,
    /// Address or "City, Region, Country" string
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            coordinates: None,
        }
    }

    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Case-insensitive substring match of `query` against the display name
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Detailed information about a location
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LocationDetails {
    pub description: Option<String>,
    /// Remaining provider attributes, passed through untouched
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}
