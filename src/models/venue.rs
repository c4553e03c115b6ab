//! Venue model for hotels, restaurants and attractions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Maximum number of venues handed back to a caller
pub const MAX_VENUES: usize = 10;

/// The kind of venue a provider is asked for
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VenueKind {
    Hotel,
    Restaurant,
    Attraction,
}

impl VenueKind {
    pub const ALL: [VenueKind; 3] = [VenueKind::Hotel, VenueKind::Restaurant, VenueKind::Attraction];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VenueKind::Hotel => "hotel",
            VenueKind::Restaurant => "restaurant",
            VenueKind::Attraction => "attraction",
        }
    }

    /// Plural form, used as the payload key and tool name suffix
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            VenueKind::Hotel => "hotels",
            VenueKind::Restaurant => "restaurants",
            VenueKind::Attraction => "attractions",
        }
    }
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hotel, restaurant or attraction record
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Venue {
    pub id: String,
    pub name: String,
    /// Provider-specific fields
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Venue {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: Map::new(),
        }
    }
}
