//! Wire schemas for provider responses and the conversions into domain models

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::{Coordinates, Location, Review, ReviewCategory, Venue};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Int(i64),
}

impl From<IdRepr> for String {
    fn from(id: IdRepr) -> Self {
        match id {
            IdRepr::Text(text) => text,
            IdRepr::Int(n) => n.to_string(),
        }
    }
}

/// Accept an optional id sent either as a JSON string or an integer
pub fn opt_id_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<IdRepr>::deserialize(deserializer)?.map(String::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Number(f64),
    Text(String),
}

/// Accept a float sent either as a JSON number or a numeric string
pub fn opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<NumberRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberRepr::Number(n)) => Ok(Some(n)),
        Some(NumberRepr::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberRepr::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid coordinate '{text}'"))),
    }
}

/// A list body, either bare or wrapped in `{"data": [...]}`.
/// Items that do not fit `T` are logged and skipped.
#[derive(Debug)]
pub struct ListBody<T>(Vec<T>);

impl<T> ListBody<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListBody<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = match Value::deserialize(deserializer)? {
            Value::Array(items) => items,
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(de::Error::custom(
                        "expected a list or an object with a `data` list",
                    ));
                }
            },
            _ => return Err(de::Error::custom("expected a list")),
        };

        Ok(ListBody(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| match serde_json::from_value(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!("Skipping list item {}: {}", index, e);
                        None
                    }
                })
                .collect(),
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct AddressObject {
    pub address_string: Option<String>,
}

/// Search result record from `/location/search`
#[derive(Debug, Deserialize)]
pub struct LocationRecord {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub location_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location_string: Option<String>,
    #[serde(default)]
    pub address_obj: Option<AddressObject>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub longitude: Option<f64>,
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        let address = record
            .location_string
            .or_else(|| record.address_obj.and_then(|a| a.address_string));
        let coordinates = match (record.latitude, record.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        };
        Location {
            id: record.location_id.unwrap_or_default(),
            name: record.name,
            address,
            coordinates,
        }
    }
}

/// Venue record from the hotel/restaurant/attraction search endpoints
#[derive(Debug, Deserialize)]
pub struct VenueRecord {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub location_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// Provider fields minus the keys `Venue` writes itself
fn passthrough(mut fields: Map<String, Value>) -> Map<String, Value> {
    fields.remove("id");
    fields.remove("name");
    fields
}

impl From<VenueRecord> for Venue {
    fn from(record: VenueRecord) -> Self {
        Venue {
            id: record.location_id.unwrap_or_default(),
            name: record.name,
            metadata: passthrough(record.metadata),
        }
    }
}

/// Review body under `text`, `body` or `comment`, in that order of preference
#[derive(Debug, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ReviewRecord {
    pub fn into_review(self, venue_id: &str, category: ReviewCategory) -> Review {
        Review {
            title: self.title,
            text: self.text.or(self.body).or(self.comment).unwrap_or_default(),
            venue_id: venue_id.to_string(),
            category,
        }
    }
}

/// GeoJSON-ish collection returned by the ContentGeo list endpoints
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Option<Value>,
}

impl Feature {
    fn property(&self, key: &str) -> Option<String> {
        self.properties
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Point coordinates, GeoJSON order `[lon, lat]`
    fn point(&self) -> Option<Coordinates> {
        let coordinates = self.geometry.as_ref()?.get("coordinates")?.as_array()?;
        match coordinates.as_slice() {
            [lon, lat] => Some(Coordinates::new(lat.as_f64()?, lon.as_f64()?)),
            _ => None,
        }
    }
}

impl From<Feature> for Location {
    fn from(feature: Feature) -> Self {
        Location {
            name: feature.property("Name").unwrap_or_default(),
            address: feature.property("Address"),
            coordinates: feature.point(),
            id: feature.id.unwrap_or_default(),
        }
    }
}

impl From<Feature> for Venue {
    fn from(feature: Feature) -> Self {
        Venue {
            name: feature.property("Name").unwrap_or_default(),
            id: feature.id.unwrap_or_default(),
            metadata: passthrough(feature.properties),
        }
    }
}

/// Response of `/geo_object_info` and `/landmarkinfo`
#[derive(Debug, Deserialize)]
pub struct ObjectInfo {
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}
