//! Typed tool arguments, validated before any provider call

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::models::{Coordinates, ReviewCategory};
use crate::providers::schema::{opt_f64, opt_id_string};
use crate::providers::{Addressing, VenueScope};
use crate::{Result, TravelBlogError};

/// Deserialize raw tool arguments; `null` counts as an empty object
pub fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| TravelBlogError::invalid_input(e.to_string()))
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchArgs {
    pub query: Option<String>,
    /// Used when `query` is absent
    pub description: Option<String>,
}

impl SearchArgs {
    pub fn search_term(&self) -> Result<&str> {
        non_blank(self.query.as_ref())
            .or_else(|| non_blank(self.description.as_ref()))
            .ok_or_else(|| TravelBlogError::missing_input("No search query provided"))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VenueArgs {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub location_id: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub lon: Option<f64>,
}

impl VenueArgs {
    pub fn scope(&self, addressing: Addressing) -> Result<VenueScope> {
        match addressing {
            Addressing::LocationId => non_blank(self.location_id.as_ref())
                .map(|id| VenueScope::Location(id.to_string()))
                .ok_or_else(|| TravelBlogError::missing_input("No location_id provided")),
            Addressing::Coordinates => {
                let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
                    return Err(TravelBlogError::missing_input("Both lat and lon are required"));
                };
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                    return Err(TravelBlogError::invalid_input(format!(
                        "Coordinates out of range: {lat}, {lon}"
                    )));
                }
                Ok(VenueScope::Coordinates(Coordinates::new(lat, lon)))
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewArgs {
    #[serde(default, alias = "ids", deserialize_with = "opt_id_string")]
    pub location_id: Option<String>,
    pub review_type: Option<String>,
}

impl ReviewArgs {
    /// The object id and category; the category defaults to `hotel`
    pub fn validate(&self) -> Result<(&str, ReviewCategory)> {
        let id = non_blank(self.location_id.as_ref())
            .ok_or_else(|| TravelBlogError::missing_input("No location_id provided"))?;
        let category = match &self.review_type {
            Some(review_type) => review_type.parse()?,
            None => ReviewCategory::default(),
        };
        Ok((id, category))
    }
}

/// Arguments of the per-category digest tools; the category is fixed by the tool
#[derive(Debug, Default, Deserialize)]
pub struct DigestArgs {
    #[serde(default, alias = "ids", deserialize_with = "opt_id_string")]
    pub location_id: Option<String>,
}

impl DigestArgs {
    pub fn location_id(&self) -> Result<&str> {
        non_blank(self.location_id.as_ref())
            .ok_or_else(|| TravelBlogError::missing_input("No location_id provided"))
    }
}
