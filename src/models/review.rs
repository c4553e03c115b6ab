//! Review model and the closed set of review categories

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::VenueKind;
use crate::TravelBlogError;

/// Maximum number of reviews handed back to a caller
pub const MAX_REVIEWS: usize = 5;

/// Review category accepted by the review endpoints
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewCategory {
    #[default]
    Hotel,
    Restaurant,
    Attraction,
}

impl ReviewCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewCategory::Hotel => "hotel",
            ReviewCategory::Restaurant => "restaurant",
            ReviewCategory::Attraction => "attraction",
        }
    }
}

impl fmt::Display for ReviewCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewCategory {
    type Err = TravelBlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hotel" => Ok(ReviewCategory::Hotel),
            "restaurant" => Ok(ReviewCategory::Restaurant),
            "attraction" => Ok(ReviewCategory::Attraction),
            other => Err(TravelBlogError::unsupported_category(other)),
        }
    }
}

impl From<VenueKind> for ReviewCategory {
    fn from(kind: VenueKind) -> Self {
        match kind {
            VenueKind::Hotel => ReviewCategory::Hotel,
            VenueKind::Restaurant => ReviewCategory::Restaurant,
            VenueKind::Attraction => ReviewCategory::Attraction,
        }
    }
}

/// A single review of a venue
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    pub title: String,
    pub text: String,
    pub venue_id: String,
    pub category: ReviewCategory,
}

impl Review {
    /// One-line digest with the body cut to `max_chars` characters
    #[must_use]
    pub fn digest(&self, max_chars: usize) -> String {
        let excerpt: String = self.text.chars().take(max_chars).collect();
        format!("- {}: {}...", self.title, excerpt)
    }
}

/// Reviews of an object together with any object info the provider sent along
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub info: Option<Map<String, Value>>,
}

impl ReviewPage {
    #[must_use]
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            info: None,
        }
    }
}
