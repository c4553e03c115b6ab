use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::args::{DigestArgs, ReviewArgs, parse_args};
use super::{Tool, top};
use crate::Result;
use crate::models::{MAX_REVIEWS, ReviewCategory};
use crate::providers::TravelProvider;

/// Characters of review text kept in a digest line
pub const DIGEST_EXCERPT_CHARS: usize = 200;

/// Reviews of a location, capped at [`MAX_REVIEWS`]
pub struct ReviewsTool {
    provider: Arc<dyn TravelProvider>,
}

impl ReviewsTool {
    pub fn new(provider: Arc<dyn TravelProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for ReviewsTool {
    fn name(&self) -> String {
        format!("{}_reviews", self.provider.name())
    }

    fn description(&self) -> String {
        format!("Get reviews for a location from {}", self.provider.name())
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location_id": {
                    "type": "string",
                    "description": "Identifier of the reviewed object"
                },
                "review_type": {
                    "type": "string",
                    "enum": ["hotel", "restaurant", "attraction"],
                    "default": "hotel"
                }
            },
            "required": ["location_id"]
        })
    }

    async fn run(&self, arguments: Value) -> Result<Value> {
        let args: ReviewArgs = parse_args(arguments)?;
        let (id, category) = args.validate()?;

        let page = self.provider.reviews(id, category).await?;
        let total = page.reviews.len();
        info!("Found {} {} reviews for {}", total, category, id);

        let mut payload = json!({
            "reviews": top(page.reviews, MAX_REVIEWS),
            "total": total,
        });
        if let Some(info) = page.info {
            payload["info"] = Value::Object(info);
        }
        Ok(payload)
    }
}

/// Plain-text review digest for one category, one line per review
pub struct ReviewDigestTool {
    provider: Arc<dyn TravelProvider>,
    category: ReviewCategory,
}

impl ReviewDigestTool {
    pub fn new(provider: Arc<dyn TravelProvider>, category: ReviewCategory) -> Self {
        Self { provider, category }
    }
}

#[async_trait]
impl Tool for ReviewDigestTool {
    fn name(&self) -> String {
        format!("get_{}_reviews", self.category)
    }

    fn description(&self) -> String {
        format!("Get {} reviews", self.category)
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location_id": {
                    "type": "string",
                    "description": "The location ID to get reviews for"
                }
            },
            "required": ["location_id"]
        })
    }

    async fn run(&self, arguments: Value) -> Result<Value> {
        let args: DigestArgs = parse_args(arguments)?;
        let id = args.location_id()?;

        let page = self.provider.reviews(id, self.category).await?;
        if page.reviews.is_empty() {
            return Ok(Value::String(format!(
                "No {} reviews found for {}",
                self.category, id
            )));
        }

        let lines: Vec<String> = top(page.reviews, MAX_REVIEWS)
            .iter()
            .map(|review| review.digest(DIGEST_EXCERPT_CHARS))
            .collect();
        Ok(Value::String(lines.join("\n")))
    }
}
