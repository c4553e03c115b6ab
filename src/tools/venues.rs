use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::info;

use super::args::{VenueArgs, parse_args};
use super::{Tool, top};
use crate::Result;
use crate::models::{MAX_VENUES, VenueKind};
use crate::providers::{Addressing, TravelProvider};

/// Lists hotels, restaurants or attractions, capped at [`MAX_VENUES`]
pub struct VenueTool {
    provider: Arc<dyn TravelProvider>,
    kind: VenueKind,
}

impl VenueTool {
    pub fn new(provider: Arc<dyn TravelProvider>, kind: VenueKind) -> Self {
        Self { provider, kind }
    }
}

#[async_trait]
impl Tool for VenueTool {
    fn name(&self) -> String {
        format!("{}_{}", self.provider.name(), self.kind.plural())
    }

    fn description(&self) -> String {
        format!(
            "Get the top {} {} for a location from {}",
            MAX_VENUES,
            self.kind.plural(),
            self.provider.name()
        )
    }

    fn parameters(&self) -> Value {
        match self.provider.addressing() {
            Addressing::LocationId => json!({
                "type": "object",
                "properties": {
                    "location_id": {
                        "type": "string",
                        "description": "Provider location identifier"
                    }
                },
                "required": ["location_id"]
            }),
            Addressing::Coordinates => json!({
                "type": "object",
                "properties": {
                    "lat": {"type": "number", "description": "Latitude"},
                    "lon": {"type": "number", "description": "Longitude"}
                },
                "required": ["lat", "lon"]
            }),
        }
    }

    async fn run(&self, arguments: Value) -> Result<Value> {
        let args: VenueArgs = parse_args(arguments)?;
        let scope = args.scope(self.provider.addressing())?;

        let venues = self.provider.venues(self.kind, &scope).await?;
        let total = venues.len();
        info!("Found {} {}", total, self.kind.plural());

        let mut payload = Map::new();
        payload.insert(
            self.kind.plural().to_string(),
            serde_json::to_value(top(venues, MAX_VENUES))?,
        );
        payload.insert("total".to_string(), json!(total));
        Ok(Value::Object(payload))
    }
}
