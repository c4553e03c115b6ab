//! Composite research tool: one destination, its details and its top venues as text

use async_trait::async_trait;
use serde_json::{Value, json};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{info, warn};

use super::Tool;
use super::args::{SearchArgs, parse_args};
use super::search::find_location;
use crate::Result;
use crate::models::{Location, Venue, VenueKind};
use crate::providers::{TravelProvider, VenueScope};

/// Venue names listed per section of the report
pub const REPORT_TOP_N: usize = 3;

/// Everything gathered about a destination for the writer
#[derive(Debug, Clone)]
pub struct ResearchReport {
    pub location: Location,
    pub description: Option<String>,
    pub hotels: Vec<Venue>,
    pub restaurants: Vec<Venue>,
    pub attractions: Vec<Venue>,
}

impl ResearchReport {
    fn names(venues: &[Venue], kind: VenueKind) -> String {
        if venues.is_empty() {
            return format!("No {} found", kind.plural());
        }
        venues
            .iter()
            .take(REPORT_TOP_N)
            .map(|venue| {
                if venue.name.is_empty() {
                    "Unknown"
                } else {
                    venue.name.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Information about {}:", self.location.name);
        let _ = writeln!(out);
        let _ = writeln!(out, "Main Information:");
        let _ = writeln!(
            out,
            "{}",
            self.description
                .as_deref()
                .unwrap_or("No description available")
        );
        for (title, venues, kind) in [
            ("Top Hotels", &self.hotels, VenueKind::Hotel),
            ("Top Restaurants", &self.restaurants, VenueKind::Restaurant),
            ("Attractions", &self.attractions, VenueKind::Attraction),
        ] {
            let _ = writeln!(out);
            let _ = writeln!(out, "{title}:");
            let _ = writeln!(out, "{}", Self::names(venues, kind));
        }
        out
    }
}

/// Gather a [`ResearchReport`]. Search and details failures abort; venue failures
/// leave that section empty.
pub async fn research(provider: &dyn TravelProvider, query: &str) -> Result<ResearchReport> {
    let location = find_location(provider, query).await?;

    info!("Getting details for location ID: {}", location.id);
    let details = provider.details(&location.id).await?;

    let scope = provider.venue_scope(&location);
    let hotels = venues_or_empty(provider, VenueKind::Hotel, &scope).await;
    let restaurants = venues_or_empty(provider, VenueKind::Restaurant, &scope).await;
    let attractions = venues_or_empty(provider, VenueKind::Attraction, &scope).await;

    Ok(ResearchReport {
        location,
        description: details.description,
        hotels,
        restaurants,
        attractions,
    })
}

async fn venues_or_empty(
    provider: &dyn TravelProvider,
    kind: VenueKind,
    scope: &VenueScope,
) -> Vec<Venue> {
    info!("Getting {} information", kind.plural());
    match provider.venues(kind, scope).await {
        Ok(venues) => {
            info!("Found {} {}", venues.len(), kind.plural());
            venues
        }
        Err(err) => {
            warn!("Could not get {}: {}", kind.plural(), err);
            Vec::new()
        }
    }
}

/// Search for travel information and places, rendered as a text report
pub struct ResearchTool {
    provider: Arc<dyn TravelProvider>,
}

impl ResearchTool {
    pub const NAME: &'static str = "search_travel_info";

    pub fn new(provider: Arc<dyn TravelProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for ResearchTool {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn description(&self) -> String {
        "Search for travel information and places".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query for travel information"
                },
                "description": {
                    "type": "string",
                    "description": "Alternative description of what to search for"
                }
            }
        })
    }

    async fn run(&self, arguments: Value) -> Result<Value> {
        let args: SearchArgs = parse_args(arguments)?;
        let query = args.search_term()?;
        let report = research(self.provider.as_ref(), query).await?;
        Ok(Value::String(report.render()))
    }
}
