use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::Tool;
use super::args::{SearchArgs, parse_args};
use crate::models::Location;
use crate::providers::TravelProvider;
use crate::{Result, TravelBlogError};

/// How a search candidate was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Name contains the query, case-insensitively
    Matched,
    /// Nothing matched; first candidate taken
    Fallback,
}

/// First candidate whose name contains `query`, else the first candidate
pub fn select_candidate<'a>(
    candidates: &'a [Location],
    query: &str,
) -> Option<(&'a Location, Selection)> {
    for candidate in candidates {
        debug!("Checking location: {}", candidate.name);
        if candidate.name_matches(query) {
            return Some((candidate, Selection::Matched));
        }
    }
    candidates.first().map(|first| (first, Selection::Fallback))
}

/// Search the provider and apply the match-else-first tie-break
pub async fn find_location(provider: &dyn TravelProvider, query: &str) -> Result<Location> {
    info!("Searching for location: {}", query);
    let candidates = provider.search(query).await?;
    info!("Found {} locations", candidates.len());

    let Some((location, selection)) = select_candidate(&candidates, query) else {
        info!("No locations found for {}", query);
        return Err(TravelBlogError::no_match(query));
    };

    match selection {
        Selection::Matched => info!("Found matching location: {}", location.name),
        Selection::Fallback => warn!(
            "Using first found location instead of exact match: {}",
            location.name
        ),
    }

    if location.id.is_empty() {
        return Err(TravelBlogError::decode(format!(
            "No location_id found for {query}"
        )));
    }

    Ok(location.clone())
}

/// Finds a destination and fetches its details
pub struct SearchTool {
    provider: Arc<dyn TravelProvider>,
}

impl SearchTool {
    pub fn new(provider: Arc<dyn TravelProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> String {
        format!("{}_search", self.provider.name())
    }

    fn description(&self) -> String {
        format!(
            "Search {} for a travel destination and return its details",
            self.provider.name()
        )
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Name of the destination to search for"
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

        let location = find_location(self.provider.as_ref(), query).await?;
        info!("Getting details for location ID: {}", location.id);
        let details = self.provider.details(&location.id).await?;

        Ok(json!({
            "location_id": location.id,
            "name": location.name,
            "location_string": location.address.unwrap_or_default(),
            "details": details,
        }))
    }
}
