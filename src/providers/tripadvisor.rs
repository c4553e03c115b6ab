use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::schema::{ListBody, LocationRecord, ReviewRecord, VenueRecord};
use super::{Addressing, TravelProvider, VenueScope, fetch_json, http_client, join_url};
use crate::config::TripAdvisorConfig;
use crate::models::{Location, LocationDetails, ReviewCategory, ReviewPage, Venue, VenueKind};
use crate::{Result, TravelBlogError};

pub const KEY_HEADER: &str = "X-RapidAPI-Key";
pub const HOST_HEADER: &str = "X-RapidAPI-Host";

const SEARCH_LIMIT: u32 = 5;
const VENUE_LIMIT: u32 = 10;
const REVIEW_LIMIT: u32 = 5;

/// TripAdvisor-style REST client authenticated with key and host headers
pub struct TripAdvisorClient {
    client: Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl TripAdvisorClient {
    /// Create a new client. Fails when no API key is configured.
    pub fn new(config: &TripAdvisorConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TravelBlogError::config("TripAdvisor API key is required"))?;

        info!("Initialized TripAdvisor client for {}", config.base_url);

        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            api_key,
            host: config.host.clone(),
            base_url: config.base_url.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(join_url(&self.base_url, path))
            .header(KEY_HEADER, &self.api_key)
            .header(HOST_HEADER, &self.host)
    }

    fn venue_path(kind: VenueKind) -> &'static str {
        match kind {
            VenueKind::Hotel => "hotel/search",
            VenueKind::Restaurant => "restaurant/search",
            VenueKind::Attraction => "attraction/search",
        }
    }
}

#[async_trait]
impl TravelProvider for TripAdvisorClient {
    fn name(&self) -> &'static str {
        "tripadvisor"
    }

    fn addressing(&self) -> Addressing {
        Addressing::LocationId
    }

    async fn search(&self, query: &str) -> Result<Vec<Location>> {
        info!("Searching TripAdvisor locations for '{}'", query);

        let request = self
            .get("location/search")
            .query(&[("query", query)])
            .query(&[("limit", SEARCH_LIMIT)]);
        let body: ListBody<LocationRecord> = fetch_json(request, "location/search").await?;

        Ok(body.into_vec().into_iter().map(Location::from).collect())
    }

    async fn details(&self, id: &str) -> Result<LocationDetails> {
        info!("Getting TripAdvisor details for location {}", id);

        let request = self.get("location/details").query(&[("location_id", id)]);
        fetch_json(request, "location/details").await
    }

    async fn venues(&self, kind: VenueKind, scope: &VenueScope) -> Result<Vec<Venue>> {
        let VenueScope::Location(id) = scope else {
            return Err(TravelBlogError::invalid_input(
                "TripAdvisor venues are looked up by location_id",
            ));
        };

        let path = Self::venue_path(kind);
        info!("Getting TripAdvisor {} for location {}", kind.plural(), id);

        let request = self
            .get(path)
            .query(&[("location_id", id.as_str())])
            .query(&[("limit", VENUE_LIMIT)]);
        let body: ListBody<VenueRecord> = fetch_json(request, path).await?;

        Ok(body.into_vec().into_iter().map(Venue::from).collect())
    }

    async fn reviews(&self, id: &str, category: ReviewCategory) -> Result<ReviewPage> {
        info!("Getting TripAdvisor {} reviews for {}", category, id);

        let request = self
            .get("review/search")
            .query(&[("location_id", id), ("review_type", category.as_str())])
            .query(&[("limit", REVIEW_LIMIT)]);
        let body: ListBody<ReviewRecord> = fetch_json(request, "review/search").await?;

        let reviews = body
            .into_vec()
            .into_iter()
            .map(|record| record.into_review(id, category))
            .collect();
        Ok(ReviewPage::new(reviews))
    }
}
