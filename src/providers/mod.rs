//! Travel data providers
//!
//! Two interchangeable backends sit behind the [`TravelProvider`] trait:
//! - TripAdvisor: key + host authenticated REST API, venues addressed by location id
//! - ContentGeo: unauthenticated GeoJSON server, venues addressed by coordinates
//!
//! Every operation issues exactly one HTTP GET and decodes the body into an
//! endpoint-specific schema. Transport failures and non-success statuses come
//! back as [`TravelBlogError::Transport`] from both providers.

pub mod contentgeo;
pub mod schema;
pub mod tripadvisor;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::{ProviderKind, TravelBlogConfig};
use crate::models::{
    Coordinates, Location, LocationDetails, ReviewCategory, ReviewPage, Venue, VenueKind,
};
use crate::{Result, TravelBlogError};

pub use contentgeo::ContentGeoClient;
pub use tripadvisor::TripAdvisorClient;

/// How a provider expects venue queries to be addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    LocationId,
    Coordinates,
}

/// Where to look for venues
#[derive(Debug, Clone, PartialEq)]
pub enum VenueScope {
    Location(String),
    Coordinates(Coordinates),
}

#[async_trait]
pub trait TravelProvider: Send + Sync {
    /// Short provider name, used as the tool name prefix
    fn name(&self) -> &'static str;

    fn addressing(&self) -> Addressing;

    /// Candidate locations for a free-text query, in provider order
    async fn search(&self, query: &str) -> Result<Vec<Location>>;

    async fn details(&self, id: &str) -> Result<LocationDetails>;

    async fn venues(&self, kind: VenueKind, scope: &VenueScope) -> Result<Vec<Venue>>;

    async fn reviews(&self, id: &str, category: ReviewCategory) -> Result<ReviewPage>;

    /// Scope for venue lookups around a location found by [`TravelProvider::search`]
    fn venue_scope(&self, location: &Location) -> VenueScope {
        VenueScope::Location(location.id.clone())
    }
}

/// Build the provider selected in the configuration
pub fn from_config(config: &TravelBlogConfig) -> Result<Arc<dyn TravelProvider>> {
    Ok(match config.provider {
        ProviderKind::Tripadvisor => Arc::new(TripAdvisorClient::new(&config.tripadvisor)?),
        ProviderKind::Contentgeo => Arc::new(ContentGeoClient::new(&config.contentgeo)?),
    })
}

pub(crate) fn http_client(timeout_seconds: u32) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds.into()))
        .user_agent(concat!("TravelBlog/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TravelBlogError::config(format!("Failed to create HTTP client: {e}")))
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Send a prepared GET and decode a successful body as `T`
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    endpoint: &str,
) -> Result<T> {
    let response = request.send().await.map_err(|e| {
        error!("Request to {} failed: {}", endpoint, e);
        TravelBlogError::transport(format!("Request to {endpoint} failed: {e}"))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("{} returned {}", endpoint, status);
        return Err(TravelBlogError::transport(format!(
            "{endpoint} returned {status}: {body}"
        )));
    }

    let body = response.text().await?;
    debug!("{} responded with {} bytes", endpoint, body.len());

    serde_json::from_str(&body).map_err(|e| {
        error!("Unexpected {} response: {}", endpoint, e);
        TravelBlogError::decode(format!("Unexpected {endpoint} response: {e}"))
    })
}
