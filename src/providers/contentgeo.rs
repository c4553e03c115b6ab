use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::schema::{FeatureCollection, ObjectInfo};
use super::{Addressing, TravelProvider, VenueScope, fetch_json, http_client, join_url};
use crate::config::ContentGeoConfig;
use crate::models::{
    Coordinates, Location, LocationDetails, ReviewCategory, ReviewPage, Venue, VenueKind,
};
use crate::{Result, TravelBlogError};

/// Client for a ContentGeo MCP-style server. No authentication, only a base URL.
pub struct ContentGeoClient {
    client: Client,
    base_url: String,
    search_center: Coordinates,
    distance_km: Option<f64>,
}

impl ContentGeoClient {
    pub fn new(config: &ContentGeoConfig) -> Result<Self> {
        info!("Initialized ContentGeo client for {}", config.base_url);

        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            base_url: config.base_url.clone(),
            search_center: config.search_center(),
            distance_km: config.distance_km,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Landmarks around a point
    pub async fn landmarks(&self, at: Coordinates) -> Result<FeatureCollection> {
        self.features("landmarks", at, None).await
    }

    /// Geo objects around a point, optionally limited to `distance` kilometers
    pub async fn geo_objects(
        &self,
        at: Coordinates,
        distance: Option<f64>,
    ) -> Result<FeatureCollection> {
        self.features("geo_objects", at, distance).await
    }

    pub async fn restaurants(&self, at: Coordinates) -> Result<FeatureCollection> {
        self.features("restaurants", at, None).await
    }

    pub async fn landmark_info(&self, ids: &str) -> Result<LocationDetails> {
        info!("Requesting ContentGeo landmarkinfo for {}", ids);
        let request = self
            .client
            .get(join_url(&self.base_url, "landmarkinfo"))
            .query(&[("ids", ids)]);
        fetch_json(request, "landmarkinfo").await
    }

    pub async fn geo_object_info(&self, ids: &str) -> Result<ObjectInfo> {
        info!("Requesting ContentGeo geo_object_info for {}", ids);
        let request = self
            .client
            .get(join_url(&self.base_url, "geo_object_info"))
            .query(&[("ids", ids)]);
        fetch_json(request, "geo_object_info").await
    }

    async fn features(
        &self,
        endpoint: &str,
        at: Coordinates,
        distance: Option<f64>,
    ) -> Result<FeatureCollection> {
        info!("Requesting ContentGeo {} at ({})", endpoint, at.format());

        let mut request = self
            .client
            .get(join_url(&self.base_url, endpoint))
            .query(&[("lat", at.latitude), ("lon", at.longitude)]);
        if let Some(distance) = distance {
            request = request.query(&[("distance", distance)]);
        }

        fetch_json(request, endpoint).await
    }
}

#[async_trait]
impl TravelProvider for ContentGeoClient {
    fn name(&self) -> &'static str {
        "contentgeo"
    }

    fn addressing(&self) -> Addressing {
        Addressing::Coordinates
    }

    /// Landmarks around the configured search centre; the query only drives the tie-break
    async fn search(&self, query: &str) -> Result<Vec<Location>> {
        info!("Searching ContentGeo landmarks for '{}'", query);
        let collection = self.landmarks(self.search_center).await?;
        Ok(collection.features.into_iter().map(Location::from).collect())
    }

    async fn details(&self, id: &str) -> Result<LocationDetails> {
        self.landmark_info(id).await
    }

    async fn venues(&self, kind: VenueKind, scope: &VenueScope) -> Result<Vec<Venue>> {
        let VenueScope::Coordinates(at) = scope else {
            return Err(TravelBlogError::invalid_input(
                "ContentGeo venues are looked up by lat/lon",
            ));
        };

        // The server has no hotel endpoint; hotels come from /restaurants.
        let collection = match kind {
            VenueKind::Hotel | VenueKind::Restaurant => self.restaurants(*at).await?,
            VenueKind::Attraction => self.geo_objects(*at, self.distance_km).await?,
        };

        Ok(collection.features.into_iter().map(Venue::from).collect())
    }

    async fn reviews(&self, id: &str, category: ReviewCategory) -> Result<ReviewPage> {
        let info = self.geo_object_info(id).await?;
        let reviews = info
            .reviews
            .into_iter()
            .map(|record| record.into_review(id, category))
            .collect();

        Ok(ReviewPage {
            reviews,
            info: Some(info.attributes),
        })
    }

    fn venue_scope(&self, location: &Location) -> VenueScope {
        VenueScope::Coordinates(location.coordinates.unwrap_or(self.search_center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ContentGeoClient {
        ContentGeoClient::new(&ContentGeoConfig::default()).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.base_url(), "http://localhost:8001");
        assert_eq!(client.name(), "contentgeo");
    }

    #[test]
    fn test_venue_scope_prefers_location_coordinates() {
        let client = client();
        let located = Location::new("1", "Maidan").with_coordinates(Coordinates::new(50.45, 30.52));
        assert_eq!(
            client.venue_scope(&located),
            VenueScope::Coordinates(Coordinates::new(50.45, 30.52))
        );

        let unlocated = Location::new("2", "Somewhere");
        assert_eq!(
            client.venue_scope(&unlocated),
            VenueScope::Coordinates(ContentGeoConfig::default().search_center())
        );
    }
}
