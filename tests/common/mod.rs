#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use travelblog::TravelProvider;
use travelblog::config::{ContentGeoConfig, TripAdvisorConfig};
use travelblog::providers::{ContentGeoClient, TripAdvisorClient};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const HOST: &str = "tripadvisor.test";

pub fn tripadvisor_config(base_url: &str) -> TripAdvisorConfig {
    TripAdvisorConfig {
        api_key: Some(API_KEY.to_string()),
        base_url: base_url.to_string(),
        host: HOST.to_string(),
        timeout_seconds: 5,
    }
}

pub fn contentgeo_config(base_url: &str) -> ContentGeoConfig {
    ContentGeoConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        search_latitude: 50.45,
        search_longitude: 30.52,
        distance_km: None,
    }
}

pub fn tripadvisor(server: &MockServer) -> Arc<dyn TravelProvider> {
    Arc::new(TripAdvisorClient::new(&tripadvisor_config(&server.uri())).unwrap())
}

pub fn contentgeo(server: &MockServer) -> Arc<dyn TravelProvider> {
    Arc::new(ContentGeoClient::new(&contentgeo_config(&server.uri())).unwrap())
}

/// A base URL nothing listens on, for connection-refused failures
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// `n` TripAdvisor venue records named "Venue 0".."Venue n-1"
pub fn venue_records(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| json!({"location_id": i.to_string(), "name": format!("Venue {i}")}))
            .collect(),
    )
}

/// `n` GeoJSON features named "Feature 0".."Feature n-1"
pub fn features(n: usize) -> Value {
    let features: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "id": i.to_string(),
                "properties": {"Name": format!("Feature {i}")},
                "geometry": {"type": "Point", "coordinates": [30.52, 50.45]}
            })
        })
        .collect();
    json!({ "features": features })
}

/// `n` reviews titled "Review 0".."Review n-1"
pub fn review_records(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| json!({"title": format!("Review {i}"), "text": "Lovely place"}))
            .collect(),
    )
}
