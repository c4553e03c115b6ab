//! End-to-end tool behaviour against mocked providers

mod common;

use std::sync::Arc;

use rstest::rstest;
use serde_json::{Value, json};
use travelblog::models::{MAX_REVIEWS, MAX_VENUES};
use travelblog::{
    ContentGeoClient, ErrorKind, Pipeline, ResearchStage, ToolRegistry, TravelProvider,
    TripAdvisorClient,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_details(server: &MockServer) {
    mount_json(
        server,
        "/location/details",
        json!({"description": "Capital of Ukraine"}),
    )
    .await;
}

#[tokio::test]
async fn test_search_prefers_first_matching_name() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/location/search",
        json!({"data": [
            {"location_id": "1", "name": "Odesa"},
            {"location_id": "2", "name": "Kyiv Oblast"},
            {"location_id": "3", "name": "Kyiv"}
        ]}),
    )
    .await;
    mount_details(&server).await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let payload = registry
        .call("tripadvisor_search", json!({"query": "kyiv"}))
        .await
        .success()
        .unwrap();

    assert_eq!(payload["location_id"], "2");
    assert_eq!(payload["name"], "Kyiv Oblast");
    assert_eq!(payload["details"]["description"], "Capital of Ukraine");
}

#[tokio::test]
async fn test_search_falls_back_to_first_candidate() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/location/search",
        json!([
            {"location_id": "10", "name": "Lviv"},
            {"location_id": "11", "name": "Odesa"}
        ]),
    )
    .await;
    mount_details(&server).await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let payload = registry
        .call("tripadvisor_search", json!({"query": "Kharkiv"}))
        .await
        .success()
        .unwrap();
    assert_eq!(payload["location_id"], "10");
}

#[tokio::test]
async fn test_search_without_candidates_names_the_query() {
    let server = MockServer::start().await;
    mount_json(&server, "/location/search", json!({"data": []})).await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let envelope = registry
        .call("tripadvisor_search", json!({"query": "Atlantis"}))
        .await;

    assert_eq!(envelope.kind(), Some(ErrorKind::NoMatch));
    assert!(envelope.error().unwrap().contains("Atlantis"));
}

#[tokio::test]
async fn test_search_without_query_is_rejected() {
    let server = MockServer::start().await;
    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));

    let envelope = registry.call("tripadvisor_search", json!({})).await;
    assert_eq!(envelope.error(), Some("No search query provided"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_contentgeo_search_reads_feature_properties() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/landmarks",
        json!({"features": [{"id": "42", "properties": {"Name": "X"}}]}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/landmarkinfo"))
        .and(query_param("ids", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"description": "A place"})))
        .expect(1)
        .mount(&server)
        .await;

    let registry = ToolRegistry::for_provider(common::contentgeo(&server));
    let payload = registry
        .call("contentgeo_search", json!({"query": "X"}))
        .await
        .success()
        .unwrap();

    assert_eq!(payload["location_id"], "42");
    assert_eq!(payload["name"], "X");
}

/// Registry for `provider` against `server`, with the venue arguments it expects
fn venue_registry(provider: &str, server: &MockServer) -> (ToolRegistry, Value) {
    match provider {
        "tripadvisor" => (
            ToolRegistry::for_provider(common::tripadvisor(server)),
            json!({"location_id": "294474"}),
        ),
        _ => (
            ToolRegistry::for_provider(common::contentgeo(server)),
            json!({"lat": 50.45, "lon": 30.52}),
        ),
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(11)]
#[case(100)]
#[tokio::test]
async fn test_venue_lists_are_capped(
    #[case] upstream: usize,
    #[values("tripadvisor", "contentgeo")] provider: &str,
) {
    let server = MockServer::start().await;
    let (endpoint, body, first) = match provider {
        "tripadvisor" => ("/hotel/search", common::venue_records(upstream), "Venue 0"),
        _ => ("/restaurants", common::features(upstream), "Feature 0"),
    };
    mount_json(&server, endpoint, body).await;

    let (registry, arguments) = venue_registry(provider, &server);
    let payload = registry
        .call(&format!("{provider}_hotels"), arguments)
        .await
        .success()
        .unwrap();

    let hotels = payload["hotels"].as_array().unwrap();
    assert_eq!(hotels.len(), upstream.min(MAX_VENUES));
    assert_eq!(payload["total"], upstream);
    if upstream > 0 {
        assert_eq!(hotels[0]["name"], first);
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(11)]
#[case(100)]
#[tokio::test]
async fn test_review_lists_are_capped(
    #[case] upstream: usize,
    #[values("tripadvisor", "contentgeo")] provider: &str,
) {
    let server = MockServer::start().await;
    let registry = match provider {
        "tripadvisor" => {
            mount_json(&server, "/review/search", common::review_records(upstream)).await;
            ToolRegistry::for_provider(common::tripadvisor(&server))
        }
        _ => {
            mount_json(
                &server,
                "/geo_object_info",
                json!({"Name": "Pechersk Lavra", "reviews": common::review_records(upstream)}),
            )
            .await;
            ToolRegistry::for_provider(common::contentgeo(&server))
        }
    };

    let payload = registry
        .call(
            &format!("{provider}_reviews"),
            json!({"location_id": "77", "review_type": "attraction"}),
        )
        .await
        .success()
        .unwrap();

    let reviews = payload["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), upstream.min(MAX_REVIEWS));
    assert_eq!(payload["total"], upstream);
    if upstream > 0 {
        assert_eq!(reviews[0]["title"], "Review 0");
    }
}

#[tokio::test]
async fn test_venue_payload_keeps_provider_id() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/hotel/search",
        json!([{"location_id": "294474", "id": "internal-7", "name": "Hilton"}]),
    )
    .await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let payload = registry
        .call("tripadvisor_hotels", json!({"location_id": "1"}))
        .await
        .success()
        .unwrap();

    assert_eq!(payload["hotels"][0]["id"], "294474");
    assert_eq!(payload["hotels"][0]["name"], "Hilton");
}

#[tokio::test]
async fn test_venue_without_id_does_not_sink_the_list() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/hotel/search",
        json!([{"location_id": "1", "name": "A"}, {"name": "Ad banner"}]),
    )
    .await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let payload = registry
        .call("tripadvisor_hotels", json!({"location_id": "294474"}))
        .await
        .success()
        .unwrap();

    assert_eq!(payload["total"], 2);
    assert_eq!(payload["hotels"][0]["id"], "1");
    assert_eq!(payload["hotels"][1]["name"], "Ad banner");
}

#[tokio::test]
async fn test_unsupported_review_type_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/review/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let envelope = registry
        .call(
            "tripadvisor_reviews",
            json!({"location_id": "77", "review_type": "museum"}),
        )
        .await;

    assert_eq!(envelope.kind(), Some(ErrorKind::UnsupportedCategory));
    assert!(envelope.error().unwrap().contains("museum"));
}

#[tokio::test]
async fn test_contentgeo_venues_need_coordinates() {
    let server = MockServer::start().await;
    let registry = ToolRegistry::for_provider(common::contentgeo(&server));

    let envelope = registry
        .call("contentgeo_attractions", json!({"location_id": "1"}))
        .await;
    assert_eq!(envelope.kind(), Some(ErrorKind::MissingInput));
}

#[tokio::test]
async fn test_review_digest_lists_titles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/review/search"))
        .and(query_param("review_type", "restaurant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::review_records(7)))
        .mount(&server)
        .await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let digest = registry
        .call("get_restaurant_reviews", json!({"location_id": "77"}))
        .await
        .success()
        .unwrap();

    let text = digest.as_str().unwrap();
    assert_eq!(text.lines().count(), MAX_REVIEWS);
    assert!(text.contains("Review 0"));
    assert!(!text.contains("Review 5"));
}

#[tokio::test]
async fn test_review_digest_without_reviews() {
    let server = MockServer::start().await;
    mount_json(&server, "/review/search", json!([])).await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let digest = registry
        .call("get_hotel_reviews", json!({"location_id": "77"}))
        .await
        .success()
        .unwrap();
    assert_eq!(digest, "No hotel reviews found for 77");
}

#[tokio::test]
async fn test_review_digest_ignores_review_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/review/search"))
        .and(query_param("review_type", "hotel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::review_records(1)))
        .expect(1)
        .mount(&server)
        .await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let digest = registry
        .call(
            "get_hotel_reviews",
            json!({"location_id": "1", "review_type": "museum"}),
        )
        .await
        .success()
        .unwrap();
    assert!(digest.as_str().unwrap().starts_with("- Review 0: "));
}

#[rstest]
#[case("tripadvisor")]
#[case("contentgeo")]
#[tokio::test]
async fn test_every_tool_reports_unreachable_server(#[case] provider: &str) {
    let base_url = common::closed_base_url().await;
    let provider: Arc<dyn TravelProvider> = match provider {
        "tripadvisor" => Arc::new(
            TripAdvisorClient::new(&common::tripadvisor_config(&base_url)).unwrap(),
        ),
        _ => Arc::new(
            ContentGeoClient::new(&common::contentgeo_config(&base_url)).unwrap(),
        ),
    };
    let registry = ToolRegistry::for_provider(provider);

    let arguments = json!({
        "query": "Kyiv",
        "location_id": "294474",
        "lat": 50.45,
        "lon": 30.52,
        "review_type": "hotel"
    });
    for name in registry.names() {
        let envelope = registry.call(&name, arguments.clone()).await;
        assert!(!envelope.is_success(), "{name} should fail");
        assert_eq!(envelope.kind(), Some(ErrorKind::Transport), "{name}");
        assert!(!envelope.error().unwrap().is_empty(), "{name}");
    }
}

async fn mount_research_world(server: &MockServer) {
    mount_json(
        server,
        "/location/search",
        json!({"data": [{"location_id": "294474", "name": "Kyiv"}]}),
    )
    .await;
    mount_details(server).await;
    mount_json(server, "/hotel/search", common::venue_records(5)).await;
    mount_json(
        server,
        "/attraction/search",
        json!([{"location_id": "9", "name": ""}]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/restaurant/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_research_degrades_failed_sections() {
    let server = MockServer::start().await;
    mount_research_world(&server).await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let report = registry
        .call("search_travel_info", json!({"query": "Kyiv"}))
        .await
        .success()
        .unwrap();
    let report = report.as_str().unwrap();

    assert!(report.starts_with("Information about Kyiv:"));
    assert!(report.contains("Capital of Ukraine"));
    assert!(report.contains("Venue 0, Venue 1, Venue 2"));
    assert!(!report.contains("Venue 3"));
    assert!(report.contains("No restaurants found"));
    assert!(report.contains("Unknown"));
}

#[tokio::test]
async fn test_pipeline_research_stage_end_to_end() {
    let server = MockServer::start().await;
    mount_research_world(&server).await;

    let registry = ToolRegistry::for_provider(common::tripadvisor(&server));
    let pipeline = Pipeline::new().stage(ResearchStage::from_registry(&registry).unwrap());
    let text = pipeline.run("Kyiv".to_string()).await.unwrap();
    assert!(text.contains("Top Hotels:"));
}

#[tokio::test]
async fn test_pipeline_research_stage_reports_failure_as_text() {
    let base_url = common::closed_base_url().await;
    let provider = Arc::new(
        TripAdvisorClient::new(&common::tripadvisor_config(&base_url)).unwrap(),
    );
    let registry = ToolRegistry::for_provider(provider);
    let pipeline = Pipeline::new().stage(ResearchStage::from_registry(&registry).unwrap());

    let text = pipeline.run("Kyiv".to_string()).await.unwrap();
    assert!(text.starts_with("Error while searching for information:"));
}
