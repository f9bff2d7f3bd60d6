//! Offline contract tests for the API client.
//!
//! A mock server stands in for the movie database so the client's wire
//! behavior is pinned down without live access: the `X-API-KEY` header and
//! versioned paths go out as specified, query parameters are forwarded,
//! and non-2xx statuses come back as response snapshots rather than
//! client errors.

use kinoprobe_e2e::{ApiConfig, MovieApi};
use reqwest::StatusCode;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer, token: &str) -> MovieApi {
    MovieApi::new(ApiConfig {
        base_url: server.uri(),
        token: token.to_string(),
    })
    .expect("HTTP client should build")
}

#[tokio::test]
async fn lookup_sends_the_api_key_and_surfaces_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.4/movie/535341"))
        .and(header("X-API-KEY", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 535341,
            "name": "Джентльмены"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server, "test-token")
        .movie_by_id("535341")
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json().unwrap();
    assert_eq!(body["id"].as_i64(), Some(535341));
    assert_eq!(body["name"].as_str(), Some("Джентльмены"));
}

#[tokio::test]
async fn search_forwards_the_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.4/movie/search"))
        .and(query_param("query", "Джентльмены"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server, "t")
        .search_by_title("Джентльмены")
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json().unwrap()["docs"].is_array());
}

#[tokio::test]
async fn random_movie_hits_the_random_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.4/movie/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 258687,
            "name": "Интерстеллар"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server, "t").random_movie().await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json().unwrap()["name"].as_str(),
        Some("Интерстеллар")
    );
}

#[test_case("abc")]
#[test_case("-1")]
#[test_case("1.4")]
#[tokio::test]
async fn malformed_ids_come_back_as_snapshots_not_errors(id: &str) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.4/movie/{id}")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": 400,
            "message": "id must be a positive integer"
        })))
        .mount(&server)
        .await;

    let response = api_for(&server, "t")
        .movie_by_id(id)
        .await
        .expect("a 4xx status is data for the suite, not a client error");

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body_snippet().contains("400"));
}
