//! Integration tests for the graph fetch client against a mock upstream.

use graphmark_core::client::{FetchError, GraphClient, GraphClientConfig};
use graphmark_core::format::{ColumnMarkers, render_detailed};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GraphClient {
    let config = GraphClientConfig::new(format!("{}/graph", server.uri()));
    GraphClient::new(&config).expect("client should build")
}

fn mbti_body() -> serde_json::Value {
    json!({
        "id": "G81a",
        "name": "MBTI distribution",
        "unitCategory": "ratio",
        "unitLabel": "%",
        "columnNames": ["time", "type", "value"],
        "rows": [
            ["15", "ENFP", "0.126"],
            ["08", "INFP", "0.134"],
            ["04", "INFJ", "0.063"]
        ],
        "message": "OK"
    })
}

#[tokio::test]
async fn fetch_sends_query_and_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph"))
        .and(query_param("graphId", "G81a"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mbti_body()))
        .expect(1)
        .mount(&server)
        .await;

    let record = client_for(&server)
        .fetch_graph("G81a")
        .await
        .expect("fetch should succeed");

    assert_eq!(record.id, "G81a");
    assert_eq!(record.rows.len(), 3);
}

#[tokio::test]
async fn fetched_record_renders_percent_scaled_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mbti_body()))
        .mount(&server)
        .await;

    let record = client_for(&server)
        .fetch_graph("G81a")
        .await
        .expect("fetch should succeed");
    let output = render_detailed(&record, &ColumnMarkers::default());

    assert!(output.contains("| 08 | INFP | 13.4% |"));
    assert!(output.contains("| Sum | 32.3% |"));
    assert!(output.contains("| Count | 3 |"));
}

#[tokio::test]
async fn non_2xx_status_fails_with_status_and_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_graph("G81a")
        .await
        .expect_err("fetch should fail");

    assert!(matches!(err, FetchError::Status { status: 503, .. }));
    let message = err.to_string();
    assert!(message.contains("503"), "message should name the status: {message}");
    assert!(message.contains("Service Unavailable"), "missing reason: {message}");
}

#[tokio::test]
async fn invalid_json_body_fails_with_body_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_graph("G81a")
        .await
        .expect_err("fetch should fail");

    assert!(matches!(err, FetchError::Body(_)));
}

#[tokio::test]
async fn wrong_shape_fails_with_body_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_graph("G81a")
        .await
        .expect_err("fetch should fail");

    assert!(matches!(err, FetchError::Body(_)));
}

#[tokio::test]
async fn upstream_failure_status_fails_even_on_http_200() {
    let server = MockServer::start().await;
    let mut body = mbti_body();
    body["message"] = json!("GRAPH_NOT_FOUND");
    Mock::given(method("GET"))
        .and(path("/graph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_graph("G81a")
        .await
        .expect_err("fetch should fail");

    assert!(matches!(err, FetchError::Upstream { .. }));
    assert!(
        err.to_string().contains("GRAPH_NOT_FOUND"),
        "message should carry the literal status value: {err}"
    );
}
