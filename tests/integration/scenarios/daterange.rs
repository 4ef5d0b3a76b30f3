use crate::helpers::client::TestClient;
use crate::helpers::mock_server::{MockServer, MAPS_NUM_FOUND};
use axum::http::StatusCode;

/// HTML view reports the range and how many rows it was based on
#[tokio::test]
async fn test_daterange_html() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let res = client.daterange("query=maps").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.content_type.starts_with("text/html"));
    assert!(res.body.contains("Dates range from 1999-05-01 to 2005-11-20"));
    assert!(res
        .body
        .contains(&format!("Based off of 4 results out of a total of {}", MAPS_NUM_FOUND)));
}

#[tokio::test]
async fn test_daterange_json() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let res = client.daterange("query=maps&format=json").await;

    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["minDate"], "1999-05-01");
    assert_eq!(body["maxDate"], "2005-11-20");
    assert_eq!(body["rowsReturned"], 4);
    assert_eq!(body["numFound"], MAPS_NUM_FOUND);
}

/// rows is forwarded upstream, so a smaller sample can narrow the range
#[tokio::test]
async fn test_daterange_rows_limits_sample() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let res = client.daterange("query=maps&rows=1&format=json").await;

    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["minDate"], "1999-05-01");
    assert_eq!(body["maxDate"], "1999-05-01");
    assert_eq!(body["rowsReturned"], 1);
}

/// Blank rows falls back to the configured default
#[tokio::test]
async fn test_daterange_blank_rows_uses_default() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let res = client.daterange("query=maps&rows=&format=json").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["rowsReturned"], 4);
}

#[tokio::test]
async fn test_daterange_invalid_rows() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    for params in ["query=maps&rows=0", "query=maps&rows=-5", "query=maps&rows=many"] {
        let res = client.daterange(params).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "params: {}", params);
        assert!(res.json()["error"].as_str().unwrap().contains("rows"));
    }
}

/// No query and no matches give different instructional messages
#[tokio::test]
async fn test_daterange_empty_messages() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let missing = client.daterange("").await;
    assert_eq!(missing.status, StatusCode::OK);
    assert!(missing.content_type.starts_with("text/plain"));
    assert!(missing.body.starts_with("Please supply a query"));

    let none = client.daterange("query=atlantis").await;
    assert_eq!(none.status, StatusCode::OK);
    assert_eq!(none.body, "No records found with query atlantis");

    assert_ne!(missing.body, none.body);
}

#[tokio::test]
async fn test_daterange_empty_json_message() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let res = client.daterange("query=atlantis&format=json").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["message"], "No records found with query atlantis");
}

/// Upstream failures surface as 502 and are never turned into empty results
#[tokio::test]
async fn test_daterange_upstream_failures() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    for query in ["broken", "garbled", "partial"] {
        let res = client.daterange(&format!("query={}", query)).await;
        assert_eq!(res.status, StatusCode::BAD_GATEWAY, "query: {}", query);
        assert!(res.json()["error"].is_string());
    }

    let garbled = client.daterange("query=garbled").await;
    assert!(garbled.json()["error"]
        .as_str()
        .unwrap()
        .contains("malformed search response"));
}

#[tokio::test]
async fn test_daterange_upstream_unreachable() {
    // Nothing listens on the discard port
    let client = TestClient::new("http://127.0.0.1:9/api/search/".to_string());

    let res = client.daterange("query=maps").await;

    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert!(res.json()["error"]
        .as_str()
        .unwrap()
        .contains("search request failed"));
}

/// Same upstream data, same answer
#[tokio::test]
async fn test_daterange_idempotent() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let first = client.daterange("query=maps&format=json").await;
    let second = client.daterange("query=maps&format=json").await;

    assert_eq!(first.body, second.body);
}

/// rows beyond 32 bits is still a positive integer and goes upstream as-is
#[tokio::test]
async fn test_daterange_large_rows_accepted() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let res = client.daterange("query=maps&rows=4294967296&format=json").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["rowsReturned"], 4);
}

/// A huge upstream error page is cut down before it reaches the caller
#[tokio::test]
async fn test_daterange_upstream_error_body_truncated() {
    let mock_server = MockServer::start().await;
    let client = TestClient::new(mock_server.search_url());

    let res = client.daterange("query=overloaded").await;

    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    let error = res.json()["error"].as_str().unwrap().to_string();
    assert!(error.contains("503"));
    assert!(error.contains("<html><body>overloaded"));
    assert!(error.ends_with("..."));
    assert!(error.len() < 400, "error too long: {} bytes", error.len());
}
