/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use common::setup_mock_server;
use imx_client::{
    ClientConfig, Environment, ImxApiClient, ImxError, ListOrdersQuery, OrderStatus,
};
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const USER: &str = "0x8f0e4f8d5b2c4a3e9d6c1b0a7f8e9d0c1b2a3f4e";

#[test]
fn test_client_creation() {
    let client = assert_ok!(ImxApiClient::new());
    assert_eq!(client.base_url().as_str(), "https://api.x.immutable.com/");
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(3),
        connect_timeout: Duration::from_secs(1),
    };
    let client = assert_ok!(ImxApiClient::with_config(config, Environment::Sandbox));
    assert_eq!(
        client.base_url().as_str(),
        "https://api.sandbox.x.immutable.com/"
    );
}

#[test]
fn test_error_retryable() {
    let throttled = ImxError::Api {
        status: 429,
        body: "slow down".to_string(),
    };
    assert!(throttled.is_retryable());

    let rejected = ImxError::Api {
        status: 400,
        body: "bad request".to_string(),
    };
    assert!(!rejected.is_retryable());
    assert!(rejected.is_client_error());

    assert!(!ImxError::Validation("amount".to_string()).is_retryable());
}

#[tokio::test]
async fn test_requests_carry_json_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/users/{USER}")))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accounts": ["0x04ffbbee"],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(ImxApiClient::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri()
    ));
    let user = assert_ok!(client.get_user(USER).await);
    assert_eq!(user.accounts, vec!["0x04ffbbee".to_string()]);
}

#[tokio::test]
async fn test_query_parameters_skip_unset_fields() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v3/orders"))
        .and(query_param("status", "filled"))
        .and(query_param("page_size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": [],
            "cursor": "",
            "remaining": 0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(ImxApiClient::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri()
    ));
    let page = assert_ok!(
        client
            .list_orders(&ListOrdersQuery {
                status: Some(OrderStatus::Filled),
                page_size: Some(5),
                ..Default::default()
            })
            .await
    );
    assert!(page.result.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("user="));
    assert!(!query.contains("cursor="));
}

#[tokio::test]
async fn test_timeout_surfaces_as_network_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/users/{USER}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"accounts": []}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        timeout: Duration::from_millis(50),
        connect_timeout: Duration::from_millis(50),
    };
    let client = assert_ok!(ImxApiClient::with_config_and_base_url(config, &server.uri()));

    let err = client.get_user(USER).await.unwrap_err();
    assert!(matches!(err, ImxError::Network(_)));
}
