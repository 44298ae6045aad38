//! Construction of the `Unsend` client and the shared request pipeline.

mod common;

use std::time::Duration;

use assert2::{check, let_assert};
use serde_json::json;
use unsend::resources::GetEmailRequest;
use unsend::{HyperClient, Method, Unsend, UnsendConfig};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use common::{API_KEY, config, with_unsend_headers};

#[tokio::test]
async fn with_http_client_keeps_custom_settings_and_headers() {
    let server = MockServer::start().await;

    with_unsend_headers(Mock::given(method("GET")))
        .and(path("/api/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = Unsend::with_http_client(
        config(&server),
        HyperClient::builder()
            .timeout(Duration::from_secs(2))
            .with_debug_logging(),
    );

    check!(client.inner().config().timeout == Duration::from_secs(2));
    let_assert!(Ok(domains) = client.domains().list().await);
    check!(domains.is_empty());
}

#[tokio::test]
async fn from_parts_uses_transport_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/emails/em_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "em_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Unsend::from_parts(config(&server), HyperClient::new());

    let_assert!(Ok(email) = client.emails().get(&GetEmailRequest::new("em_1")).await);
    check!(email.id == "em_1");

    let_assert!(Some(requests) = server.received_requests().await);
    let_assert!([request] = requests.as_slice());
    check!(!request.headers.contains_key("authorization"));
}

#[tokio::test]
async fn base_url_with_path_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = UnsendConfig::new(API_KEY)
        .and_then(|config| config.with_base_url(format!("{}/api", server.uri())))
        .expect("config");
    let client = Unsend::new(config);

    let_assert!(Ok(domains) = client.domains().list().await);
    check!(domains.is_empty());
}

#[tokio::test]
async fn timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = Unsend::with_http_client(
        config(&server),
        HyperClient::builder().timeout(Duration::from_millis(100)),
    );

    let_assert!(Err(err) = client.domains().list().await);
    check!(err.is_timeout());
}

#[tokio::test]
async fn unreachable_server_surfaces_as_transport_error() {
    let config = UnsendConfig::new(API_KEY)
        .and_then(|config| config.with_base_url("http://127.0.0.1:1"))
        .expect("config");

    let_assert!(Err(err) = Unsend::new(config).domains().list().await);
    check!(err.is_transport());
    check!(err.status().is_none());
}

#[tokio::test]
async fn raw_pipeline_for_unwrapped_endpoints() {
    let server = MockServer::start().await;

    with_unsend_headers(Mock::given(method("GET")))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let_assert!(Ok(request) = client.new_request(Method::Get, "api/v1/health", None::<&()>));
    let_assert!(Ok(body) = client.execute::<serde_json::Value>(request).await);
    check!(body == json!({"ok": true}));
}
