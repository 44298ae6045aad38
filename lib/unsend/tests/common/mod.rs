//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use unsend::{Unsend, UnsendConfig, VERSION};
use wiremock::{
    Mock, MockBuilder, MockServer, ResponseTemplate,
    matchers::{any, header},
};

pub const API_KEY: &str = "test-api-key";

/// Configuration pointing at the mock server.
pub fn config(server: &MockServer) -> UnsendConfig {
    UnsendConfig::new(API_KEY)
        .and_then(|config| config.with_base_url(server.uri()))
        .expect("config")
}

/// Client on the default transport, pointing at the mock server.
pub fn client(server: &MockServer) -> Unsend {
    Unsend::new(config(server))
}

/// Add the headers every Unsend request carries to a mock expectation.
pub fn with_unsend_headers(mock: MockBuilder) -> MockBuilder {
    mock.and(header("Authorization", format!("Bearer {API_KEY}")))
        .and(header("User-Agent", format!("unsend/{VERSION}")))
        .and(header("Version", VERSION))
        .and(header("Content-Type", "application/json"))
}

/// Fail the test if the server receives any request.
pub async fn expect_no_request(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .named("no request expected")
        .mount(server)
        .await;
}
