//! Domain operations against a mock Unsend server.

mod common;

use assert2::{check, let_assert};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use common::{client, with_unsend_headers};

#[tokio::test]
async fn list_domains() {
    let server = MockServer::start().await;

    with_unsend_headers(Mock::given(method("GET")))
        .and(path("/api/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "mail.acme.dev",
                "teamId": 10,
                "status": "SUCCESS",
                "publicKey": "MIGfMA0",
                "createdAt": "2024-06-01T10:00:00.000Z",
                "updatedAt": "2024-06-01T10:00:00.000Z",
                "region": "us-east-1",
                "clickTracking": true,
                "openTracking": true,
                "dkimStatus": "SUCCESS",
                "spfDetails": "SUCCESS"
            },
            {
                "id": 2,
                "name": "news.acme.dev",
                "teamId": 10,
                "status": "PENDING",
                "region": "eu-west-1"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let_assert!(Ok(domains) = client(&server).domains().list().await);
    let_assert!([first, second] = domains.as_slice());
    check!(first.name == "mail.acme.dev");
    check!(first.click_tracking);
    check!(first.dkim_status == "SUCCESS");
    check!(second.status == "PENDING");
    check!(second.public_key.is_empty());
}

#[tokio::test]
async fn list_domains_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let_assert!(Ok(domains) = client(&server).domains().list().await);
    check!(domains.is_empty());
}

#[tokio::test]
async fn list_domains_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let_assert!(Err(err) = client(&server).domains().list().await);
    check!(err.status() == Some(401));
    check!(err.is_client_error());
    check!(err.to_string() == "received non-2xx response: 401 - Unauthorized");
}

#[tokio::test]
async fn list_domains_rejects_unexpected_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let_assert!(Err(err) = client(&server).domains().list().await);
    check!(err.is_decode());
}
