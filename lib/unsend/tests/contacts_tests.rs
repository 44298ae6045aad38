//! Contact operations against a mock Unsend server.

mod common;

use assert2::{check, let_assert};
use serde_json::json;
use unsend::resources::{
    ContactId, CreateContactRequest, DeleteContactRequest, GetContactRequest,
    UpdateContactRequest, UpsertContactRequest,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

use common::{client, expect_no_request, with_unsend_headers};

#[tokio::test]
async fn create_contact_returns_contact_id() {
    let server = MockServer::start().await;

    with_unsend_headers(Mock::given(method("POST")))
        .and(path("/api/v1/contactBooks/book_1/contacts/"))
        .and(body_json(json!({
            "email": "jane@example.com",
            "firstName": "Jane",
            "subscribed": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"contactId": "12345"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = CreateContactRequest::new("book_1", "jane@example.com");
    request.first_name = "Jane".to_string();

    let_assert!(Ok(response) = client(&server).contacts().create(&request).await);
    check!(
        response
            == ContactId {
                contact_id: "12345".to_string()
            }
    );
}

#[tokio::test]
async fn create_contact_without_book_sends_nothing() {
    let server = MockServer::start().await;
    expect_no_request(&server).await;

    let request = CreateContactRequest::new("", "jane@example.com");

    let_assert!(Err(err) = client(&server).contacts().create(&request).await);
    check!(err.is_validation());
    check!(err.to_string() == "[ERROR]: CreateContactRequest not valid; ['ContactBookId' is required]");
}

#[tokio::test]
async fn get_contact_decodes_contact() {
    let server = MockServer::start().await;

    with_unsend_headers(Mock::given(method("GET")))
        .and(path("/api/v1/contactBooks/book_1/contacts/c_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c_1",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "subscribed": true,
            "properties": {"plan": "pro"},
            "contactBookId": "book_1",
            "createdAt": "2024-06-01T10:00:00.000Z",
            "updatedAt": "2024-06-02T10:00:00.000Z"
        })))
        .mount(&server)
        .await;

    let request = GetContactRequest::new("book_1", "c_1");

    let_assert!(Ok(contact) = client(&server).contacts().get(&request).await);
    check!(contact.id == "c_1");
    check!(contact.last_name == "Doe");
    check!(contact.subscribed);
    check!(contact.properties.get("plan") == Some(&json!("pro")));
    check!(contact.contact_book_id == "book_1");
}

#[tokio::test]
async fn get_contact_not_found_keeps_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/contactBooks/book_1/contacts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error": "not found"}"#))
        .mount(&server)
        .await;

    let request = GetContactRequest::new("book_1", "missing");

    let_assert!(Err(err) = client(&server).contacts().get(&request).await);
    check!(err.is_not_found());
    check!(err.body() == Some(r#"{"error": "not found"}"#));
    check!(err.to_string() == r#"received non-2xx response: 404 - {"error": "not found"}"#);
}

#[tokio::test]
async fn upsert_contact_uses_put() {
    let server = MockServer::start().await;

    with_unsend_headers(Mock::given(method("PUT")))
        .and(path("/api/v1/contactBooks/book_1/contacts/c_1"))
        .and(body_json(json!({
            "email": "jane@example.com",
            "subscribed": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"contactId": "c_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpsertContactRequest {
        contact_book_id: "book_1".to_string(),
        contact_id: "c_1".to_string(),
        email: "jane@example.com".to_string(),
        subscribed: true,
        ..UpsertContactRequest::default()
    };

    let_assert!(Ok(response) = client(&server).contacts().upsert(&request).await);
    check!(response.contact_id == "c_1");
}

#[tokio::test]
async fn update_contact_uses_patch() {
    let server = MockServer::start().await;

    with_unsend_headers(Mock::given(method("PATCH")))
        .and(path("/api/v1/contactBooks/book_1/contacts/c_1"))
        .and(body_json(json!({
            "lastName": "Doe",
            "subscribed": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"contactId": "c_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateContactRequest {
        contact_book_id: "book_1".to_string(),
        contact_id: "c_1".to_string(),
        last_name: "Doe".to_string(),
        ..UpdateContactRequest::default()
    };

    let_assert!(Ok(response) = client(&server).contacts().update(&request).await);
    check!(response.contact_id == "c_1");
}

#[tokio::test]
async fn update_contact_without_ids_lists_both_fields() {
    let server = MockServer::start().await;
    expect_no_request(&server).await;

    let request = UpdateContactRequest {
        first_name: "Jane".to_string(),
        ..UpdateContactRequest::default()
    };

    let_assert!(Err(err) = client(&server).contacts().update(&request).await);
    check!(
        err.to_string()
            == "[ERROR]: UpdateContactRequest not valid; ['ContactBookId' is required 'ContactId' is required]"
    );
}

#[tokio::test]
async fn delete_contact_returns_success() {
    let server = MockServer::start().await;

    with_unsend_headers(Mock::given(method("DELETE")))
        .and(path("/api/v1/contactBooks/book_1/contacts/c_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let request = DeleteContactRequest::new("book_1", "c_1");

    let_assert!(Ok(response) = client(&server).contacts().delete(&request).await);
    check!(response.success);
}

#[tokio::test]
async fn delete_contact_is_validated() {
    let server = MockServer::start().await;
    expect_no_request(&server).await;

    let request = DeleteContactRequest::new("book_1", "");

    let_assert!(Err(err) = client(&server).contacts().delete(&request).await);
    let_assert!(Some(validation) = err.validation());
    check!(validation.request() == "DeleteContactRequest");
    check!(validation.errors() == ["'ContactId' is required"]);
}

#[tokio::test]
async fn contact_ids_are_percent_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/contactBooks/book%201/contacts/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "a/b"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = GetContactRequest::new("book 1", "a/b");

    let_assert!(Ok(contact) = client(&server).contacts().get(&request).await);
    check!(contact.id == "a/b");
}
