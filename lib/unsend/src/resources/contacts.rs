//! Contacts stored in contact books.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{nullable, segment};
use crate::{HttpClient, Method, Result, Unsend, Validate};

/// Look up one contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct GetContactRequest {
    /// Contact book holding the contact.
    #[validate(required)]
    pub contact_book_id: String,
    /// Contact identifier.
    #[validate(required)]
    pub contact_id: String,
}

impl GetContactRequest {
    /// Target `contact_id` in `contact_book_id`.
    #[must_use]
    pub fn new(contact_book_id: impl Into<String>, contact_id: impl Into<String>) -> Self {
        Self {
            contact_book_id: contact_book_id.into(),
            contact_id: contact_id.into(),
        }
    }
}

/// Add a contact to a contact book.
///
/// `subscribed` is always sent; the other optional fields are left out when
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    /// Contact book holding the contact.
    #[serde(skip)]
    #[validate(required)]
    pub contact_book_id: String,
    /// Email address.
    #[validate(required)]
    pub email: String,
    /// Given name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    /// Family name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    /// Custom properties.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
    /// Whether the contact receives campaigns.
    pub subscribed: bool,
}

impl CreateContactRequest {
    /// A contact with only its email address set.
    #[must_use]
    pub fn new(contact_book_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            contact_book_id: contact_book_id.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Create the contact, or replace it if it already exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertContactRequest {
    /// Contact book holding the contact.
    #[serde(skip)]
    #[validate(required)]
    pub contact_book_id: String,
    /// Contact identifier.
    #[serde(skip)]
    #[validate(required)]
    pub contact_id: String,
    /// Email address.
    #[validate(required)]
    pub email: String,
    /// Given name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    /// Family name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    /// Custom properties.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
    /// Whether the contact receives campaigns.
    pub subscribed: bool,
}

/// Change some fields of an existing contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    /// Contact book holding the contact.
    #[serde(skip)]
    #[validate(required)]
    pub contact_book_id: String,
    /// Contact identifier.
    #[serde(skip)]
    #[validate(required)]
    pub contact_id: String,
    /// Given name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    /// Family name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    /// Custom properties.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
    /// Whether the contact receives campaigns.
    pub subscribed: bool,
}

/// Remove a contact from its book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct DeleteContactRequest {
    /// Contact book holding the contact.
    #[validate(required)]
    pub contact_book_id: String,
    /// Contact identifier.
    #[validate(required)]
    pub contact_id: String,
}

impl DeleteContactRequest {
    /// Target `contact_id` in `contact_book_id`.
    #[must_use]
    pub fn new(contact_book_id: impl Into<String>, contact_id: impl Into<String>) -> Self {
        Self {
            contact_book_id: contact_book_id.into(),
            contact_id: contact_id.into(),
        }
    }
}

/// A contact as stored by Unsend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Contact identifier.
    pub id: String,
    /// Given name.
    #[serde(deserialize_with = "nullable")]
    pub first_name: String,
    /// Family name.
    #[serde(deserialize_with = "nullable")]
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Whether the contact receives campaigns.
    pub subscribed: bool,
    /// Custom properties.
    #[serde(deserialize_with = "nullable")]
    pub properties: BTreeMap<String, serde_json::Value>,
    /// Contact book holding the contact.
    pub contact_book_id: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Identifier of a created or modified contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactId {
    /// Contact identifier.
    pub contact_id: String,
}

/// Outcome of a contact deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteContactResponse {
    /// Whether the contact was removed.
    pub success: bool,
}

/// Contact operations, obtained from [`Unsend::contacts`].
#[derive(Debug)]
pub struct Contacts<'a, C> {
    client: &'a Unsend<C>,
}

impl<'a, C: HttpClient> Contacts<'a, C> {
    pub(crate) const fn new(client: &'a Unsend<C>) -> Self {
        Self { client }
    }

    /// `POST api/v1/contactBooks/{bookId}/contacts/`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if the book id or email is empty, and
    /// with the pipeline errors of [`Unsend::execute`] otherwise.
    pub async fn create(&self, request: &CreateContactRequest) -> Result<ContactId> {
        self.client
            .call(
                request,
                Method::Post,
                || format!("api/v1/contactBooks/{}/contacts/", segment(&request.contact_book_id)),
                Some(request),
            )
            .await
    }

    /// `GET api/v1/contactBooks/{bookId}/contacts/{contactId}`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if either id is empty.
    pub async fn get(&self, request: &GetContactRequest) -> Result<Contact> {
        self.client
            .call(
                request,
                Method::Get,
                || contact_path(&request.contact_book_id, &request.contact_id),
                None::<&()>,
            )
            .await
    }

    /// `PUT api/v1/contactBooks/{bookId}/contacts/{contactId}`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if an id or the email is empty.
    pub async fn upsert(&self, request: &UpsertContactRequest) -> Result<ContactId> {
        self.client
            .call(
                request,
                Method::Put,
                || contact_path(&request.contact_book_id, &request.contact_id),
                Some(request),
            )
            .await
    }

    /// `PATCH api/v1/contactBooks/{bookId}/contacts/{contactId}`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if either id is empty.
    pub async fn update(&self, request: &UpdateContactRequest) -> Result<ContactId> {
        self.client
            .call(
                request,
                Method::Patch,
                || contact_path(&request.contact_book_id, &request.contact_id),
                Some(request),
            )
            .await
    }

    /// `DELETE api/v1/contactBooks/{bookId}/contacts/{contactId}`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if either id is empty.
    pub async fn delete(&self, request: &DeleteContactRequest) -> Result<DeleteContactResponse> {
        self.client
            .call(
                request,
                Method::Delete,
                || contact_path(&request.contact_book_id, &request.contact_id),
                None::<&()>,
            )
            .await
    }
}

fn contact_path(contact_book_id: &str, contact_id: &str) -> String {
    format!(
        "api/v1/contactBooks/{}/contacts/{}",
        segment(contact_book_id),
        segment(contact_id)
    )
}
