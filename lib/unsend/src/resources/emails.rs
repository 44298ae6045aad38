//! Sending, inspecting and scheduling emails.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::{nullable, segment};
use crate::{HttpClient, Method, Result, Unsend, Validate};

/// Look up one email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct GetEmailRequest {
    /// Email identifier.
    #[validate(required)]
    pub email_id: String,
}

impl GetEmailRequest {
    /// Target `email_id`.
    #[must_use]
    pub fn new(email_id: impl Into<String>) -> Self {
        Self {
            email_id: email_id.into(),
        }
    }
}

/// A file attached to an outgoing email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name shown to the recipient.
    pub filename: String,
    /// Base64-encoded file content.
    pub content: String,
}

impl Attachment {
    /// Attachment whose content is already base64-encoded.
    #[must_use]
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Attachment built from raw bytes, encoded with standard base64.
    #[must_use]
    pub fn from_bytes(filename: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        Self::new(filename, STANDARD.encode(bytes))
    }
}

/// Send an email now or at `scheduled_at`.
///
/// Either a body (`html`/`text`) or a `template_id` is expected by the
/// service; only `to` and `from` are checked locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    /// Recipients.
    #[validate(required)]
    pub to: Vec<String>,
    /// Sender, e.g. `Acme <hello@acme.dev>`.
    #[validate(required)]
    pub from: String,
    /// Subject line.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Template rendered instead of a body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template_id: String,
    /// Values substituted into the template.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, serde_json::Value>,
    /// Reply-To addresses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<String>,
    /// Carbon-copy recipients.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    /// Blind carbon-copy recipients.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
    /// Plain-text body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// HTML body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html: String,
    /// Attached files.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// ISO 8601 send time; empty sends immediately.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scheduled_at: String,
}

impl SendEmailRequest {
    /// An email from `from` to `to`, with everything else empty.
    #[must_use]
    pub fn new<I, S>(from: impl Into<String>, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into(),
            to: to.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Move a scheduled email to a new send time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    /// Email identifier.
    #[serde(skip)]
    #[validate(required)]
    pub email_id: String,
    /// New ISO 8601 send time.
    #[validate(required)]
    pub scheduled_at: String,
}

impl UpdateScheduleRequest {
    /// Reschedule `email_id` at `scheduled_at`.
    #[must_use]
    pub fn new(email_id: impl Into<String>, scheduled_at: impl Into<String>) -> Self {
        Self {
            email_id: email_id.into(),
            scheduled_at: scheduled_at.into(),
        }
    }
}

/// Cancel a scheduled email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CancelScheduleRequest {
    /// Email identifier.
    #[validate(required)]
    pub email_id: String,
}

impl CancelScheduleRequest {
    /// Cancel `email_id`.
    #[must_use]
    pub fn new(email_id: impl Into<String>) -> Self {
        Self {
            email_id: email_id.into(),
        }
    }
}

/// Delivery event recorded for an email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailEvent {
    /// Email identifier.
    pub email_id: String,
    /// Event kind, e.g. `DELIVERED` or `OPENED`.
    pub status: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Event payload; its shape depends on `status`.
    pub data: serde_json::Value,
}

/// An email as stored by Unsend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Email {
    /// Email identifier.
    pub id: String,
    /// Owning team.
    pub team_id: i64,
    /// Recipients.
    #[serde(deserialize_with = "nullable")]
    pub to: Vec<String>,
    /// Sender.
    pub from: String,
    /// Subject line.
    #[serde(deserialize_with = "nullable")]
    pub subject: String,
    /// HTML body.
    #[serde(deserialize_with = "nullable")]
    pub html: String,
    /// Plain-text body.
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
    /// Delivery history, oldest first.
    #[serde(deserialize_with = "nullable")]
    pub email_events: Vec<EmailEvent>,
    /// Reply-To addresses.
    #[serde(deserialize_with = "nullable")]
    pub reply_to: Vec<String>,
    /// Carbon-copy recipients.
    #[serde(deserialize_with = "nullable")]
    pub cc: Vec<String>,
    /// Blind carbon-copy recipients.
    #[serde(deserialize_with = "nullable")]
    pub bcc: Vec<String>,
}

/// Identifier of a sent or rescheduled email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailId {
    /// Email identifier.
    pub email_id: String,
}

/// Email operations, obtained from [`Unsend::emails`].
#[derive(Debug)]
pub struct Emails<'a, C> {
    client: &'a Unsend<C>,
}

impl<'a, C: HttpClient> Emails<'a, C> {
    pub(crate) const fn new(client: &'a Unsend<C>) -> Self {
        Self { client }
    }

    /// `GET api/v1/emails/{emailId}`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if the id is empty.
    pub async fn get(&self, request: &GetEmailRequest) -> Result<Email> {
        self.client
            .call(
                request,
                Method::Get,
                || email_path(&request.email_id),
                None::<&()>,
            )
            .await
    }

    /// `POST api/v1/emails`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if there is no recipient or sender.
    pub async fn send(&self, request: &SendEmailRequest) -> Result<EmailId> {
        self.client
            .call(
                request,
                Method::Post,
                || "api/v1/emails".to_string(),
                Some(request),
            )
            .await
    }

    /// `PATCH api/v1/emails/{emailId}`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if the id or the new time is empty.
    pub async fn update_schedule(&self, request: &UpdateScheduleRequest) -> Result<EmailId> {
        self.client
            .call(
                request,
                Method::Patch,
                || email_path(&request.email_id),
                Some(request),
            )
            .await
    }

    /// `POST api/v1/emails/{emailId}/cancel`
    ///
    /// # Errors
    ///
    /// Fails without sending anything if the id is empty.
    pub async fn cancel_schedule(&self, request: &CancelScheduleRequest) -> Result<EmailId> {
        self.client
            .call(
                request,
                Method::Post,
                || format!("{}/cancel", email_path(&request.email_id)),
                None::<&()>,
            )
            .await
    }
}

fn email_path(email_id: &str) -> String {
    format!("api/v1/emails/{}", segment(email_id))
}
