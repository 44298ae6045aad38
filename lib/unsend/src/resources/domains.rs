//! Sending domains.

use serde::{Deserialize, Serialize};

use super::nullable;
use crate::{HttpClient, Method, Result, Unsend};

/// A sending domain registered with Unsend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Domain {
    /// Domain identifier.
    pub id: i64,
    /// Domain name, e.g. `mail.example.com`.
    pub name: String,
    /// Owning team.
    pub team_id: i64,
    /// Verification status, e.g. `SUCCESS` or `PENDING`.
    pub status: String,
    /// DKIM public key to publish in DNS.
    pub public_key: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
    /// Sending region.
    pub region: String,
    /// Whether link clicks are tracked.
    pub click_tracking: bool,
    /// Whether opens are tracked.
    pub open_tracking: bool,
    /// DKIM verification status, empty until checked.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub dkim_status: String,
    /// SPF verification details, empty until checked.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub spf_details: String,
}

/// Domain operations, obtained from [`Unsend::domains`].
#[derive(Debug)]
pub struct Domains<'a, C> {
    client: &'a Unsend<C>,
}

impl<'a, C: HttpClient> Domains<'a, C> {
    pub(crate) const fn new(client: &'a Unsend<C>) -> Self {
        Self { client }
    }

    /// `GET api/v1/domains`
    ///
    /// Takes no input, so nothing is validated.
    pub async fn list(&self) -> Result<Vec<Domain>> {
        let request = self
            .client
            .new_request(Method::Get, "api/v1/domains", None::<&()>)?;
        self.client.execute(request).await
    }
}
