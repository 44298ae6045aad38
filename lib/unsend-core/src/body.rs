//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use unsend_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Schedule { scheduled_at: String }
///
/// let body = Schedule { scheduled_at: "2024-01-01T00:00:00Z".to_string() };
/// let bytes = to_json(&body).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"scheduledAt":"2024-01-01T00:00:00Z"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so that a mismatch deep inside a response
/// (e.g. `emailEvents[2].createdAt`) is reported with its location.
///
/// # Errors
///
/// Returns [`crate::Error::JsonDeserialization`] if the bytes are not JSON or
/// do not match `T`.
///
/// # Example
///
/// ```
/// use unsend_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Deleted { success: bool }
///
/// let deleted: Deleted = from_json(br#"{"success":true}"#).expect("deserialize");
/// assert_eq!(deleted, Deleted { success: true });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
