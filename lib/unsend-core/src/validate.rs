//! Presence-only validation of request values.
//!
//! A request type lists its required fields once, in declaration order, and
//! [`Validate::validate`] turns every absent one into a `'<Field>' is required`
//! message. Implementations are normally generated with `#[derive(Validate)]`.
//!
//! # Example
//!
//! ```
//! use unsend_core::{Presence, Validate};
//!
//! struct GetEmailRequest {
//!     email_id: String,
//! }
//!
//! impl Validate for GetEmailRequest {
//!     const NAME: &'static str = "GetEmailRequest";
//!
//!     fn required_fields(&self) -> Vec<(&'static str, bool)> {
//!         vec![("EmailId", self.email_id.is_present())]
//!     }
//! }
//!
//! let err = GetEmailRequest { email_id: String::new() }
//!     .validate()
//!     .expect_err("missing id");
//! assert_eq!(
//!     err.to_string(),
//!     "[ERROR]: GetEmailRequest not valid; ['EmailId' is required]"
//! );
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Missing required fields of a request, in declaration order.
///
/// Never empty: a request with nothing missing validates to `Ok(())`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    request: &'static str,
    errors: Vec<String>,
}

impl ValidationError {
    /// Create a validation error for the named request type.
    #[must_use]
    pub const fn new(request: &'static str, errors: Vec<String>) -> Self {
        Self { request, errors }
    }

    /// Build the message reported for a missing field.
    #[must_use]
    pub fn missing(field: &str) -> String {
        format!("'{field}' is required")
    }

    /// Name of the request type that failed validation.
    #[must_use]
    pub const fn request(&self) -> &'static str {
        self.request
    }

    /// Individual field messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ERROR]: {} not valid; [{}]",
            self.request,
            self.errors.join(" ")
        )
    }
}

impl std::error::Error for ValidationError {}

/// Whether a field value counts as provided.
///
/// Strings are present when non-empty, collections when they hold at least one
/// element. No trimming or format checks are applied.
pub trait Presence {
    /// Returns `true` if the value was provided.
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Presence for HashMap<K, V, S> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// Client-side validation run before a request is sent.
pub trait Validate {
    /// Request type name used in error messages.
    const NAME: &'static str;

    /// Required fields in declaration order, each paired with whether it is
    /// present.
    fn required_fields(&self) -> Vec<(&'static str, bool)>;

    /// Check every required field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing each missing field, in the order
    /// given by [`Validate::required_fields`].
    fn validate(&self) -> Result<(), ValidationError> {
        let errors: Vec<String> = self
            .required_fields()
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(field, _)| ValidationError::missing(field))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(Self::NAME, errors))
        }
    }
}
