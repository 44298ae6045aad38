//! Typed operations of the Unsend API, grouped by resource.
//!
//! - [`Contacts`] - contacts inside a contact book
//! - [`Domains`] - sending domains of the team
//! - [`Emails`] - sending, inspecting and scheduling emails

mod contacts;
mod domains;
mod emails;

pub use contacts::{
    Contact, ContactId, Contacts, CreateContactRequest, DeleteContactRequest,
    DeleteContactResponse, GetContactRequest, UpdateContactRequest, UpsertContactRequest,
};
pub use domains::{Domain, Domains};
pub use emails::{
    Attachment, CancelScheduleRequest, Email, EmailEvent, EmailId, Emails, GetEmailRequest,
    SendEmailRequest, UpdateScheduleRequest,
};

use percent_encoding::{AsciiSet, CONTROLS, PercentEncode, utf8_percent_encode};
use serde::{Deserialize, Deserializer};

/// Characters escaped when an identifier is placed in a path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// Percent-encode an identifier as a single path segment.
fn segment(id: &str) -> PercentEncode<'_> {
    utf8_percent_encode(id, PATH_SEGMENT_ENCODE_SET)
}

/// Decode `null` as the default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
