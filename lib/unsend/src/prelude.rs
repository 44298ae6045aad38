//! Prelude module for convenient imports.
//!
//! ```ignore
//! use unsend::prelude::*;
//! ```

pub use crate::resources::{
    Attachment, CancelScheduleRequest, Contact, ContactId, CreateContactRequest,
    DeleteContactRequest, DeleteContactResponse, Domain, Email, EmailEvent, EmailId,
    GetContactRequest, GetEmailRequest, SendEmailRequest, UpdateContactRequest,
    UpdateScheduleRequest, UpsertContactRequest,
};
pub use crate::{
    ClientConfig, Error, HttpClient, HyperClient, Result, Unsend, UnsendConfig, Validate,
};
