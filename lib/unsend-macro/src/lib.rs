//! Procedural macros for the Unsend API client.
//!
//! - `#[derive(Validate)]` - generate the required-field checks a request
//!   runs before it is sent

mod validate_derive;

use proc_macro::TokenStream;

/// Derive the `Validate` trait for a request struct.
///
/// Every field marked `#[validate(required)]` is checked, in declaration
/// order, with the `Presence` trait (non-empty strings, non-empty
/// collections). A missing field is reported as `'<FieldName>' is required`.
///
/// # Struct Attributes
///
/// - `#[validate(name = "...")]` - Request name used in the error message
///   (defaults to the struct name)
///
/// # Field Attributes
///
/// - `#[validate(required)]` - The field must be present
/// - `#[validate(rename = "...")]` - Name reported for the field (defaults to
///   the `PascalCase` form of the field name)
///
/// # Example
///
/// ```ignore
/// use unsend::Validate;
///
/// #[derive(Validate)]
/// struct UpdateScheduleRequest {
///     #[validate(required)]
///     email_id: String,      // reported as 'EmailId'
///     #[validate(required)]
///     scheduled_at: String,  // reported as 'ScheduledAt'
/// }
/// ```
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    validate_derive::expand_validate_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
