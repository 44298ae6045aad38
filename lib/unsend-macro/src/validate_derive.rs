//! Validate derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, parse2};

/// Struct-level options parsed from `#[validate(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct ValidateStructOptions {
    /// Request name reported in errors (defaults to the struct name).
    name: Option<String>,
}

/// Field options parsed from `#[validate(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct ValidateFieldOptions {
    /// The field must be present.
    required: bool,
    /// Field name reported in errors (defaults to the `PascalCase` field name).
    rename: Option<String>,
}

/// Convert a `snake_case` identifier to `PascalCase`.
///
/// `contact_book_id` becomes `ContactBookId`, `to` becomes `To`.
pub(crate) fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Expand the `#[derive(Validate)]` macro.
pub fn expand_validate_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let struct_options = parse_struct_options(&input.attrs)?;
    let request_name = struct_options
        .name
        .unwrap_or_else(|| ident.to_string());

    // Only support structs with named fields
    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Validate derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Validate derive only supports structs",
            ));
        }
    };

    let mut checks = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let options = parse_field_options(&field.attrs)?;
        if !options.required {
            if let Some(rename) = &options.rename {
                return Err(syn::Error::new_spanned(
                    field_name,
                    format!("`rename = \"{rename}\"` has no effect without `required`"),
                ));
            }
            continue;
        }

        let reported = options
            .rename
            .unwrap_or_else(|| to_pascal_case(&field_name.to_string()));

        checks.push(quote! {
            (#reported, ::unsend::Presence::is_present(&self.#field_name))
        });
    }

    Ok(quote! {
        impl #impl_generics ::unsend::Validate for #ident #ty_generics #where_clause {
            const NAME: &'static str = #request_name;

            fn required_fields(&self) -> ::std::vec::Vec<(&'static str, bool)> {
                ::std::vec![#(#checks),*]
            }
        }
    })
}

/// Parse struct-level options from `#[validate(...)]` attributes.
fn parse_struct_options(attrs: &[syn::Attribute]) -> syn::Result<ValidateStructOptions> {
    let mut options = ValidateStructOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown validate option, expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(options)
}

/// Parse field options from `#[validate(...)]` attributes.
fn parse_field_options(attrs: &[syn::Attribute]) -> syn::Result<ValidateFieldOptions> {
    let mut options = ValidateFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                options.required = true;
            } else if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
            } else {
                return Err(meta.error(
                    "unknown validate option, expected `required` or `rename = \"...\"`",
                ));
            }
            Ok(())
        })?;
    }

    Ok(options)
}
