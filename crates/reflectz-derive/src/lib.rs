//! Derive macro for `reflectz`.
//!
//! `#[derive(Reflect)]` generates the `Reflect` and `Record` impls that let
//! `reflectz::inspect` walk a struct's fields in declaration order.
//!
//! # Field Attributes
//!
//! - `#[tags(key = "value", ...)]` - Raw annotations, exposed verbatim as
//!   `key:"value"` pairs (e.g. `#[tags(json = "email,omitempty")]`)
//! - `#[reflectz(skip)]` - Never emit this field; its type need not implement `Reflect`
//! - `#[reflectz(nodive)]` - Emit a nested struct as one field instead of expanding it
//!
//! Only `pub` fields are emitted. Private fields still take part in the
//! zero check of the enclosing struct, so their types must implement
//! `Reflect` unless they are skipped.
//!
//! Type parameters used by a reflected field are bound by `Reflect`;
//! parameters that only appear in skipped fields are only bound by
//! `'static`.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod attrs;
mod generate;
mod runtime_path;

#[proc_macro_derive(Reflect, attributes(tags, reflectz))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match expand_derive_reflect(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_derive_reflect(input: &syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let rt = runtime_path::resolve_reflectz_path()?;
    let record = attrs::parse_record(input)?;
    Ok(generate::generate(&record, &rt))
}
