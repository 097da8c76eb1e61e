use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::Span;

/// Path the generated impls use to reach the runtime crate.
///
/// A caller may depend on `reflectz` under another name, so the name is
/// looked up in the caller's manifest. When the derive runs inside
/// `reflectz` itself the absolute `::reflectz` path still resolves through
/// the library's `extern crate self as reflectz` alias.
pub(crate) fn resolve_reflectz_path() -> syn::Result<syn::Path> {
    let found = crate_name("reflectz").map_err(|err| {
        syn::Error::new(
            Span::call_site(),
            format!("`reflectz` is not a dependency of this crate ({err}); hint: add it to Cargo.toml"),
        )
    })?;

    let ident = match found {
        FoundCrate::Itself => syn::Ident::new("reflectz", Span::call_site()),
        FoundCrate::Name(name) => syn::Ident::new(&name.replace('-', "_"), Span::call_site()),
    };
    Ok(syn::parse_quote!(::#ident))
}
