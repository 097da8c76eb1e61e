//! Parsing of `#[tags(...)]` and `#[reflectz(...)]` field attributes.

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, Meta, Type, Visibility};

const DIRECTIVE_KEY: &str = "reflectz";

const UNSUPPORTED_REFLECTZ_ATTR_HINT: &str =
    "unsupported reflectz attribute; expected `skip` or `nodive`";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Directive {
    /// Never emitted; the field is left out of reflection entirely.
    Skip,
    /// Emitted as one leaf even when it is a record.
    NoDive,
}

impl Directive {
    fn tag_value(self) -> &'static str {
        match self {
            Directive::Skip => "-",
            Directive::NoDive => "nodive",
        }
    }
}

pub(crate) struct RecordInput<'a> {
    pub ident: &'a Ident,
    pub generics: &'a syn::Generics,
    pub fields: Vec<FieldInput<'a>>,
}

pub(crate) struct FieldInput<'a> {
    pub index: usize,
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub exported: bool,
    pub tags: Vec<(String, String)>,
    pub directive: Option<Directive>,
}

impl RecordInput<'_> {
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

impl FieldInput<'_> {
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    pub fn is_reflected(&self) -> bool {
        self.directive != Some(Directive::Skip)
    }

    /// The field's annotations rendered as a raw `key:"value"` tag string.
    pub fn raw_tags(&self) -> String {
        let directive = self
            .directive
            .map(|directive| (DIRECTIVE_KEY.to_string(), directive.tag_value().to_string()));
        self.tags
            .iter()
            .cloned()
            .chain(directive)
            .map(|(key, value)| format!("{key}:{}", quote_tag_value(&value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub(crate) fn parse_record(input: &DeriveInput) -> syn::Result<RecordInput<'_>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect can only be derived for structs",
            ));
        }
    };

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Reflect cannot be derived for structs with lifetime parameters",
        ));
    }

    let named = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect can only be derived for structs with named fields",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for (index, field) in named.into_iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let mut parsed = FieldInput {
            index,
            ident,
            ty: &field.ty,
            exported: matches!(field.vis, Visibility::Public(_)),
            tags: Vec::new(),
            directive: None,
        };
        for attr in &field.attrs {
            if attr.path().is_ident("tags") {
                parse_tags_meta(attr, &mut parsed)?;
            } else if attr.path().is_ident("reflectz") {
                parse_reflectz_meta(attr, &mut parsed)?;
            }
        }
        if parsed.directive.is_some() && parsed.tags.iter().any(|(key, _)| key == DIRECTIVE_KEY) {
            return Err(syn::Error::new_spanned(
                ident,
                "field has both #[reflectz(...)] and a `reflectz` tag; hint: keep only one",
            ));
        }
        fields.push(parsed);
    }

    Ok(RecordInput {
        ident: &input.ident,
        generics: &input.generics,
        fields,
    })
}

fn parse_tags_meta(attr: &Attribute, out: &mut FieldInput<'_>) -> syn::Result<()> {
    for meta in parse_meta_list(attr)? {
        match meta {
            Meta::NameValue(meta) => {
                let Some(key) = meta.path.get_ident() else {
                    return Err(syn::Error::new_spanned(
                        &meta.path,
                        "tag keys must be plain identifiers",
                    ));
                };
                let key = key.unraw().to_string();
                if out.tags.iter().any(|(existing, _)| *existing == key) {
                    return Err(syn::Error::new_spanned(
                        &meta.path,
                        format!("duplicate tag `{key}`"),
                    ));
                }
                let value = parse_string_expr(&meta.value, meta.value.span())?;
                out.tags.push((key, value));
            }
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected `key = \"value\"`; hint: #[tags(json = \"id\")]",
                ));
            }
        }
    }
    Ok(())
}

fn parse_reflectz_meta(attr: &Attribute, out: &mut FieldInput<'_>) -> syn::Result<()> {
    for meta in parse_meta_list(attr)? {
        let directive = match &meta {
            Meta::Path(path) if path.is_ident("skip") => Directive::Skip,
            Meta::Path(path) if path.is_ident("nodive") => Directive::NoDive,
            _ => {
                return Err(syn::Error::new_spanned(meta, UNSUPPORTED_REFLECTZ_ATTR_HINT));
            }
        };
        match out.directive {
            None => out.directive = Some(directive),
            Some(existing) if existing == directive => {
                return Err(syn::Error::new_spanned(meta, "duplicate reflectz directive"));
            }
            Some(_) => {
                return Err(syn::Error::new_spanned(
                    meta,
                    "`skip` and `nodive` cannot be combined",
                ));
            }
        }
    }
    Ok(())
}

fn parse_meta_list(attr: &Attribute) -> syn::Result<Vec<Meta>> {
    let metas = attr
        .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)?;
    Ok(metas.into_iter().collect())
}

fn parse_string_expr(expr: &Expr, span: Span) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) => Ok(value.value()),
        _ => Err(syn::Error::new(
            span,
            "expected string literal; hint: wrap the value in quotes",
        )),
    }
}

fn quote_tag_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
