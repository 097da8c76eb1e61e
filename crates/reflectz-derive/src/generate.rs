//! `Reflect` and `Record` impl generation for `#[derive(Reflect)]`.

use proc_macro2::{Literal, Span, TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{Ident, LitStr, Path, Type};

use crate::attrs::{FieldInput, RecordInput};

pub(crate) fn generate(record: &RecordInput<'_>, rt: &Path) -> TokenStream {
    let struct_ident = record.ident;
    let name_lit = LitStr::new(&record.name(), Span::call_site());

    let reflected: Vec<&FieldInput<'_>> = record.fields.iter().filter(|f| f.is_reflected()).collect();

    // Parameters only used by skipped fields need no `Reflect` impl, just
    // the `'static` bound that `Any` implies.
    let mut generics = record.generics.clone();
    {
        let params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
        let where_clause = generics.make_where_clause();
        for param in params {
            let predicate: syn::WherePredicate = if reflected.iter().any(|field| mentions(field.ty, &param)) {
                syn::parse_quote!(#param: #rt::Reflect)
            } else {
                syn::parse_quote!(#param: 'static)
            };
            where_clause.predicates.push(predicate);
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let zero_entries = reflected.iter().map(|field| {
        let lit = LitStr::new(&field.name(), Span::call_site());
        let ty = field.ty;
        quote! { (#lit, <#ty as #rt::Reflect>::zero_value()) }
    });

    let value_entries = reflected.iter().map(|field| {
        let lit = LitStr::new(&field.name(), Span::call_site());
        let ident = field.ident;
        quote! { (#lit, #rt::Reflect::to_value(&self.#ident)) }
    });

    let field_metas = record.fields.iter().map(|field| field_meta(field, rt));

    let field_arms = reflected.iter().map(|field| {
        let index = Literal::usize_unsuffixed(field.index);
        let ident = field.ident;
        quote! { #index => ::core::option::Option::Some(&self.#ident) }
    });

    let field_mut_arms = reflected.iter().map(|field| {
        let index = Literal::usize_unsuffixed(field.index);
        let ident = field.ident;
        quote! { #index => ::core::option::Option::Some(&mut self.#ident) }
    });

    quote! {
        impl #impl_generics #rt::Reflect for #struct_ident #ty_generics #where_clause {
            fn kind() -> #rt::Kind {
                #rt::Kind::Struct
            }

            fn zero_value() -> #rt::Value {
                #rt::Value::Record {
                    type_name: #name_lit,
                    fields: ::std::vec![#(#zero_entries),*],
                }
            }

            fn to_value(&self) -> #rt::Value {
                #rt::Value::Record {
                    type_name: #name_lit,
                    fields: ::std::vec![#(#value_entries),*],
                }
            }

            fn as_record(&self) -> ::core::option::Option<&dyn #rt::Record> {
                ::core::option::Option::Some(self)
            }

            fn as_record_mut(&mut self) -> ::core::option::Option<&mut dyn #rt::Record> {
                ::core::option::Option::Some(self)
            }

            #rt::__reflect_dyn_methods!();
        }

        impl #impl_generics #rt::Record for #struct_ident #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #name_lit
            }

            fn fields(&self) -> ::std::vec::Vec<#rt::FieldMeta> {
                ::std::vec![#(#field_metas),*]
            }

            fn field(&self, index: usize) -> ::core::option::Option<&dyn #rt::Reflect> {
                match index {
                    #(#field_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #rt::Reflect> {
                match index {
                    #(#field_mut_arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn mentions(ty: &Type, param: &Ident) -> bool {
    fn walk(tokens: TokenStream, param: &Ident) -> bool {
        tokens.into_iter().any(|token| match token {
            TokenTree::Ident(ident) => ident == *param,
            TokenTree::Group(group) => walk(group.stream(), param),
            _ => false,
        })
    }
    walk(ty.to_token_stream(), param)
}

fn field_meta(field: &FieldInput<'_>, rt: &Path) -> TokenStream {
    let index = Literal::usize_unsuffixed(field.index);
    let ident_lit = LitStr::new(&field.name(), Span::call_site());
    let ty = field.ty;

    let type_info = if field.is_reflected() {
        quote! { <#ty as #rt::Reflect>::type_info() }
    } else {
        quote! { #rt::TypeInfo::unreflected::<#ty>() }
    };

    let mut expr = quote! { #rt::FieldMeta::new(#index, #ident_lit, #type_info) };

    let raw_tags = field.raw_tags();
    if !raw_tags.is_empty() {
        let tags_lit = LitStr::new(&raw_tags, Span::call_site());
        expr = quote! { #expr.with_tags(#rt::Tags::new(#tags_lit)) };
    }

    if field.exported {
        expr = quote! { #expr.exported() };
    }

    if !field.is_reflected() {
        expr = quote! { #expr.unreflected() };
    }

    expr
}
