//! `#[derive(Record)]` for rulecheck.
//!
//! Expands a struct with named fields into a `rulecheck::Inspect` impl that
//! lists every field in declaration order with its visibility, its
//! `validate` rule and a classified view of its value:
//!
//! ```ignore
//! #[derive(Record)]
//! pub struct User {
//!     #[validate = "len:36"]
//!     pub id: String,
//!     #[validate("min:18;max:150")]
//!     pub age: u8,
//!     nickname: String,
//! }
//! ```
//!
//! Only plain `pub` fields count as exported. A rule on a private or
//! `pub(crate)` field is accepted here and reported at validation time.
//!
//! A field typed by a generic parameter is classified from the parameter's
//! bounds, not from the type it is instantiated with. Without a bound it is
//! always reported as unsupported; bound it with `rulecheck::FieldType`:
//!
//! ```ignore
//! #[derive(Record)]
//! pub struct Measured<T: rulecheck::FieldType> {
//!     #[validate = "min:1"]
//!     pub value: T,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, Lit, LitStr,
    Meta, Visibility,
};

#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields: Vec<&Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Record needs named fields; tuple structs are not supported",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record can only be derived for structs",
            ));
        }
    };

    let descriptors = fields
        .iter()
        .map(|field| descriptor(field))
        .collect::<syn::Result<Vec<_>>>()?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::rulecheck::Inspect for #ident #ty_generics #where_clause {
            fn inspect(&self) -> ::rulecheck::Shape<'_> {
                #[allow(unused_imports)]
                use ::rulecheck::__private::{ProbeFallback as _, ProbeSupported as _};
                ::rulecheck::Shape::Record(::std::vec![#(#descriptors),*])
            }
        }
    })
}

fn descriptor(field: &Field) -> syn::Result<TokenStream2> {
    let Some(ident) = &field.ident else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let name = ident.unraw().to_string();
    let accessible = matches!(field.vis, Visibility::Public(_));
    let rule = match rule_attr(&field.attrs)? {
        Some(rule) if !rule.value().is_empty() => quote!(::core::option::Option::Some(#rule)),
        _ => quote!(::core::option::Option::None),
    };

    Ok(quote! {
        ::rulecheck::FieldDescriptor {
            name: #name,
            accessible: #accessible,
            rule: #rule,
            value: (&::rulecheck::__private::Probe(&self.#ident)).field_value(),
        }
    })
}

/// The field's rule string, from `#[validate = "..."]` or `#[validate("...")]`.
fn rule_attr(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("validate")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate `validate` attribute; join constraints with `;` instead",
            ));
        }

        let rule = match &attr.meta {
            Meta::NameValue(pair) => match &pair.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(rule),
                    ..
                }) => rule.clone(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a rule string, e.g. `#[validate = \"min:3;max:10\"]`",
                    ));
                }
            },
            Meta::List(_) => attr.parse_args::<LitStr>()?,
            Meta::Path(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "missing rule string, e.g. `#[validate(\"min:3\")]`",
                ));
            }
        };
        found = Some(rule);
    }

    Ok(found)
}
