// File: form-builder-derive/src/form.rs
// Purpose: Form derive macro and `#[form("...")]` attribute processing

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse_quote, Attribute, Data, DeriveInput, Fields, GenericParam, LitStr, Visibility,
};

/// Read the raw tag from a field's `#[form("...")]` attribute
pub fn extract_form_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut tag: Option<LitStr> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("form")) {
        if tag.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[form] attribute; combine clauses with `;`",
            ));
        }
        tag = Some(attr.parse_args::<LitStr>()?);
    }

    Ok(tag)
}

pub fn impl_form(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Form only supports structs with named fields",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "Form only supports structs")),
    };

    let mut members = Vec::new();

    for field in fields {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let member_name = field_ident.to_string();
        let member_name = member_name.strip_prefix("r#").unwrap_or(&member_name);

        let tag = match extract_form_tag(&field.attrs)? {
            Some(lit) => quote! { ::core::option::Option::Some(#lit) },
            None => quote! { ::core::option::Option::None },
        };

        members.push(match field.vis {
            Visibility::Public(_) => quote! {
                ::form_builder::Member::public(
                    #member_name,
                    #tag,
                    ::form_builder::FormValue::form_node(&self.#field_ident),
                )
            },
            _ => quote! {
                ::form_builder::Member::private(#member_name, #tag)
            },
        });
    }

    // Every type parameter must itself be usable as a member value.
    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::form_builder::FormValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::form_builder::Introspectable for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn members(&self) -> ::std::vec::Vec<::form_builder::Member<'_>> {
                ::std::vec![#(#members),*]
            }
        }

        impl #impl_generics ::form_builder::FormValue for #name #ty_generics #where_clause {
            fn form_node(&self) -> ::form_builder::Node<'_> {
                ::form_builder::Node::Record(self)
            }

            fn into_node(self) -> ::form_builder::Node<'static>
            where
                Self: ::core::marker::Sized + 'static,
            {
                ::form_builder::Node::Synthesized(::std::boxed::Box::new(self))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_form_tag() {
        let input: DeriveInput = parse_quote! {
            struct Signup {
                #[form("label=Full Name;type=text")]
                pub name: String,
                pub email: String,
            }
        };
        let Data::Struct(data) = &input.data else {
            panic!("expected struct");
        };
        let tags: Vec<_> = data
            .fields
            .iter()
            .map(|f| extract_form_tag(&f.attrs).unwrap().map(|lit| lit.value()))
            .collect();

        assert_eq!(tags, vec![Some("label=Full Name;type=text".to_string()), None]);
    }

    #[test]
    fn test_duplicate_form_attribute_is_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Signup {
                #[form("label=Name")]
                #[form("type=text")]
                pub name: String,
            }
        };
        let err = impl_form(&input).unwrap_err();
        assert!(err.to_string().contains("duplicate #[form] attribute"));
    }

    #[test]
    fn test_enum_is_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Choice { A, B }
        };
        let err = impl_form(&input).unwrap_err();
        assert_eq!(err.to_string(), "Form only supports structs");
    }

    #[test]
    fn test_tuple_struct_is_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Pair(pub String, pub String);
        };
        let err = impl_form(&input).unwrap_err();
        assert_eq!(err.to_string(), "Form only supports structs with named fields");
    }

    #[test]
    fn test_private_fields_are_not_read() {
        let input: DeriveInput = parse_quote! {
            struct Login {
                pub user: String,
                pub(crate) token: String,
                secret: String,
            }
        };
        let tokens = impl_form(&input).unwrap().to_string();

        assert!(tokens.contains("self . user"));
        assert!(!tokens.contains("self . token"));
        assert!(!tokens.contains("self . secret"));
    }

    #[test]
    fn test_raw_identifier_member_name() {
        let input: DeriveInput = parse_quote! {
            struct Input {
                pub r#type: String,
            }
        };
        let tokens = impl_form(&input).unwrap().to_string();
        assert!(tokens.contains("\"type\""));
    }
}
