//! `SpecimenModel` derive implementation
//!
//! One derive generates everything an entity needs: the descriptor table,
//! the dynamic value accessors, row decoding, and the example companion.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::attributes;
use crate::type_conversion;

pub fn derive_specimen_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let model_ident = &input.ident;
    let vis = &input.vis;

    let table_name = attributes::extract_table_name(&input.attrs).ok_or_else(|| {
        syn::Error::new_spanned(
            model_ident,
            "SpecimenModel requires a #[table_name = \"...\"] attribute",
        )
    })?;

    let fields = match &input.data {
        Data::Struct(syn::DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                model_ident,
                "SpecimenModel can only be derived for structs with named fields",
            ));
        }
    };
    if fields.is_empty() {
        return Err(syn::Error::new_spanned(
            model_ident,
            "SpecimenModel requires at least one field",
        ));
    }

    let mut descriptors = Vec::new();
    let mut get_arms = Vec::new();
    let mut to_values_items = Vec::new();
    let mut from_values_fields = Vec::new();
    let mut from_row_fields = Vec::new();
    let mut example_decls = Vec::new();
    let mut example_items = Vec::new();

    for field in fields {
        let ident = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "SpecimenModel fields must be named")
        })?;
        let name = ident.to_string();
        let ty = &field.ty;
        let primary = attributes::has_attribute(field, "primary_key");
        let column_name = attributes::extract_column_name(field);
        let example_ty = type_conversion::example_inner(ty);

        let column_tokens = match &column_name {
            Some(alias) => quote! { ::std::option::Option::Some(#alias) },
            None => quote! { ::std::option::Option::None },
        };
        descriptors.push(quote! {
            ::specimen::FieldDescriptor {
                name: #name,
                column_name: #column_tokens,
                primary_key: #primary,
            }
        });

        get_arms.push(quote! {
            #name => ::std::option::Option::Some(
                ::specimen::sea_query::Value::from(self.#ident.clone())
            ),
        });

        to_values_items.push(quote! {
            (#name, ::specimen::sea_query::Value::from(self.#ident.clone())),
        });

        from_values_fields.push(quote! {
            #ident: ::specimen::decode_field::<#ty>(values, #table_name, #name)?,
        });

        from_row_fields.push(quote! {
            #ident: row.try_get(#name)?,
        });

        example_decls.push(quote! {
            pub #ident: ::std::option::Option<#example_ty>,
        });

        example_items.push(quote! {
            (
                #name,
                self.#ident
                    .clone()
                    .map(::specimen::sea_query::Value::from),
            ),
        });
    }

    let example_ident = format_ident!("{}Example", model_ident);
    let example_doc = format!(
        "Example companion for [`{model_ident}`]: present (`Some`) fields become equality filter terms."
    );

    Ok(quote! {
        impl ::specimen::ModelTrait for #model_ident {
            const TABLE: &'static str = #table_name;

            const FIELDS: &'static [::specimen::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            fn get(&self, field: &str) -> ::std::option::Option<::specimen::sea_query::Value> {
                match field {
                    #(#get_arms)*
                    _ => ::std::option::Option::None,
                }
            }

            fn to_values(&self) -> ::std::vec::Vec<(&'static str, ::specimen::sea_query::Value)> {
                ::std::vec![
                    #(#to_values_items)*
                ]
            }

            fn from_values(
                values: &::std::collections::HashMap<
                    ::std::string::String,
                    ::specimen::sea_query::Value,
                >,
            ) -> ::std::result::Result<Self, ::specimen::DecodeError> {
                ::std::result::Result::Ok(Self {
                    #(#from_values_fields)*
                })
            }
        }

        impl ::specimen::FromRow for #model_ident {
            fn from_row(
                row: &::specimen::may_postgres::Row,
            ) -> ::std::result::Result<Self, ::specimen::may_postgres::Error> {
                ::std::result::Result::Ok(Self {
                    #(#from_row_fields)*
                })
            }
        }

        #[doc = #example_doc]
        #[derive(Clone, Debug, Default)]
        #vis struct #example_ident {
            #(#example_decls)*
        }

        impl ::specimen::ExampleTrait for #example_ident {
            type Model = #model_ident;

            fn fields(
                &self,
            ) -> ::std::vec::Vec<(
                &'static str,
                ::std::option::Option<::specimen::sea_query::Value>,
            )> {
                ::std::vec![
                    #(#example_items)*
                ]
            }
        }

        impl #model_ident {
            /// Blank example for this entity (no fields present)
            pub fn example() -> #example_ident {
                <#example_ident as ::std::default::Default>::default()
            }
        }
    })
}
