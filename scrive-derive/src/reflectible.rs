// Copyright 2026 the Scrive Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Expansion of `#[derive(Reflectible)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataStruct, DeriveInput, Fields, Path};

struct ContainerAttrs {
    policy: Option<Path>,
    write_only: bool,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
        let mut parsed = ContainerAttrs {
            policy: None,
            write_only: false,
        };
        for attr in attrs {
            if !attr.path().is_ident("scrive") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("policy") {
                    parsed.policy = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("write_only") {
                    parsed.write_only = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `policy = ...` or `write_only`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
        let mut parsed = FieldAttrs {
            rename: None,
            skip: false,
        };
        for attr in attrs {
            if !attr.path().is_ident("scrive") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let name: syn::LitStr = meta.value()?.parse()?;
                    parsed.rename = Some(name.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"` or `skip`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Reflectible)] supports structs with named fields",
            ))
        }
    };

    let container = ContainerAttrs::parse(&input.attrs)?;
    let policy = container
        .policy
        .map(|path| quote!(#path))
        .unwrap_or_else(|| quote!(::scrive_core::policy::Json));
    let mode = if container.write_only {
        quote!(::scrive_core::mode::WriteOnly)
    } else {
        quote!(::scrive_core::mode::ReadWrite)
    };

    let mut descriptors = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        // Named-fields variant guarantees the ident.
        let ident = field.ident.as_ref().expect("named field");
        let ty = &field.ty;
        let name = attrs.rename.unwrap_or_else(|| ident.to_string());
        descriptors.push(if container.write_only {
            quote! {
                .field(#name, |value: &Self| &value.#ident)
            }
        } else {
            quote! {
                .field(
                    #name,
                    |value: &Self| &value.#ident,
                    |value: &mut Self, parsed: #ty| value.#ident = parsed,
                )
            }
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // A static inside a generic impl would be shared across
    // monomorphizations; generic types re-enter the idempotent
    // register call instead of caching the handle.
    let registry_body = if input.generics.params.is_empty() {
        quote! {
            static HANDLE: ::std::sync::OnceLock<&'static ::scrive_core::Registry<#ident>> =
                ::std::sync::OnceLock::new();
            *HANDLE.get_or_init(::scrive_core::registry::register_reflectible::<#ident>)
        }
    } else {
        quote! {
            ::scrive_core::registry::register_reflectible::<Self>()
        }
    };

    let parse_impl = if container.write_only {
        TokenStream::new()
    } else {
        quote! {
            impl #impl_generics ::scrive_core::Parse<#policy> for #ident #ty_generics #where_clause {
                fn parse(
                    src: &mut ::scrive_core::Source<'_>,
                ) -> ::std::result::Result<Self, ::scrive_core::Error> {
                    let mut value = <Self as ::std::default::Default>::default();
                    ::scrive_core::engine::parse_with(
                        <Self as ::scrive_core::Serializable>::registry(),
                        &mut value,
                        src,
                    )?;
                    ::std::result::Result::Ok(value)
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::scrive_core::Reflectible for #ident #ty_generics #where_clause {
            type Policy = #policy;
            type Mode = #mode;

            fn reflect_fields() -> ::scrive_core::Fields<Self, #policy, #mode> {
                ::scrive_core::Fields::<Self, #policy, #mode>::with_policy()
                    #(#descriptors)*
            }
        }

        impl #impl_generics ::scrive_core::Serializable for #ident #ty_generics #where_clause {
            fn registry() -> &'static ::scrive_core::Registry<Self> {
                #registry_body
            }
        }

        impl #impl_generics ::scrive_core::Render<#policy> for #ident #ty_generics #where_clause {
            fn render(&self, out: &mut ::std::string::String) {
                ::scrive_core::engine::serialize_with(
                    <Self as ::scrive_core::Serializable>::registry(),
                    self,
                    out,
                );
            }
        }

        #parse_impl
    })
}
