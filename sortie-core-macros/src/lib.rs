use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// `Debug` derive for structs holding closures or transports.
///
/// Fields tagged `#[opaque]` are printed as `<opaque>` so the field still shows
/// up in the output without requiring `Debug` on its type.
#[proc_macro_derive(OpaqueDebug, attributes(opaque))]
pub fn derive_opaque_debug(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident.clone();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match input.data {
        Data::Struct(ref data) => {
            struct_debug(&name, (impl_generics, ty_generics, where_clause), data)
        }
        Data::Enum(_) | Data::Union(_) => {
            return syn::Error::new_spanned(name, "OpaqueDebug derive only supports structs")
                .to_compile_error()
                .into();
        }
    };

    body.into()
}

fn is_opaque(field: &syn::Field) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident("opaque"))
}

fn struct_debug(
    name: &syn::Ident,
    generics: (
        syn::ImplGenerics<'_>,
        syn::TypeGenerics<'_>,
        Option<&syn::WhereClause>,
    ),
    data: &syn::DataStruct,
) -> proc_macro2::TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics;
    match &data.fields {
        Fields::Named(fields) => {
            let writers: Vec<_> = fields
                .named
                .iter()
                .map(|f| {
                    let ident = f.ident.as_ref().unwrap();
                    if is_opaque(f) {
                        quote! { .field(stringify!(#ident), &format_args!("<opaque>")) }
                    } else {
                        quote! { .field(stringify!(#ident), &self.#ident) }
                    }
                })
                .collect();
            quote! {
                impl #impl_generics std::fmt::Debug for #name #ty_generics #where_clause {
                    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        f.debug_struct(stringify!(#name))
                            #(#writers)*
                            .finish()
                    }
                }
            }
        }
        Fields::Unnamed(fields) => {
            let elems: Vec<_> = fields
                .unnamed
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    let idx = syn::Index::from(i);
                    if is_opaque(f) {
                        quote! { d.field(&format_args!("<opaque>")); }
                    } else {
                        quote! { d.field(&self.#idx); }
                    }
                })
                .collect();
            quote! {
                impl #impl_generics std::fmt::Debug for #name #ty_generics #where_clause {
                    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        let mut d = f.debug_tuple(stringify!(#name));
                        #(#elems)*
                        d.finish()
                    }
                }
            }
        }
        Fields::Unit => {
            quote! {
                impl #impl_generics std::fmt::Debug for #name #ty_generics #where_clause {
                    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        f.write_str(stringify!(#name))
                    }
                }
            }
        }
    }
}
