//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return syn::Error::new_spanned(name, "Lenses can only be derived for structs, not enums.")
                .to_compile_error();
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(name, "Lenses cannot be derived for unions.")
                .to_compile_error();
        }
    };

    let Fields::Named(named_fields) = fields else {
        return syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields.",
        )
        .to_compile_error();
    };

    let lens_methods: Vec<TokenStream2> = named_fields.named.iter().filter_map(lens_method).collect();
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    }
}

fn lens_method(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_lens", field_name);
    let doc = format!("Returns a lens focusing on the `{field_name}` field.");

    Some(quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::functools::optics::Lens<Self, #field_type> + ::core::clone::Clone
        where
            #field_type: ::core::clone::Clone,
        {
            ::functools::optics::FunctionLens::new(
                |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                |value: #field_type, mut source: Self| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}
