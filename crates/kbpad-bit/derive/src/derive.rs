use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitInt};

const MAX_POSITION: u32 = 63;

pub(crate) fn handle_derive_bit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            Span::call_site(),
            "Bit can be derived only for enums",
        ));
    };

    let mut next = 0u32;
    let mut arms = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Bit supports only fieldless enum variants",
            ));
        }
        let position = explicit_position(&variant.attrs)?.unwrap_or(next);
        if position > MAX_POSITION {
            return Err(syn::Error::new_spanned(
                variant,
                format!("bit position {position} does not fit into 64 bits"),
            ));
        }
        let ident = &variant.ident;
        arms.push(quote! { #name::#ident => #position });
        next = position + 1;
    }

    Ok(quote! {
        impl ::kbpad_bit_mask::Bitable for #name {
            #[inline]
            fn bit(&self) -> u64 {
                1u64 << ::kbpad_bit_mask::Bitable::index(self)
            }

            #[inline]
            fn index(&self) -> u32 {
                match self { #( #arms, )* }
            }
        }
    })
}

fn explicit_position(attrs: &[Attribute]) -> syn::Result<Option<u32>> {
    for attr in attrs {
        if attr.path().is_ident("bit") {
            let lit: LitInt = attr.parse_args()?;
            return lit.base10_parse().map(Some);
        }
    }
    Ok(None)
}
