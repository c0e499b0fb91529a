use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

fn compile_error(span: Span, message: &str) -> TokenStream {
    quote_spanned! {span=>
        compile_error!(#message);
    }
    .into()
}

/// Generate a notation model from a struct with exactly three named fields.
///
/// The fields are made public and the struct gets the common derives, a
/// `new` constructor taking the fields in declaration order and conversions
/// to and from a tuple of the three field types.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return compile_error(
            input.fields.span(),
            "Models must have exactly 3 fields, one for each component of the notation.",
        );
    }

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return compile_error(input.fields.span(), "Model fields must be named.");
    }

    if !input.generics.params.is_empty() {
        return compile_error(input.generics.span(), "Models can not be generic.");
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let (field1, field2, field3) = (&field_names[0], &field_names[1], &field_names[2]);
    let (type1, type2, type3) = (&field_types[0], &field_types[1], &field_types[2]);

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new model from its three components.
            pub fn new(#field1: #type1, #field2: #type2, #field3: #type3) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }
        }

        impl From<(#type1, #type2, #type3)> for #struct_name {
            fn from(value: (#type1, #type2, #type3)) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for (#type1, #type2, #type3) {
            fn from(value: #struct_name) -> Self {
                (value.#field1, value.#field2, value.#field3)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
