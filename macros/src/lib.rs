use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Parser;

/// Generate a three component model. All three fields must share one type.
///
/// The generated code adds the common derives, makes the fields public and
/// implements `new`, `to_array`, `map` and conversions from and to `[T; 3]`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field_ty = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .next()
        .unwrap();
    if input.fields.iter().any(|f| f.ty != field_ty) {
        return quote! {
            compile_error!("All 3 fields of a model must have the same type.")
        }
        .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl: TokenStream2 = quote! {
        impl #struct_name {
            /// Create a new model from its three components.
            pub fn new(#field1: #field_ty, #field2: #field_ty, #field3: #field_ty) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components in declaration order.
            pub fn to_array(&self) -> [#field_ty; 3] {
                [self.#field1, self.#field2, self.#field3]
            }

            /// Return a new model with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(#field_ty) -> #field_ty) -> Self {
                Self::new(f(self.#field1), f(self.#field2), f(self.#field3))
            }
        }

        impl From<[#field_ty; 3]> for #struct_name {
            fn from(value: [#field_ty; 3]) -> Self {
                let [a, b, c] = value;
                Self::new(a, b, c)
            }
        }

        impl From<#struct_name> for [#field_ty; 3] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
