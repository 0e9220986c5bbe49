use proc_macro2::{Literal, TokenStream};
use quote::{quote, quote_spanned};

use crate::{PStruct, parse_struct};

/// Entry point for `#[derive(Settings)]`, on `proc_macro2` tokens
pub fn settings_macros(input: TokenStream) -> TokenStream {
    match parse_struct(input) {
        Ok(parsed) => emit_struct(&parsed),
        Err(err) => {
            let message = err.message;
            quote_spanned! { err.span =>
                ::core::compile_error!(#message);
            }
        }
    }
}

fn emit_struct(parsed: &PStruct) -> TokenStream {
    let name = &parsed.name;
    let type_identifier = Literal::string(&name.to_string());

    let fields = parsed.fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        let effective = Literal::string(&field.effective);
        let doc = field.doc.iter().map(|line| Literal::string(line));
        quote! {
            ::settings::Field {
                name: #effective,
                shape: ::settings::shape_of::<#ty>,
                offset: ::core::mem::offset_of!(#name, #ident),
                doc: &[#(#doc),*],
            }
        }
    });

    let fields = if parsed.fields.is_empty() {
        quote! { &[] }
    } else {
        quote! { &const { [#(#fields),*] } }
    };

    quote! {
        #[automatically_derived]
        unsafe impl ::settings::Settings for #name {
            const SHAPE: &'static ::settings::Shape = &const {
                ::settings::Shape {
                    id: ::settings::ConstTypeId::of::<#name>(),
                    type_identifier: #type_identifier,
                    def: ::settings::Def::Struct(::settings::StructType {
                        fields: #fields,
                    }),
                }
            };
        }
    }
}
