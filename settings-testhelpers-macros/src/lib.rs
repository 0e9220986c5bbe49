use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    struct UntilFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct UntilBody {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct Body {
        items: BraceGroup,
    }

    struct FunctionDecl {
        until_fn: UntilFn, _fn: KFn, name: Ident,
        until_body: UntilBody, body: Body
    }
}

impl quote::ToTokens for UntilFn {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for UntilBody {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Body {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        tokens.extend(self.items.0.stream())
    }
}

/// `#[test]` that installs the tracing subscriber of `settings-testhelpers`
/// before running the body.
///
/// ```ignore
/// use settings_testhelpers::test;
///
/// #[test]
/// fn resolves_nested_key() {
///     // trace! and debug! events from the crates under test are printed
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut i = item.to_token_iter();
    let FunctionDecl {
        until_fn,
        _fn,
        name,
        until_body,
        body,
    } = match i.parse::<FunctionDecl>() {
        Ok(fdecl) => fdecl,
        Err(err) => {
            let message = format!("#[settings_testhelpers::test] expects a function: {err:?}");
            return quote::quote! { ::core::compile_error!(#message); }.into();
        }
    };

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #until_fn fn #name #until_body {
            ::settings_testhelpers::setup();

            #body
        }
    }
    .into()
}
