#![doc = include_str!("../README.md")]

mod rename_rule;
pub(crate) use rename_rule::RenameRule;

mod unescaping;

mod parsed;
pub(crate) use parsed::*;

mod emit;

/// Derives `Settings`: a static table of the struct's named fields (their
/// key names, shapes and offsets) so values can be assigned by dot-path.
///
/// Container attribute: `#[settings(rename_all = "PascalCase")]`.
/// Field attributes: `#[settings(rename = "Name")]`, `#[settings(skip)]`.
#[proc_macro_derive(Settings, attributes(settings))]
pub fn settings_macros(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    emit::settings_macros(input.into()).into()
}
