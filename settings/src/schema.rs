//! The keys a settings model accepts.

use settings_core::{Def, ScalarType, Settings, Shape};

/// A dot-path that resolves to a leaf member of a settings model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    /// The full dot-path, e.g. `Address.Country.CountryCode`
    pub path: String,
    /// Declared shape of the member (may be an `Option`)
    pub shape: &'static Shape,
    /// Scalar type a value is converted to, if the member holds a scalar
    /// or an `Option` of one
    pub scalar: Option<ScalarType>,
    /// Doc comment lines of the member
    pub doc: &'static [&'static str],
}

/// Lists every leaf dot-path of `T`, in declaration order.
///
/// Plain and optional struct members are expanded into their own members.
pub fn keys<T: Settings>() -> Vec<KeyInfo> {
    let mut keys = Vec::new();
    collect(T::SHAPE, "", &mut keys);
    keys
}

fn collect(shape: &'static Shape, prefix: &str, keys: &mut Vec<KeyInfo>) {
    let Some(st) = shape.struct_type() else {
        return;
    };
    for field in st.fields {
        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{prefix}.{}", field.name)
        };
        let field_shape = field.shape();
        let (nested, scalar) = match field_shape.def {
            Def::Struct(_) => (Some(field_shape), None),
            Def::Option(od) => match od.t().def {
                Def::Struct(_) => (Some(od.t()), None),
                _ => (None, od.t().scalar_type()),
            },
            Def::Scalar(scalar) => (None, Some(scalar)),
        };

        match nested {
            Some(nested) => collect(nested, &path, keys),
            None => keys.push(KeyInfo {
                path,
                shape: field_shape,
                scalar,
                doc: field.doc,
            }),
        }
    }
}
