use core::fmt;

use settings_core::{ScalarType, Shape};
use settings_reflect::ReflectError;

use crate::{ConvertError, ConvertFailure};

/// An error that aborted deserialization
#[derive(Debug, Clone)]
pub struct DeserializeError {
    /// The specific error that occurred
    pub kind: DeserializeErrorKind,
}

/// What went wrong while deserializing settings
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum DeserializeErrorKind {
    /// No mapping was given at all
    MissingSettings,

    /// A key resolved to a scalar member, but its value can't be converted
    /// to the member's type
    InvalidValue {
        /// The full dot-path
        key: String,
        /// The raw value
        value: String,
        /// The member's scalar type (the `T` of an `Option<T>` member)
        expected: ScalarType,
        /// Why the conversion failed
        reason: ConvertFailure,
    },

    /// A key resolved to a member that holds a struct, which can't be
    /// assigned from text
    Unsupported {
        /// The full dot-path
        key: String,
        /// The raw value
        value: String,
        /// The member's shape
        shape: &'static Shape,
    },

    /// Generic reflection error: something went wrong
    Reflect(ReflectError),
}

impl DeserializeError {
    pub(crate) fn invalid_value(key: &str, err: ConvertError) -> Self {
        DeserializeErrorKind::InvalidValue {
            key: key.to_string(),
            value: err.value,
            expected: err.expected,
            reason: err.reason,
        }
        .into()
    }
}

impl From<DeserializeErrorKind> for DeserializeError {
    fn from(kind: DeserializeErrorKind) -> Self {
        Self { kind }
    }
}

impl From<ReflectError> for DeserializeError {
    fn from(err: ReflectError) -> Self {
        DeserializeErrorKind::Reflect(err).into()
    }
}

impl fmt::Display for DeserializeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeserializeErrorKind::MissingSettings => write!(f, "no settings were provided"),
            DeserializeErrorKind::InvalidValue {
                key,
                value,
                expected,
                reason,
            } => write!(
                f,
                "invalid value for `{key}`: `{value}` can't be converted to `{expected}`: {reason}"
            ),
            DeserializeErrorKind::Unsupported { key, value, shape } => write!(
                f,
                "invalid value for `{key}`: `{value}` can't be converted to `{shape}`"
            ),
            DeserializeErrorKind::Reflect(err) => write!(f, "reflection error: {err}"),
        }
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl core::error::Error for DeserializeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            DeserializeErrorKind::Reflect(err) => Some(err),
            _ => None,
        }
    }
}
