use alloc::string::String;

use settings_core::{ScalarType, Shape};

/// Errors that can occur when reflecting on types.
#[derive(Debug, Clone, PartialEq)]
pub enum ReflectError {
    /// Tried to get or set a value through a handle of a different type,
    /// e.g. we were manipulating a `String`, but `.set()` was called with an
    /// `i32`.
    WrongShape {
        /// The expected shape of the value.
        expected: &'static Shape,
        /// The actual shape of the value.
        actual: &'static Shape,
    },

    /// Tried to write a scalar of one kind into a value of another kind.
    WrongScalar {
        /// The scalar type of the destination
        expected: ScalarType,
        /// The scalar type of the value being written
        actual: ScalarType,
    },

    /// Attempted to perform an operation that expected a struct, an option or
    /// a scalar on a value that is something else.
    WasNotA {
        /// The kind of value that was expected
        expected: &'static str,
        /// The actual shape of the value
        actual: &'static Shape,
    },

    /// No field with that name exists on the struct
    NoSuchField {
        /// The struct that was searched
        shape: &'static Shape,
        /// The requested field name
        name: String,
    },

    /// Field index is past the end of the struct's field table
    FieldOutOfBounds {
        /// The struct that was indexed
        shape: &'static Shape,
        /// The requested index
        index: usize,
    },
}

impl core::fmt::Display for ReflectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReflectError::WrongShape { expected, actual } => {
                write!(f, "Wrong shape: expected {expected}, but got {actual}")
            }
            ReflectError::WrongScalar { expected, actual } => {
                write!(f, "Wrong scalar: expected {expected}, but got {actual}")
            }
            ReflectError::WasNotA { expected, actual } => {
                write!(f, "Was not a {expected}: {actual}")
            }
            ReflectError::NoSuchField { shape, name } => {
                write!(f, "No field named {name:?} on {shape}")
            }
            ReflectError::FieldOutOfBounds { shape, index } => {
                write!(f, "Field index {index} is out of bounds for {shape}")
            }
        }
    }
}

impl core::error::Error for ReflectError {}
