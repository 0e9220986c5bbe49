//! Scalar type identification for shapes.

use alloc::string::String;
use core::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// All scalar types a settings model can declare.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[non_exhaustive]
pub enum ScalarType {
    /// Primitive type `bool`.
    Bool,
    /// Primitive type `char`.
    Char,
    /// `alloc::string::String`.
    String,
    /// Primitive type `i8`.
    I8,
    /// Primitive type `i16`.
    I16,
    /// Primitive type `i32`.
    I32,
    /// Primitive type `i64`.
    I64,
    /// Primitive type `u8`.
    U8,
    /// Primitive type `u16`.
    U16,
    /// Primitive type `u32`.
    U32,
    /// Primitive type `u64`.
    U64,
    /// Primitive type `f32`.
    F32,
    /// Primitive type `f64`.
    F64,
    /// `rust_decimal::Decimal`.
    Decimal,
    /// `chrono::NaiveDate`.
    NaiveDate,
    /// `chrono::NaiveDateTime`.
    NaiveDateTime,
}

impl ScalarType {
    /// Rust name of the type
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Char => "char",
            ScalarType::String => "String",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::U8 => "u8",
            ScalarType::U16 => "u16",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::Decimal => "Decimal",
            ScalarType::NaiveDate => "NaiveDate",
            ScalarType::NaiveDateTime => "NaiveDateTime",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An owned scalar value, produced by converting a raw setting string and
/// ready to be written into a field of the matching [`ScalarType`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    /// `bool`
    Bool(bool),
    /// `char`
    Char(char),
    /// `String`
    String(String),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// `Decimal`
    Decimal(Decimal),
    /// `NaiveDate`
    NaiveDate(NaiveDate),
    /// `NaiveDateTime`
    NaiveDateTime(NaiveDateTime),
}

impl ScalarValue {
    /// The scalar type of this value
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarValue::Bool(_) => ScalarType::Bool,
            ScalarValue::Char(_) => ScalarType::Char,
            ScalarValue::String(_) => ScalarType::String,
            ScalarValue::I16(_) => ScalarType::I16,
            ScalarValue::I32(_) => ScalarType::I32,
            ScalarValue::I64(_) => ScalarType::I64,
            ScalarValue::F32(_) => ScalarType::F32,
            ScalarValue::F64(_) => ScalarType::F64,
            ScalarValue::Decimal(_) => ScalarType::Decimal,
            ScalarValue::NaiveDate(_) => ScalarType::NaiveDate,
            ScalarValue::NaiveDateTime(_) => ScalarType::NaiveDateTime,
        }
    }
}
