use alloc::string::String;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::{ConstTypeId, Def, ScalarType, Settings, Shape};

macro_rules! impl_scalar {
    ($($ty:ty => $scalar:ident, $name:literal;)*) => {
        $(
            unsafe impl Settings for $ty {
                const SHAPE: &'static Shape = &const {
                    Shape {
                        id: ConstTypeId::of::<$ty>(),
                        type_identifier: $name,
                        def: Def::Scalar(ScalarType::$scalar),
                    }
                };
            }
        )*
    };
}

impl_scalar! {
    bool => Bool, "bool";
    char => Char, "char";
    String => String, "String";
    i8 => I8, "i8";
    i16 => I16, "i16";
    i32 => I32, "i32";
    i64 => I64, "i64";
    u8 => U8, "u8";
    u16 => U16, "u16";
    u32 => U32, "u32";
    u64 => U64, "u64";
    f32 => F32, "f32";
    f64 => F64, "f64";
}

// chrono and rust_decimal: the date/time and exact decimal kinds
impl_scalar! {
    Decimal => Decimal, "Decimal";
    NaiveDate => NaiveDate, "NaiveDate";
    NaiveDateTime => NaiveDateTime, "NaiveDateTime";
}
