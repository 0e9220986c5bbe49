use core::any::TypeId;
use core::fmt;

use super::{Field, OptionDef, StructType};
use crate::ScalarType;

/// TypeId equivalent usable in const contexts.
#[derive(Copy, Clone)]
pub struct ConstTypeId {
    type_id_fn: fn() -> TypeId,
}

impl ConstTypeId {
    /// Create a [`ConstTypeId`] for a type.
    #[must_use]
    pub const fn of<T: ?Sized + 'static>() -> Self {
        ConstTypeId {
            type_id_fn: TypeId::of::<T>,
        }
    }

    /// Get the underlying [`TypeId`] for this `ConstTypeId`.
    #[inline]
    pub fn get(self) -> TypeId {
        (self.type_id_fn)()
    }
}

impl fmt::Debug for ConstTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl PartialEq for ConstTypeId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for ConstTypeId {}

/// Schema for a reflected type: its identity, its name, and how its values
/// are laid out.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    /// Unique type identifier
    pub id: ConstTypeId,

    /// Name of the type without generic parameters, e.g. `Option` or `Address`
    pub type_identifier: &'static str,

    /// What kind of value this is
    pub def: Def,
}

/// The definition of a shape: scalar, struct or option.
#[derive(Clone, Copy, Debug)]
pub enum Def {
    /// A leaf value that can be converted from text
    Scalar(ScalarType),

    /// A struct with named fields
    Struct(StructType),

    /// `Option<T>`
    Option(OptionDef),
}

impl Shape {
    /// Returns true if this shape describes exactly the type `T`
    #[inline]
    pub fn is_type<T: 'static>(&self) -> bool {
        self.id.get() == TypeId::of::<T>()
    }

    /// Returns true if both shapes describe the same type
    #[inline]
    pub fn is_shape(&self, other: &Shape) -> bool {
        self.id == other.id
    }

    /// Get the scalar type if this shape represents a scalar.
    #[inline]
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.def {
            Def::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the struct definition, if this is a struct
    #[inline]
    pub fn struct_type(&self) -> Option<&StructType> {
        match &self.def {
            Def::Struct(st) => Some(st),
            _ => None,
        }
    }

    /// Looks up a field of a struct shape by its exact, case-sensitive name.
    ///
    /// Returns `None` for non-struct shapes.
    pub fn field(&self, name: &str) -> Option<(usize, &'static Field)> {
        match self.def {
            Def::Struct(st) => st.field(name),
            _ => None,
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.is_shape(other)
    }
}

impl Eq for Shape {}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.def {
            Def::Option(od) => write!(f, "Option<{}>", od.t()),
            _ => f.write_str(self.type_identifier),
        }
    }
}
