use alloc::string::ToString;
use core::fmt;

use settings_core::{Field, Shape, StructType};

use crate::ReflectError;

use super::Poke;

/// Allows reaching the fields of a struct
pub struct PokeStruct<'mem> {
    pub(crate) value: Poke<'mem>,

    /// field list, with offsets and shapes
    pub(crate) ty: StructType,
}

impl<'mem> PokeStruct<'mem> {
    /// Shape getter
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.value.shape()
    }

    /// Number of addressable fields
    pub fn field_count(&self) -> usize {
        self.ty.fields.len()
    }

    /// Names of the addressable fields, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.ty.field_names()
    }

    /// Gets a handle on the field at `index`, consuming the struct handle
    pub fn field(self, index: usize) -> Result<Poke<'mem>, ReflectError> {
        let Some(field) = self.ty.fields.get(index) else {
            return Err(ReflectError::FieldOutOfBounds {
                shape: self.shape(),
                index,
            });
        };
        Ok(self.into_field(field))
    }

    /// Gets a handle on the field whose effective name is exactly `name`.
    ///
    /// Returns the field's index and descriptor along with the handle.
    pub fn field_by_name(
        self,
        name: &str,
    ) -> Result<(usize, &'static Field, Poke<'mem>), ReflectError> {
        match self.ty.field(name) {
            Some((index, field)) => Ok((index, field, self.into_field(field))),
            None => Err(ReflectError::NoSuchField {
                shape: self.shape(),
                name: name.to_string(),
            }),
        }
    }

    fn into_field(self, field: &'static Field) -> Poke<'mem> {
        // SAFETY: the offset and shape come from the derived table of this
        // struct, so they describe a live, initialized field
        unsafe {
            Poke::from_raw_parts(self.value.data.field(field.offset), field.shape())
        }
    }
}

impl fmt::Debug for PokeStruct<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PokeStruct")
            .field("value", &self.value)
            .field("fields", &self.ty.fields.len())
            .finish()
    }
}
