use super::Shape;

/// Describes a named field in a struct
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// effective name of the field: the key segment that addresses it
    pub name: &'static str,

    /// shape of the inner type
    ///
    /// the layer of indirection allows shapes to refer to each other before
    /// they're all evaluated
    pub shape: fn() -> &'static Shape,

    /// offset of the field in the struct (obtained through `core::mem::offset_of`)
    pub offset: usize,

    /// doc comments
    pub doc: &'static [&'static str],
}

impl Field {
    /// Returns the shape of the inner type
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }
}

/// Common fields for struct-like types
#[derive(Clone, Copy, Debug)]
pub struct StructType {
    /// all fields addressable by name, in declaration order
    pub fields: &'static [Field],
}

impl StructType {
    /// Finds a field by its exact name. No case folding, no fuzzy matching.
    pub fn field(&self, name: &str) -> Option<(usize, &'static Field)> {
        self.fields.iter().enumerate().find(|(_, f)| f.name == name)
    }

    /// Iterates over the field names
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + use<> {
        let fields: &'static [Field] = self.fields;
        fields.iter().map(|f| f.name)
    }
}
