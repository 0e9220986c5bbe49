use crate::{PtrConst, PtrMut};

use super::Shape;

/// Describes an Option, including a vtable to query and alter its state,
/// and the inner shape (the `T` in `Option<T>`).
#[derive(Clone, Copy, Debug)]
pub struct OptionDef {
    /// vtable for interacting with the option
    pub vtable: &'static OptionVTable,

    /// shape of the inner type of the option
    pub t: fn() -> &'static Shape,
}

impl OptionDef {
    /// Returns the inner type shape of the option
    #[inline]
    pub fn t(&self) -> &'static Shape {
        (self.t)()
    }
}

/// Check if an option contains a value
///
/// # Safety
///
/// The `option` parameter must point to aligned, initialized memory of the correct type.
pub type OptionIsSomeFn = for<'mem> unsafe fn(option: PtrConst<'mem>) -> bool;

/// Get the value contained in an option, inserting `T::default()` first if
/// the option is `None`. Returns a pointer to the (now present) inner value.
///
/// # Safety
///
/// The `option` parameter must point to aligned, initialized memory of the correct type.
pub type OptionGetOrInsertDefaultFn = for<'mem> unsafe fn(option: PtrMut<'mem>) -> PtrMut<'mem>;

/// Virtual table for `Option<T>`
#[derive(Clone, Copy, Debug)]
pub struct OptionVTable {
    /// cf. [`OptionIsSomeFn`]
    pub is_some: OptionIsSomeFn,

    /// cf. [`OptionGetOrInsertDefaultFn`]
    pub get_or_insert_default: OptionGetOrInsertDefaultFn,
}
