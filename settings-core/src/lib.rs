#![no_std]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod ptr;
pub use ptr::*;

mod scalar;
pub use scalar::*;

mod types;
pub use types::*;

mod impls;

/// Allows querying the [`Shape`] of a type: the static, name-keyed member
/// table that makes its values addressable by dot-path.
///
/// # Safety
///
/// The shape must describe `Self` exactly: scalar tags must match the Rust
/// type, field offsets and field shapes must be those of the real fields, and
/// option vtables must operate on `Self`. Derive it with
/// `#[derive(Settings)]` rather than implementing it by hand.
pub unsafe trait Settings: 'static {
    /// The shape of this type
    const SHAPE: &'static Shape;
}

/// Returns the shape of `T`. Used as the lazy `fn() -> &'static Shape`
/// indirection in [`Field`] and [`OptionDef`].
#[inline]
pub fn shape_of<T: Settings + ?Sized>() -> &'static Shape {
    T::SHAPE
}
