//! Opaque pointers
//!
//! Type-erased pointer helpers for reading and writing reflected values.

use core::{fmt, marker::PhantomData, ptr::NonNull};

/// A type-erased, read-only pointer to an initialized value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PtrConst<'mem> {
    ptr: NonNull<u8>,
    phantom: PhantomData<&'mem ()>,
}

impl fmt::Debug for PtrConst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ptr.as_ptr().fmt(f)
    }
}

impl<'mem> PtrConst<'mem> {
    /// Create a new opaque const pointer from a reference
    #[inline]
    pub fn new<T>(value: &'mem T) -> Self {
        Self {
            ptr: NonNull::from(value).cast(),
            phantom: PhantomData,
        }
    }

    /// Borrows the underlying value as `T`
    ///
    /// # Safety
    ///
    /// `T` must be the actual type of the pointed-to value.
    #[inline]
    pub unsafe fn get<T>(self) -> &'mem T {
        unsafe { self.ptr.cast::<T>().as_ref() }
    }
}

/// A type-erased, mutable pointer to an initialized value.
///
/// The pointee is owned elsewhere: writing through this pointer replaces (and
/// drops) the previous value, it never leaks or double-frees.
#[derive(PartialEq, Eq)]
pub struct PtrMut<'mem> {
    ptr: NonNull<u8>,
    phantom: PhantomData<&'mem mut ()>,
}

impl fmt::Debug for PtrMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ptr.as_ptr().fmt(f)
    }
}

impl<'mem> PtrMut<'mem> {
    /// Create a new opaque mutable pointer from a mutable reference
    #[inline]
    pub fn new<T>(value: &'mem mut T) -> Self {
        Self {
            ptr: NonNull::from(value).cast(),
            phantom: PhantomData,
        }
    }

    /// Reborrows this pointer as a const pointer
    #[inline]
    pub fn as_const(&self) -> PtrConst<'_> {
        PtrConst {
            ptr: self.ptr,
            phantom: PhantomData,
        }
    }

    /// Reborrows this pointer for a shorter lifetime
    #[inline]
    pub fn reborrow(&mut self) -> PtrMut<'_> {
        PtrMut {
            ptr: self.ptr,
            phantom: PhantomData,
        }
    }

    /// Returns a pointer to the field at `offset`, consuming this one
    ///
    /// # Safety
    ///
    /// `offset` must be the offset of a field inside the pointed-to value.
    #[inline]
    pub unsafe fn field(self, offset: usize) -> PtrMut<'mem> {
        PtrMut {
            ptr: unsafe { self.ptr.byte_add(offset) },
            phantom: PhantomData,
        }
    }

    /// Borrows the underlying value as `T`
    ///
    /// # Safety
    ///
    /// `T` must be the actual type of the pointed-to value.
    #[inline]
    pub unsafe fn get<T>(&self) -> &T {
        unsafe { self.ptr.cast::<T>().as_ref() }
    }

    /// Mutably borrows the underlying value as `T` for the whole lifetime
    ///
    /// # Safety
    ///
    /// `T` must be the actual type of the pointed-to value.
    #[inline]
    pub unsafe fn into_mut<T>(self) -> &'mem mut T {
        unsafe { self.ptr.cast::<T>().as_mut() }
    }

    /// Replaces the pointed-to value, dropping the old one
    ///
    /// # Safety
    ///
    /// `T` must be the actual type of the pointed-to value.
    #[inline]
    pub unsafe fn replace<T>(&mut self, value: T) {
        unsafe { *self.ptr.cast::<T>().as_mut() = value };
    }
}
