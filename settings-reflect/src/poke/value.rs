use alloc::string::String;

use settings_core::{Def, PtrMut, ScalarType, ScalarValue, Settings, Shape};

use crate::{ReflectError, trace};

use super::PokeStruct;

/// A mutable view into a value with runtime type information.
///
/// `Poke` is created from a `&mut T` and borrows it for `'mem`. It can be
/// narrowed into a [`PokeStruct`] to reach fields, stepped through an
/// `Option`, or written wholesale with [`Poke::set`] and [`Poke::set_scalar`].
/// Writing always drops the previous value.
///
/// ```
/// use settings::{Poke, ScalarValue, Settings};
///
/// #[derive(Settings, Default)]
/// struct Point {
///     x: i32,
/// }
///
/// let mut point = Point::default();
/// let poke = Poke::new(&mut point);
/// let (_, _, mut x) = poke.into_struct().unwrap().field_by_name("x").unwrap();
/// x.set_scalar(ScalarValue::I32(10)).unwrap();
/// assert_eq!(point.x, 10);
/// ```
pub struct Poke<'mem> {
    pub(crate) data: PtrMut<'mem>,
    pub(crate) shape: &'static Shape,
}

impl<'mem> Poke<'mem> {
    /// Creates a mutable view over a `T` value.
    pub fn new<T: Settings>(t: &'mem mut T) -> Self {
        Self {
            data: PtrMut::new(t),
            shape: T::SHAPE,
        }
    }

    /// Creates a mutable view from raw parts without any validation.
    ///
    /// # Safety
    ///
    /// `data` must point to a valid, initialized value of the type described
    /// by `shape`, valid for `'mem`.
    pub unsafe fn from_raw_parts(data: PtrMut<'mem>, shape: &'static Shape) -> Self {
        Self { data, shape }
    }

    /// Shape getter
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Returns the scalar type if this value is a scalar
    #[inline]
    pub fn scalar_type(&self) -> Option<ScalarType> {
        self.shape.scalar_type()
    }

    /// Returns the scalar type a text value would have to be converted to
    /// before being written here: the scalar itself, or the `T` of an
    /// `Option<T>` where `T` is a scalar.
    pub fn leaf_scalar_type(&self) -> Option<ScalarType> {
        match self.shape.def {
            Def::Scalar(scalar) => Some(scalar),
            Def::Option(od) => od.t().scalar_type(),
            Def::Struct(_) => None,
        }
    }

    /// Reborrows this handle for a shorter lifetime
    #[inline]
    pub fn reborrow(&mut self) -> Poke<'_> {
        Poke {
            data: self.data.reborrow(),
            shape: self.shape,
        }
    }

    /// Converts this into a struct handle, if it is a struct
    pub fn into_struct(self) -> Result<PokeStruct<'mem>, ReflectError> {
        let shape = self.shape;
        match shape.def {
            Def::Struct(ty) => Ok(PokeStruct { value: self, ty }),
            _ => Err(ReflectError::WasNotA {
                expected: "struct",
                actual: shape,
            }),
        }
    }

    /// Returns whether an `Option` holds a value
    pub fn is_some(&self) -> Result<bool, ReflectError> {
        match self.shape.def {
            Def::Option(od) => Ok(unsafe { (od.vtable.is_some)(self.data.as_const()) }),
            _ => Err(ReflectError::WasNotA {
                expected: "option",
                actual: self.shape,
            }),
        }
    }

    /// Steps into the value of an `Option`, first storing
    /// `Some(Default::default())` if it was `None`.
    ///
    /// An option that already holds a value is left as is.
    pub fn into_option_inner_or_default(self) -> Result<Poke<'mem>, ReflectError> {
        let Def::Option(od) = self.shape.def else {
            return Err(ReflectError::WasNotA {
                expected: "option",
                actual: self.shape,
            });
        };
        let inner_shape = od.t();
        trace!("Materializing {} if empty", self.shape);
        // SAFETY: the vtable was generated for this exact `Option<T>`
        let data = unsafe { (od.vtable.get_or_insert_default)(self.data) };
        Ok(Poke {
            data,
            shape: inner_shape,
        })
    }

    /// Borrows the value as a `T`, if that is its type
    pub fn get<T: Settings>(&self) -> Result<&T, ReflectError> {
        if !self.shape.is_shape(T::SHAPE) {
            return Err(ReflectError::WrongShape {
                expected: self.shape,
                actual: T::SHAPE,
            });
        }
        // SAFETY: the shape check above guarantees the pointee is a `T`
        Ok(unsafe { self.data.get::<T>() })
    }

    /// Replaces the value with `value`, dropping the old one.
    ///
    /// Fails with [`ReflectError::WrongShape`] if `T` is not the type of the
    /// value behind this handle.
    pub fn set<T: Settings>(&mut self, value: T) -> Result<(), ReflectError> {
        if !self.shape.is_shape(T::SHAPE) {
            return Err(ReflectError::WrongShape {
                expected: self.shape,
                actual: T::SHAPE,
            });
        }
        // SAFETY: the shape check above guarantees the pointee is a `T`
        unsafe { self.data.replace(value) };
        Ok(())
    }

    /// Writes a converted scalar.
    ///
    /// The value's [`ScalarType`] must be exactly the declared one. For an
    /// `Option<T>` of a scalar `T`, the option ends up as `Some(value)`.
    pub fn set_scalar(&mut self, value: ScalarValue) -> Result<(), ReflectError> {
        match self.shape.def {
            Def::Scalar(expected) => {
                let actual = value.scalar_type();
                if expected != actual {
                    return Err(ReflectError::WrongScalar { expected, actual });
                }
                trace!("Writing {:?} into {}", value, self.shape);
                // SAFETY: the shape says the pointee is a scalar of `expected`
                // type, and `value` carries exactly that type
                unsafe { write_scalar(value, self.data.reborrow()) };
                Ok(())
            }
            Def::Option(od) if od.t().scalar_type().is_some() => {
                let mut inner = self.reborrow().into_option_inner_or_default()?;
                inner.set_scalar(value)
            }
            _ => Err(ReflectError::WasNotA {
                expected: "scalar",
                actual: self.shape,
            }),
        }
    }
}

impl core::fmt::Debug for Poke<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Poke")
            .field("shape", &format_args!("{}", self.shape))
            .field("data", &self.data)
            .finish()
    }
}

/// Writes an owned scalar through an erased pointer
///
/// # Safety
///
/// `dst` must point to an initialized value whose type matches
/// `value.scalar_type()`.
unsafe fn write_scalar(value: ScalarValue, mut dst: PtrMut<'_>) {
    unsafe {
        match value {
            ScalarValue::Bool(v) => dst.replace(v),
            ScalarValue::Char(v) => dst.replace(v),
            ScalarValue::String(v) => dst.replace::<String>(v),
            ScalarValue::I16(v) => dst.replace(v),
            ScalarValue::I32(v) => dst.replace(v),
            ScalarValue::I64(v) => dst.replace(v),
            ScalarValue::F32(v) => dst.replace(v),
            ScalarValue::F64(v) => dst.replace(v),
            ScalarValue::Decimal(v) => dst.replace(v),
            ScalarValue::NaiveDate(v) => dst.replace(v),
            ScalarValue::NaiveDateTime(v) => dst.replace(v),
        }
    }
}
