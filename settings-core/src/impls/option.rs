use crate::{
    ConstTypeId, Def, OptionDef, OptionVTable, PtrConst, PtrMut, Settings, Shape, shape_of,
};

unsafe fn option_is_some<T: 'static>(option: PtrConst<'_>) -> bool {
    unsafe { option.get::<Option<T>>().is_some() }
}

unsafe fn option_get_or_insert_default<T: Default + 'static>(option: PtrMut<'_>) -> PtrMut<'_> {
    let option = unsafe { option.into_mut::<Option<T>>() };
    PtrMut::new(option.get_or_insert_with(T::default))
}

unsafe impl<T: Settings + Default> Settings for Option<T> {
    const SHAPE: &'static Shape = &const {
        Shape {
            id: ConstTypeId::of::<Self>(),
            type_identifier: "Option",
            def: Def::Option(OptionDef {
                vtable: &const {
                    OptionVTable {
                        is_some: option_is_some::<T>,
                        get_or_insert_default: option_get_or_insert_default::<T>,
                    }
                },
                t: shape_of::<T>,
            }),
        }
    };
}
