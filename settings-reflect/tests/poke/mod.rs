use chrono::NaiveDate;
use rust_decimal::Decimal;
use settings::{ScalarType, ScalarValue, Settings};
use settings_reflect::{Poke, ReflectError};
use settings_testhelpers::test;

#[derive(Settings, Default, Debug, PartialEq)]
struct Inner {
    value: i32,
    label: Option<String>,
}

#[derive(Settings, Default, Debug)]
struct Outer {
    name: String,
    inner: Inner,
    maybe: Option<Inner>,
    price: Decimal,
    since: NaiveDate,
}

#[test]
fn set_wholesale() {
    let mut s = String::from("hello");
    let mut poke = Poke::new(&mut s);
    poke.set(String::from("world")).unwrap();
    assert_eq!(s, "world");
}

#[test]
fn set_with_wrong_type_is_rejected() {
    let mut n = 5i32;
    let mut poke = Poke::new(&mut n);
    let err = poke.set(5i64).unwrap_err();
    assert!(matches!(err, ReflectError::WrongShape { .. }));
    assert_eq!(err.to_string(), "Wrong shape: expected i32, but got i64");
    assert_eq!(n, 5);
}

#[test]
fn field_by_name_reaches_nested_struct() {
    let mut outer = Outer::default();
    let poke = Poke::new(&mut outer);
    let (index, field, inner) = poke.into_struct().unwrap().field_by_name("inner").unwrap();
    assert_eq!(index, 1);
    assert_eq!(field.name, "inner");

    let (_, _, mut value) = inner.into_struct().unwrap().field_by_name("value").unwrap();
    value.set_scalar(ScalarValue::I32(42)).unwrap();
    assert_eq!(outer.inner.value, 42);
}

#[test]
fn field_by_index() {
    let mut outer = Outer::default();
    let poke = Poke::new(&mut outer);
    let st = poke.into_struct().unwrap();
    assert_eq!(st.field_count(), 5);
    let debug = format!("{st:?}");
    assert!(debug.starts_with("PokeStruct"));
    assert!(debug.contains("shape: Outer"));
    assert_eq!(
        st.field_names().collect::<Vec<_>>(),
        ["name", "inner", "maybe", "price", "since"]
    );
    let mut name = st.field(0).unwrap();
    name.set(String::from("Kalle")).unwrap();
    assert_eq!(outer.name, "Kalle");
}

#[test]
fn field_out_of_bounds() {
    let mut outer = Outer::default();
    let err = Poke::new(&mut outer)
        .into_struct()
        .unwrap()
        .field(9)
        .unwrap_err();
    assert_eq!(err.to_string(), "Field index 9 is out of bounds for Outer");
}

#[test]
fn unknown_field_name() {
    let mut outer = Outer::default();
    let err = Poke::new(&mut outer)
        .into_struct()
        .unwrap()
        .field_by_name("Name")
        .unwrap_err();
    assert_eq!(err.to_string(), "No field named \"Name\" on Outer");
}

#[test]
fn scalar_is_not_a_struct() {
    let mut n = 1i64;
    let err = Poke::new(&mut n).into_struct().unwrap_err();
    assert_eq!(err.to_string(), "Was not a struct: i64");
}

#[test]
fn option_struct_is_materialized_once() {
    let mut outer = Outer::default();
    {
        let (_, _, maybe) = Poke::new(&mut outer)
            .into_struct()
            .unwrap()
            .field_by_name("maybe")
            .unwrap();
        assert!(!maybe.is_some().unwrap());
        let inner = maybe.into_option_inner_or_default().unwrap();
        let (_, _, mut value) = inner.into_struct().unwrap().field_by_name("value").unwrap();
        value.set_scalar(ScalarValue::I32(7)).unwrap();
    }
    assert_eq!(
        outer.maybe,
        Some(Inner {
            value: 7,
            label: None
        })
    );

    // a second pass keeps what is there
    let (_, _, maybe) = Poke::new(&mut outer)
        .into_struct()
        .unwrap()
        .field_by_name("maybe")
        .unwrap();
    assert!(maybe.is_some().unwrap());
    let inner = maybe.into_option_inner_or_default().unwrap();
    assert_eq!(inner.shape().type_identifier, "Inner");
    assert_eq!(outer.maybe.as_ref().map(|i| i.value), Some(7));
}

#[test]
fn option_scalar_leaf_becomes_some() {
    let mut inner = Inner::default();
    let (_, _, mut label) = Poke::new(&mut inner)
        .into_struct()
        .unwrap()
        .field_by_name("label")
        .unwrap();
    assert_eq!(label.leaf_scalar_type(), Some(ScalarType::String));
    assert_eq!(label.scalar_type(), None);
    label
        .set_scalar(ScalarValue::String("tagged".to_string()))
        .unwrap();
    assert_eq!(inner.label.as_deref(), Some("tagged"));
}

#[test]
fn set_scalar_checks_the_kind() {
    let mut outer = Outer::default();
    let (_, _, mut price) = Poke::new(&mut outer)
        .into_struct()
        .unwrap()
        .field_by_name("price")
        .unwrap();
    let err = price.set_scalar(ScalarValue::F64(2.5)).unwrap_err();
    assert_eq!(
        err,
        ReflectError::WrongScalar {
            expected: ScalarType::Decimal,
            actual: ScalarType::F64
        }
    );
    price
        .set_scalar(ScalarValue::Decimal(Decimal::new(314, 2)))
        .unwrap();
    assert_eq!(outer.price, Decimal::new(314, 2));
}

#[test]
fn set_scalar_on_struct_fails() {
    let mut outer = Outer::default();
    let (_, _, mut inner) = Poke::new(&mut outer)
        .into_struct()
        .unwrap()
        .field_by_name("inner")
        .unwrap();
    assert_eq!(inner.leaf_scalar_type(), None);
    let err = inner.set_scalar(ScalarValue::I32(1)).unwrap_err();
    assert_eq!(err.to_string(), "Was not a scalar: Inner");
}

#[test]
fn get_reads_back() {
    let mut outer = Outer {
        since: NaiveDate::from_ymd_opt(2016, 4, 22).unwrap(),
        ..Default::default()
    };
    let (_, _, since) = Poke::new(&mut outer)
        .into_struct()
        .unwrap()
        .field_by_name("since")
        .unwrap();
    assert_eq!(
        *since.get::<NaiveDate>().unwrap(),
        NaiveDate::from_ymd_opt(2016, 4, 22).unwrap()
    );
    assert!(since.get::<String>().is_err());
}
