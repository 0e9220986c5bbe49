use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use settings::{DeserializeErrorKind, Locale, SettingsDeserializer, from_settings};
use settings_testhelpers::test;

use crate::model::{Address, Country, Person, SettingModel};

fn swedish() -> SettingsDeserializer {
    SettingsDeserializer::new().with_locale(Locale::SV_SE)
}

fn model(entries: &[(&str, &str)]) -> SettingModel {
    swedish().deserialize(Some(entries)).unwrap()
}

fn person(entries: &[(&str, &str)]) -> Person {
    swedish().deserialize(Some(entries)).unwrap()
}

#[test]
fn missing_settings_is_an_error() {
    let err = swedish()
        .deserialize::<Person, HashMap<String, String>>(None)
        .unwrap_err();
    assert!(matches!(err.kind, DeserializeErrorKind::MissingSettings));

    let err = swedish()
        .deserialize::<SettingModel, [(&str, &str)]>(None)
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no settings were provided");
}

#[test]
fn empty_settings_give_the_default() {
    let empty: HashMap<String, String> = HashMap::new();
    let value: SettingModel = swedish().deserialize(Some(&empty)).unwrap();
    assert_eq!(value, SettingModel::default());

    let value: Person = swedish().deserialize(Some(&empty)).unwrap();
    assert_eq!(value, Person::default());
}

#[test]
fn integer() {
    assert_eq!(model(&[("SomeInteger", "1000")]).some_integer, 1000);
    assert_eq!(model(&[("SomeShort", "-12")]).some_short, -12);
    assert_eq!(
        model(&[("SomeLong", "9000000000")]).some_long,
        9_000_000_000
    );
}

#[test]
fn boolean() {
    assert!(model(&[("SomeBoolean", "true")]).some_boolean);
    assert!(model(&[("SomeBoolean", "True")]).some_boolean);
    assert!(!model(&[("SomeBoolean", "false")]).some_boolean);
}

#[test]
fn char() {
    assert_eq!(model(&[("SomeChar", "Y")]).some_char, 'Y');
}

#[test]
fn string() {
    assert_eq!(
        model(&[("SomeString", "SomeValue")]).some_string,
        "SomeValue"
    );
}

#[test]
#[allow(clippy::approx_constant)]
fn numbers_follow_the_locale() {
    let value = model(&[
        ("SomeDecimal", "3,14"),
        ("SomeDouble", "3,14"),
        ("SomeFloat", "0,25"),
    ]);
    assert_eq!(value.some_decimal, Decimal::new(314, 2));
    assert_eq!(value.some_double, 3.14);
    assert_eq!(value.some_float, 0.25);

    let value: SettingModel = SettingsDeserializer::new()
        .with_locale(Locale::INVARIANT)
        .deserialize(Some(&[("SomeDecimal", "1,234.5")]))
        .unwrap();
    assert_eq!(value.some_decimal, Decimal::new(12345, 1));
}

#[test]
fn date_time() {
    let value = model(&[("SomeDateTime", "2016-04-22")]);
    assert_eq!(
        value.some_date_time,
        NaiveDate::from_ymd_opt(2016, 4, 22)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    );

    let value: SettingModel = SettingsDeserializer::new()
        .with_locale(Locale::DE_DE)
        .deserialize(Some(&[("SomeDateTime", "22.04.2016 10:30")]))
        .unwrap();
    assert_eq!(
        value.some_date_time,
        NaiveDate::from_ymd_opt(2016, 4, 22)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    );
}

#[test]
fn optional_scalar_becomes_some() {
    let value = model(&[("SomeOptionalInteger", "5")]);
    assert_eq!(value.some_optional_integer, Some(5));
}

#[test]
fn nested_intermediate_is_created() {
    let value = person(&[("Address.Street", "Storgatan 10")]);
    assert_eq!(
        value.address,
        Some(Address {
            street: "Storgatan 10".to_string(),
            ..Default::default()
        })
    );
}

#[test]
fn deeply_nested_intermediates_are_created() {
    let value = person(&[("Address.Country.CountryCode", "46")]);
    let address = value.address.unwrap();
    assert_eq!(
        address.country,
        Some(Country {
            country_code: 46,
            name: None
        })
    );
}

#[test]
fn unknown_segment_is_skipped() {
    let value = person(&[("Address.Countr.CountryCode", "")]);
    let address = value.address.unwrap();
    assert_eq!(address.country, None);
}

#[test]
fn unknown_keys_are_skipped() {
    let value = person(&[("Nmae", "x"), ("name", "x"), ("", "x"), ("Name.", "x")]);
    assert_eq!(value, Person::default());
}

#[test]
fn shared_prefix_shares_the_intermediate() {
    let value = person(&[
        ("Address.Street", "Storgatan 10"),
        ("Address.City", "Stockholm"),
    ]);
    assert_eq!(
        value.address,
        Some(Address {
            street: "Storgatan 10".to_string(),
            city: "Stockholm".to_string(),
            country: None,
        })
    );
}

#[test]
fn order_does_not_matter() {
    let mut forward = IndexMap::new();
    forward.insert("Address.Country.Name", "Sverige");
    forward.insert("Address.Street", "Storgatan 10");
    forward.insert("Name", "Kalle");

    let mut backward = IndexMap::new();
    for (k, v) in forward.iter().rev() {
        backward.insert(*k, *v);
    }

    let a: Person = swedish().deserialize(Some(&forward)).unwrap();
    let b: Person = swedish().deserialize(Some(&backward)).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.address.and_then(|a| a.country).and_then(|c| c.name),
        Some("Sverige".to_string())
    );
}

#[test]
fn invalid_value_aborts() {
    let err = swedish()
        .deserialize::<SettingModel, _>(Some(&[
            ("SomeString", "fine"),
            ("SomeInteger", "not-a-number"),
        ]))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for `SomeInteger`: `not-a-number` can't be converted to `i32`: not a base-10 integer");

    match err.kind {
        DeserializeErrorKind::InvalidValue {
            key,
            value,
            expected,
            ..
        } => {
            assert_eq!(key, "SomeInteger");
            assert_eq!(value, "not-a-number");
            assert_eq!(expected, settings::ScalarType::I32);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_nested_value_aborts() {
    let err = swedish()
        .deserialize::<Person, _>(Some(&[("Address.Country.CountryCode", "forty-six")]))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for `Address.Country.CountryCode`: `forty-six` can't be converted to `i32`: not a base-10 integer");
}

#[test]
fn decimal_in_the_wrong_locale_aborts() {
    let err = swedish()
        .deserialize::<SettingModel, _>(Some(&[("SomeDecimal", "3.14")]))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for `SomeDecimal`: `3.14` can't be converted to `Decimal`: not a sv-SE number");
}

#[test]
fn float_overflow_aborts() {
    let err = swedish()
        .deserialize::<SettingModel, _>(Some(&[("SomeDouble", "1e400")]))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for `SomeDouble`: `1e400` can't be converted to `f64`: out of range");

    let model = model(&[("SomeDouble", "-Infinity")]);
    assert_eq!(model.some_double, f64::NEG_INFINITY);
}

#[test]
fn unsupported_scalar_kind_aborts() {
    let err = swedish()
        .deserialize::<SettingModel, _>(Some(&[("SomeByte", "1")]))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for `SomeByte`: `1` can't be converted to `u8`: unsupported target type");
}

#[test]
fn struct_leaf_aborts() {
    let err = swedish()
        .deserialize::<Person, _>(Some(&[("Address", "Storgatan 10")]))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for `Address`: `Storgatan 10` can't be converted to `Option<Address>`");
}

#[test]
fn every_source_works() {
    let mut hash = HashMap::new();
    hash.insert("Name".to_string(), "Kalle".to_string());
    let mut btree = BTreeMap::new();
    btree.insert("Name", "Kalle");
    let vec = vec![("Name".to_string(), "Kalle")];

    let expected = Person {
        name: "Kalle".to_string(),
        address: None,
    };
    assert_eq!(swedish().deserialize::<Person, _>(Some(&hash)).unwrap(), expected);
    assert_eq!(swedish().deserialize::<Person, _>(Some(&btree)).unwrap(), expected);
    assert_eq!(swedish().deserialize::<Person, _>(Some(&vec)).unwrap(), expected);
    assert_eq!(
        swedish()
            .deserialize::<Person, _>(Some(&[("Name", "Kalle")]))
            .unwrap(),
        expected
    );
}

#[test]
fn later_duplicate_wins() {
    let value = person(&[("Name", "Kalle"), ("Name", "Olle")]);
    assert_eq!(value.name, "Olle");
}

#[test]
fn from_settings_uses_the_host_locale() {
    // integers and strings read the same in every locale
    let value: Person = from_settings(&[("Name", "Kalle")]).unwrap();
    assert_eq!(value.name, "Kalle");
    let value: SettingModel = from_settings(&[("SomeInteger", "42")]).unwrap();
    assert_eq!(value.some_integer, 42);
}

#[test]
fn deserializer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<SettingsDeserializer>();
    assert_eq!(swedish().locale(), &Locale::SV_SE);
}
