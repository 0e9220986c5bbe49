use settings::{Locale, SettingsDeserializer};
use settings_testhelpers::test;

use crate::model::Person;

fn report(entries: &[(&str, &str)]) -> settings::Deserialized<Person> {
    SettingsDeserializer::new()
        .with_locale(Locale::SV_SE)
        .deserialize_with_report(Some(entries))
        .unwrap()
}

#[test]
fn resolved_keys_are_not_reported() {
    let report = report(&[("Name", "Kalle"), ("Address.Street", "Storgatan 10")]);
    assert!(report.skipped.is_empty());
    assert_eq!(report.value.name, "Kalle");
}

#[test]
fn typo_gets_a_suggestion() {
    let report = report(&[("Address.Countr.CountryCode", "46")]);
    assert_eq!(report.skipped.len(), 1);

    let skipped = &report.skipped[0];
    assert_eq!(skipped.key, "Address.Countr.CountryCode");
    assert_eq!(skipped.segment, "Countr");
    assert_eq!(skipped.position, 1);
    assert_eq!(skipped.owner.type_identifier, "Address");
    assert_eq!(skipped.suggestion, Some("Country"));
    insta::assert_snapshot!(skipped.to_string(), @"`Address.Countr.CountryCode`: no member `Countr` on Address (did you mean `Country`?)");

    // the intermediate crossed before the typo stays attached
    assert!(report.value.address.is_some());
}

#[test]
fn case_mismatch_suggests_the_real_name() {
    let report = report(&[("name", "Kalle")]);
    assert_eq!(report.skipped[0].suggestion, Some("Name"));
    assert_eq!(report.value.name, "");
}

#[test]
fn unrelated_key_has_no_suggestion() {
    let report = report(&[("Zzzz", "1")]);
    assert_eq!(report.skipped[0].suggestion, None);
    insta::assert_snapshot!(report.skipped[0].to_string(), @"`Zzzz`: no member `Zzzz` on Person");
}

#[test]
fn walking_through_a_scalar_is_reported() {
    let report = report(&[("Name.First", "Kalle")]);
    let skipped = &report.skipped[0];
    assert_eq!(skipped.segment, "First");
    assert_eq!(skipped.position, 1);
    assert_eq!(skipped.owner.type_identifier, "String");
    assert_eq!(skipped.suggestion, None);
}

#[test]
fn skipped_keys_keep_their_order() {
    let report = report(&[("A", "1"), ("Name", "Kalle"), ("B", "2")]);
    let keys: Vec<_> = report.skipped.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["A", "B"]);
}

#[test]
fn conversion_errors_still_abort() {
    let err = SettingsDeserializer::new()
        .with_locale(Locale::SV_SE)
        .deserialize_with_report::<Person, _>(Some(&[
            ("Nope", "1"),
            ("Address.Country.CountryCode", "x"),
        ]))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        settings::DeserializeErrorKind::InvalidValue { .. }
    ));
}
