use settings::{Def, ScalarType, Settings, SettingsDeserializer, Locale};
use settings_testhelpers::test;

#[derive(Settings, Default, Debug, PartialEq)]
struct Plain {
    r#type: String,
    max_connections: i32,
}

#[derive(Settings, Default, Debug, PartialEq)]
#[settings(rename_all = "kebab-case")]
struct Kebab {
    max_connections: i32,
    #[settings(rename = "Timeout")]
    timeout_secs: i64,
    #[settings(skip)]
    internal: Vec<String>,
}

#[derive(Settings, Default, Debug, PartialEq)]
#[settings(rename_all = "SCREAMING_SNAKE_CASE")]
struct Screaming {
    log_level: String,
}

#[derive(Settings, Default, Debug, PartialEq)]
#[settings(rename_all = "camelCase")]
struct Camel {
    log_level: String,
    nested: Kebab,
}

#[derive(Settings, Default, Debug, PartialEq)]
struct Empty {}

#[derive(Settings, Default, Debug, PartialEq)]
#[settings(rename_all = "PascalCase")]
struct Bounded
where
    String: Clone,
{
    #[settings(skip)]
    lookup: std::collections::BTreeMap<String, Vec<i32>>,
    limit: Option<i32>,
}

fn field_names<T: Settings>() -> Vec<&'static str> {
    T::SHAPE
        .struct_type()
        .map(|st| st.field_names().collect())
        .unwrap_or_default()
}

#[test]
fn default_names_are_the_identifiers() {
    assert_eq!(field_names::<Plain>(), ["type", "max_connections"]);
}

#[test]
fn rename_all_and_rename() {
    assert_eq!(field_names::<Kebab>(), ["max-connections", "Timeout"]);
    assert_eq!(field_names::<Screaming>(), ["LOG_LEVEL"]);
    assert_eq!(field_names::<Camel>(), ["logLevel", "nested"]);
    assert!(field_names::<Empty>().is_empty());
}

#[test]
fn where_clause_and_generic_field_types() {
    assert_eq!(field_names::<Bounded>(), ["Limit"]);

    let value: Bounded = SettingsDeserializer::new()
        .with_locale(Locale::INVARIANT)
        .deserialize(Some(&[("Limit", "5"), ("Lookup", "ignored")]))
        .unwrap();
    assert_eq!(value.limit, Some(5));
    assert!(value.lookup.is_empty());
}

#[test]
fn shape_describes_the_struct() {
    let shape = Kebab::SHAPE;
    assert_eq!(shape.type_identifier, "Kebab");
    assert_eq!(shape.to_string(), "Kebab");
    assert!(shape.is_type::<Kebab>());
    assert!(!shape.is_type::<Camel>());

    let (index, field) = shape.field("Timeout").unwrap();
    assert_eq!(index, 1);
    assert_eq!(field.shape().scalar_type(), Some(ScalarType::I64));
    assert!(shape.field("timeout_secs").is_none());
    assert!(matches!(shape.def, Def::Struct(_)));
}

#[test]
fn renamed_members_resolve() {
    let entries = [
        ("nested.max-connections", "10"),
        ("nested.Timeout", "30"),
        ("nested.internal", "ignored"),
        ("logLevel", "debug"),
    ];
    let value: Camel = SettingsDeserializer::new()
        .with_locale(Locale::INVARIANT)
        .deserialize(Some(&entries))
        .unwrap();
    assert_eq!(
        value,
        Camel {
            log_level: "debug".to_string(),
            nested: Kebab {
                max_connections: 10,
                timeout_secs: 30,
                internal: Vec::new(),
            },
        }
    );
}

#[test]
fn raw_identifiers_lose_their_prefix() {
    let value: Plain = SettingsDeserializer::new()
        .deserialize(Some(&[("type", "tcp")]))
        .unwrap();
    assert_eq!(value.r#type, "tcp");
}
