use std::time::Duration;

use pretty_assertions::assert_eq;
use reflectz::{
    Config, FieldDescriptor, InspectError, Inspector, Kind, NamingScheme, Reflect, Value, inspect,
    inspect_with,
};
use rstest::rstest;

#[derive(Reflect, Default)]
pub struct MyStruct {
    #[tags(foo = "customTag")]
    pub address: String,
    pub email: String,
    pub id: i64,
    pub info: MoreInfo,
    pub details: Vec<String>,
    pub born: Duration,
}

#[derive(Reflect, Default)]
pub struct MoreInfo {
    pub zip_code: String,
    #[reflectz(skip)]
    pub state: String,
    pub name: String,
}

fn sample() -> MyStruct {
    MyStruct {
        address: "123".to_string(),
        email: "foo@bar.com".to_string(),
        info: MoreInfo {
            name: "test".to_string(),
            ..Default::default()
        },
        born: Duration::from_secs(1_700_000_000),
        ..Default::default()
    }
}

fn names(fields: &[FieldDescriptor]) -> Vec<&str> {
    fields.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_recursive_false() {
    let value = sample();
    let config = Config::builder()
        .recursive(false)
        .naming_scheme(NamingScheme::PascalCase)
        .build();

    let fields = inspect_with(&value, &config).unwrap();
    assert_eq!(fields.len(), 6, "number of struct fields");

    let address = &fields[0];
    assert_eq!(address.value, Value::from("123"));
    assert_eq!(address.name, "Address");
    assert!(!address.is_zero);
    assert_eq!(address.kind, Kind::String);

    let id = &fields[2];
    assert_eq!(id.value, Value::from(0i64));
    assert_eq!(id.name, "Id");
    assert!(id.is_zero);
    assert_eq!(id.kind, Kind::I64);

    let info = &fields[3];
    assert_eq!(info.name, "Info");
    assert_eq!(info.kind, Kind::Struct);
    assert!(!info.is_zero);
}

#[test_log::test]
fn test_recursive_true() {
    let value = sample();
    let config = Config::builder()
        .recursive(true)
        .naming_scheme(NamingScheme::SnakeCase)
        .embedded_sep("_")
        .build();

    let fields = inspect_with(&value, &config).unwrap();
    assert_eq!(
        names(&fields),
        vec!["address", "email", "id", "info_zip_code", "info_name", "details", "born"]
    );

    let address = &fields[0];
    assert_eq!(address.value, Value::from("123"));
    assert!(!address.is_zero);
    assert_eq!(address.path, vec![0]);

    let id = &fields[2];
    assert!(id.is_zero);
    assert_eq!(id.kind, Kind::I64);
    assert_eq!(id.path, vec![2]);

    let name = &fields[4];
    assert_eq!(name.value, Value::from("test"));
    assert!(!name.is_zero);
    assert_eq!(name.kind, Kind::String);
    // `state` sits at position 1 and is skipped, `name` keeps its declared position.
    assert_eq!(name.path, vec![3, 2]);

    let details = &fields[5];
    assert_eq!(details.kind, Kind::Seq);
    assert!(details.is_zero);

    // Duration has no public fields, so it stays a single struct-valued leaf.
    let born = &fields[6];
    assert_eq!(born.kind, Kind::Struct);
    assert!(!born.is_zero);
}

#[test]
fn test_default_config_matches_explicit_defaults() {
    let value = sample();
    assert_eq!(
        inspect(&value).unwrap(),
        inspect_with(&value, &Config::default()).unwrap()
    );
    assert_eq!(
        Inspector::default().inspect(&value).unwrap(),
        inspect(&value).unwrap()
    );
}

#[test]
fn test_tags_are_exposed_verbatim() {
    let fields = inspect(&sample()).unwrap();
    assert_eq!(fields[0].tags.as_str(), r#"foo:"customTag""#);
    assert_eq!(fields[0].tags.get("foo"), "customTag");
    assert!(fields[1].tags.is_empty());
}

#[derive(Reflect)]
pub struct JsonRecord {
    #[tags(json = "id")]
    pub id: i32,
    #[tags(json = "email,omitempty")]
    pub email: String,
    #[tags(json = "info")]
    pub info: Another,
}

#[derive(Reflect, Default)]
pub struct Another {
    #[reflectz(skip)]
    pub address: String,
    pub extra: i32,
    #[tags(json = "list")]
    pub details: Vec<String>,
}

#[test]
fn test_naming_tag_example() {
    let value = JsonRecord {
        id: 10,
        email: "foo@bar.com".to_string(),
        info: Another::default(),
    };
    let config = Config::builder()
        .naming_tag("json")
        .recursive(true)
        .embedded_sep("_")
        .build();

    let fields = inspect_with(&value, &config).unwrap();
    assert_eq!(names(&fields), vec!["id", "email", "info_extra", "info_list"]);

    assert_eq!(fields[0].value, Value::from(10i32));
    assert!(!fields[0].is_zero);
    assert_eq!(fields[1].tags.get("json"), "email,omitempty");
    assert_eq!(fields[2].path, vec![2, 1]);
    assert!(fields[2].is_zero);
    assert!(fields[2].tags.is_empty());
    assert_eq!(fields[3].path, vec![2, 2]);
    assert_eq!(fields[3].kind, Kind::Seq);
    assert!(fields[3].is_zero);
}

#[test]
fn test_naming_tag_beats_naming_scheme() {
    let value = JsonRecord {
        id: 1,
        email: String::new(),
        info: Another::default(),
    };
    let config = Config::builder()
        .naming_tag("json")
        .naming_scheme(NamingScheme::PascalCase)
        .build();

    let fields = inspect_with(&value, &config).unwrap();
    // Tagged names win; untagged `extra` falls back to the scheme.
    assert_eq!(names(&fields), vec!["id", "email", "info_Extra", "info_list"]);
}

#[derive(Reflect, Default)]
pub struct Account {
    pub id: u64,
    password: String,
    #[reflectz(nodive)]
    pub owner: Person,
    pub backup: Option<Person>,
    pub manager: Box<Person>,
    pub hidden: Hidden,
}

#[derive(Reflect, Default)]
pub struct Person {
    pub first_name: String,
    pub age: u8,
}

#[derive(Reflect, Default)]
pub struct Hidden {
    inner: i32,
    #[reflectz(skip)]
    pub ignored: String,
}

#[test]
fn test_private_nodive_option_and_empty_records() {
    let value = Account {
        id: 7,
        password: "hunter2".to_string(),
        manager: Box::new(Person {
            first_name: "Ada".to_string(),
            age: 36,
        }),
        ..Default::default()
    };

    let fields = inspect(&value).unwrap();
    assert_eq!(
        names(&fields),
        vec![
            "id",
            "owner",
            "backup",
            "manager_first_name",
            "manager_age",
            "hidden",
        ]
    );

    let owner = &fields[1];
    assert_eq!(owner.kind, Kind::Struct);
    assert!(owner.is_zero);
    assert_eq!(owner.tags.get("reflectz"), "nodive");

    let backup = &fields[2];
    assert_eq!(backup.kind, Kind::Option);
    assert_eq!(backup.value, Value::Option(None));
    assert!(backup.is_zero);

    assert_eq!(fields[3].path, vec![4, 0]);
    assert_eq!(fields[4].value, Value::from(36u8));

    // No emittable children: the record is emitted whole.
    let hidden = &fields[5];
    assert_eq!(hidden.kind, Kind::Struct);
    assert_eq!(hidden.path, vec![5]);
    assert!(hidden.is_zero);
}

#[test]
fn test_private_fields_count_towards_zero() {
    let value = Account {
        hidden: Hidden {
            inner: 3,
            ignored: "not part of the zero check".to_string(),
        },
        ..Default::default()
    };
    let fields = inspect(&value).unwrap();
    let hidden = fields.iter().find(|f| f.name == "hidden").unwrap();
    assert!(!hidden.is_zero);

    let value = Account {
        hidden: Hidden {
            inner: 0,
            ignored: "not part of the zero check".to_string(),
        },
        ..Default::default()
    };
    let fields = inspect(&value).unwrap();
    let hidden = fields.iter().find(|f| f.name == "hidden").unwrap();
    assert!(hidden.is_zero);
}

#[derive(Reflect, Default)]
pub struct Outer {
    pub middle: Middle,
    pub tail: bool,
}

#[derive(Reflect, Default)]
pub struct Middle {
    pub inner: Inner,
    pub count: u32,
}

#[derive(Reflect, Default)]
pub struct Inner {
    pub deep_value: f64,
}

#[rstest]
#[case(NamingScheme::SnakeCase, ".", &["middle.inner.deep_value", "middle.count", "tail"])]
#[case(NamingScheme::CamelCase, "__", &["middle__inner__deepValue", "middle__count", "tail"])]
#[case(NamingScheme::PascalCase, "", &["MiddleInnerDeepValue", "MiddleCount", "Tail"])]
fn test_nested_naming(
    #[case] scheme: NamingScheme,
    #[case] sep: &str,
    #[case] expected: &[&str],
) {
    let config = Config::builder()
        .naming_scheme(scheme)
        .embedded_sep(sep)
        .build();
    let fields = inspect_with(&Outer::default(), &config).unwrap();
    assert_eq!(names(&fields), expected.to_vec());
    assert_eq!(fields[0].path, vec![0, 0, 0]);
    assert_eq!(fields[1].path, vec![0, 1]);
    assert_eq!(fields[2].path, vec![1]);
}

#[test]
fn test_non_recursive_counts_top_level_fields() {
    let config = Config::builder().recursive(false).build();
    let fields = inspect_with(&Outer::default(), &config).unwrap();
    assert_eq!(names(&fields), vec!["middle", "tail"]);
    assert!(fields.iter().all(|f| f.path.len() == 1));
}

#[rstest]
#[case(Value::from(0.0f64), true)]
#[case(Value::from(0.5f64), false)]
fn test_zero_detection_float(#[case] expected_value: Value, #[case] expected_zero: bool) {
    let value = Inner {
        deep_value: expected_value.as_f64().unwrap(),
    };
    let fields = inspect(&value).unwrap();
    assert_eq!(fields[0].value, expected_value);
    assert_eq!(fields[0].is_zero, expected_zero);
}

#[derive(Reflect, Default)]
pub struct Directives {
    #[tags(meta = "-")]
    pub dropped: String,
    #[tags(meta = "nodive")]
    pub kept_whole: Inner,
    pub expanded: Inner,
}

#[test]
fn test_custom_directive_tag() {
    let config = Config::builder().directive_tag("meta").build();
    let fields = inspect_with(&Directives::default(), &config).unwrap();
    assert_eq!(names(&fields), vec!["kept_whole", "expanded_deep_value"]);

    // Under the default directive key the `meta` annotations mean nothing.
    let fields = inspect(&Directives::default()).unwrap();
    assert_eq!(
        names(&fields),
        vec!["dropped", "kept_whole_deep_value", "expanded_deep_value"]
    );
}

#[derive(Reflect)]
pub struct Wrapper<T> {
    pub label: String,
    pub inner: T,
}

#[test]
fn test_generic_record() {
    let value = Wrapper {
        label: "w".to_string(),
        inner: Person {
            first_name: "Grace".to_string(),
            age: 0,
        },
    };
    let fields = inspect(&value).unwrap();
    assert_eq!(names(&fields), vec!["label", "inner_first_name", "inner_age"]);
    assert!(fields[2].is_zero);

    let value = Wrapper {
        label: String::new(),
        inner: vec![1u8, 2],
    };
    let fields = inspect(&value).unwrap();
    assert_eq!(fields[1].kind, Kind::Seq);
    assert_eq!(fields[1].value, Value::Seq(vec![Value::from(1u8), Value::from(2u8)]));
    assert!(!fields[1].is_zero);
}

#[derive(Reflect)]
pub struct Keywords {
    pub r#type: String,
}

#[test]
fn test_raw_identifiers_are_named_without_prefix() {
    let value = Keywords {
        r#type: "x".to_string(),
    };
    let fields = inspect(&value).unwrap();
    assert_eq!(fields[0].name, "type");
}

#[derive(Reflect)]
pub struct Marker;

#[test]
fn test_unit_struct_yields_nothing() {
    assert!(inspect(&Marker).unwrap().is_empty());
}

#[test]
fn test_optional_reference_is_dereferenced_once() {
    let some = Some(Inner { deep_value: 1.5 });
    let fields = inspect(&some).unwrap();
    assert_eq!(names(&fields), vec!["deep_value"]);

    let boxed = Box::new(Inner { deep_value: 1.5 });
    assert_eq!(inspect(&boxed).unwrap(), fields);

    let none: Option<Inner> = None;
    assert!(matches!(
        inspect(&none),
        Err(InspectError::InvalidInputKind { .. })
    ));

    let nested: Option<Option<Inner>> = Some(Some(Inner::default()));
    assert!(matches!(
        inspect(&nested),
        Err(InspectError::InvalidInputKind { .. })
    ));
}

#[rstest]
#[case(&42i32 as &dyn Reflect, "i32")]
#[case(&"text" as &dyn Reflect, "&str")]
#[case(&[1u8, 2] as &dyn Reflect, "[u8; 2]")]
fn test_non_record_input_fails(#[case] value: &dyn Reflect, #[case] found: &str) {
    match inspect(value) {
        Err(InspectError::InvalidInputKind { found: actual }) => {
            assert!(actual.ends_with(found), "{actual} should end with {found}")
        }
        other => panic!("expected InvalidInputKind, got {other:?}"),
    }
}

#[test]
fn test_descriptors_serialize() {
    let value = JsonRecord {
        id: 10,
        email: "foo@bar.com".to_string(),
        info: Another::default(),
    };
    let fields = inspect_with(&value, &Config::builder().naming_tag("json").build()).unwrap();
    let json = serde_json::to_value(&fields[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "id",
            "kind": "i32",
            "type": { "name": "i32", "kind": "i32" },
            "tags": "json:\"id\"",
            "path": [0],
            "value": 10,
            "is_zero": false,
        })
    );
}
