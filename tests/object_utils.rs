use std::collections::BTreeMap;

use obj_utils::object::{is_empty_like, map_values, ObjectErrorCode};
use obj_utils::{
    clone_value, copy_properties, deep_clone, is_defined, is_object, map_object, merge,
    property_value_with_default, sort_object, sort_object_by_property, value_with_default,
    Mapping,
};
use serde::Serialize;
use serde_json::{json, Value};

fn mapping(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[derive(Serialize)]
struct Profile {
    name: String,
    tags: Vec<String>,
    limits: BTreeMap<String, u32>,
    nickname: Option<String>,
}

#[test]
fn merge_overlays_left_to_right() {
    let defaults = mapping(json!({"theme": "light", "size": 12}));
    let user = mapping(json!({"size": 14, "font": "mono"}));
    let session = mapping(json!({"theme": "dark"}));

    let merged = obj_utils::merge!(defaults, user, session);
    assert_eq!(
        Value::Object(merged),
        json!({"theme": "dark", "size": 14, "font": "mono"})
    );
    assert!(merge(Vec::<Mapping>::new()).is_empty());
}

#[test]
fn typed_values_clone_into_plain_data() {
    let profile = Profile {
        name: "ada".into(),
        tags: vec!["admin".into()],
        limits: BTreeMap::from([("daily".to_string(), 10)]),
        nickname: None,
    };
    let cloned = clone_value(&profile).unwrap();
    assert_eq!(
        cloned,
        json!({"name": "ada", "tags": ["admin"], "limits": {"daily": 10}, "nickname": null})
    );

    let mut copy = deep_clone(&cloned);
    copy["tags"][0] = json!("guest");
    assert_ne!(copy, cloned);
    assert_eq!(cloned["tags"], json!(["admin"]));
}

#[test]
fn copy_properties_from_typed_source() {
    let profile = Profile {
        name: "ada".into(),
        tags: vec![],
        limits: BTreeMap::new(),
        nickname: Some("countess".into()),
    };
    let mut destination = mapping(json!({"name": "existing"}));
    copy_properties(&profile, &mut destination, None).unwrap();
    assert_eq!(destination["name"], json!("existing"));
    assert_eq!(destination["nickname"], json!("countess"));

    copy_properties(&profile, &mut destination, Some(true)).unwrap();
    assert_eq!(destination["name"], json!("ada"));
}

#[test]
fn copy_properties_rejects_scalar_sources() {
    let mut destination = Mapping::new();
    let error = copy_properties(&42, &mut destination, Some(true)).unwrap_err();
    assert_eq!(error.code, ObjectErrorCode::TypeMismatch);
    assert!(error.to_string().contains("copy_properties"));
}

#[test]
fn defaults_and_predicates() {
    let fallback = json!("x");
    assert_eq!(value_with_default(Some(&Value::Null), &fallback), "x");
    assert_eq!(value_with_default(Some(&json!(0)), &fallback), &json!(0));

    let settings = json!({"label": "", "title": "Home", "items": []});
    assert_eq!(property_value_with_default(Some(&settings), "label", &fallback), "x");
    assert_eq!(property_value_with_default(Some(&settings), "title", &fallback), "Home");
    assert_eq!(property_value_with_default(Some(&settings), "items", &fallback), "x");
    assert!(is_empty_like(&settings["items"]));

    assert!(is_defined(Some(&settings)));
    assert!(!is_defined(settings.get("missing")));
    assert!(is_object(&json!([])));
    assert!(is_object(&json!({})));
    assert!(!is_object(&Value::Null));
    assert!(!is_object(&json!(5)));
}

#[test]
fn mapping_and_sorting_chain() {
    let scores = json!({"carol": 7, "alice": 9, "bob": 7});
    let ranked = map_object(&scores, |value, key, _| {
        json!({"name": key, "score": value})
    })
    .unwrap();

    let by_score = sort_object_by_property(&Value::Object(ranked.clone()), "score").unwrap();
    let order: Vec<_> = by_score.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(order, ["carol", "bob", "alice"]);

    let by_key = sort_object(Value::Object(ranked)).unwrap();
    let keys: Vec<_> = by_key.keys().map(String::as_str).collect();
    assert_eq!(keys, ["alice", "bob", "carol"]);

    let doubled = map_values(&by_key, |value, _, _| value["score"].as_i64().unwrap_or(0) * 2);
    assert_eq!(Value::Object(doubled), json!({"alice": 18, "bob": 14, "carol": 14}));
}

#[test]
fn type_mismatches_are_reported() {
    for input in [Value::Null, json!(5), json!("text")] {
        assert_eq!(
            map_object(&input, |value, _, _| value.clone()).unwrap_err().code,
            ObjectErrorCode::TypeMismatch
        );
        assert_eq!(
            sort_object(input.clone()).unwrap_err().code,
            ObjectErrorCode::TypeMismatch
        );
        assert_eq!(
            sort_object_by_property(&input, "age").unwrap_err().code,
            ObjectErrorCode::TypeMismatch
        );
    }
}

#[test]
fn non_finite_fields_are_not_cloned() {
    #[derive(Serialize)]
    struct Gauge {
        label: String,
        reading: f64,
    }

    let gauge = Gauge {
        label: "pressure".into(),
        reading: f64::NAN,
    };
    assert_eq!(
        clone_value(&gauge).unwrap_err().code,
        ObjectErrorCode::SerializationLoss
    );

    let mut destination = Mapping::new();
    assert!(copy_properties(&gauge, &mut destination, None).is_err());
    assert!(destination.is_empty());
}

#[test]
fn multi_element_sequences_are_real_data() {
    let fallback = json!("d");
    let input = json!({"a": ["", ""]});
    assert_eq!(
        property_value_with_default(Some(&input), "a", &fallback),
        &json!(["", ""])
    );
}
