//! Property tests for the schema walker.
//!
//! - Schemas without optional markers and with only empty rules never fail
//!   on record-shaped data.
//! - Processing is deterministic for a fixed schema and data bag.
//! - Enumeration rules always resolve to one of their alternatives.

use docgen_schema::{validate, Schema, XmlBuilder};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Element and attribute names: short lowercase identifiers.
fn name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Schemas built only from empty rules, structured elements and record
/// lists.
fn permissive_schema() -> impl Strategy<Value = Value> {
    let leaf = prop::collection::btree_map(name(), Just(Value::String(String::new())), 0..5)
        .prop_map(|m| Value::Object(m.into_iter().collect()));
    leaf.prop_recursive(3, 32, 5, |inner| {
        prop::collection::vec(
            prop_oneof![
                name().prop_map(|n| (n, Value::String(String::new()))),
                name().prop_map(|n| (format!("@{n}"), Value::String(String::new()))),
                (name(), inner.clone()),
                (name(), name(), inner).prop_map(|(c, i, s)| (format!(":{c}:{i}"), s)),
            ],
            0..5,
        )
        .prop_map(|pairs| {
            let map: Map<String, Value> = pairs.into_iter().collect();
            Value::Object(map)
        })
    })
}

/// Arbitrary JSON data without floats.
fn data_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        "[a-zA-Z0-9 &<>]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(name(), inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Empty rules with no optional markers accept any data.
    #[test]
    fn permissive_schema_never_fails(schema in permissive_schema(), data in data_value()) {
        let schema = Schema::from_value(&schema).unwrap();
        let builder = XmlBuilder::new("root", schema);
        let result = builder.process_value(&data);
        prop_assert!(result.is_ok(), "process failed: {:?}", result.err());
    }

    /// Same schema and data always produce the same document.
    #[test]
    fn processing_is_deterministic(schema in permissive_schema(), data in data_value()) {
        let builder = XmlBuilder::new("root", Schema::from_value(&schema).unwrap());
        let a = builder.process_value(&data).unwrap();
        let b = builder.process_value(&data).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Enumeration rules resolve to a listed alternative and never fail.
    #[test]
    fn enumeration_always_resolves_to_alternative(
        alternatives in prop::collection::vec("[a-z]{1,5}", 1..5),
        candidate in "[a-z]{0,5}",
    ) {
        let rule = alternatives.join("|");
        let resolved = validate(&rule, "k", &candidate).unwrap();
        prop_assert!(alternatives.contains(&resolved));
        if alternatives.contains(&candidate) {
            prop_assert_eq!(resolved, candidate);
        } else {
            prop_assert_eq!(&resolved, &alternatives[0]);
        }
    }
}
