use std::collections::BTreeMap;

use proptest::prelude::*;
use weft_core::{parse, serialize, Mapping, Value};
use weft_test_bench::assert_round_trip;
use weft_test_bench::consts::*;

#[test]
fn round_trip_fixtures() {
    for input in [
        NESTED_INPUT,
        WEAVE_INPUT,
        COMMENTED_INPUT,
        ZERO_INDENT_SEQ_INPUT,
        SEQ_OF_MAPS_INPUT,
        BLOCK_MARKER_INPUT,
        DEDENT_INPUT,
        QUOTED_INPUT,
        INLINE_SEQ_INPUT,
    ] {
        assert_round_trip(input);
    }
}

#[test]
fn round_trip_is_deterministic() {
    let doc = parse(WEAVE_INPUT);
    assert_eq!(serialize(&doc), serialize(&doc.clone()));
}

fn scalar_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("true".to_string()),
        Just("1.0".to_string()),
        Just("|".to_string()),
        "[a-z ]{1,8}",
        "[a-z0-9:#'\"\\\\\\[\\], .-]{0,10}",
    ]
}

fn line() -> impl Strategy<Value = String> {
    let body = prop_oneof![
        ("[a-z]{1,4}", scalar_text()).prop_map(|(k, v)| format!("{k}: {v}")),
        "[a-z]{1,4}".prop_map(|k| format!("{k}:")),
        "[a-z]{1,4}".prop_map(|k| format!("{k}: [x, \"y\", 1]")),
        scalar_text().prop_map(|v| format!("- {v}")),
        Just("-".to_string()),
        Just("# note".to_string()),
        Just(String::new()),
    ];
    (0usize..4, body).prop_map(|(depth, body)| format!("{}{body}", "  ".repeat(depth)))
}

fn leaf() -> impl Strategy<Value = Value<'static>> {
    prop_oneof![
        any::<String>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite floats only", |f| f.is_finite())
            .prop_map(Value::from),
    ]
}

fn mapping_of<S>(value: S) -> impl Strategy<Value = Mapping<'static>>
where
    S: Strategy<Value = Value<'static>>,
{
    prop::collection::btree_map("[a-z]{1,6}", value, 0..5)
        .prop_map(|m: BTreeMap<String, Value<'static>>| m.into_iter().collect::<Mapping<'static>>())
}

/// Documents inside the readable subset: no nulls, sequences hold strings
/// or mappings only.
fn document() -> impl Strategy<Value = Mapping<'static>> {
    let value = leaf().prop_recursive(3, 32, 4, |inner| {
        let item = prop_oneof![
            any::<String>().prop_map(Value::from),
            mapping_of(inner.clone()).prop_map(Value::from),
        ];
        prop_oneof![
            mapping_of(inner).prop_map(Value::from),
            prop::collection::vec(item, 0..4).prop_map(Value::from),
        ]
    });
    mapping_of(value)
}

proptest! {
    #[test]
    fn reparse_of_any_text_is_stable(lines in prop::collection::vec(line(), 0..24)) {
        let text = lines.join("\n");
        let first = parse(&text);
        let emitted = serialize(&first);
        prop_assert_eq!(parse(&emitted), first, "emitted:\n{}", emitted);
    }

    #[test]
    fn documents_survive_serialization(doc in document()) {
        let emitted = serialize(&doc);
        prop_assert_eq!(parse(&emitted), doc, "emitted:\n{}", emitted);
    }
}
