//! The behaviours `weave.yaml` / `loom.yaml` consumers rely on.

use chrono::NaiveDate;
use weft_core::{default_weave_config, parse, serialize, Mapping, Value};
use weft_test_bench::consts::{COMMENTED_INPUT, UNCOMMENTED_INPUT};

#[test]
fn docs_scalar_coercion() {
    assert_eq!(parse("a: true").get("a"), Some(&Value::Bool(true)));
    assert_eq!(parse("a: 42").get("a"), Some(&Value::Integer(42)));
    assert_eq!(parse(r#"a: "hi there""#).get("a"), Some(&Value::from("hi there")));
}

#[test]
fn docs_nesting() {
    let doc = parse("style:\n  icon: Box\nmetadata:\n  difficulty: beginner");
    let style: Mapping = [("icon", "Box")].into_iter().collect();
    let metadata: Mapping = [("difficulty", "beginner")].into_iter().collect();
    let expected: Mapping = [("style", style), ("metadata", metadata)].into_iter().collect();
    assert_eq!(doc, expected);
}

#[test]
fn docs_inline_array() {
    let expected: Mapping = [(
        "tags",
        vec![Value::from("a"), Value::from("b"), Value::from("c")],
    )]
    .into_iter()
    .collect();
    assert_eq!(parse("tags: [a, b, c]"), expected);
}

#[test]
fn docs_block_array() {
    let expected: Mapping = [("tags", vec![Value::from("alpha"), Value::from("beta")])]
        .into_iter()
        .collect();
    assert_eq!(parse("tags:\n  - alpha\n  - beta"), expected);
}

#[test]
fn docs_comments_and_blank_lines() {
    assert_eq!(parse(COMMENTED_INPUT), parse(UNCOMMENTED_INPUT));
}

#[test]
fn docs_serializer_quoting() {
    let doc: Mapping = [("a", "has: colon")].into_iter().collect();
    assert_eq!(serialize(&doc), r#"a: "has: colon""#);
    let doc: Mapping = [("a", "plain")].into_iter().collect();
    assert_eq!(serialize(&doc), "a: plain");
}

#[test]
fn docs_default_weave_shape() {
    let created = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let doc = default_weave_config("my-weave", created);
    assert_eq!(doc.get("name").and_then(Value::as_str), Some("My Weave"));
    assert_eq!(doc.get("order").and_then(Value::as_i64), Some(0));
    assert_eq!(doc.get("featured").and_then(Value::as_bool), Some(false));
    assert_eq!(doc.get("hidden").and_then(Value::as_bool), Some(false));
    let icon = doc.get_path(&["style", "icon"]).and_then(Value::as_str);
    assert!(icon.is_some_and(|icon| !icon.is_empty()));
}

#[test]
fn docs_null_dropping() {
    let mut doc = Mapping::new();
    doc.insert("a", Value::Null);
    doc.insert("b", 1);
    assert_eq!(serialize(&doc), "b: 1");
}
