//! End-to-end checks of the helpers working on converted JSON documents.

use serde_json::json;
use value_utils::{
    clone_deep, escape_reg_exp, has, is_equal, last, omit, pick, pick_by, to_path, uniq, uniq_by, uniq_id, xor,
    IdCounter, Map, Value,
};

fn values(json: serde_json::Value) -> Vec<Value> {
    Value::from(json).as_array().unwrap().to_vec()
}

#[test]
fn pick_then_omit_partition_an_object() {
    let object = Value::from(json!({"id": 7, "name": "ada", "secret": "x", "nested": {"a": 1}}));
    let picked = pick(&object, ["id", "name"]);
    let rest = omit(&object, ["id", "name"]);

    let mut merged: Map = picked.clone();
    merged.extend(rest);
    assert!(is_equal(&Value::from(merged), &object));
    assert_eq!(picked.len(), 2);
}

#[test]
fn pick_by_filters_on_key() {
    let object = Value::from(json!({"_private": 1, "public": 2, "_x": 3}));
    let result = pick_by(&object, |_, key| !key.starts_with('_'));
    assert_eq!(Value::from(result), Value::from(json!({"public": 2})));
}

#[test]
fn has_matches_its_path_segments() {
    let object = Value::from(json!({"a": {"b": [{"c": null}]}}));
    assert_eq!(to_path("a.b[0].c"), vec!["a", "b", "0", "c"]);
    assert!(has(&object, "a.b[0].c"));
    assert!(has(&object, "a.b.0.c"));
    assert!(!has(&object, "a.b[0].c.d"));
    assert!(!has(&object, "a.b[1]"));
}

#[test]
fn clone_deep_survives_conversion_back_to_json() {
    let document = json!({"list": [1, {"k": [true, "s"]}], "n": null});
    let cloned = clone_deep(&Value::from(&document));
    assert_eq!(serde_json::Value::from(cloned), document);
}

#[test]
fn omit_shares_nested_but_clone_deep_does_not() {
    let object = Value::from(json!({"a": {"b": 1}, "c": 2}));
    let shallow = Value::from(omit(&object, ["c"]));
    let deep = clone_deep(&object);

    let original_a = object.get_own("a").unwrap();
    assert!(shallow.get_own("a").unwrap().ptr_eq(original_a));
    assert!(!deep.get_own("a").unwrap().ptr_eq(original_a));
}

#[test]
fn uniq_examples() {
    assert_eq!(uniq(&values(json!([1, 2, 1, 3]))), values(json!([1, 2, 3])));
    assert_eq!(uniq(&values(json!(["a", "b", "a"]))), values(json!(["a", "b"])));
    let by_len = uniq_by(&values(json!(["aa", "b", "cc", "d"])), |s| {
        Value::from(s.as_str().map_or(0, |s| s.len() as i64))
    });
    assert_eq!(by_len, values(json!(["aa", "b"])));
}

#[test]
fn xor_examples() {
    assert_eq!(xor([values(json!([2, 1])), values(json!([2, 3]))]), values(json!([1, 3])));
    assert!(xor([values(json!([1, 2])), values(json!([1, 2]))]).is_empty());
    assert!(xor([values(json!([1, 1])), values(json!([1]))]).is_empty());
}

#[test]
fn last_of_value_array() {
    let list = values(json!([1, 2, 3, 4]));
    assert_eq!(last(&list), Some(&Value::from(4)));
    assert_eq!(last(&values(json!([]))), None);
}

#[test]
fn escape_reg_exp_example() {
    assert_eq!(escape_reg_exp("^[a-z]*$^"), "\\^\\[a-z\\]\\*\\$\\^");
}

#[test]
fn uniq_id_format_and_order() {
    let first = uniq_id("x_");
    let second = uniq_id("x_");
    let parse = |id: &str| id.strip_prefix("x_").unwrap().parse::<u64>().unwrap();
    assert!(parse(&first) >= 1);
    assert!(parse(&second) > parse(&first));
}

#[test]
fn independent_id_counters() {
    let a = IdCounter::new();
    let b = IdCounter::new();
    assert_eq!(a.next_id("a"), "a1");
    assert_eq!(b.next_id("b"), "b1");
}
