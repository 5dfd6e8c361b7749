//! End-to-end semantics of the public combine surface
//!
//! Exercises the crate the way an embedding environment would: loose
//! option bags, layered variable documents, and the error taxonomy.

use serde_json::{json, Value};
use varcombine::{combine, combine_with, merge_hash, ListMerge, MergeError, MergeOptions, Resolver};

fn docs(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => panic!("expected array fixture, got {other}"),
    }
}

#[test]
fn test_layered_defaults_with_patches() {
    // A typical stack: site defaults, environment overrides, one-off
    // patch. Later layers win key-wise; nested maps merge deeply.
    let layers = docs(json!([
        {
            "region": "us-east-1",
            "limits": {"cpu": 2, "mem": "4G"},
            "tags": ["base"]
        },
        {
            "limits": {"cpu": 4},
            "tags": ["staging"]
        },
        {
            "region": "eu-west-1"
        }
    ]));

    let options = MergeOptions::new(true, ListMerge::Append);
    let result = combine(&layers, &options).unwrap();

    assert_eq!(result["region"], "eu-west-1");
    assert_eq!(result["limits"], json!({"cpu": 4, "mem": "4G"}));
    assert_eq!(result["tags"], json!(["base", "staging"]));
}

#[test]
fn test_combine_defaults_are_shallow_replace() {
    let layers = docs(json!([{"a": 1}, {"a": 2}, {"b": 3}]));
    let result = combine(&layers, &MergeOptions::default()).unwrap();
    assert_eq!(result, json!({"a": 2, "b": 3}));
}

#[test]
fn test_combine_accepts_one_sequence_of_documents() {
    let nested = docs(json!([[{"a": 1}, {"b": 2}]]));
    let result = combine(&nested, &MergeOptions::default()).unwrap();
    assert_eq!(result, json!({"a": 1, "b": 2}));
}

#[test]
fn test_options_from_loose_args() {
    let recursive = json!(true);
    let policy = json!("prepend_rp");
    let options =
        MergeOptions::from_args([("recursive", &recursive), ("list_merge", &policy)]).unwrap();

    let layers = docs(json!([{"l": [1, 2, 3]}, {"l": [3, 4]}]));
    let result = combine(&layers, &options).unwrap();
    assert_eq!(result["l"], json!([3, 4, 1, 2]));
}

#[test]
fn test_unknown_option_is_rejected() {
    let value = json!("deep");
    let err = MergeOptions::from_args([("mode", &value)]).unwrap_err();
    assert!(matches!(err, MergeError::UnknownOption { name } if name == "mode"));
}

#[test]
fn test_bogus_policy_is_rejected() {
    let value = json!("bogus");
    let err = MergeOptions::from_args([("list_merge", &value)]).unwrap_err();
    assert!(matches!(err, MergeError::InvalidPolicy { given } if given == "bogus"));
}

#[test]
fn test_merge_hash_rejects_non_mappings() {
    let err = merge_hash(&json!([1, 2]), &json!({"a": 1}), &MergeOptions::deep()).unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, MergeError::TypeMismatch { .. }));
    assert!(message.contains("'array'") && message.contains("'object'"));
}

#[test]
fn test_resolver_gate_runs_before_merging() {
    struct NoTemplates;
    impl Resolver for NoTemplates {
        fn is_resolved(&self, value: &Value) -> bool {
            !matches!(value, Value::String(s) if s.contains("{{"))
        }
    }

    // The second document is not a mapping, but the unresolved value in
    // the first one must be reported before any merge is attempted.
    let layers = docs(json!([{"a": "{{ pending }}"}, "not-a-mapping"]));
    let err = combine_with(&layers, &MergeOptions::default(), &NoTemplates).unwrap_err();
    assert!(matches!(err, MergeError::Unresolved { .. }));
}

#[test]
fn test_inputs_survive_combining() {
    let layers = docs(json!([
        {"a": {"b": [1]}, "l": [1, 2]},
        {"a": {"c": 2}, "l": [2, 3]}
    ]));
    let snapshot = layers.clone();
    let _ = combine(&layers, &MergeOptions::new(true, ListMerge::AppendRp)).unwrap();
    assert_eq!(layers, snapshot);
}

#[test]
fn test_merge_hash_result_is_detached_from_inputs() {
    let y = json!({"a": {"b": 1}});
    let mut result = merge_hash(&json!({}), &y, &MergeOptions::deep()).unwrap();
    result["a"]["b"] = json!(2);
    assert_eq!(y["a"]["b"], 1);
}
