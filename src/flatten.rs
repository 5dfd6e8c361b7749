//! Sequence flattening with sentinel early termination
//!
//! Callers of the combine driver may pass either individual documents or
//! one sequence of documents; flattening one level normalizes both
//! shapes. A null element (or the strings `"None"` / `"null"`) is an
//! end-of-input sentinel: iteration stops there and everything after it
//! is discarded.

use serde_json::Value;

/// Flatten nested sequences up to `levels` deep; `None` means unlimited.
///
/// Elements are visited in order. A sentinel element terminates the walk
/// entirely. Nested arrays are spliced in place while remaining depth
/// allows; once it reaches zero they are appended whole. Strings and
/// objects are never treated as sequences. The input is not modified.
pub fn flatten(items: &[Value], levels: Option<u32>) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, levels, &mut out);
    out
}

fn flatten_into(items: &[Value], levels: Option<u32>, out: &mut Vec<Value>) {
    for element in items {
        if is_sentinel(element) {
            break;
        }
        match element {
            Value::Array(inner) => match levels {
                None => flatten_into(inner, None, out),
                Some(0) => out.push(element.clone()),
                Some(remaining) => flatten_into(inner, Some(remaining - 1), out),
            },
            other => out.push(other.clone()),
        }
    }
}

fn is_sentinel(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s == "None" || s == "null",
        _ => false,
    }
}
