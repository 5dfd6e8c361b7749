//! Recursive deep merge of two mappings
//!
//! Merge semantics, with `y` taking precedence over `x`:
//! - Absent keys: inserted from `y`
//! - Mapping/mapping collisions: recursive merge when `recursive` is set,
//!   full override otherwise
//! - Sequence/sequence collisions: combined per the `list_merge` policy
//! - Everything else: `y` wins

use serde_json::Value;

use crate::error::MergeError;
use crate::policy::{ListMerge, MergeOptions};

/// Return a new mapping with `y` merged into `x`, so that keys from `y`
/// take precedence over keys from `x`. Neither operand is modified.
///
/// Both operands must be mappings, at the top level and at every depth
/// the recursion reaches; anything else fails with
/// [`MergeError::TypeMismatch`].
pub fn merge_hash(x: &Value, y: &Value, options: &MergeOptions) -> Result<Value, MergeError> {
    let (base, incoming) = match (x.as_object(), y.as_object()) {
        (Some(base), Some(incoming)) => (base, incoming),
        _ => return Err(MergeError::type_mismatch(x, y)),
    };

    // Fast path: result is identical to the general loop, without
    // walking the incoming side.
    if base.is_empty() || base == incoming {
        return Ok(Value::Object(incoming.clone()));
    }

    // x is typically the bulky "defaults" side being patched by a small
    // y, so clone x once and copy y's entries into it.
    let mut merged = base.clone();

    // Fast path: shallow merge with list replacement is a plain key-wise
    // override.
    if !options.recursive && options.list_merge == ListMerge::Replace {
        for (key, incoming_value) in incoming {
            merged.insert(key.clone(), incoming_value.clone());
        }
        return Ok(Value::Object(merged));
    }

    for (key, incoming_value) in incoming {
        let Some(base_value) = merged.get(key) else {
            merged.insert(key.clone(), incoming_value.clone());
            continue;
        };

        let combined = match (base_value, incoming_value) {
            (Value::Object(_), Value::Object(_)) if options.recursive => {
                merge_hash(base_value, incoming_value, options)?
            }
            (Value::Array(base_items), Value::Array(incoming_items)) => {
                Value::Array(merge_lists(base_items, incoming_items, options.list_merge))
            }
            // Scalars and mismatched shapes: the incoming value wins.
            _ => incoming_value.clone(),
        };
        merged.insert(key.clone(), combined);
    }

    Ok(Value::Object(merged))
}

/// Combine two colliding sequences according to `policy`.
///
/// `base` is the lower-precedence operand, `incoming` the higher. The
/// `_rp` variants drop base elements that appear anywhere in the
/// incoming sequence, by value equality; doubles within one sequence are
/// deliberately left alone.
fn merge_lists(base: &[Value], incoming: &[Value], policy: ListMerge) -> Vec<Value> {
    match policy {
        ListMerge::Replace => incoming.to_vec(),
        ListMerge::Keep => base.to_vec(),
        ListMerge::Append => base.iter().chain(incoming).cloned().collect(),
        ListMerge::Prepend => incoming.iter().chain(base).cloned().collect(),
        ListMerge::AppendRp => base
            .iter()
            .filter(|&element| !incoming.contains(element))
            .chain(incoming)
            .cloned()
            .collect(),
        ListMerge::PrependRp => incoming
            .iter()
            .chain(base.iter().filter(|&element| !incoming.contains(element)))
            .cloned()
            .collect(),
    }
}
