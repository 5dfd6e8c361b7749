//! Combine driver: fold any number of documents into one
//!
//! Documents are ordered from lowest precedence (index 0) to highest
//! (last index). The fold runs from the highest-precedence document
//! down: the running aggregate plays the incoming ("y") role against
//! each earlier document, which is equivalent to a left-to-right fold
//! where later documents override earlier ones.

use serde_json::{Map, Value};

use crate::error::MergeError;
use crate::flatten::flatten;
use crate::merge::merge_hash;
use crate::policy::MergeOptions;
use crate::resolve::{check_resolved, FullyResolved, Resolver};

/// Combine documents with highest-precedence-wins semantics.
///
/// Callers may pass individual documents or one sequence of documents;
/// a single level of nesting is flattened away. An empty input produces
/// an empty mapping; a single document is returned unchanged.
pub fn combine(documents: &[Value], options: &MergeOptions) -> Result<Value, MergeError> {
    combine_with(documents, options, &FullyResolved)
}

/// Like [`combine`], but checks every document node against `resolver`
/// before any merging happens.
pub fn combine_with<R>(
    documents: &[Value],
    options: &MergeOptions,
    resolver: &R,
) -> Result<Value, MergeError>
where
    R: Resolver + ?Sized,
{
    let documents = flatten(documents, Some(1));

    for document in &documents {
        check_resolved(document, resolver)?;
    }

    let mut high_to_low = documents.into_iter().rev();
    let Some(mut merged) = high_to_low.next() else {
        return Ok(Value::Object(Map::new()));
    };

    // The leftmost document usually carries the bulk of the defaults, so
    // folding from the highest precedence down keeps the large side in
    // the position merge_hash clones only once per step.
    for document in high_to_low {
        merged = merge_hash(&document, &merged, options)?;
    }

    Ok(merged)
}
