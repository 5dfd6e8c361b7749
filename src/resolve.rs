//! Host-environment resolution check
//!
//! Embedding environments that evaluate lazily (template engines and the
//! like) can hand over documents that still contain placeholders. The
//! driver walks every document through a [`Resolver`] before any merging
//! happens; the core makes no assumption about how a placeholder is
//! represented.

use serde_json::Value;

use crate::error::MergeError;

/// Decides whether a single value node is fully resolved.
pub trait Resolver {
    fn is_resolved(&self, value: &Value) -> bool;
}

/// Resolver for plain data: every node is already concrete.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullyResolved;

impl Resolver for FullyResolved {
    fn is_resolved(&self, _value: &Value) -> bool {
        true
    }
}

/// Walk `value` depth-first and fail on the first node `resolver`
/// rejects.
pub(crate) fn check_resolved<R>(value: &Value, resolver: &R) -> Result<(), MergeError>
where
    R: Resolver + ?Sized,
{
    if !resolver.is_resolved(value) {
        return Err(MergeError::unresolved(value));
    }
    match value {
        Value::Array(items) => {
            for item in items {
                check_resolved(item, resolver)?;
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                check_resolved(item, resolver)?;
            }
        }
        _ => {}
    }
    Ok(())
}
