//! Merge policy configuration
//!
//! Two independent knobs: whether nested mappings merge deeply
//! (`recursive`) and how colliding sequences are combined (`list_merge`).
//! Both are validated once at the boundary; past it the types guarantee
//! validity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{render, MergeError};

/// Strategy for resolving two sequence values found under the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMerge {
    /// The incoming sequence wins entirely.
    #[default]
    Replace,
    /// The base sequence is kept; the incoming one is discarded.
    Keep,
    /// Base followed by incoming, duplicates preserved.
    Append,
    /// Incoming followed by base, duplicates preserved.
    Prepend,
    /// Base elements not present in the incoming sequence, then all of
    /// the incoming sequence ("rp" = remove present).
    AppendRp,
    /// All of the incoming sequence, then base elements not present in it.
    PrependRp,
}

impl ListMerge {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMerge::Replace => "replace",
            ListMerge::Keep => "keep",
            ListMerge::Append => "append",
            ListMerge::Prepend => "prepend",
            ListMerge::AppendRp => "append_rp",
            ListMerge::PrependRp => "prepend_rp",
        }
    }
}

impl fmt::Display for ListMerge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListMerge {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(ListMerge::Replace),
            "keep" => Ok(ListMerge::Keep),
            "append" => Ok(ListMerge::Append),
            "prepend" => Ok(ListMerge::Prepend),
            "append_rp" => Ok(ListMerge::AppendRp),
            "prepend_rp" => Ok(ListMerge::PrependRp),
            other => Err(MergeError::InvalidPolicy {
                given: other.to_string(),
            }),
        }
    }
}

/// Options controlling one merge.
///
/// The driver default is a shallow merge with list replacement, matching
/// the most conservative behavior: higher-precedence values fully
/// override lower-precedence ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Merge nested mappings deeply instead of overriding them whole.
    pub recursive: bool,
    /// Policy for colliding sequence values.
    pub list_merge: ListMerge,
}

impl MergeOptions {
    pub fn new(recursive: bool, list_merge: ListMerge) -> Self {
        Self {
            recursive,
            list_merge,
        }
    }

    /// Deep-merge options with the default list policy.
    pub fn deep() -> Self {
        Self {
            recursive: true,
            list_merge: ListMerge::Replace,
        }
    }

    /// Build options from loosely-typed `(name, value)` pairs, the shape
    /// option bags arrive in from embedding environments.
    ///
    /// Recognized names are `recursive` (any value, interpreted by
    /// truthiness) and `list_merge` (a string naming one of the six
    /// policies). Any other name is rejected.
    pub fn from_args<'a, I>(args: I) -> Result<Self, MergeError>
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        let mut options = Self::default();
        for (name, value) in args {
            match name {
                "recursive" => options.recursive = truthy(value),
                "list_merge" => {
                    let policy = value.as_str().ok_or_else(|| MergeError::InvalidPolicy {
                        given: render(value),
                    })?;
                    options.list_merge = policy.parse()?;
                }
                other => {
                    return Err(MergeError::UnknownOption {
                        name: other.to_string(),
                    })
                }
            }
        }
        Ok(options)
    }
}

/// Truthiness for loosely-typed option values: null, false, zero, and
/// empty strings/sequences/mappings are false, everything else true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
