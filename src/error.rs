//! Merge error taxonomy
//!
//! Every failure is raised synchronously to the immediate caller; the
//! core never returns a partial result.

use serde_json::Value;

/// Errors produced by the merge pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// An option name outside the recognized set was passed at the
    /// combine boundary.
    #[error("'recursive' and 'list_merge' are the only valid options; got '{name}'")]
    UnknownOption { name: String },

    /// A `list_merge` value outside the six recognized policies.
    #[error(
        "'list_merge' can only be equal to 'replace', 'keep', 'append', \
         'prepend', 'append_rp' or 'prepend_rp'; got '{given}'"
    )]
    InvalidPolicy { given: String },

    /// A merge operand that was expected to be a mapping was not one.
    /// Carries both operands' runtime type names and serialized forms.
    #[error(
        "failed to combine variables, expected mappings but got a \
         '{x_type}' and a '{y_type}':\n{x_repr}\n{y_repr}"
    )]
    TypeMismatch {
        x_type: &'static str,
        y_type: &'static str,
        x_repr: String,
        y_repr: String,
    },

    /// A document contains a value the host environment has not resolved.
    #[error("cannot combine variables with an unresolved value: {repr}")]
    Unresolved { repr: String },
}

impl MergeError {
    pub(crate) fn type_mismatch(x: &Value, y: &Value) -> Self {
        MergeError::TypeMismatch {
            x_type: type_name(x),
            y_type: type_name(y),
            x_repr: render(x),
            y_repr: render(y),
        }
    }

    pub(crate) fn unresolved(value: &Value) -> Self {
        MergeError::Unresolved {
            repr: render(value),
        }
    }
}

/// Runtime type name of a value, for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Best-effort rendering of a value for error messages: compact JSON,
/// falling back to the debug form if serialization fails.
pub(crate) fn render(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}
