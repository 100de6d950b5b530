//! Self-describing function metadata.
//!
//! A [`FunctionDescriptor`] is built once at startup, never mutated, and
//! served verbatim as the documentation for a hosted function. Its `example`
//! fields double as a contract: the registry refuses to register a function
//! whose execution on `input.example` does not produce `output.example`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Schema for one side of a function's interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValueSchema {
    /// Wire type of the value. Always `"string"` for current functions.
    #[serde(rename = "type")]
    #[schema(example = "string")]
    pub value_type: String,
    /// Human-readable description of the value.
    pub description: String,
    /// Example value, consistent with the function's execution behavior.
    #[schema(example = "Hello, world")]
    pub example: String,
}

impl ValueSchema {
    /// Build a string-typed schema.
    pub fn string(description: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            value_type: "string".to_string(),
            description: description.into(),
            example: example.into(),
        }
    }
}

/// Immutable metadata describing a hosted function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FunctionDescriptor {
    /// Name of the function, used as its routing key.
    #[schema(example = "base64_encode")]
    pub name: String,
    /// Human-readable description of what the function does.
    pub description: String,
    /// Schema of the accepted input.
    pub input: ValueSchema,
    /// Schema of the produced output.
    pub output: ValueSchema,
}
