//! Request type definitions for HTTP endpoints.

use crate::runtime::error::HostError;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Request body for executing a function.
///
/// The field is kept as a raw JSON value so that absence, `null` and wrong
/// types are distinguished explicitly at the boundary instead of failing
/// somewhere inside deserialization. No other fields are read; unknown
/// fields are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct InvokeRequest {
    /// Input for the function. Must be a JSON string; the empty string is
    /// valid.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Hello, world")]
    pub input: Option<Value>,
}

impl InvokeRequest {
    /// Extract the validated input string.
    ///
    /// `null` counts as missing: the contract requires a string and a `null`
    /// carries no usable value. Other non-string types get their own
    /// validation error instead of being coerced.
    pub fn into_input(self) -> Result<String, HostError> {
        match self.input {
            None | Some(Value::Null) => Err(HostError::MissingInput),
            Some(Value::String(input)) => Ok(input),
            Some(_) => Err(HostError::InvalidInputType),
        }
    }
}
