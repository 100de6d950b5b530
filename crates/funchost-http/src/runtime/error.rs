//! Error handling for the HTTP host.
//!
//! Every failure is caught at the handler boundary and converted into one of
//! the fixed JSON shapes below; nothing propagates past the HTTP layer and no
//! stack traces leak. The `error` strings are part of the wire contract and
//! must not change.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured error response for the HTTP surface.
///
/// `message` is only present for processing failures, where it carries the
/// underlying error text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Fixed, human-readable error description.
    pub error: String,
    /// Diagnostic detail for processing failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Errors produced while handling a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The request body has no usable `input` field. Covers an absent field,
    /// a JSON `null`, a body that is not a JSON object, and malformed JSON.
    MissingInput,
    /// The `input` field is present but not a JSON string.
    InvalidInputType,
    /// No function is registered under the requested name.
    FunctionNotFound { name: String },
    /// The function failed while processing the request.
    ProcessingFailed { message: String },
    /// The function's descriptor could not be serialized. Defensive only;
    /// registration guarantees descriptors are well-formed.
    DocumentationFailed,
}

impl HostError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            HostError::MissingInput => StatusCode::BAD_REQUEST,
            HostError::InvalidInputType => StatusCode::BAD_REQUEST,
            HostError::FunctionNotFound { .. } => StatusCode::NOT_FOUND,
            HostError::ProcessingFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            HostError::DocumentationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The wire body for this error. These strings are contractual.
    pub fn body(&self) -> ErrorBody {
        match self {
            HostError::MissingInput => ErrorBody {
                error: "Input field in the request body is required".to_string(),
                message: None,
            },
            HostError::InvalidInputType => ErrorBody {
                error: "Input field in the request body must be a string".to_string(),
                message: None,
            },
            HostError::FunctionNotFound { .. } => ErrorBody {
                error: "Function not found".to_string(),
                message: None,
            },
            HostError::ProcessingFailed { message } => ErrorBody {
                error: "An error occurred while processing your request".to_string(),
                message: Some(message.clone()),
            },
            HostError::DocumentationFailed => ErrorBody {
                error: "Error retrieving function documentation".to_string(),
                message: None,
            },
        }
    }
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::MissingInput => write!(f, "input field missing from request body"),
            HostError::InvalidInputType => write!(f, "input field is not a string"),
            HostError::FunctionNotFound { name } => write!(f, "function not found: {}", name),
            HostError::ProcessingFailed { message } => {
                write!(f, "function execution failed: {}", message)
            }
            HostError::DocumentationFailed => write!(f, "descriptor serialization failed"),
        }
    }
}

impl std::error::Error for HostError {}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status_code = %status_code, error = %self, "request failed");
        } else {
            tracing::warn!(status_code = %status_code, error = %self, "request rejected");
        }

        (status_code, Json(self.body())).into_response()
    }
}
