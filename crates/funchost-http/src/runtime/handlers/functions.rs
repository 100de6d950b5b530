//! Function documentation and execution handlers.
//!
//! One logical path serves both operations: GET returns the function's
//! descriptor, POST runs the function on the request's `input` field.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};
use funchost_core::{FunctionError, HostedFunction};
use std::sync::Arc;

use crate::runtime::{
    error::{ErrorBody, HostError},
    host::FunctionHost,
    types::{InvokeRequest, InvokeResponse},
};

/// GET /functions/{name} - Function documentation
#[utoipa::path(
    get,
    path = "/functions/{name}",
    params(
        ("name" = String, Path, description = "Function name")
    ),
    responses(
        (status = 200, description = "Function descriptor", body = funchost_core::FunctionDescriptor),
        (status = 404, description = "Function not found", body = ErrorBody),
        (status = 500, description = "Descriptor serialization failed", body = ErrorBody)
    ),
    tag = "functions"
)]
pub async fn get_function_docs(
    State(host): State<FunctionHost>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, HostError> {
    let function = lookup(&host, &name)?;

    // Serialize explicitly so a malformed descriptor maps to the contract's
    // 500 shape instead of the framework's. Registration validates
    // descriptors, so this path never fires under correct configuration.
    let descriptor = serde_json::to_value(function.descriptor()).map_err(|e| {
        tracing::error!(function = %name, error = %e, "descriptor serialization failed");
        HostError::DocumentationFailed
    })?;

    Ok(Json(descriptor))
}

/// POST /functions/{name} - Execute a function
#[utoipa::path(
    post,
    path = "/functions/{name}",
    params(
        ("name" = String, Path, description = "Function name")
    ),
    request_body = InvokeRequest,
    responses(
        (status = 200, description = "Function output", body = InvokeResponse),
        (status = 400, description = "Input field missing or not a string", body = ErrorBody),
        (status = 404, description = "Function not found", body = ErrorBody),
        (status = 500, description = "Function execution failed", body = ErrorBody)
    ),
    tag = "functions"
)]
pub async fn invoke_function(
    State(host): State<FunctionHost>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<InvokeResponse>, HostError> {
    let function = lookup(&host, &name)?;
    let input = parse_invoke_body(&body)?.into_input()?;

    let output = function.call(&input).map_err(|e| {
        let FunctionError::ExecutionFailed { message } = e;
        HostError::ProcessingFailed { message }
    })?;

    Ok(Json(InvokeResponse { output }))
}

fn lookup(host: &FunctionHost, name: &str) -> Result<Arc<dyn HostedFunction>, HostError> {
    host.registry
        .get(name)
        .ok_or_else(|| HostError::FunctionNotFound {
            name: name.to_string(),
        })
}

/// Parse the request body leniently.
///
/// The contract maps an empty body, malformed JSON and non-object bodies to
/// the same validation error as an absent `input` field, so parsing happens
/// on raw bytes rather than through the framework's JSON rejection.
fn parse_invoke_body(body: &Bytes) -> Result<InvokeRequest, HostError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| HostError::MissingInput)?;
    if !value.is_object() {
        return Err(HostError::MissingInput);
    }
    serde_json::from_value(value).map_err(|_| HostError::MissingInput)
}
