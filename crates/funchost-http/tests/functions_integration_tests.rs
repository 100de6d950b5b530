//! Integration tests for the function documentation and execution endpoints.
//!
//! Drives the full router over `tower::ServiceExt::oneshot`, asserting the
//! exact wire shapes of the contract.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use funchost_core::{
    Base64Encode, FunctionDescriptor, FunctionError, FunctionRegistry, HostedFunction, ValueSchema,
};
use funchost_http::runtime::{FunctionHost, HostConfig};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> axum::Router {
    let registry = FunctionRegistry::new().with_function(Arc::new(Base64Encode::new()));
    FunctionHost::new(registry).router_with_config(HostConfig::default())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: axum::Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn docs_endpoint_returns_descriptor() {
    let (status, json) = get(create_test_app(), "/functions/base64_encode").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "base64_encode");
    assert_eq!(json["description"], "Encode anything to base64");
    assert_eq!(json["input"]["type"], "string");
    assert_eq!(json["input"]["example"], "Hello, world");
    assert_eq!(json["output"]["type"], "string");
    assert_eq!(json["output"]["example"], "SGVsbG8sIHdvcmxk");
}

#[tokio::test]
async fn documented_example_output_matches_execution() {
    let (_, docs) = get(create_test_app(), "/functions/base64_encode").await;

    let input_example = docs["input"]["example"].as_str().unwrap();
    let body = json!({ "input": input_example }).to_string();
    let (status, json) = post(create_test_app(), "/functions/base64_encode", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["output"], docs["output"]["example"]);
}

#[tokio::test]
async fn invoke_encodes_known_vector() {
    let (status, json) = post(
        create_test_app(),
        "/functions/base64_encode",
        r#"{"input": "Hello, world"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "output": "SGVsbG8sIHdvcmxk" }));
}

#[tokio::test]
async fn invoke_round_trips_through_decoding() {
    let input = "The quick brown fox jumps over the lazy dog";
    let body = json!({ "input": input }).to_string();
    let (status, json) = post(create_test_app(), "/functions/base64_encode", &body).await;

    assert_eq!(status, StatusCode::OK);
    let decoded = STANDARD
        .decode(json["output"].as_str().unwrap())
        .expect("output is valid base64");
    assert_eq!(String::from_utf8(decoded).unwrap(), input);
}

#[tokio::test]
async fn empty_string_input_is_valid() {
    let (status, json) = post(
        create_test_app(),
        "/functions/base64_encode",
        r#"{"input": ""}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "output": "" }));
}

#[tokio::test]
async fn missing_input_is_rejected_with_exact_message() {
    let (status, json) = post(create_test_app(), "/functions/base64_encode", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "error": "Input field in the request body is required" })
    );
}

#[tokio::test]
async fn null_input_counts_as_missing() {
    let (status, json) = post(
        create_test_app(),
        "/functions/base64_encode",
        r#"{"input": null}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "error": "Input field in the request body is required" })
    );
}

#[tokio::test]
async fn malformed_json_is_rejected_as_missing_input() {
    for body in ["", "not json{", "\"bare\"", "[1, 2]"] {
        let (status, json) = post(create_test_app(), "/functions/base64_encode", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
        assert_eq!(
            json,
            json!({ "error": "Input field in the request body is required" }),
            "body: {body:?}"
        );
    }
}

#[tokio::test]
async fn non_string_input_is_rejected_as_type_error() {
    for body in [r#"{"input": 123}"#, r#"{"input": {"a": 1}}"#] {
        let (status, json) = post(create_test_app(), "/functions/base64_encode", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
        assert_eq!(
            json,
            json!({ "error": "Input field in the request body must be a string" }),
            "body: {body:?}"
        );
    }
}

#[tokio::test]
async fn extra_request_fields_are_ignored() {
    let (status, json) = post(
        create_test_app(),
        "/functions/base64_encode",
        r#"{"input": "hi", "other": 42}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "output": "aGk=" }));
}

#[tokio::test]
async fn unknown_function_returns_not_found() {
    let (status, json) = get(create_test_app(), "/functions/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Function not found" }));

    let (status, json) = post(
        create_test_app(),
        "/functions/nonexistent",
        r#"{"input": "hi"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Function not found" }));
}

/// Uppercases its input but fails whenever the input contains `!`. Passes
/// registration (its example is well-behaved) so the execution failure path
/// can be exercised over HTTP.
struct FailOnBang {
    descriptor: FunctionDescriptor,
}

impl FailOnBang {
    fn new() -> Self {
        Self {
            descriptor: FunctionDescriptor {
                name: "shout".to_string(),
                description: "Uppercase a string".to_string(),
                input: ValueSchema::string("The string to uppercase", "ok"),
                output: ValueSchema::string("The uppercased string", "OK"),
            },
        }
    }
}

impl HostedFunction for FailOnBang {
    fn descriptor(&self) -> &FunctionDescriptor {
        &self.descriptor
    }

    fn call(&self, input: &str) -> Result<String, FunctionError> {
        if input.contains('!') {
            return Err(FunctionError::execution_failed("exclamation overflow"));
        }
        Ok(input.to_uppercase())
    }
}

#[tokio::test]
async fn execution_failure_returns_structured_server_error() {
    let registry = FunctionRegistry::new().with_function(Arc::new(FailOnBang::new()));
    let app = FunctionHost::new(registry).router();

    let (status, json) = post(app, "/functions/shout", r#"{"input": "uh oh!"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({
            "error": "An error occurred while processing your request",
            "message": "exclamation overflow"
        })
    );
}

#[tokio::test]
async fn host_serves_multiple_registered_functions() {
    let registry = FunctionRegistry::new()
        .with_function(Arc::new(Base64Encode::new()))
        .with_function(Arc::new(FailOnBang::new()));
    let host = FunctionHost::new(registry);

    let (status, json) = post(
        host.clone().router(),
        "/functions/shout",
        r#"{"input": "hi"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "output": "HI" }));

    let (status, json) = post(
        host.router(),
        "/functions/base64_encode",
        r#"{"input": "hi"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "output": "aGk=" }));
}
