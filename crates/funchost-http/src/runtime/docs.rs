//! API documentation endpoint.

use axum::response::Json;
use utoipa::OpenApi;

use crate::runtime::error::ErrorBody;
use crate::runtime::types::{HealthResponse, InvokeRequest, InvokeResponse};
use funchost_core::{FunctionDescriptor, ValueSchema};

/// GET /api-docs/openapi.json - OpenAPI specification endpoint
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::runtime::handlers::get_function_docs,
            crate::runtime::handlers::invoke_function,
            crate::runtime::handlers::health_check
        ),
        components(
            schemas(
                FunctionDescriptor,
                ValueSchema,
                InvokeRequest,
                InvokeResponse,
                HealthResponse,
                ErrorBody
            )
        ),
        tags(
            (name = "functions", description = "Function documentation and execution"),
            (name = "health", description = "Liveness endpoint")
        ),
        info(
            title = "funchost API",
            version = "0.1.0",
            description = "Function host: pure request/response functions served over JSON HTTP"
        )
    )]
    struct ApiDoc;

    Json(ApiDoc::openapi())
}
