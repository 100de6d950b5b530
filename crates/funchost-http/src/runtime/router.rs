//! HTTP router configuration.
//!
//! This module provides router setup and route registration for the function
//! host.

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::runtime::{
    config::HostConfig,
    docs::openapi_spec,
    handlers::{get_function_docs, health_check, invoke_function},
    host::FunctionHost,
};

impl FunctionHost {
    /// Create the Axum router with all endpoints and default configuration.
    pub fn router(self) -> Router {
        self.router_with_config(HostConfig::default())
    }

    /// Create the Axum router with custom configuration.
    pub fn router_with_config(self, config: HostConfig) -> Router {
        let mut router = Router::new()
            .route(
                "/functions/{name}",
                get(get_function_docs).post(invoke_function),
            )
            .route("/health", get(health_check))
            .with_state(self)
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(config.max_body_size));

        if config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        if config.enable_openapi {
            router = router.route("/api-docs/openapi.json", get(openapi_spec));
        }

        router
    }
}
