//! # Runtime Module
//!
//! HTTP runtime for the function host. The runtime owns the whole HTTP
//! surface: it parses JSON request bodies, dispatches to the registered
//! function named by the path, serves documentation on GET and execution on
//! POST, and normalizes every failure into the fixed JSON error shapes.

/// Host configuration injected at startup.
pub mod config;
/// OpenAPI document endpoint.
pub mod docs;
/// Error taxonomy and HTTP status mapping.
pub mod error;
/// HTTP request handlers organized by functionality.
pub mod handlers;
/// Server state shared across requests.
pub mod host;
/// Router configuration and route registration.
pub mod router;
/// Graceful shutdown signal handling.
pub mod shutdown;
/// Request and response wire types.
pub mod types;

pub use config::HostConfig;
pub use error::{ErrorBody, HostError};
pub use host::FunctionHost;
pub use shutdown::shutdown_signal;
pub use types::{HealthResponse, InvokeRequest, InvokeResponse};
