//! # funchost HTTP Runtime
//!
//! This crate serves a [`funchost_core::FunctionRegistry`] over HTTP using
//! Axum. Each registered function is reachable at one path: GET returns its
//! documentation, POST executes it. A liveness endpoint and an OpenAPI
//! document round out the surface.
//!
//! The host is stateless between requests: handlers only read the shared
//! registry, so any number of invocations can run concurrently without
//! coordination.

pub mod runtime;

// Re-export main types for public API
pub use runtime::*;
