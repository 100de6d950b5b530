//! HTTP host configuration.

/// Configuration for the HTTP host, injected at construction time.
///
/// There are no ambient globals: a host is built once at startup from one of
/// these and handed to the listener.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
    /// Enable CORS for cross-origin requests.
    pub enable_cors: bool,
    /// Enable the OpenAPI documentation endpoint.
    pub enable_openapi: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_body_size: 1024 * 1024, // 1MiB
            enable_cors: true,
            enable_openapi: true,
        }
    }
}
