//! Server state for the function host.

use funchost_core::FunctionRegistry;
use std::sync::Arc;

/// Shared server state: the table of hosted functions.
///
/// Constructed once at startup with an injected registry and cloned into
/// every handler. The registry is read-only after construction, so requests
/// never contend on it.
#[derive(Clone)]
pub struct FunctionHost {
    pub registry: Arc<FunctionRegistry>,
}

impl FunctionHost {
    /// Create a host serving the given registry.
    pub fn new(registry: FunctionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Number of functions this host serves.
    pub fn function_count(&self) -> usize {
        self.registry.len()
    }
}
