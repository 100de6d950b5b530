//! The hosted-function trait.
//!
//! [`HostedFunction`] is the seam between the HTTP host and a pure
//! request/response transformation. Implementations must be stateless:
//! output depends only on input, with no I/O and no shared mutable state,
//! which is what lets the host run invocations concurrently without any
//! coordination.

use crate::descriptor::FunctionDescriptor;
use thiserror::Error;

/// Error produced by a hosted function during execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    /// The transformation failed. The message is carried into the host's
    /// structured 500 response.
    #[error("{message}")]
    ExecutionFailed { message: String },
}

impl FunctionError {
    /// Build an execution failure from any displayable reason.
    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            message: message.into(),
        }
    }
}

/// A pure request/response function exposed by the host.
pub trait HostedFunction: Send + Sync {
    /// The function's immutable documentation.
    fn descriptor(&self) -> &FunctionDescriptor;

    /// Run the transformation on one input.
    fn call(&self, input: &str) -> Result<String, FunctionError>;
}
