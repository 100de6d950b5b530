//! Function registry.
//!
//! Maps validated [`FunctionName`]s to [`HostedFunction`] implementations.
//! The registry is built once at startup and read-only afterwards, so the
//! host can share it across requests without locking.

use crate::function::HostedFunction;
use crate::name::{FunctionName, InvalidFunctionName};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while registering a function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The descriptor's name failed validation.
    #[error("invalid function name '{name}': {source}")]
    InvalidName {
        name: String,
        source: InvalidFunctionName,
    },

    /// Another function is already registered under this name.
    #[error("function '{name}' is already registered")]
    DuplicateName { name: String },

    /// The function failed when run on its own documented example input.
    #[error("function '{name}' failed on its documented example input: {message}")]
    ExampleExecutionFailed { name: String, message: String },

    /// Running the function on its documented example input did not produce
    /// the documented example output.
    #[error(
        "function '{name}' documents example output '{documented}' but produced '{actual}'"
    )]
    ExampleMismatch {
        name: String,
        documented: String,
        actual: String,
    },
}

/// Registry of hosted functions keyed by validated name.
///
/// # Example
///
/// ```rust
/// use funchost_core::{Base64Encode, FunctionRegistry};
/// use std::sync::Arc;
///
/// let registry = FunctionRegistry::new().with_function(Arc::new(Base64Encode::new()));
/// let function = registry.get("base64_encode").expect("registered");
/// assert_eq!(function.call("Hello, world").unwrap(), "SGVsbG8sIHdvcmxk");
/// ```
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<FunctionName, Arc<dyn HostedFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Add a function using the builder pattern.
    ///
    /// # Panics
    ///
    /// Panics if registration fails. Intended for static startup tables
    /// where a bad registration is a programming error; use
    /// [`try_with_function`](Self::try_with_function) for error handling.
    pub fn with_function(self, function: Arc<dyn HostedFunction>) -> Self {
        self.try_with_function(function)
            .expect("valid function registration")
    }

    /// Try to add a function using the builder pattern.
    ///
    /// Registration validates the descriptor's name, rejects duplicates, and
    /// enforces documentation/execution consistency: the function is run on
    /// `descriptor.input.example` and must produce `descriptor.output.example`.
    pub fn try_with_function(
        mut self,
        function: Arc<dyn HostedFunction>,
    ) -> Result<Self, RegistryError> {
        let descriptor = function.descriptor();
        let name = FunctionName::parse(&descriptor.name).map_err(|source| {
            RegistryError::InvalidName {
                name: descriptor.name.clone(),
                source,
            }
        })?;

        if self.functions.contains_key(&name) {
            return Err(RegistryError::DuplicateName {
                name: descriptor.name.clone(),
            });
        }

        let actual = function.call(&descriptor.input.example).map_err(|e| {
            RegistryError::ExampleExecutionFailed {
                name: descriptor.name.clone(),
                message: e.to_string(),
            }
        })?;
        if actual != descriptor.output.example {
            return Err(RegistryError::ExampleMismatch {
                name: descriptor.name.clone(),
                documented: descriptor.output.example.clone(),
                actual,
            });
        }

        self.functions.insert(name, function);
        Ok(self)
    }

    /// Look up a function by name.
    ///
    /// Returns `None` for unknown names and for names that could never have
    /// been registered because they fail validation.
    pub fn get(&self, name: &str) -> Option<Arc<dyn HostedFunction>> {
        let name = FunctionName::parse(name).ok()?;
        self.functions.get(&name).cloned()
    }

    /// Names of all registered functions.
    pub fn function_names(&self) -> Vec<String> {
        self.functions.keys().map(|n| n.as_str().to_string()).collect()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check whether the registry has no functions.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
