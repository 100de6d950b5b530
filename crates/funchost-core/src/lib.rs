//! # funchost-core
//!
//! Core contract for the function host: self-describing metadata
//! ([`FunctionDescriptor`]), the [`HostedFunction`] seam between the host and
//! a pure string transformation, and the [`FunctionRegistry`] that maps
//! validated names to implementations.
//!
//! A registered function is guaranteed to document what it actually does:
//! registration runs the function on its own documented example input and
//! rejects it unless the output matches the documented example output.

/// Self-describing function metadata served on the documentation endpoint.
pub mod descriptor;
/// The hosted-function trait and execution errors.
pub mod function;
/// Shipped function implementations.
pub mod functions;
/// Validated function names.
pub mod name;
/// Name-to-function registry with consistency checks at registration.
pub mod registry;

pub use descriptor::{FunctionDescriptor, ValueSchema};
pub use function::{FunctionError, HostedFunction};
pub use functions::Base64Encode;
pub use name::{FunctionName, InvalidFunctionName};
pub use registry::{FunctionRegistry, RegistryError};
