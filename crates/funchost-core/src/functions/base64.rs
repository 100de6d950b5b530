//! Base64 encoding function.

use crate::descriptor::{FunctionDescriptor, ValueSchema};
use crate::function::{FunctionError, HostedFunction};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encodes the raw UTF-8 bytes of its input to standard base64.
///
/// Uses the RFC 4648 standard alphabet with padding; the URL-safe variant is
/// deliberately not used because consumers decode with standard decoders.
pub struct Base64Encode {
    descriptor: FunctionDescriptor,
}

impl Base64Encode {
    /// Create the function with its fixed descriptor.
    pub fn new() -> Self {
        Self {
            descriptor: FunctionDescriptor {
                name: "base64_encode".to_string(),
                description: "Encode anything to base64".to_string(),
                input: ValueSchema::string(
                    "The data you'd like to encode to base64",
                    "Hello, world",
                ),
                output: ValueSchema::string("Base64 encoded string", "SGVsbG8sIHdvcmxk"),
            },
        }
    }
}

impl Default for Base64Encode {
    fn default() -> Self {
        Self::new()
    }
}

impl HostedFunction for Base64Encode {
    fn descriptor(&self) -> &FunctionDescriptor {
        &self.descriptor
    }

    fn call(&self, input: &str) -> Result<String, FunctionError> {
        Ok(STANDARD.encode(input.as_bytes()))
    }
}
