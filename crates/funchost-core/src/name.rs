//! Validated function names.
//!
//! A [`FunctionName`] is the routing key for a hosted function. Names appear
//! in URL paths, registry lookups and log lines, so the character set is
//! locked down at construction time.

use thiserror::Error;

/// Maximum length for a function name.
const MAX_NAME_LENGTH: usize = 64;

/// Validated function identifier.
///
/// Valid names are non-empty, at most 64 characters, and contain only ASCII
/// alphanumerics, hyphens and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionName(String);

/// Error returned when a function name fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFunctionName {
    #[error("function name must not be empty")]
    Empty,
    #[error("function name exceeds {MAX_NAME_LENGTH} characters")]
    TooLong,
    #[error("function name contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl FunctionName {
    /// Parse and validate a function name.
    pub fn parse(name: &str) -> Result<Self, InvalidFunctionName> {
        if name.is_empty() {
            return Err(InvalidFunctionName::Empty);
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(InvalidFunctionName::TooLong);
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        {
            return Err(InvalidFunctionName::InvalidCharacter(bad));
        }
        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
