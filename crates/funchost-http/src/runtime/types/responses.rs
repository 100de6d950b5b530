//! Response type definitions for HTTP endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful function execution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvokeResponse {
    /// The function's output.
    #[schema(example = "SGVsbG8sIHdvcmxk")]
    pub output: String,
}

/// Liveness response, returned unconditionally with HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"OK"`.
    #[schema(example = "OK")]
    pub status: String,
    /// Time the request was handled, ISO-8601 in UTC.
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Build a healthy response stamped with the current time.
    pub fn now() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now(),
        }
    }
}
