//! Directory registration client.
//!
//! Announces hosted function URLs to an external function directory so they
//! become discoverable. Registration is an outbound, best-effort concern:
//! it runs at startup or on demand and never participates in request
//! handling.

use thiserror::Error;
use tracing::info;

/// Errors from talking to the function directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("directory rejected '{url}' with status {status}: {body}")]
    Rejected {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Client for a function directory service.
pub struct DirectoryClient {
    http: reqwest::Client,
    directory_url: String,
    token: String,
}

impl DirectoryClient {
    /// Create a client for the directory at `directory_url`, authenticating
    /// with the given bearer token.
    pub fn new(directory_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            directory_url: directory_url.into(),
            token: token.into(),
        }
    }

    /// Announce one function URL to the directory.
    pub async fn announce(&self, function_url: &str) -> Result<(), DirectoryError> {
        let response = self
            .http
            .post(&self.directory_url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "url": function_url }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(DirectoryError::Rejected {
                url: function_url.to_string(),
                status,
                body,
            });
        }

        info!(url = %function_url, status = %status, "function announced to directory");
        Ok(())
    }
}
