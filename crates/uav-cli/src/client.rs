//! HTTP client for the configure endpoint, plus the in-process fallback.

use std::path::{Path, PathBuf};

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use uav_domain::{ConfigureError, ErrorBody, UavResult};

/// Client-side failures
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{kind} ({status}): {message}")]
    Rejected {
        status: u16,
        kind: String,
        message: String,
    },

    #[error(transparent)]
    Local(#[from] ConfigureError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for `POST /configure`
#[derive(Debug, Clone)]
pub struct ConfiguratorClient {
    http: Client,
    endpoint: String,
}

impl ConfiguratorClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a configuration and decode the result or the error body.
    pub async fn configure(&self, payload: &Value) -> Result<UavResult, ClientError> {
        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<UavResult>().await?);
        }

        tracing::debug!(%status, "API rejected configuration");
        let body = response.text().await?;
        Err(rejection(status.as_u16(), &body))
    }
}

/// Build a [`ClientError::Rejected`] from a response body, which is an
/// [`ErrorBody`] for 400/422 replies and arbitrary text otherwise.
pub fn rejection(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error, message }) => ClientError::Rejected {
            status,
            kind: error,
            message,
        },
        Err(_) => ClientError::Rejected {
            status,
            kind: "HttpError".to_string(),
            message: body.trim().to_string(),
        },
    }
}

/// Evaluate a configuration without a server.
pub fn configure_local(payload: Value) -> Result<UavResult, ClientError> {
    Ok(uav_domain::configure(payload)?)
}

/// Read a configuration JSON file.
pub fn load_configuration(path: &Path) -> Result<Value, ClientError> {
    let text = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
