//! HTTP client for the sockpuppet API.
//!
//! Thin wrapper over `gloo` fetch. Calls are stateless request/response;
//! nothing is cached, retried, or deduplicated.

use gloo::net::http::Request;
use puppet_core::{
    flatten, update_path, ApiError, LiveRequest, LiveResponse, PatchField, PatchSubmission,
    PatchesResponse, RawUpdate, DEFAULT_BASE_URL, LIVE_PATH, PATCHES_PATH,
};
use tracing::debug;

/// Client for the session server's sockpuppet endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelClient {
    base_url: String,
}

impl Default for PanelClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PanelClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetches the patch list and flattens it into row records.
    pub async fn get_patches(&self) -> Result<Vec<PatchField>, ApiError> {
        let url = format!("{}{PATCHES_PATH}", self.base_url);
        debug!("GET {url}");

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Network(format!("HTTP {}", response.status())));
        }

        let body: PatchesResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        body.status.ensure_ok()?;

        Ok(flatten(&body))
    }

    /// Pushes one typed change batch to the live endpoint.
    pub async fn post_live(&self, submission: PatchSubmission) -> Result<(), ApiError> {
        let url = format!("{}{LIVE_PATH}", self.base_url);
        debug!("POST {url}");

        let response = Request::post(&url)
            .header("Accept", "application/json")
            .json(&LiveRequest::from(submission))
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Network(format!("HTTP {}", response.status())));
        }

        let body: LiveResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        body.status.ensure_ok()
    }

    /// Sends a raw string value for one address; the server coerces it.
    /// Returns whatever JSON the server replies with.
    pub async fn patch_update(
        &self,
        address: &str,
        value: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}{}", self.base_url, update_path(address));
        debug!("PATCH {url}");

        let response = Request::patch(&url)
            .json(&RawUpdate {
                value: value.to_string(),
            })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
