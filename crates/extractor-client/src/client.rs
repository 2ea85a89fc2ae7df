//! Profile extraction HTTP client

use crate::error::{ExtractorError, Result};
use profile_record::ProfileRecord;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// Fallback shown when the extractor fails without a usable message.
pub const GENERIC_FETCH_MESSAGE: &str = "Something went wrong fetching the profile";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the profile extraction service
pub struct ExtractorClient {
    http: reqwest::Client,
    base_url: String,
}

/// Shape of the extractor's error body; only `message` is used.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ExtractorClient {
    /// Create a client with the default 30 second timeout
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_url_and_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom timeout
    pub fn with_base_url_and_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch public metadata for a handle.
    ///
    /// On a non-2xx response the upstream `message` field is surfaced when
    /// the error body carries one; anything absent or unparseable falls back
    /// to [`GENERIC_FETCH_MESSAGE`].
    pub async fn extract_profile(&self, username: &str) -> Result<ProfileRecord> {
        let url = self.endpoint_url(username);
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
                .and_then(|body| body.message)
                .unwrap_or_else(|| GENERIC_FETCH_MESSAGE.to_string());

            warn!(status = %status, username, "Profile extraction failed");
            return Err(ExtractorError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint_url(&self, username: &str) -> String {
        format!(
            "{}/api/extract-profile?username={}",
            self.base_url,
            urlencoding::encode(username)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        let client = ExtractorClient::with_base_url("http://localhost:3005");
        assert_eq!(
            client.endpoint_url("jack"),
            "http://localhost:3005/api/extract-profile?username=jack"
        );
    }

    #[test]
    fn test_endpoint_url_strips_trailing_slash() {
        let client = ExtractorClient::with_base_url("http://localhost:3005/");
        assert_eq!(
            client.endpoint_url("jack"),
            "http://localhost:3005/api/extract-profile?username=jack"
        );
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "Profile not found"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Profile not found"));
    }

    #[test]
    fn test_error_body_without_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"code": 42}"#).unwrap();
        assert!(body.message.is_none());
    }

    #[test]
    fn test_upstream_error_display() {
        let err = ExtractorError::Upstream {
            status: 404,
            message: "Profile not found".to_string(),
        };
        assert_eq!(err.to_string(), "extractor returned 404: Profile not found");
    }
}
