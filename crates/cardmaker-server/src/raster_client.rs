//! HTTP client for the rasterization service
//!
//! The rasterizer is an external collaborator that turns a card layout into
//! a PNG bitmap. Oversampling and background handling live here so routes
//! only decide *whether* to export.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use card_layout::CardLayout;

/// Oversampling factor applied by the rasterizer.
const EXPORT_SCALE: u8 = 3;
/// Background when the banner is disabled; transparent otherwise.
const FALLBACK_BACKGROUND: &str = "#0f172a";

/// Client for the rasterization service
pub struct RasterClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RasterRequest<'a> {
    layout: &'a CardLayout,
    scale: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<&'static str>,
}

/// Errors from the rasterization collaborator
#[derive(Debug)]
pub enum RasterError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Rasterizer responded with a non-2xx status
    Upstream(u16),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "rasterizer HTTP error: {}", e),
            Self::Upstream(status) => write!(f, "rasterizer returned status {}", status),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Upstream(_) => None,
        }
    }
}

impl From<reqwest::Error> for RasterError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl RasterClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Rasterize a card layout to PNG bytes at the fixed 3x oversampling.
    ///
    /// With an active banner the card keeps a transparent background;
    /// otherwise it is composited onto the flat fallback color.
    pub async fn rasterize(
        &self,
        layout: &CardLayout,
        banner_active: bool,
    ) -> Result<Vec<u8>, RasterError> {
        let url = format!("{}/rasterize", self.base_url);
        let request = RasterRequest {
            layout,
            scale: EXPORT_SCALE,
            background_color: (!banner_active).then_some(FALLBACK_BACKGROUND),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RasterError::Upstream(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
