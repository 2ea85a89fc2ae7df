//! HTTP client for the external profile extraction service
//!
//! The extractor is a collaborator that performs the actual scraping of
//! public profile metadata; this crate wraps its single endpoint with typed
//! errors and surfaces upstream error messages for user-facing display.
//!
//! # Example
//!
//! ```no_run
//! use extractor_client::ExtractorClient;
//!
//! # async fn example() -> Result<(), extractor_client::ExtractorError> {
//! let client = ExtractorClient::with_base_url("http://localhost:3005");
//! let profile = client.extract_profile("jack").await?;
//! println!("{:?}", profile.display_name);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{ExtractorClient, GENERIC_FETCH_MESSAGE};
pub use error::{ExtractorError, Result};
