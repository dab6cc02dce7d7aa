//! # sf-client
//!
//! HTTP client infrastructure for the Salesforce REST API.
//!
//! This crate provides:
//! - A thin `reqwest` wrapper with compression and request tracing
//! - Mapping of Salesforce error bodies and HTTP statuses to typed errors
//! - Redaction of tokens and session ids from error messages
//! - `SalesforceClient`, which pairs an instance URL and access token with
//!   typed JSON GET helpers
//!
//! Requests are sent exactly once. Failures surface to the caller as
//! [`Error`] values; nothing is retried at this layer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (sf-rest, sf-schema)                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SalesforceClient                          │
//! │  - Holds instance URL + access token + HTTP client          │
//! │  - Builds versioned REST URLs                               │
//! │  - Provides typed JSON GET methods                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - Raw HTTP with compression and tracing                    │
//! │  - Salesforce error translation                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_client::SalesforceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_sf_client::Error> {
//!     let client = SalesforceClient::new("https://na1.salesforce.com", "token")?
//!         .with_api_version("62.0");
//!
//!     let describe: serde_json::Value = client
//!         .rest_get("sobjects/Account/describe/")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod salesforce_client;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, CompressionConfig};
pub use error::{Error, ErrorKind, Result};
pub use request::RequestBuilder;
pub use response::{Response, ResponseExt};
pub use salesforce_client::SalesforceClient;

/// Default Salesforce API version, used until the org's maximum is discovered.
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("busbar-sf-schema/", env!("CARGO_PKG_VERSION"));
