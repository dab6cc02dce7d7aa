//! # sf-rest
//!
//! Salesforce REST API client for schema inspection.
//!
//! ## Features
//!
//! - **Versions** - List the API versions an org supports and pick the newest
//! - **Describe** - Fetch an SObject's describe document, untouched or typed
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_rest::SalesforceRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_sf_rest::Error> {
//!     let client = SalesforceRestClient::new(
//!         "https://myorg.my.salesforce.com",
//!         "access_token_here",
//!     )?;
//!
//!     let version = client.max_api_version().await?;
//!     let client = client.with_api_version(version.version);
//!
//!     let describe = client.describe_sobject_raw("Account").await?;
//!     println!("{}", describe["fields"].as_array().map_or(0, Vec::len));
//!
//!     Ok(())
//! }
//! ```

mod client;
mod describe;
mod error;

pub use client::SalesforceRestClient;
pub use describe::{ApiVersion, FieldDescribe};
pub use error::{Error, ErrorKind, Result};
