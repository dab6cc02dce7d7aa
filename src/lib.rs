//! # busbar-sf-schema
//!
//! Inspect Salesforce SObject field metadata from the terminal.
//!
//! The [`fields`] module fetches an SObject's describe document at the org's
//! newest API version and renders it either as a sorted field table or as
//! full JSON detail for selected fields. The `sf-schema` binary wraps it in a
//! small CLI ([`cli`]).
//!
//! ## Crates
//!
//! - **busbar-sf-client** - HTTP transport, Salesforce error parsing, compression
//! - **busbar-sf-auth** - Session loading from the environment or the `sf` CLI
//! - **busbar-sf-rest** - Version discovery and the describe resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use busbar_sf_schema::auth::SalesforceCredentials;
//! use busbar_sf_schema::fields::{FieldLister, FieldQuery};
//! use busbar_sf_schema::{ClientConfig, SalesforceRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = SalesforceCredentials::from_sfdx_alias("my-org").await?;
//!     let client = SalesforceRestClient::from_credentials(&creds, ClientConfig::default())?;
//!
//!     let lister = FieldLister::new(client);
//!     let describe = lister
//!         .list_fields("Account", &FieldQuery::list(), &mut std::io::stdout())
//!         .await?;
//!
//!     println!("{} fields", describe["fields"].as_array().map_or(0, Vec::len));
//!     Ok(())
//! }
//! ```

pub mod cli;
mod error;
pub mod fields;

pub use error::{Error, ErrorKind, Result};

pub use busbar_sf_auth as auth;
pub use busbar_sf_client as client;
pub use busbar_sf_rest as rest;

pub use busbar_sf_auth::{Credentials, SalesforceCredentials};
pub use busbar_sf_client::ClientConfig;
pub use busbar_sf_rest::SalesforceRestClient;
