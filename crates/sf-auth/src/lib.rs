//! # sf-auth
//!
//! Loads an already-authenticated Salesforce session. No OAuth flow is run
//! here; the access token must have been issued elsewhere.
//!
//! ## Security
//!
//! - Tokens are redacted in Debug output
//! - Error messages never include credential values
//!
//! ## Sources
//!
//! - **Environment** - `SF_INSTANCE_URL` / `SF_ACCESS_TOKEN`
//! - **Salesforce CLI** - `sf org display --target-org <alias> --json`
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_auth::{Credentials, SalesforceCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_sf_auth::Error> {
//!     // From environment variables
//!     let creds = SalesforceCredentials::from_env()?;
//!
//!     // From the Salesforce CLI
//!     let creds = SalesforceCredentials::from_sfdx_alias("myorg").await?;
//!     println!("{}", creds.instance_url());
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, SalesforceCredentials};
pub use error::{Error, ErrorKind, Result};
