//! Credentials trait and implementations.
//!
//! All credential types implement custom Debug to redact sensitive data.

use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};

/// Trait for Salesforce credentials.
pub trait Credentials: Send + Sync {
    /// Get the Salesforce instance URL.
    fn instance_url(&self) -> &str;

    /// Get the access token.
    fn access_token(&self) -> &str;

    /// Get the API version the session was issued for (e.g., "62.0").
    fn api_version(&self) -> &str;

    /// Returns true if the credentials appear to be valid (non-empty).
    fn is_valid(&self) -> bool {
        !self.instance_url().is_empty() && !self.access_token().is_empty()
    }
}

/// An existing Salesforce session: instance URL plus access token.
///
/// The access token is redacted in Debug output to prevent accidental
/// exposure in logs.
#[derive(Clone)]
pub struct SalesforceCredentials {
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for SalesforceCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceCredentials")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl SalesforceCredentials {
    /// Create new credentials with the given values.
    pub fn new(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            instance_url: instance_url.into(),
            access_token: access_token.into(),
            api_version: api_version.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `SF_INSTANCE_URL` or `SALESFORCE_INSTANCE_URL`
    /// - `SF_ACCESS_TOKEN` or `SALESFORCE_ACCESS_TOKEN`
    ///
    /// Optional:
    /// - `SF_API_VERSION` or `SALESFORCE_API_VERSION` (default: "62.0")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |primary: &str, fallback: &str| {
            lookup(primary)
                .or_else(|| lookup(fallback))
                .filter(|value| !value.is_empty())
        };

        let instance_url = var("SF_INSTANCE_URL", "SALESFORCE_INSTANCE_URL")
            .ok_or_else(|| Error::new(ErrorKind::EnvVar("SF_INSTANCE_URL".to_string())))?;

        let access_token = var("SF_ACCESS_TOKEN", "SALESFORCE_ACCESS_TOKEN")
            .ok_or_else(|| Error::new(ErrorKind::EnvVar("SF_ACCESS_TOKEN".to_string())))?;

        let api_version = var("SF_API_VERSION", "SALESFORCE_API_VERSION")
            .unwrap_or_else(|| busbar_sf_client::DEFAULT_API_VERSION.to_string());

        Ok(Self::new(instance_url, access_token, api_version))
    }

    /// Load credentials from SFDX CLI using an org alias or username.
    ///
    /// Requires the `sf` CLI to be installed and the org to be authenticated.
    #[instrument]
    pub async fn from_sfdx_alias(alias_or_username: &str) -> Result<Self> {
        use tokio::process::Command;

        let output = Command::new("sf")
            .args([
                "org",
                "display",
                "--target-org",
                alias_or_username,
                "--json",
            ])
            .output()
            .await
            .map_err(|e| {
                Error::with_source(
                    ErrorKind::SfdxCli(format!("Failed to run sf CLI: {}", e)),
                    e,
                )
            })?;

        debug!(status = ?output.status, "sf org display finished");

        if !output.status.success() {
            // The CLI reports failures as JSON on stdout when --json is set
            let message = serde_json::from_slice::<serde_json::Value>(&output.stdout)
                .ok()
                .and_then(|json| json.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| String::from_utf8_lossy(&output.stderr).trim().to_string());
            return Err(Error::new(ErrorKind::SfdxCli(format!(
                "sf org display failed: {}",
                message
            ))));
        }

        Self::from_org_display_json(&output.stdout)
    }

    /// Parse the output of `sf org display --json`.
    fn from_org_display_json(stdout: &[u8]) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_slice(stdout)?;

        let result = json.get("result").ok_or_else(|| {
            Error::new(ErrorKind::SfdxCli("Missing 'result' in output".to_string()))
        })?;

        let instance_url = result
            .get("instanceUrl")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::new(ErrorKind::SfdxCli("Missing instanceUrl".to_string())))?;

        let access_token = result
            .get("accessToken")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::new(ErrorKind::SfdxCli("Missing accessToken".to_string())))?;

        let api_version = result
            .get("apiVersion")
            .and_then(|v| v.as_str())
            .unwrap_or(busbar_sf_client::DEFAULT_API_VERSION);

        Ok(Self::new(instance_url, access_token, api_version))
    }

    /// Return the credentials if they are usable, or an error otherwise.
    pub fn validated(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::new(ErrorKind::InvalidCredentials(
                "instance URL and access token must both be non-empty".to_string(),
            )))
        }
    }
}

impl Credentials for SalesforceCredentials {
    fn instance_url(&self) -> &str {
        &self.instance_url
    }

    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }
}
