//! High-level Salesforce client with typed HTTP methods.
//!
//! This module provides `SalesforceClient`, which combines an authenticated
//! session with an HTTP client and provides typed JSON methods for API
//! interactions.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Sensitive parameters are skipped in tracing spans

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::client::SfHttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::DEFAULT_API_VERSION;

/// High-level Salesforce API client.
///
/// Holds an instance URL and access token obtained elsewhere (environment,
/// Salesforce CLI) and never refreshes them.
///
/// # Example
///
/// ```rust,ignore
/// use busbar_sf_client::SalesforceClient;
///
/// let client = SalesforceClient::new("https://na1.salesforce.com", token)?;
/// let versions: serde_json::Value = client.get_json("/services/data").await?;
/// ```
#[derive(Clone)]
pub struct SalesforceClient {
    http: SfHttpClient,
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for SalesforceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SalesforceClient {
    /// Create a new Salesforce client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new Salesforce client with custom configuration.
    ///
    /// Fails with [`ErrorKind::InvalidUrl`](crate::ErrorKind::InvalidUrl) if
    /// the instance URL is not an absolute URL.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let instance_url = instance_url.into();
        url::Url::parse(&instance_url)?;

        let http = SfHttpClient::new(config)?;
        Ok(Self {
            http,
            instance_url: instance_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version (e.g., "62.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the instance URL.
    /// Otherwise, it's assumed to be a full URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.instance_url, path)
        } else {
            format!("{}/{}", self.instance_url, path)
        }
    }

    /// Build the REST API URL for a path.
    ///
    /// Example: `rest_url("sobjects/Account/describe/")` ->
    /// `https://na1.salesforce.com/services/data/v62.0/sobjects/Account/describe/`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/v{}/{}",
            self.instance_url, self.api_version, path
        )
    }

    /// Create an authenticated JSON GET request builder.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(&self.access_token)
            .json_content()
    }

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let full_url = self.url(url);
        let response = self.http.execute(self.get(&full_url)).await?;

        if let Some(usage) = response.api_usage() {
            debug!(
                used = usage.used,
                limit = usage.limit,
                remaining = usage.remaining(),
                "API usage"
            );
        }

        response.json().await
    }

    /// GET request to REST API with JSON response.
    pub async fn rest_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json(&self.rest_url(path)).await
    }
}
