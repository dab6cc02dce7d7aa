//! Core HTTP client with compression and Salesforce-specific error handling.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::{Response, ResponseExt};

/// HTTP client for Salesforce APIs.
///
/// Each request is sent once; transport and API failures are returned to
/// the caller without retrying.
#[derive(Debug, Clone)]
pub struct SfHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SfHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let accept_compressed = config.compression.accept_compressed;
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(accept_compressed)
            .deflate(accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    /// Execute a request and translate error responses.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let mut req = self.inner.get(&request.url);

        if let Some(ref token) = request.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if self.config.enable_tracing {
            debug!(url = %request.url, "Sending request");
        }

        let response = Response::new(req.send().await?);

        if self.config.enable_tracing {
            let status = response.status();
            if response.is_success() {
                debug!(status, content_type = ?response.content_type(), "Response received");
            } else {
                info!(status, "Non-success response");
            }
        }

        response.check_salesforce_error().await
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await
    }
}
