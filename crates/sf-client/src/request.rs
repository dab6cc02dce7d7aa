//! HTTP request building with Salesforce-specific headers.

use std::collections::BTreeMap;

/// Builder for GET requests with Salesforce-specific options.
///
/// Requests are always `GET`.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) bearer_token: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            bearer_token: None,
        }
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header, replacing any previous value with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set `Content-Type: application/json`.
    pub fn json_content(self) -> Self {
        self.header("Content-Type", "application/json")
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
