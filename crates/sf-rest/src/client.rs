//! Salesforce REST API client.
//!
//! This client wraps `SalesforceClient` from `sf-client` and provides typed
//! methods for the version and describe resources.

use busbar_sf_auth::Credentials;
use busbar_sf_client::{ClientConfig, SalesforceClient};
use tracing::{debug, instrument};

use crate::describe::{self, ApiVersion};
use crate::error::{Error, ErrorKind, Result};

/// Salesforce REST API client.
///
/// # Example
///
/// ```rust,ignore
/// use busbar_sf_rest::SalesforceRestClient;
///
/// let client = SalesforceRestClient::new(
///     "https://myorg.my.salesforce.com",
///     "access_token_here",
/// )?;
///
/// let versions = client.versions().await?;
/// let describe = client.describe_sobject_raw("Contact").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SalesforceRestClient {
    client: SalesforceClient,
}

impl SalesforceRestClient {
    /// Create a new REST client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = SalesforceClient::new(instance_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = SalesforceClient::with_config(instance_url, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from loaded credentials.
    ///
    /// The credentials' API version is used until
    /// [`with_api_version`](Self::with_api_version) overrides it.
    pub fn from_credentials(creds: &impl Credentials, config: ClientConfig) -> Result<Self> {
        Ok(Self::with_config(creds.instance_url(), creds.access_token(), config)?
            .with_api_version(creds.api_version()))
    }

    /// Create a REST client from an existing SalesforceClient.
    pub fn from_client(client: SalesforceClient) -> Self {
        Self { client }
    }

    /// Get the underlying SalesforceClient.
    pub fn inner(&self) -> &SalesforceClient {
        &self.client
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        self.client.api_version()
    }

    /// Set the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.client = self.client.with_api_version(version);
        self
    }

    /// Get available API versions.
    #[instrument(skip(self))]
    pub async fn versions(&self) -> Result<Vec<ApiVersion>> {
        self.client
            .get_json("/services/data")
            .await
            .map_err(Into::into)
    }

    /// Get the newest API version the org supports.
    ///
    /// Issues one `GET /services/data` per call; nothing is cached.
    #[instrument(skip(self))]
    pub async fn max_api_version(&self) -> Result<ApiVersion> {
        let versions = self.versions().await?;
        let count = versions.len();
        let max = describe::highest(versions).ok_or_else(|| Error::new(ErrorKind::NoApiVersions))?;
        debug!(version = %max.version, available = count, "Resolved max API version");
        Ok(max)
    }

    /// Build the describe URL for an SObject at the current API version.
    pub fn describe_url(&self, sobject: &str) -> String {
        self.client
            .rest_url(&format!("sobjects/{}/describe/", urlencoding::encode(sobject)))
    }

    /// Fetch an SObject's describe document without interpreting it.
    ///
    /// The returned value is exactly what the server sent, key order included.
    #[instrument(skip(self))]
    pub async fn describe_sobject_raw(&self, sobject: &str) -> Result<serde_json::Value> {
        self.client
            .get_json(&self.describe_url(sobject))
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busbar_sf_auth::SalesforceCredentials;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation() {
        let client = SalesforceRestClient::new("https://na1.salesforce.com", "token123").unwrap();

        assert_eq!(client.instance_url(), "https://na1.salesforce.com");
        assert_eq!(client.api_version(), "62.0");
    }

    #[test]
    fn test_api_version_override() {
        let client = SalesforceRestClient::new("https://na1.salesforce.com", "token")
            .unwrap()
            .with_api_version("60.0");

        assert_eq!(client.api_version(), "60.0");
    }

    #[test]
    fn test_from_credentials_uses_credential_version() {
        let creds = SalesforceCredentials::new("https://na1.salesforce.com", "token", "59.0");
        let client = SalesforceRestClient::from_credentials(&creds, ClientConfig::default()).unwrap();

        assert_eq!(client.api_version(), "59.0");
        assert_eq!(client.inner().access_token(), "token");
    }

    #[test]
    fn test_describe_url() {
        let client = SalesforceRestClient::new("https://na1.salesforce.com", "token")
            .unwrap()
            .with_api_version("61.0");

        assert_eq!(
            client.describe_url("Account"),
            "https://na1.salesforce.com/services/data/v61.0/sobjects/Account/describe/"
        );
        assert_eq!(
            client.describe_url("My Object"),
            "https://na1.salesforce.com/services/data/v61.0/sobjects/My%20Object/describe/"
        );
    }

    #[tokio::test]
    async fn test_max_api_version() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/data"))
            .and(header("Authorization", "Bearer token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"label": "Spring '14", "url": "/services/data/v30.0", "version": "30.0"},
                {"label": "Winter '25", "url": "/services/data/v62.0", "version": "62.0"},
                {"label": "Summer '24", "url": "/services/data/v61.0", "version": "61.0"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SalesforceRestClient::new(mock_server.uri(), "token").unwrap();
        let max = client.max_api_version().await.unwrap();

        assert_eq!(max.version, "62.0");
        assert_eq!(max.label, "Winter '25");
    }

    #[tokio::test]
    async fn test_max_api_version_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = SalesforceRestClient::new(mock_server.uri(), "token").unwrap();
        let err = client.max_api_version().await.unwrap_err();

        assert!(matches!(err.kind, ErrorKind::NoApiVersions));
    }

    #[tokio::test]
    async fn test_describe_sobject_raw_is_unmodified() {
        let mock_server = MockServer::start().await;
        let body = json!({
            "name": "Account",
            "zzz": 1,
            "aaa": 2,
            "fields": [{"name": "Id", "type": "id"}]
        });

        Mock::given(method("GET"))
            .and(path("/services/data/v62.0/sobjects/Account/describe/"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SalesforceRestClient::new(mock_server.uri(), "token").unwrap();
        let describe = client.describe_sobject_raw("Account").await.unwrap();

        assert_eq!(describe, body);
        let keys: Vec<&String> = describe.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["name", "zzz", "aaa", "fields"]);
    }

    #[tokio::test]
    async fn test_describe_unknown_sobject() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/data/v62.0/sobjects/Nope__c/describe/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!([{
                "errorCode": "NOT_FOUND",
                "message": "The requested resource does not exist"
            }])))
            .mount(&mock_server)
            .await;

        let client = SalesforceRestClient::new(mock_server.uri(), "token").unwrap();
        let err = client.describe_sobject_raw("Nope__c").await.unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Client(_)));
        assert!(err.client_error().unwrap().is_not_found());
    }
}
