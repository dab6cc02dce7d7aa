//! HTTP response handling with Salesforce-specific extensions.

use serde::de::DeserializeOwned;
use std::sync::LazyLock;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response with Salesforce-aware accessors.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get API usage limits from the `Sforce-Limit-Info` header.
    pub fn api_usage(&self) -> Option<ApiUsage> {
        ApiUsage::parse(self.header("sforce-limit-info")?)
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.inner.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

/// API usage information from response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiUsage {
    /// Number of API calls used.
    pub used: u64,
    /// Total API call limit.
    pub limit: u64,
}

impl ApiUsage {
    /// Parse a header value of the form `api-usage=25/15000`.
    fn parse(info: &str) -> Option<Self> {
        info.split(',')
            .map(str::trim)
            .find_map(|part| part.strip_prefix("api-usage="))
            .and_then(|usage| {
                let (used, limit) = usage.split_once('/')?;
                Some(ApiUsage {
                    used: used.trim().parse().ok()?,
                    limit: limit.trim().parse().ok()?,
                })
            })
    }

    /// Get the remaining API calls.
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }
}

/// Extension trait for processing Salesforce API responses.
pub trait ResponseExt {
    /// Check for Salesforce API errors and convert to appropriate error type.
    fn check_salesforce_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_salesforce_error(self) -> Result<Response> {
        let status = self.status();

        if self.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body))
    }
}

/// Parse an error response body and convert it to an error kind.
fn parse_error_response(status: u16, body: &str) -> Error {
    // Salesforce usually answers with an array of errors
    if let Ok(errors) = serde_json::from_str::<Vec<SalesforceErrorResponse>>(body) {
        if let Some(err) = errors.into_iter().next() {
            return err.into_error();
        }
    }

    if let Ok(err) = serde_json::from_str::<SalesforceErrorResponse>(body) {
        return err.into_error();
    }

    let sanitized = sanitize_error_message(body);
    let kind = match status {
        401 => ErrorKind::Authentication(sanitized),
        403 => ErrorKind::Authorization(sanitized),
        404 => ErrorKind::NotFound(sanitized),
        _ => ErrorKind::Http {
            status,
            message: sanitized,
        },
    };

    Error::new(kind)
}

static TOKEN_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"00[A-Za-z0-9]{13,}[!][A-Za-z0-9_.]+").expect("valid token pattern")
});

static SESSION_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"sid=[A-Za-z0-9]{20,}").expect("valid session pattern")
});

/// Sanitize an error message to prevent exposing sensitive data.
///
/// Access tokens (`00D...!...`) and `sid=` values are redacted, and messages
/// longer than 500 bytes are truncated on a character boundary.
fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let sanitized = TOKEN_PATTERN.replace_all(message, "[REDACTED_TOKEN]");
    let mut sanitized = SESSION_PATTERN
        .replace_all(&sanitized, "sid=[REDACTED]")
        .into_owned();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

/// Salesforce API error response format.
#[derive(Debug, serde::Deserialize)]
struct SalesforceErrorResponse {
    #[serde(alias = "errorCode")]
    error_code: String,
    message: String,
    fields: Option<Vec<String>>,
}

impl SalesforceErrorResponse {
    fn into_error(self) -> Error {
        Error::new(ErrorKind::SalesforceApi {
            error_code: self.error_code,
            message: sanitize_error_message(&self.message),
            fields: self.fields.unwrap_or_default(),
        })
    }
}
