//! Error types for sf-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for sf-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
///
/// Error messages avoid including credential values.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Credentials were loaded but are unusable.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// SFDX CLI error.
    #[error("SFDX CLI error: {0}")]
    SfdxCli(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
