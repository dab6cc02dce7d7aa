//! Error types for sf-schema.

/// Result type alias for sf-schema operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-schema operations.
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

    /// Short error name, as reported in the `--json` envelope.
    pub fn name(&self) -> &'static str {
        match self.kind {
            ErrorKind::Auth(_) => "AuthError",
            ErrorKind::Rest(_) => "RestError",
            ErrorKind::UnsortableAttribute { .. } => "UnsortableAttributeError",
            ErrorKind::MalformedField(_) => "MalformedFieldError",
            ErrorKind::Output(_) => "OutputError",
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// No usable session could be loaded.
    #[error("{0}")]
    Auth(String),

    /// Version discovery or the describe call failed.
    #[error("{0}")]
    Rest(String),

    /// A field has no string value for the requested sort attribute.
    #[error("Cannot sort by '{attribute}': field '{field}' has no text value for it")]
    UnsortableAttribute { attribute: String, field: String },

    /// A field descriptor could not be read as a field summary.
    #[error("Malformed field descriptor: {0}")]
    MalformedField(String),

    /// Writing rendered output failed.
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl From<busbar_sf_auth::Error> for Error {
    fn from(err: busbar_sf_auth::Error) -> Self {
        Error::with_source(ErrorKind::Auth(err.to_string()), err)
    }
}

impl From<busbar_sf_rest::Error> for Error {
    fn from(err: busbar_sf_rest::Error) -> Self {
        Error::with_source(ErrorKind::Rest(err.to_string()), err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Output(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Output(err.to_string()), err)
    }
}
