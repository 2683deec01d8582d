use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cluster reporting operations.
///
/// Every failure the tool can hit is one of these variants. Report
/// generators render them into a single output line; `main` uses
/// [`ReportError::kind`] to decide the exit status.
#[derive(Error, Debug)]
pub enum ReportError {
    /// One or more required configuration values are missing or empty.
    ///
    /// # Fields
    /// * `missing` - The environment keys that were absent, in lookup order
    #[error(
        "Missing required environment variables for Proxmox connection: {}. Set HOST, USER, TOKEN_NAME, and TOKEN_VALUE in .env file.",
        .missing.join(", ")
    )]
    Configuration { missing: Vec<&'static str> },

    /// A configuration value is present but cannot be used
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request could not be sent or the HTTP client could not be built
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server rejected the API token (401/403)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The server answered with a non-success status
    ///
    /// # Fields
    /// * `status` - The HTTP status code
    /// * `message` - The response body, or `unknown` if it could not be read
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The container-id filter file could not be read
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Coarse category of a [`ReportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials are missing or unusable.
    Configuration,
    /// Any failure talking to the cluster API.
    Transport,
    /// Local file or stream I/O.
    Io,
}

impl ReportError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::Configuration { .. } | ReportError::Validation(_) => {
                ErrorKind::Configuration
            }
            ReportError::Connection(_)
            | ReportError::Authentication(_)
            | ReportError::Api { .. }
            | ReportError::Decode(_) => ErrorKind::Transport,
            ReportError::Io { .. } | ReportError::Output(_) => ErrorKind::Io,
        }
    }
}

/// Specialized error type for validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),
}

/// Type alias for Results that may fail with a ReportError
pub type ReportResult<T> = Result<T, ReportError>;
