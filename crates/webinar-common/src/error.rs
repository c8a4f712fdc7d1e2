//! Common error types used throughout the webinar backend.
//!
//! The `Display` output of each variant is the message sent to clients in the
//! `{"error": ...}` body, so keep it short and free of internal detail for the
//! variants that end up in responses.

/// Common error type for the webinar backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A video name contained a parent-directory reference or path separator.
    #[error("Invalid video name")]
    InvalidName,

    /// The requested resource was not found.
    #[error("{0}")]
    NotFound(String),

    /// File metadata could not be read.
    #[error("Failed to get video info")]
    StatFailure(#[source] std::io::Error),

    /// The video file could not be opened.
    #[error("Failed to open video")]
    OpenFailure(#[source] std::io::Error),

    /// Seeking to the start of a byte range failed.
    #[error("Failed to seek video")]
    SeekFailure(#[source] std::io::Error),

    /// The requested byte range is malformed or outside the file.
    #[error("Invalid range")]
    RangeNotSatisfiable {
        /// Size of the file the range was checked against.
        size: u64,
    },

    /// Invalid input was provided.
    #[error("{0}")]
    InvalidInput(String),

    /// The request is understood but refused.
    #[error("{0}")]
    Forbidden(String),

    /// The request conflicts with existing state (e.g. duplicate phone).
    #[error("{0}")]
    Conflict(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error occurred.
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Forbidden error.
    pub fn forbidden<S: Into<String>>(msg: S) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create a new Conflict error.
    pub fn conflict<S: Into<String>>(msg: S) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status code this error maps to.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidName | Self::InvalidInput(_) => 400,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::RangeNotSatisfiable { .. } => 416,
            Self::StatFailure(_)
            | Self::OpenFailure(_)
            | Self::SeekFailure(_)
            | Self::Database(_)
            | Self::Io(_)
            | Self::Internal(_) => 500,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
