//! Error types for the transfer pipeline

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for transfer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while transferring a repository
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed source URL or missing required field
    #[error("{0}")]
    InvalidInput(String),

    /// Source repository missing or private
    #[error("{0}")]
    NotFound(String),

    /// Destination token rejected by the platform
    #[error("{0}")]
    Unauthorized(String),

    /// Destination repository name already taken
    #[error("{0}")]
    Conflict(String),

    /// Tree listing or content retrieval failed
    #[error("{0}")]
    Fetch(String),

    /// Repository creation rejected for a reason other than a name conflict
    #[error("Failed to create repository (status {0})")]
    Create(StatusCode),

    /// A file write into the destination repository failed
    #[error("Failed to upload {path} (status {status})")]
    Upload { path: String, status: StatusCode },

    /// Description update failed after the files were uploaded
    #[error("Failed to update repository description (status {0})")]
    Metadata(StatusCode),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
}
