//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// Failure running the external gh CLI
    #[error("gh error: {0}")]
    Gh(#[from] triage_core::Error),

    /// Malformed or unexpected API payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unknown type discriminator in a search node. The search only returns
    /// issues and pull requests, so this is a defect, not a recoverable case.
    #[error("Unexpected search node type: {0}")]
    UnexpectedType(String),

    /// Missing required configuration value
    #[error("Missing configuration: {0}")]
    MissingEnv(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}
