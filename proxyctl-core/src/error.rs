//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Identifier was empty after trimming
    #[error("empty identifier")]
    EmptyIdentifier,

    /// No entity matched the identifier
    #[error("no user matched: {0}")]
    NotFound(String),

    /// More than one entity matched the identifier
    #[error("ambiguous identifier \"{identifier}\": matches {}", render_candidates(.candidates, .more))]
    Ambiguous {
        /// The identifier as typed
        identifier: String,
        /// Up to five matches, rendered as `name(primary_id)`
        candidates: Vec<String>,
        /// Number of matches beyond the listed ones
        more: usize,
    },

    /// Credential file could not be parsed
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// A record violated a write-time invariant
    #[error("validation error: {0}")]
    Validation(String),

    /// Backend storage error
    #[error("storage error: {0}")]
    Storage(String),
}

/// Core layer result alias
pub type CoreResult<T> = Result<T, CoreError>;

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}

fn render_candidates(candidates: &[String], more: &usize) -> String {
    if *more > 0 {
        format!("{} (+{more} more)", candidates.join(", "))
    } else {
        candidates.join(", ")
    }
}
