// Error taxonomy for the two pipelines.
//
// Every failure path returns a typed, inspectable variant rather than a
// generic failure. The binary wraps these in anyhow at the CLI boundary;
// library code always returns `Result<T, RapportError>`.

use thiserror::Error;

/// All the ways a summarize or match request can fail.
#[derive(Debug, Error)]
pub enum RapportError {
    /// Malformed input: empty transcript, negative weight, blank topic.
    /// Surfaced immediately to the caller, never retried.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A user id did not resolve against the profile store.
    #[error("user '{id}' not found in the profile store")]
    UnknownUser { id: String },

    /// No sentence survived preprocessing and filtering. The caller decides
    /// on fallback text ("no summary available" or similar).
    #[error("no substantial sentences found in the transcript")]
    EmptyInput,

    /// An upstream model collaborator failed. Propagated as-is: automatic
    /// retry against a heavyweight model call is not safe to assume.
    #[error("topic extraction collaborator failed: {0}")]
    Collaborator(String),

    /// Profile store file could not be read.
    #[error("failed to read profile store")]
    Io(#[from] std::io::Error),

    /// Profile store file was not valid JSON.
    #[error("failed to parse profile store")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RapportError>;
