//! Generation errors.

use thiserror::Error;

/// Errors surfaced by checked generation and event parsing.
///
/// Plain generation never fails; these only come from the validating entry
/// points and from reading event input.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid event at index {index}: {message}")]
    InvalidEvent { index: usize, message: String },

    #[error("Invalid generator options: {0}")]
    InvalidOptions(String),

    #[error("Event parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
