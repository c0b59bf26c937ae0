//! Error types for swot.

use thiserror::Error;

/// Errors surfaced by swot operations.
///
/// Every failure a caller can hit maps to exactly one variant so the
/// interface layer can render a distinct, actionable message.
#[derive(Debug, Error)]
pub enum SwotError {
    /// The data file exists but could not be parsed.
    #[error("study data is corrupt: {0}")]
    CorruptData(String),

    /// Writing the data file failed. In-memory state is kept as-is.
    #[error("could not persist study data: {0}")]
    Persistence(String),

    /// An operation referenced a module that must already exist.
    #[error("unknown module '{0}' - add it first with 'swot module add'")]
    UnknownModule(String),

    /// Case-insensitive module lookup found nothing.
    #[error("no module matching '{0}'")]
    ModuleNotFound(String),

    /// A user-supplied value failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration or terminal setup problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
