//! Intent engine error types.

use thiserror::Error;

/// Errors that can occur while building an intent parser.
///
/// Detection itself never fails — malformed input degrades to an empty
/// result, so only table compilation has an error surface.
#[derive(Debug, Error)]
pub enum IntentError {
    #[error("failed to compile pattern for keyword {keyword:?}: {source}")]
    Pattern {
        keyword: String,
        source: regex::Error,
    },

    #[error("failed to compile pattern for verb {verb:?}: {source}")]
    Verb { verb: String, source: regex::Error },
}

/// Convenience alias for intent engine results.
pub type IntentResult<T> = Result<T, IntentError>;
