use thiserror::Error;

/// Errors produced by the matching engine.
///
/// Every failure is scoped to a single (reference, query) pair or to a single
/// reference row; the orchestrator records the failed cells and keeps going
/// rather than aborting the whole matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Indexing or computing coverage over a zero-length sequence.
    #[error("empty input sequence")]
    EmptyInput,

    /// The scan window does not fit inside the query sequence.
    #[error("window length {window} exceeds query length {query_len}")]
    WindowTooLarge { window: usize, query_len: usize },

    /// A pattern the locator cannot search for.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
