//! Error types for sentence generation.

/// Errors from generator construction and word-table loading.
#[derive(Debug, thiserror::Error)]
pub enum ProseError {
    /// A word table required by the generator has no entries.
    #[error("word table '{0}' is empty")]
    EmptyTable(&'static str),

    /// Custom word tables failed to parse as JSON.
    #[error("invalid word tables: {0}")]
    InvalidTables(#[from] serde_json::Error),
}

/// Convenience result type for prose operations.
pub type ProseResult<T> = Result<T, ProseError>;
