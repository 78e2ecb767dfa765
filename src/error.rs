//! Error types for the Libris server

use thiserror::Error;

/// A failed store operation: fetch, sort, or reference resolution.
///
/// This is the only error kind the presentation pipelines ever see. How it
/// surfaces differs per pipeline: the author list swallows it into an empty
/// result, the book-status endpoint turns it into an explicit 500.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
