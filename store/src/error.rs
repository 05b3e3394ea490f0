//! Error types for the todo store.
//!
//! # Design
//! Driver failures and caller shape errors are the only error cases. A
//! lookup that finds nothing is `Ok(None)`, not an error — callers decide
//! what absence means (the HTTP layer maps it to 404).

use thiserror::Error;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite driver rejected an operation.
    #[error("database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    /// `create` was called with an empty title.
    #[error("title must be non-empty text")]
    InvalidTitle,

    /// `update` was called with a non-positive id.
    #[error("id must be a positive integer")]
    InvalidId,
}
