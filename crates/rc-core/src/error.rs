//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

/// Errors produced while parsing or validating core types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid location token {0:?}")]
    InvalidLocation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
