//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FootfallError` via `From` impls, or reuse `FootfallError` directly.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `footfall-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum FootfallError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `footfall-*` crates.
pub type FootfallResult<T> = Result<T, FootfallError>;
