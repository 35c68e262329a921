//! Reconciliation Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Problems with individual rows never show up here; they are reported as
//! [`Issue::Error`](crate::Issue::Error) alongside everything else. An `Err`
//! means the whole pass had to be abandoned.

use derive_more::{Display, Error};

/// A reconciliation error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for reconciliation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The existing-track index points at a track the store doesn't have.
    /// The index and the store disagree; nothing computed from them can be
    /// trusted.
    #[display("track not found: {_0}")]
    TrackNotFound(#[error(not(source))] String),
    /// The track store failed to answer.
    #[display("could not load track from store")]
    Accessor,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Accessor)
    }
}
