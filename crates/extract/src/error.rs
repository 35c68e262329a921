//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Most of these never escape the crate as `Err`: a row that fails to parse
//! is reported as a [`RowError`](crate::models::RowError) whose message is the
//! [`Display`](std::fmt::Display) of the [`ErrorKind`] that rejected it.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The row does not have the number of cells the page layout expects.
    #[display("wrong column count: expected {expected}, found {found}")]
    WrongColumnCount {
        /// Cells a data row should have.
        expected: usize,
        /// Cells the row actually has.
        found: usize,
    },
    /// A required text cell was empty once annotations were removed.
    #[display("{_0} is empty")]
    EmptyField(#[error(not(source))] &'static str),
    /// The category cell contains a token outside the known vocabulary.
    #[display("unknown category token: {_0}")]
    UnknownCategoryToken(#[error(not(source))] String),
    /// The category cell declares more than one open type.
    #[display("multiple open types: {_0}")]
    MultipleOpenTypes(#[error(not(source))] String),
    /// The category cell declares the long flag more than once.
    #[display("multiple long flags")]
    MultipleLongFlags,
    /// A difficulty cell is missing, empty, or not a number.
    #[display("invalid difficulty rating: {_0}")]
    InvalidLevel(#[error(not(source))] String),
    /// A field was found but could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// Details about the parsing failure.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The HTML is either valid or it's not.
        false
    }
}
