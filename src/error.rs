//! Error types and result type for the cedict crate.
//!
//! This module defines all error variants that can occur when loading and
//! parsing CC-CEDICT dictionary files. It uses the `snafu` library for
//! ergonomic error handling with automatic backtrace capture.
//!
//! # Examples
//!
//! ```
//! use cedict::{Result, CedictError};
//!
//! fn read_dictionary() -> Result<String> {
//!     // Return an error
//!     Err(CedictError::malformed_line(3, "missing ']' after pinyin"))
//! }
//!
//! fn handle_error() {
//!     match read_dictionary() {
//!         Ok(data) => println!("Success: {}", data),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`CedictError::Io`]: I/O errors while reading a dictionary source file
//! - [`CedictError::MalformedLine`]: a data line that does not follow the
//!   CC-CEDICT line grammar

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the cedict crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `CedictError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CedictError {
    /// I/O error occurred while reading the dictionary source file.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// A data line is missing one of the delimiters required by the
    /// CC-CEDICT line grammar (spaces, brackets, or slashes).
    #[snafu(display("Malformed line {line_no}: {reason}"))]
    MalformedLine {
        line_no: usize,
        reason: String,
        backtrace: Backtrace,
    },
}

// For automatic conversions from standard error types
impl From<io::Error> for CedictError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl CedictError {
    /// Creates a `MalformedLine` error for the given 1-based source line.
    ///
    /// # Examples
    ///
    /// ```
    /// use cedict::CedictError;
    ///
    /// let error = CedictError::malformed_line(12, "missing second space");
    /// ```
    pub fn malformed_line<S: Into<String>>(line_no: usize, reason: S) -> Self {
        Self::MalformedLine {
            line_no,
            reason: reason.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `MalformedLine` variant.
    pub fn is_malformed_line(&self) -> bool {
        if let CedictError::MalformedLine { .. } = self {
            return true;
        }
        false
    }
}

/// A specialized `Result` type for cedict operations.
///
/// This is a convenience type alias that uses [`CedictError`] as the error type.
pub type Result<T> = std::result::Result<T, CedictError>;
