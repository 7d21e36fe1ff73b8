//! Error types for vizkit operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vizkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// The projected maximum is zero, so magnitudes cannot be scaled.
    #[error("Maximum value is zero: cannot scale against a zero maximum")]
    ZeroMaximum,

    /// Invalid number format specifier.
    #[error("Invalid format specifier: {0}")]
    InvalidFormat(String),

    /// Unrecognized month label.
    #[error("Unknown month label: {0}")]
    UnknownMonth(String),

    /// Invalid dimensions for a chart or SVG document.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
