//! Error types for the raster provider.

use thiserror::Error;

/// Errors raised while constructing or reading a [`crate::Mask`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RasterError {
    /// The sample buffer does not match `width * height`.
    #[error("mask of {width}x{height} needs {expected} samples but {got} were given")]
    SampleCountMismatch {
        /// Mask width in pixels.
        width: usize,
        /// Mask height in pixels.
        height: usize,
        /// Required sample count (`width * height`).
        expected: usize,
        /// Sample count supplied by the caller.
        got: usize,
    },
    /// A text-mask row had a different width than the first row.
    #[error("row {row} has {got} columns but the mask is {expected} wide")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count found on this row.
        got: usize,
    },
    /// A text-mask row contained a character outside `0-9`.
    #[error("row {row}, column {column}: `{symbol}` is not a digit")]
    UnexpectedSymbol {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The offending character.
        symbol: char,
    },
    /// Non-blank content followed the blank line that ends a text mask.
    #[error("unexpected content after the raster ended at row {rows}")]
    TrailingContent {
        /// Number of raster rows parsed before the terminator.
        rows: usize,
    },
    /// I/O failed while reading a text mask.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
