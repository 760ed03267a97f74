//! Error types for the glyph sheet generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the sheet
#[derive(Error, Debug)]
pub enum Error {
    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
