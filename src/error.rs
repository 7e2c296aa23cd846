//! Error types for palette-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing or exporting.
///
/// Every failing operation leaves the framebuffer exactly as it was before
/// the call.
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced coordinate lies outside the framebuffer.
    #[error("Geometry out of bounds: ({x}, {y}) is outside {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was rejected.
        x: i32,
        /// Y coordinate that was rejected.
        y: i32,
        /// Framebuffer width.
        width: u32,
        /// Framebuffer height.
        height: u32,
    },

    /// A palette code outside the fixed 9-entry palette.
    #[error("Color unknown: palette code {0}")]
    UnknownColor(u8),

    /// I/O error (export destination not creatable or writable).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Scene file could not be read.
    #[error("Scene file not found: {0}")]
    SceneNotFound(String),

    /// Scene description could not be parsed.
    #[error("Scene error at line {line}: {message}")]
    SceneParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}
