//! # Palette-Raster
//!
//! Integer scan conversion of basic 2D shapes onto a fixed-palette pixel
//! buffer, with plain-text PPM (and PNG) export.
//!
//! Shapes are axis-aligned rectangles, circles and triangles. Every fill is
//! validated before it draws: out-of-bounds geometry and palette codes
//! outside the nine-color palette are rejected with an error and leave the
//! framebuffer untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use palette_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(10, 10)?;
//! Rectangle::new(Point::new(2, 2), Point::new(4, 4), Color::Red).fill(&mut fb)?;
//! Circle::new(Point::new(5, 5), 2, Color::Blue).fill(&mut fb)?;
//!
//! assert_eq!(fb.read_pixel(5, 7)?, Color::Blue);
//! assert_eq!(fb.read_pixel(2, 2)?, Color::Red);
//! # Ok::<(), palette_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `palette-raster` command line renderer
//!
//! Not supported: anti-aliasing, sub-pixel precision, arbitrary polygons,
//! clipping regions and transforms.

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// The nine-color palette.
pub mod color;

/// Palette framebuffer.
pub mod framebuffer;

/// Integer points, boxes and distance predicates.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Shape rasterizers.
pub mod render;

/// Output encoders (PPM, PNG).
pub mod output;

/// YAML scene descriptions.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for palette-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use palette_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, PaletteIndex, Rgb};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{BoundingBox, Point};
    pub use crate::output::{PngEncoder, PpmEncoder};
    pub use crate::render::{Circle, CircleStyle, Rectangle, Shape, ShapeKind, Triangle};
    pub use crate::scene::{RenderReport, Scene};
}
