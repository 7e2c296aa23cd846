//! Shape rasterization.
//!
//! Integer scan conversion of the three supported shapes onto a
//! [`Framebuffer`](crate::framebuffer::Framebuffer).
//!
//! # Algorithms
//!
//! - **Rectangle**: row spans over the inclusive corner box
//! - **Circle**: bounding-box scan with a squared-distance test (filled), or
//!   midpoint circle outlines for every radius up to r (rings)
//! - **Triangle**: per-row edge interpolation with left/right disambiguation
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." *Communications of the ACM*, 20(2).
//! - Gambetta, G. (2021). *Computer Graphics from Scratch*. No Starch Press.

mod primitives;
mod triangle;

pub use primitives::{Circle, CircleStyle, Rectangle, Shape, ShapeKind};
pub use triangle::{interpolate, Triangle};
