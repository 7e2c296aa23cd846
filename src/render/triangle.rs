//! Filled triangles by edge interpolation.
//!
//! The vertices are sorted by y. The long edge (v0 to v2) and the two short
//! edges (v0 to v1, v1 to v2) are each turned into one x value per row. The
//! short edges are joined into a single sequence of the same length as the
//! long edge; comparing the two sequences at the middle row tells which one
//! is the left boundary. Each row is then filled from left to right.
//!
//! # References
//!
//! - Gambetta, G. (2021). *Computer Graphics from Scratch*, ch. 8
//!   "Filled Triangles". No Starch Press.

use crate::color::PaletteIndex;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{BoundingBox, Point};
use crate::render::primitives::{validate, Shape};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Filled triangle given by three vertices in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Triangle {
    /// Vertices. Order does not matter.
    pub vertices: [Point; 3],
    /// Fill color.
    pub color: PaletteIndex,
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub fn new(p0: Point, p1: Point, p2: Point, color: impl Into<PaletteIndex>) -> Self {
        Self {
            vertices: [p0, p1, p2],
            color: color.into(),
        }
    }

    /// Vertices sorted by ascending y. Equal y keep their given order.
    #[must_use]
    pub fn sorted_vertices(&self) -> [Point; 3] {
        let mut v = self.vertices;
        v.sort_by_key(|p| p.y);
        v
    }

    /// Per-row `(y, x_left, x_right)` spans, top row first.
    ///
    /// A span with `x_left > x_right` covers no pixels.
    #[must_use]
    pub fn spans(&self) -> Vec<(i32, i32, i32)> {
        let [p0, p1, p2] = self.sorted_vertices();

        let mut x012 = interpolate(p0.y, p0.x, p1.y, p1.x);
        let x12 = interpolate(p1.y, p1.x, p2.y, p2.x);
        let x02 = interpolate(p0.y, p0.x, p2.y, p2.x);

        // The last sample of x01 is the first of x12.
        x012.pop();
        x012.extend(x12);
        debug_assert_eq!(x012.len(), x02.len());

        let (left, right) = if long_edge_is_left(&x02, &x012) {
            (x02, x012)
        } else {
            (x012, x02)
        };

        (p0.y..=p2.y)
            .zip(left.into_iter().zip(right))
            .map(|(y, (xl, xr))| (y, xl, xr))
            .collect()
    }
}

/// Decide the left boundary at the middle row.
///
/// Ties at the middle row are broken by the first row where the edges
/// differ; edges never cross, so any such row gives the same answer.
fn long_edge_is_left(x02: &[i32], x012: &[i32]) -> bool {
    let mid = x012.len() / 2;
    match x02.get(mid).cmp(&x012.get(mid)) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => x02
            .iter()
            .zip(x012)
            .find(|(a, b)| a != b)
            .is_some_and(|(a, b)| a < b),
    }
}

/// Sample the line through `(l0, d0)` and `(l1, d1)` at every integer
/// `l` in `l0..=l1`, returning `d` truncated toward zero.
///
/// Samples are exact: `d0 + i * (d1 - d0) / (l1 - l0)` is evaluated in
/// `i64` rational arithmetic, so the last sample is always `d1`.
///
/// - `l0 == l1` yields the single sample `[d0]`.
/// - `l0 > l1` yields no samples.
///
/// # Example
///
/// ```
/// use palette_raster::render::interpolate;
///
/// assert_eq!(interpolate(0, 0, 4, 2), vec![0, 0, 1, 1, 2]);
/// assert_eq!(interpolate(3, 7, 3, 9), vec![7]);
/// ```
#[must_use]
pub fn interpolate(l0: i32, d0: i32, l1: i32, d1: i32) -> Vec<i32> {
    match l0.cmp(&l1) {
        Ordering::Greater => Vec::new(),
        Ordering::Equal => vec![d0],
        Ordering::Less => {
            let n = i64::from(l1) - i64::from(l0);
            let base = i64::from(d0) * n;
            let delta = i64::from(d1) - i64::from(d0);
            // Every sample lies between d0 and d1, so it fits in i32.
            (0..=n).map(|i| ((base + i * delta) / n) as i32).collect()
        }
    }
}

impl Shape for Triangle {
    fn fill(&self, fb: &mut Framebuffer) -> Result<()> {
        let color = validate(fb, &self.vertices, self.color)?;

        let mut written = 0;
        for (y, x_left, x_right) in self.spans() {
            written += fb.fill_span(y, x_left, x_right, color);
        }

        let [a, b, c] = self.vertices;
        debug!(
            "triangle ({}, {}) ({}, {}) ({}, {}) {}: {} px",
            a.x, a.y, b.x, b.y, c.x, c.y, color, written
        );
        Ok(())
    }

    fn color(&self) -> PaletteIndex {
        self.color
    }

    fn bounding_box(&self) -> BoundingBox {
        let [a, ..] = self.vertices;
        BoundingBox::of_points(&self.vertices).unwrap_or(BoundingBox::new(a, a))
    }

    fn kind(&self) -> &'static str {
        "triangle"
    }
}
