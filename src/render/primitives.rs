//! Shape rasterizers.
//!
//! Every fill validates first and draws second: all points are bounds
//! checked and the palette code is resolved before the first pixel is
//! written, so a rejected shape leaves the framebuffer untouched.

use crate::color::{Color, PaletteIndex};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{is_inside_circle, BoundingBox, Point};
use crate::render::Triangle;
use log::debug;
use serde::{Deserialize, Serialize};

/// A shape that can be scan-converted onto a framebuffer.
pub trait Shape {
    /// Fill this shape into the framebuffer.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfBounds`](crate::Error::OutOfBounds) if a defining
    ///   point lies outside the framebuffer.
    /// - [`Error::UnknownColor`](crate::Error::UnknownColor) if the palette
    ///   code is not one of the nine entries.
    ///
    /// On error the framebuffer is unchanged.
    fn fill(&self, fb: &mut Framebuffer) -> Result<()>;

    /// Palette code the shape is drawn with.
    fn color(&self) -> PaletteIndex;

    /// Smallest box containing every pixel the fill may touch.
    fn bounding_box(&self) -> BoundingBox;

    /// Short lowercase name, used in logs and reports.
    fn kind(&self) -> &'static str;
}

/// Check the points (in order) and then the color.
pub(crate) fn validate(fb: &Framebuffer, points: &[Point], color: PaletteIndex) -> Result<Color> {
    for &point in points {
        fb.check_bounds(point)?;
    }
    color.resolve()
}

// ============================================================================
// Rectangle
// ============================================================================

/// Axis-aligned filled rectangle given by two inclusive corners.
///
/// Corners are not normalized: with `ll.x > ur.x` or `ll.y > ur.y` the fill
/// covers no pixels and still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rectangle {
    /// Lower-left corner (smallest x and y).
    pub ll: Point,
    /// Upper-right corner (largest x and y).
    pub ur: Point,
    /// Fill color.
    pub color: PaletteIndex,
}

impl Rectangle {
    /// Create a new rectangle.
    #[must_use]
    pub fn new(ll: Point, ur: Point, color: impl Into<PaletteIndex>) -> Self {
        Self {
            ll,
            ur,
            color: color.into(),
        }
    }
}

impl Shape for Rectangle {
    fn fill(&self, fb: &mut Framebuffer) -> Result<()> {
        let color = validate(fb, &[self.ll, self.ur], self.color)?;
        if self.bounding_box().is_empty() {
            debug!(
                "rectangle ({}, {})-({}, {}): reversed corners, nothing drawn",
                self.ll.x, self.ll.y, self.ur.x, self.ur.y
            );
            return Ok(());
        }

        let mut written = 0;
        for y in self.ll.y..=self.ur.y {
            written += fb.fill_span(y, self.ll.x, self.ur.x, color);
        }

        debug!(
            "rectangle ({}, {})-({}, {}) {}: {} px",
            self.ll.x, self.ll.y, self.ur.x, self.ur.y, color, written
        );
        Ok(())
    }

    fn color(&self) -> PaletteIndex {
        self.color
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.ll, self.ur)
    }

    fn kind(&self) -> &'static str {
        "rectangle"
    }
}

// ============================================================================
// Circle
// ============================================================================

/// How a circle is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleStyle {
    /// Solid disk: every pixel with squared distance <= r².
    #[default]
    Filled,
    /// Concentric midpoint-circle outlines for every radius 0..=r.
    ///
    /// Integer rounding leaves some pixels between neighboring rings
    /// unpainted, which gives the ringed look.
    Rings,
}

/// Circle given by center and radius.
///
/// Only the center has to lie inside the framebuffer. Parts of the circle
/// that extend past an edge are clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in pixels. Radius 0 is the center pixel alone.
    pub radius: u32,
    /// Fill color.
    pub color: PaletteIndex,
    /// Disk or rings.
    #[serde(default)]
    pub style: CircleStyle,
}

impl Circle {
    /// Create a new filled circle.
    #[must_use]
    pub fn new(center: Point, radius: u32, color: impl Into<PaletteIndex>) -> Self {
        Self {
            center,
            radius,
            color: color.into(),
            style: CircleStyle::Filled,
        }
    }

    /// Use a different fill style.
    #[must_use]
    pub fn with_style(mut self, style: CircleStyle) -> Self {
        self.style = style;
        self
    }

    fn fill_disk(&self, fb: &mut Framebuffer, color: Color) -> Result<usize> {
        let bbox = self.bounding_box();
        let (width, height) = fb.dimensions();

        // Clip the box to the framebuffer; the center is inside, so it is non-empty.
        let top = bbox.min.y.max(0);
        let bottom = bbox.max.y.min(height as i32 - 1);
        let left = bbox.min.x.max(0);
        let right = bbox.max.x.min(width as i32 - 1);

        let mut written = 0;
        for y in top..=bottom {
            for x in left..=right {
                if is_inside_circle(self.center, Point::new(x, y), self.radius) {
                    fb.write_pixel(x, y, color)?;
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    fn fill_rings(&self, fb: &mut Framebuffer, color: Color) -> usize {
        // Rings wider than width + height cannot touch the buffer.
        let (width, height) = fb.dimensions();
        let reach = u64::from(width) + u64::from(height);
        let radius = i32::try_from(u64::from(self.radius).min(reach)).unwrap_or(i32::MAX);
        (0..=radius)
            .map(|r| draw_ring(fb, self.center, r, color))
            .sum()
    }
}

impl Shape for Circle {
    fn fill(&self, fb: &mut Framebuffer) -> Result<()> {
        let color = validate(fb, &[self.center], self.color)?;

        let written = match self.style {
            CircleStyle::Filled => self.fill_disk(fb, color)?,
            CircleStyle::Rings => self.fill_rings(fb, color),
        };

        debug!(
            "circle ({}, {}) r={} {:?} {}: {} px",
            self.center.x, self.center.y, self.radius, self.style, color, written
        );
        Ok(())
    }

    fn color(&self) -> PaletteIndex {
        self.color
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(self.center, self.radius)
    }

    fn kind(&self) -> &'static str {
        "circle"
    }
}

/// Draw one midpoint-circle outline, clipped. Returns pixels written.
fn draw_ring(fb: &mut Framebuffer, center: Point, radius: i32, color: Color) -> usize {
    let (cx, cy) = (center.x, center.y);
    if radius == 0 {
        return plot_clipped(fb, cx, cy, color);
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    let mut written = 0;

    while x >= y {
        // One point per octant
        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            written += plot_clipped(fb, px, py, color);
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
    written
}

#[inline]
fn plot_clipped(fb: &mut Framebuffer, x: i32, y: i32, color: Color) -> usize {
    usize::from(fb.write_pixel(x, y, color).is_ok())
}

// ============================================================================
// Tagged shape
// ============================================================================

/// Any supported shape, for heterogeneous shape lists.
///
/// In scene files each shape is a one-key map: `{ rectangle: { ... } }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// See [`Rectangle`].
    Rectangle(Rectangle),
    /// See [`Circle`].
    Circle(Circle),
    /// See [`Triangle`].
    Triangle(Triangle),
}

impl ShapeKind {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            Self::Rectangle(s) => s,
            Self::Circle(s) => s,
            Self::Triangle(s) => s,
        }
    }
}

impl Shape for ShapeKind {
    fn fill(&self, fb: &mut Framebuffer) -> Result<()> {
        self.as_shape().fill(fb)
    }

    fn color(&self) -> PaletteIndex {
        self.as_shape().color()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.as_shape().bounding_box()
    }

    fn kind(&self) -> &'static str {
        self.as_shape().kind()
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(shape: Rectangle) -> Self {
        Self::Rectangle(shape)
    }
}

impl From<Circle> for ShapeKind {
    fn from(shape: Circle) -> Self {
        Self::Circle(shape)
    }
}

impl From<Triangle> for ShapeKind {
    fn from(shape: Triangle) -> Self {
        Self::Triangle(shape)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn fb10() -> Framebuffer {
        Framebuffer::new(10, 10).expect("framebuffer creation should succeed")
    }

    #[test]
    fn test_rectangle_fills_closed_box() {
        let mut fb = fb10();
        Rectangle::new(Point::new(2, 2), Point::new(4, 4), Color::Red)
            .fill(&mut fb)
            .unwrap();

        for y in 0..10 {
            for x in 0..10 {
                let expected = if (2..=4).contains(&x) && (2..=4).contains(&y) {
                    Color::Red
                } else {
                    Color::White
                };
                assert_eq!(fb.read_pixel(x, y).unwrap(), expected, "pixel ({x}, {y})");
            }
        }
        assert_eq!(fb.count_color(Color::Red), 9);
        assert_eq!(fb.count_color(Color::White), 91);
    }

    #[test]
    fn test_rectangle_single_pixel() {
        let mut fb = fb10();
        Rectangle::new(Point::new(9, 0), Point::new(9, 0), Color::Black)
            .fill(&mut fb)
            .unwrap();
        assert_eq!(fb.read_pixel(9, 0).unwrap(), Color::Black);
        assert_eq!(fb.count_color(Color::Black), 1);
    }

    #[test]
    fn test_rectangle_reversed_corners_draws_nothing() {
        let mut fb = fb10();
        let before = fb.clone();

        Rectangle::new(Point::new(4, 4), Point::new(2, 2), Color::Red)
            .fill(&mut fb)
            .unwrap();
        Rectangle::new(Point::new(4, 2), Point::new(2, 4), Color::Red)
            .fill(&mut fb)
            .unwrap();
        Rectangle::new(Point::new(2, 4), Point::new(4, 2), Color::Red)
            .fill(&mut fb)
            .unwrap();

        assert_eq!(fb, before);
        assert!(Rectangle::new(Point::new(4, 2), Point::new(2, 4), Color::Red)
            .bounding_box()
            .is_empty());
    }

    #[test]
    fn test_rectangle_out_of_bounds() {
        let mut fb = fb10();
        let before = fb.clone();

        let result = Rectangle::new(Point::new(0, 0), Point::new(100, 10), Color::Green).fill(&mut fb);
        assert!(matches!(result, Err(Error::OutOfBounds { x: 100, .. })));
        assert_eq!(fb, before);
    }

    #[test]
    fn test_bounds_checked_before_color() {
        let mut fb = fb10();
        let result =
            Rectangle::new(Point::new(-1, 0), Point::new(3, 3), PaletteIndex::new(99)).fill(&mut fb);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_rectangle_unknown_color() {
        let mut fb = fb10();
        let before = fb.clone();

        let result =
            Rectangle::new(Point::new(1, 1), Point::new(3, 3), PaletteIndex::new(9)).fill(&mut fb);
        assert!(matches!(result, Err(Error::UnknownColor(9))));
        assert_eq!(fb, before);
    }

    #[test]
    fn test_circle_scenario() {
        let mut fb = fb10();
        Circle::new(Point::new(5, 5), 2, Color::Blue).fill(&mut fb).unwrap();

        assert_eq!(fb.read_pixel(5, 5).unwrap(), Color::Blue);
        assert_eq!(fb.read_pixel(5, 7).unwrap(), Color::Blue);
        assert_eq!(fb.read_pixel(5, 8).unwrap(), Color::White);
        // Corner of the bounding box: 2² + 2² = 8 > 4
        assert_eq!(fb.read_pixel(7, 7).unwrap(), Color::White);
        // r = 2 disk: 13 pixels
        assert_eq!(fb.count_color(Color::Blue), 13);
    }

    #[test]
    fn test_circle_zero_radius() {
        let mut fb = fb10();
        Circle::new(Point::new(3, 6), 0, Color::Purple).fill(&mut fb).unwrap();

        assert_eq!(fb.read_pixel(3, 6).unwrap(), Color::Purple);
        assert_eq!(fb.count_color(Color::Purple), 1);
    }

    #[test]
    fn test_circle_clipped_at_edge() {
        let mut fb = fb10();
        Circle::new(Point::new(0, 0), 3, Color::Green).fill(&mut fb).unwrap();

        assert_eq!(fb.read_pixel(0, 0).unwrap(), Color::Green);
        assert_eq!(fb.read_pixel(3, 0).unwrap(), Color::Green);
        assert_eq!(fb.read_pixel(2, 2).unwrap(), Color::Green);
        assert_eq!(fb.read_pixel(3, 3).unwrap(), Color::White);
        // Quarter disk of radius 3 including the axes
        assert_eq!(fb.count_color(Color::Green), 11);
    }

    #[test]
    fn test_circle_huge_radius_covers_buffer() {
        let mut fb = fb10();
        Circle::new(Point::new(5, 5), u32::MAX, Color::Yellow)
            .fill(&mut fb)
            .unwrap();
        assert_eq!(fb.count_color(Color::Yellow), 100);
    }

    #[test]
    fn test_circle_center_out_of_bounds() {
        let mut fb = fb10();
        let before = fb.clone();
        let result = Circle::new(Point::new(10, 5), 1, Color::Red).fill(&mut fb);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(fb, before);
    }

    #[test]
    fn test_circle_unknown_color() {
        let mut fb = fb10();
        let before = fb.clone();
        let result = Circle::new(Point::new(5, 5), 1, PaletteIndex::new(200)).fill(&mut fb);
        assert!(matches!(result, Err(Error::UnknownColor(200))));
        assert_eq!(fb, before);
    }

    #[test]
    fn test_circle_rings_stay_inside_disk() {
        let mut rings = Framebuffer::new(40, 40).unwrap();
        let circle = Circle::new(Point::new(20, 20), 12, Color::Orange);
        circle.with_style(CircleStyle::Rings).fill(&mut rings).unwrap();

        let mut disk = Framebuffer::new(40, 40).unwrap();
        circle.fill(&mut disk).unwrap();

        assert_eq!(rings.read_pixel(20, 20).unwrap(), Color::Orange);
        assert_eq!(rings.read_pixel(32, 20).unwrap(), Color::Orange);
        assert_eq!(rings.read_pixel(20, 8).unwrap(), Color::Orange);
        assert!(rings.count_color(Color::Orange) > 0);
        assert!(disk.count_color(Color::Orange) > 400);
        for y in 0..40 {
            for x in 0..40 {
                if rings.read_pixel(x, y).unwrap() == Color::Orange {
                    assert!(
                        Point::new(x, y).distance_squared(circle.center) <= 13 * 13,
                        "ring pixel ({x}, {y}) too far out"
                    );
                }
            }
        }
    }

    #[test]
    fn test_circle_rings_zero_radius() {
        let mut fb = fb10();
        Circle::new(Point::new(4, 4), 0, Color::Black)
            .with_style(CircleStyle::Rings)
            .fill(&mut fb)
            .unwrap();
        assert_eq!(fb.count_color(Color::Black), 1);
    }

    #[test]
    fn test_shape_kind_dispatch() {
        let mut fb = fb10();
        let shapes: Vec<ShapeKind> = vec![
            Rectangle::new(Point::new(0, 0), Point::new(1, 1), Color::Red).into(),
            Circle::new(Point::new(8, 8), 0, Color::Blue).into(),
        ];
        for shape in &shapes {
            shape.fill(&mut fb).unwrap();
        }
        assert_eq!(shapes[0].kind(), "rectangle");
        assert_eq!(shapes[1].kind(), "circle");
        assert_eq!(shapes[1].color(), PaletteIndex::from(Color::Blue));
        assert_eq!(fb.count_color(Color::Red), 4);
        assert_eq!(fb.read_pixel(8, 8).unwrap(), Color::Blue);
    }

    #[test]
    fn test_bounding_boxes() {
        let rect = Rectangle::new(Point::new(1, 2), Point::new(3, 4), Color::Red);
        assert_eq!(rect.bounding_box(), BoundingBox::new(Point::new(1, 2), Point::new(3, 4)));

        let circle = Circle::new(Point::new(5, 5), 2, Color::Red);
        assert_eq!(
            circle.bounding_box(),
            BoundingBox::new(Point::new(3, 3), Point::new(7, 7))
        );
    }
}
