//! Palette framebuffer.
//!
//! A fixed-size grid of [`Color`] entries stored in row-major order, with
//! row 0 first. Every cell starts out white. All coordinate-taking operations
//! are bounds checked and fail with [`Error::OutOfBounds`] instead of
//! clamping, so callers find out about geometry that does not fit.

use crate::color::{Color, Rgb};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::output::{PngEncoder, PpmEncoder};
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Palette framebuffer for shape rasterization.
///
/// Exclusively owned by whoever drew into it; shapes borrow it mutably only
/// for the duration of a fill. Wrap it in a lock for shared use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// One palette entry per pixel, row-major.
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer with every pixel set to white.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.dimensions(), (800, 600));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize);

        Ok(Self {
            width,
            height,
            pixels: vec![Color::White; size],
        })
    }

    /// Reallocate the grid at new dimensions and reset it to white.
    ///
    /// On error the framebuffer keeps its previous size and contents.
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Iterate over rows from top (y = 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// True iff the coordinate lies inside the framebuffer.
    #[must_use]
    pub fn contains_xy(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// True iff the point lies inside the framebuffer.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.contains_xy(point.x, point.y)
    }

    /// Fail with [`Error::OutOfBounds`] unless the point is inside.
    pub fn check_bounds(&self, point: Point) -> Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(self.out_of_bounds(point.x, point.y))
        }
    }

    /// Set the color at a pixel coordinate.
    ///
    /// The color is stored as given; palette membership is checked when a
    /// shape resolves its [`PaletteIndex`](crate::color::PaletteIndex).
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let idx = self.pixel_index(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// Get the color at a pixel coordinate.
    pub fn read_pixel(&self, x: i32, y: i32) -> Result<Color> {
        let idx = self.pixel_index(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Set every pixel to white.
    pub fn clear(&mut self) {
        self.pixels.fill(Color::White);
    }

    /// Fill the inclusive span `x_start..=x_end` of row `y`.
    ///
    /// The span is clipped to the framebuffer; an empty or fully clipped
    /// span is a no-op. Returns the number of pixels written.
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Color) -> usize {
        if y < 0 || y as u32 >= self.height {
            return 0;
        }
        let x1 = x_start.max(0);
        let x2 = x_end.min(self.width as i32 - 1);
        if x1 > x2 {
            return 0;
        }

        let row_start = (y as usize) * (self.width as usize);
        let span = &mut self.pixels[row_start + x1 as usize..=row_start + x2 as usize];
        span.fill(color);
        span.len()
    }

    /// Count pixels holding `color`.
    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Expand the palette entries to tightly packed 8-bit RGB bytes.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixel_count() * 3);
        for color in &self.pixels {
            let Rgb { r, g, b } = color.rgb();
            bytes.extend_from_slice(&[r, g, b]);
        }
        bytes
    }

    /// Write a P3 image to `<stem>.ppm` and return the path written.
    ///
    /// The extension is appended, never substituted: `out.v2` becomes
    /// `out.v2.ppm`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn export<P: AsRef<Path>>(&self, stem: P) -> Result<PathBuf> {
        let mut path = OsString::from(stem.as_ref());
        path.push(".ppm");
        let path = PathBuf::from(path);

        PpmEncoder::write_to_file(self, &path)?;
        info!(
            "exported {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(path)
    }

    /// Write an 8-bit RGB PNG to exactly `path`.
    pub fn export_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        PngEncoder::write_to_file(self, path)?;
        info!(
            "exported {}x{} PNG to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    /// Calculate the pixel index for a coordinate.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains_xy(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.count_color(Color::White), 5000);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_initialize_resets() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.write_pixel(1, 1, Color::Red).unwrap();

        fb.initialize(6, 3).unwrap();
        assert_eq!(fb.dimensions(), (6, 3));
        assert_eq!(fb.count_color(Color::White), 18);
    }

    #[test]
    fn test_initialize_invalid_keeps_state() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.write_pixel(1, 1, Color::Red).unwrap();

        assert!(fb.initialize(0, 3).is_err());
        assert_eq!(fb.dimensions(), (4, 4));
        assert_eq!(fb.read_pixel(1, 1).unwrap(), Color::Red);
    }

    #[test]
    fn test_write_read_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.write_pixel(5, 5, Color::Blue).unwrap();
        assert_eq!(fb.read_pixel(5, 5).unwrap(), Color::Blue);
        assert_eq!(fb.read_pixel(4, 5).unwrap(), Color::White);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        let before = fb.clone();

        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10), (100, 100)] {
            assert!(matches!(
                fb.write_pixel(x, y, Color::Red),
                Err(Error::OutOfBounds { .. })
            ));
            assert!(matches!(
                fb.read_pixel(x, y),
                Err(Error::OutOfBounds { .. })
            ));
        }
        assert_eq!(fb, before);
    }

    #[test]
    fn test_out_of_bounds_reports_coordinate() {
        let fb = Framebuffer::new(8, 6).unwrap();
        match fb.read_pixel(8, 2) {
            Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            }) => {
                assert_eq!((x, y, width, height), (8, 2, 8, 6));
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_row_major_layout() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.write_pixel(2, 0, Color::Red).unwrap();
        fb.write_pixel(0, 1, Color::Green).unwrap();

        assert_eq!(fb.pixels()[2], Color::Red);
        assert_eq!(fb.pixels()[3], Color::Green);
        assert_eq!(fb.row(1).unwrap()[0], Color::Green);
        assert!(fb.row(2).is_none());
        assert_eq!(fb.rows().count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.fill_span(3, 0, 9, Color::Black);
        assert_eq!(fb.count_color(Color::Black), 10);

        fb.clear();
        assert_eq!(fb.count_color(Color::White), 100);
    }

    #[test]
    fn test_fill_span_clips() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        assert_eq!(fb.fill_span(2, -5, 3, Color::Red), 4);
        assert_eq!(fb.fill_span(4, 8, 20, Color::Red), 2);
        assert_eq!(fb.fill_span(-1, 0, 9, Color::Red), 0);
        assert_eq!(fb.fill_span(10, 0, 9, Color::Red), 0);
        assert_eq!(fb.fill_span(5, 6, 5, Color::Red), 0);
        assert_eq!(fb.count_color(Color::Red), 6);
    }

    #[test]
    fn test_contains() {
        let fb = Framebuffer::new(10, 5).unwrap();
        assert!(fb.contains(Point::new(0, 0)));
        assert!(fb.contains(Point::new(9, 4)));
        assert!(!fb.contains(Point::new(10, 4)));
        assert!(!fb.contains(Point::new(9, 5)));
        assert!(!fb.contains(Point::new(-1, 2)));
        assert!(fb.check_bounds(Point::new(3, 3)).is_ok());
        assert!(fb.check_bounds(Point::new(3, 7)).is_err());
    }

    #[test]
    fn test_to_rgb_bytes() {
        let mut fb = Framebuffer::new(2, 1).unwrap();
        fb.write_pixel(1, 0, Color::Orange).unwrap();
        assert_eq!(fb.to_rgb_bytes(), vec![255, 255, 255, 255, 164, 0]);
    }

    #[test]
    fn test_export_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let fb = Framebuffer::new(2, 2).unwrap();

        let written = fb.export(dir.path().join("shot.v2")).unwrap();
        assert_eq!(written, dir.path().join("shot.v2.ppm"));
        assert!(written.exists());
    }

    #[test]
    fn test_export_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fb = Framebuffer::new(2, 2).unwrap();

        let result = fb.export(dir.path().join("missing").join("shot"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
