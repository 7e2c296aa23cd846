//! Plain-text PPM (P3) output encoder.
//!
//! Layout, byte for byte:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! R G B R G B ... (one line per row, each triple followed by a space)
//! ```

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Maximum channel value written in the header.
pub const MAX_CHANNEL: u8 = 255;

/// P3 encoder for framebuffer output.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Write a framebuffer to exactly `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(fb, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a framebuffer into any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_to<W: Write>(fb: &Framebuffer, writer: &mut W) -> Result<()> {
        write!(writer, "P3\n{} {}\n{}\n", fb.width(), fb.height(), MAX_CHANNEL)?;

        for row in fb.rows() {
            for color in row {
                let rgb = color.rgb();
                write!(writer, "{} {} {} ", rgb.r, rgb.g, rgb.b)?;
            }
            writer.write_all(b"\n")?;
        }

        Ok(())
    }

    /// Encode a framebuffer to a string.
    #[must_use]
    pub fn to_string(fb: &Framebuffer) -> String {
        let mut buffer = Vec::with_capacity(16 + fb.pixel_count() * 12);
        // Writing into a Vec cannot fail.
        if Self::write_to(fb, &mut buffer).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
