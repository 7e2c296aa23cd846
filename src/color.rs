//! The fixed drawing palette.
//!
//! Pixels never store RGB values directly. Each pixel holds one of nine named
//! palette entries, and the RGB triple is looked up only when the buffer is
//! exported. The table is a `static` and is never mutated.
//!
//! Two representations exist:
//!
//! - [`Color`] is the closed set of palette entries. Anything stored in a
//!   framebuffer is a `Color`, so a buffer can never contain an invalid entry.
//! - [`PaletteIndex`] is the open `u8` palette code carried by shapes. It may
//!   name a code outside the palette; fills reject such codes with
//!   [`Error::UnknownColor`] before touching the buffer.

use crate::error::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB triple.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// RGB values for every palette entry, indexed by palette code.
pub static PALETTE: [Rgb; Color::COUNT] = [
    Rgb::new(255, 0, 0),     // red
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(255, 164, 0),   // orange
    Rgb::new(128, 0, 128),   // purple
    Rgb::new(165, 42, 42),   // brown
    Rgb::new(0, 0, 0),       // black
    Rgb::new(255, 255, 255), // white
];

/// A named palette entry.
///
/// The discriminant is the palette code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    /// (255, 0, 0)
    Red = 0,
    /// (0, 255, 0)
    Green = 1,
    /// (0, 0, 255)
    Blue = 2,
    /// (255, 255, 0)
    Yellow = 3,
    /// (255, 164, 0)
    Orange = 4,
    /// (128, 0, 128)
    Purple = 5,
    /// (165, 42, 42)
    Brown = 6,
    /// (0, 0, 0)
    Black = 7,
    /// (255, 255, 255), the background of a fresh or cleared buffer.
    #[default]
    White = 8,
}

impl Color {
    /// Number of palette entries.
    pub const COUNT: usize = 9;

    /// All palette entries in code order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::Brown,
        Self::Black,
        Self::White,
    ];

    /// Palette code of this entry.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// RGB triple from the palette table.
    #[must_use]
    pub fn rgb(self) -> Rgb {
        PALETTE[self as usize]
    }

    /// Lowercase name of the entry.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Brown => "brown",
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Color {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(Error::UnknownColor(code))
    }
}

/// A color name that is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color name '{0}'")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseColorError(name.to_string()))
    }
}

/// Returns true iff `code` names one of the nine palette entries.
#[must_use]
pub fn is_known_color(code: u8) -> bool {
    usize::from(code) < Color::COUNT
}

/// Open palette code as carried by shapes.
///
/// Scenes and callers may hand in any `u8`; [`PaletteIndex::resolve`] performs
/// the membership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaletteIndex(u8);

impl PaletteIndex {
    /// Wrap a raw palette code without validating it.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Raw palette code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Whether the code names a palette entry.
    #[must_use]
    pub fn is_known(self) -> bool {
        is_known_color(self.0)
    }

    /// Look up the palette entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColor`] if the code is outside the palette.
    pub fn resolve(self) -> Result<Color> {
        Color::try_from(self.0)
    }
}

impl From<Color> for PaletteIndex {
    fn from(color: Color) -> Self {
        Self(color.code())
    }
}

impl From<PaletteIndex> for u8 {
    fn from(index: PaletteIndex) -> Self {
        index.0
    }
}

impl fmt::Display for PaletteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            Ok(color) => write!(f, "{color}"),
            Err(_) => write!(f, "#{}", self.0),
        }
    }
}

/// Scene files may give a color by name or by raw code.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteRepr {
    Code(u8),
    Name(String),
}

impl<'de> Deserialize<'de> for PaletteIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match PaletteRepr::deserialize(deserializer)? {
            PaletteRepr::Code(code) => Ok(Self(code)),
            PaletteRepr::Name(name) => name
                .parse::<Color>()
                .map(Self::from)
                .map_err(de::Error::custom),
        }
    }
}
