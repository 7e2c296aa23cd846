//! Scene descriptions.
//!
//! A scene names the canvas size, an output stem and an ordered list of
//! shapes. Scenes are written in YAML:
//!
//! ```yaml
//! width: 320
//! height: 240
//! output: demo
//! shapes:
//!   - rectangle: { ll: [10, 10], ur: [60, 40], color: red }
//!   - circle: { center: [160, 120], radius: 50, color: blue, style: rings }
//!   - triangle: { vertices: [[10, 200], [300, 230], [150, 150]], color: 3 }
//! ```
//!
//! Colors are palette names or raw palette codes. Codes outside the palette
//! parse fine and are rejected when the shape is drawn.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::render::{Circle, Rectangle, Shape, ShapeKind, Triangle};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scene to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Output file stem; `.ppm` is appended on export.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Shapes in drawing order. Later shapes paint over earlier ones.
    ///
    /// Each entry is a one-key map naming the shape kind.
    #[serde(default, with = "serde_yaml_ng::with::singleton_map_recursive")]
    pub shapes: Vec<ShapeKind>,
}

fn default_width() -> u32 {
    1024
}
fn default_height() -> u32 {
    1024
}
fn default_output() -> PathBuf {
    PathBuf::from("output")
}

impl Default for Scene {
    /// The demo scene: two rectangles (the second runs past the bottom
    /// edge and is rejected), a disk and a triangle on a 1024x1024 canvas.
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output: default_output(),
            shapes: vec![
                Rectangle::new(Point::new(100, 300), Point::new(600, 900), Color::Red).into(),
                Rectangle::new(Point::new(0, 0), Point::new(100, 1024), Color::Green).into(),
                Circle::new(Point::new(500, 500), 200, Color::Blue).into(),
                Triangle::new(
                    Point::new(100, 100),
                    Point::new(600, 300),
                    Point::new(859, 850),
                    Color::Yellow,
                )
                .into(),
            ],
        }
    }
}

/// A shape that was not drawn.
#[derive(Debug)]
pub struct ShapeFailure {
    /// Position in [`Scene::shapes`].
    pub index: usize,
    /// Shape kind ("rectangle", "circle", "triangle").
    pub kind: &'static str,
    /// Why the fill was rejected.
    pub error: Error,
}

/// Outcome of [`Scene::render`].
#[derive(Debug)]
pub struct RenderReport {
    /// Finished canvas.
    pub framebuffer: Framebuffer,
    /// Number of shapes drawn.
    pub drawn: usize,
    /// Shapes that were rejected, in scene order.
    pub failures: Vec<ShapeFailure>,
}

impl RenderReport {
    /// True if every shape was drawn.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Scene {
    /// Creates an empty scene of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            output: default_output(),
            shapes: Vec::new(),
        }
    }

    /// Appends a shape.
    #[must_use]
    pub fn with_shape(mut self, shape: impl Into<ShapeKind>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    /// Loads a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::SceneNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses a scene from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::SceneParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Serializes the scene back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::SceneParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Loads a scene, falling back to [`Scene::default`].
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Draws every shape onto a fresh canvas.
    ///
    /// A rejected shape is logged and recorded; drawing continues with the
    /// next shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the canvas size is zero.
    pub fn render(&self) -> Result<RenderReport> {
        let mut framebuffer = Framebuffer::new(self.width, self.height)?;
        let mut drawn = 0;
        let mut failures = Vec::new();

        for (index, shape) in self.shapes.iter().enumerate() {
            match shape.fill(&mut framebuffer) {
                Ok(()) => drawn += 1,
                Err(error) => {
                    warn!("{} #{index} ({}): {error}", shape.kind(), shape.color());
                    failures.push(ShapeFailure {
                        index,
                        kind: shape.kind(),
                        error,
                    });
                }
            }
        }

        debug!(
            "scene {}x{}: {drawn} drawn, {} rejected",
            self.width,
            self.height,
            failures.len()
        );

        Ok(RenderReport {
            framebuffer,
            drawn,
            failures,
        })
    }
}
