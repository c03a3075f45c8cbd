//! The sketch artifact: line segments, canvas, stroke style, and the SVG
//! serializer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single drawn line in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    pub from: Vec2,

    /// End point.
    pub to: Vec2,
}

impl Segment {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// Euclidean length of the stroke.
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// The complete line drawing produced from one instruction string.
///
/// This is the "Phenotype" of the pipeline: an ordered list of segments in
/// emission order, ready to be serialized to SVG or handed to any other
/// plotting backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    /// Drawn segments, in the order the turtle emitted them.
    pub segments: Vec<Segment>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Serializes the sketch into a standalone SVG document of `<line>`
    /// elements.
    ///
    /// Coordinates are truncated to whole pixels, which keeps output
    /// identical to the legacy renderer's integer line calls.
    pub fn to_svg(&self, canvas: Canvas, stroke: &Stroke) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            canvas.width, canvas.height
        ));
        for segment in &self.segments {
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />\n",
                segment.from.x as i32,
                segment.from.y as i32,
                segment.to.x as i32,
                segment.to.y as i32,
                stroke.color,
                stroke.width
            ));
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Fixed-size view box a sketch is rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 1500,
        }
    }
}

impl Canvas {
    /// A square canvas of the given side length.
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// The center point, the default turtle origin for tasks that do not
    /// specify one.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Stroke style applied to every segment of an SVG render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// SVG stroke color.
    pub color: String,

    /// SVG stroke width in pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            width: 2.0,
        }
    }
}
