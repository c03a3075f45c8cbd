//! Turtle state and operations for sketch interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The pose of the sketching turtle.
///
/// A plain value type holding position and heading. The interpreter owns one
/// current pose per pass and copies it onto a stack for branching; nothing
/// here is shared between renders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtlePose {
    /// Current position in canvas space.
    pub position: Vec2,

    /// Current heading in degrees. 0° points along +X; positive turns
    /// rotate toward +Y (downward in SVG coordinates, i.e. clockwise on
    /// screen). Headings accumulate in degrees and are only converted to
    /// radians at the trig call site in [`direction`](Self::direction).
    pub heading: f32,
}

impl Default for TurtlePose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtlePose {
    /// Creates a pose at `position` with heading 0°.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            heading: 0.0,
        }
    }

    /// Unit vector the turtle is facing.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }

    /// The point `distance` ahead of the turtle along its heading.
    pub fn ahead(&self, distance: f32) -> Vec2 {
        self.position + self.direction() * distance
    }

    /// Rotates the turtle by `degrees` (positive is toward +Y).
    pub fn turn(&mut self, degrees: f32) {
        self.heading += degrees;
    }
}

/// Operations that can be performed by the sketching turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Move one step forward along the heading, drawing a segment (`F`).
    DrawForward,

    /// Move without drawing (`b`). Advances by `(step, step)` regardless of
    /// heading; see [`SketchInterpreter`](crate::interpreter::SketchInterpreter)
    /// for why the hop is diagonal.
    SkipForward,

    /// Save the current pose onto the pose stack (`[`).
    PushPose,

    /// Restore the most recently pushed pose (`]`).
    PopPose,

    /// Turn by the configured angle scaled by this signed factor
    /// (`+` maps to `Turn(1.0)`, `-` to `Turn(-1.0)`).
    Turn(f32),

    /// Symbol has no registered meaning; skip it.
    Ignore,
}
