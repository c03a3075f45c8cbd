//! Interpreter that converts an instruction string into a [`Sketch`].
//!
//! The entry point is [`SketchInterpreter`]. Configure it with a
//! [`SketchConfig`], register symbol-to-operation mappings via
//! [`SketchInterpreter::set_op`] or
//! [`SketchInterpreter::populate_standard_symbols`], then call
//! [`SketchInterpreter::build_sketch`] with an expanded instruction string.

use crate::sketch::{Segment, Sketch};
use crate::turtle::{TurtleOp, TurtlePose};
use glam::Vec2;
use log::debug;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by sketch interpretation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SketchError {
    #[error("invalid turtle parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("pose stack underflow: `]` at symbol {index} with no saved pose")]
    StackUnderflow { index: usize },
}

/// How [`SketchInterpreter::build_sketch`] treats a pop with an empty pose
/// stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnderflowPolicy {
    /// Keep the current pose and carry on. This is what the legacy renderer
    /// did, so it is the default.
    #[default]
    Ignore,

    /// Fail the render with [`SketchError::StackUnderflow`].
    Fail,
}

/// Configuration for sketch interpretation.
#[derive(Clone, Debug)]
pub struct SketchConfig {
    /// Distance moved by a forward instruction. Must be positive and finite.
    pub step: f32,

    /// Degrees added or subtracted by a turn instruction.
    pub turn_angle: f32,

    /// Starting position of the turtle.
    pub origin: Vec2,

    /// Empty-stack pop handling.
    pub underflow: UnderflowPolicy,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            step: 10.0,
            turn_angle: 90.0,
            origin: Vec2::ZERO,
            underflow: UnderflowPolicy::default(),
        }
    }
}

impl SketchConfig {
    /// Checks the numeric parameters before an interpretation pass.
    ///
    /// Interpretation itself is pure arithmetic and cannot fail, so this is
    /// the one place bad numbers are caught.
    pub fn validate(&self) -> Result<(), SketchError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SketchError::InvalidParameters {
                reason: format!("step must be positive and finite, got {}", self.step),
            });
        }
        if !self.turn_angle.is_finite() {
            return Err(SketchError::InvalidParameters {
                reason: format!("turn angle must be finite, got {}", self.turn_angle),
            });
        }
        if !self.origin.is_finite() {
            return Err(SketchError::InvalidParameters {
                reason: format!("origin must be finite, got {}", self.origin),
            });
        }
        Ok(())
    }
}

/// Interprets L-system output to draw a [`Sketch`].
pub struct SketchInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: SketchConfig,
}

impl SketchInterpreter {
    /// Creates a new interpreter with the given configuration and an empty
    /// symbol map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) before
    /// calling [`build_sketch`](Self::build_sketch), or use
    /// [`standard`](Self::standard).
    pub fn new(config: SketchConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Shorthand for a new interpreter with the standard symbols installed.
    pub fn standard(config: SketchConfig) -> Self {
        let mut interpreter = Self::new(config);
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Replaces the entire symbol-to-operation map in one step (builder
    /// pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, replacing any previous
    /// mapping for it.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional symbol-to-operation mappings:
    ///
    /// | Symbol | Operation |
    /// |--------|-----------|
    /// | `F`    | draw forward |
    /// | `b`    | move without drawing |
    /// | `[`    | push pose |
    /// | `]`    | pop pose |
    /// | `+`    | turn by `+turn_angle` |
    /// | `-`    | turn by `-turn_angle` |
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::DrawForward),
            ('b', TurtleOp::SkipForward),
            ('[', TurtleOp::PushPose),
            (']', TurtleOp::PopPose),
            ('+', TurtleOp::Turn(1.0)),
            ('-', TurtleOp::Turn(-1.0)),
        ];

        for (sym, op) in mappings {
            self.set_op(sym, op);
        }
    }

    /// Interprets `symbols` in order and returns the resulting [`Sketch`].
    ///
    /// The turtle starts at `config.origin` with heading 0° (along +X) and an
    /// empty pose stack. Symbols with no registered mapping are silently
    /// ignored, so grammars may use auxiliary symbols (`X` and friends)
    /// freely.
    ///
    /// # Drawing
    ///
    /// `F` projects one step along the heading and emits a [`Segment`];
    /// the heading is held in degrees and converted to radians only here.
    /// `b` hops `(step, step)` without projecting along the heading — that
    /// diagonal is what the legacy renderer did.
    /// TODO: confirm with the task authors whether `b` should instead move
    /// along the heading like `F`.
    ///
    /// # Push / Pop
    ///
    /// `[` saves the pose (position and heading) onto a stack; `]` restores
    /// the most recently saved pose, which is how branching figures reuse a
    /// junction point. A `]` with nothing saved follows
    /// [`SketchConfig::underflow`].
    pub fn build_sketch(&self, symbols: &str) -> Result<Sketch, SketchError> {
        self.config.validate()?;

        let mut sketch = Sketch::new();
        let mut pose = TurtlePose::at(self.config.origin);
        let mut stack: Vec<TurtlePose> = Vec::new();

        for (index, sym) in symbols.chars().enumerate() {
            let op = self.op_map.get(&sym).copied().unwrap_or(TurtleOp::Ignore);

            match op {
                TurtleOp::DrawForward => {
                    let next = pose.ahead(self.config.step);
                    sketch.push_segment(Segment::new(pose.position, next));
                    pose.position = next;
                }
                TurtleOp::SkipForward => {
                    pose.position += Vec2::splat(self.config.step);
                }
                TurtleOp::PushPose => stack.push(pose),
                TurtleOp::PopPose => match stack.pop() {
                    Some(saved) => pose = saved,
                    None => match self.config.underflow {
                        UnderflowPolicy::Ignore => {
                            debug!("ignoring `]` with empty pose stack at symbol {index}");
                        }
                        UnderflowPolicy::Fail => {
                            return Err(SketchError::StackUnderflow { index });
                        }
                    },
                },
                TurtleOp::Turn(factor) => pose.turn(self.config.turn_angle * factor),
                TurtleOp::Ignore => {}
            }
        }

        Ok(sketch)
    }
}
