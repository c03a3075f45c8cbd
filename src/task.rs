//! Task descriptions: the on-disk wire format and its compilation into a
//! renderable grammar and turtle configuration.
//!
//! The JSON shape stays byte-compatible with the legacy renderer's task
//! files (`genTypically`, `rotAngle` keys), so existing descriptions load
//! unchanged. `originX`/`originY` are a later addition and default to the
//! canvas center, which is where the legacy renderer always started.

use crate::grammar::{Grammar, GrammarError, Rule};
use crate::interpreter::{SketchConfig, SketchError, SketchInterpreter};
use crate::sketch::{Canvas, Sketch};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the one-call task pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("sketch error: {0}")]
    Sketch(#[from] SketchError),
}

/// One rewrite rule as it appears in a task file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Symbol to rewrite; must be exactly one character.
    pub element: String,

    /// Replacement symbol string.
    pub rule: String,
}

/// A complete render task as stored on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Name used for output file stems.
    pub name: String,

    /// Initial symbol string.
    pub axiom: String,

    /// Ordered rewrite rules.
    #[serde(rename = "genTypically", default)]
    pub rules: Vec<RuleSpec>,

    /// Degrees per turn instruction.
    pub rot_angle: f32,

    /// Forward-move distance.
    pub step: f32,

    /// Expansion depth. Serde rejects negative values at the boundary, so
    /// the core never sees one.
    pub depth: u32,

    /// Optional starting X; canvas center when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_x: Option<f32>,

    /// Optional starting Y; canvas center when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_y: Option<f32>,
}

impl Task {
    /// Compiles the wire-format rules into a validated [`Grammar`].
    pub fn grammar(&self) -> Result<Grammar, GrammarError> {
        let mut grammar = Grammar::new(self.axiom.clone(), self.depth);
        for spec in &self.rules {
            grammar
                .rules
                .push(Rule::parse(&spec.element, spec.rule.clone())?);
        }
        Ok(grammar)
    }

    /// Turtle parameters for this task on the given canvas.
    pub fn sketch_config(&self, canvas: Canvas) -> SketchConfig {
        let center = canvas.center();
        SketchConfig {
            step: self.step,
            turn_angle: self.rot_angle,
            origin: Vec2::new(
                self.origin_x.unwrap_or(center.x),
                self.origin_y.unwrap_or(center.y),
            ),
            ..SketchConfig::default()
        }
    }

    /// Expands and interprets the task in one call.
    pub fn render(&self, canvas: Canvas) -> Result<Sketch, RenderError> {
        let symbols = self.grammar()?.expand()?;
        let interpreter = SketchInterpreter::standard(self.sketch_config(canvas));
        Ok(interpreter.build_sketch(&symbols)?)
    }

    /// Built-in example tasks, lifted from the legacy renderer: the Koch
    /// `snowFlake` and the Sierpinski-style `triangle`. Returns `None` for
    /// unknown names.
    pub fn preset(name: &str) -> Option<Task> {
        match name {
            "snowFlake" => Some(Task {
                name: "snowFlake".to_string(),
                axiom: "F++F++F".to_string(),
                rules: vec![RuleSpec {
                    element: "F".to_string(),
                    rule: "F-F++F-F".to_string(),
                }],
                rot_angle: 60.0,
                step: 700.0,
                depth: 5,
                origin_x: None,
                origin_y: None,
            }),
            "triangle" => Some(Task {
                name: "triangle".to_string(),
                axiom: "FXF--FF--FF".to_string(),
                rules: vec![
                    RuleSpec {
                        element: "F".to_string(),
                        rule: "FF".to_string(),
                    },
                    RuleSpec {
                        element: "X".to_string(),
                        rule: "--FXF++FXF++FXF--".to_string(),
                    },
                ],
                rot_angle: 60.0,
                step: 12.0,
                depth: 5,
                origin_x: None,
                origin_y: None,
            }),
            _ => None,
        }
    }

    /// Names accepted by [`Task::preset`].
    pub fn preset_names() -> &'static [&'static str] {
        &["snowFlake", "triangle"]
    }
}
