//! # lsys-sketch
//!
//! A small engine that turns L-System rewrite grammars into 2-D turtle-drawn
//! line art.
//!
//! It decouples the *Genotype* (the grammar and its expanded instruction
//! string) from the *Phenotype* (the drawn figure), producing a `Sketch` of
//! plain line segments that can be serialized to SVG or handed to any other
//! plotting backend.

pub mod grammar;
pub mod interpreter;
pub mod sketch;
pub mod task;
pub mod turtle;

pub use grammar::*;
pub use interpreter::*;
pub use sketch::*;
pub use task::*;
pub use turtle::*;
