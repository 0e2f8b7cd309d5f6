//! Statement execution helpers shared by the interpreter.
//!
//! - `control`: control signals, truthiness, loop ranges

pub mod control;
