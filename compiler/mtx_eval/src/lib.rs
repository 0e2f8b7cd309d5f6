//! Mtx Eval - Interpreter and numeric arrays for the mtx language.
//!
//! # Architecture
//!
//! - `Array`: dense row-major numeric arrays (vectors and matrices)
//! - `Value`: runtime values
//! - `MemoryStack`: runtime variable frames
//! - `evaluate_binary` / `evaluate_relational` / `evaluate_neg` /
//!   `evaluate_transpose`: direct enum dispatch over operand values
//! - `Interpreter`: statement and expression walk with control signals
//!
//! Output from `print` goes through a `PrintHandler` so tests and embedders
//! can capture it.

mod array;
mod environment;
pub mod errors;
pub mod exec;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use array::{Array, ArrayError, ArrayShape, DType, ElementOp, Item, Number};
pub use environment::{Memory, MemoryStack};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use exec::control::Signal;
pub use interpreter::{run, Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_relational};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::{evaluate_neg, evaluate_transpose};
pub use value::Value;

#[cfg(test)]
mod tests;
