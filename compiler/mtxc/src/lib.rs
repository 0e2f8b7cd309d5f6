//! Mtx driver.
//!
//! ```text
//! source text
//!     │  mtx_lexer::lex
//!     ▼
//! tokens ──► lexical diagnostics
//!     │  mtx_parse::parse
//!     ▼
//! Program ──► syntax diagnostics
//!     │  mtx_types::check        (only if nothing was reported so far)
//!     ▼
//! semantic diagnostics
//!     │  mtx_eval::Interpreter   (only if no diagnostics at all)
//!     ▼
//! output, return value or runtime error
//! ```
//!
//! [`pipeline`] runs these stages on in-memory source; [`commands`] wraps
//! them for the `mtx` binary.

pub mod commands;
pub mod pipeline;
mod tracing_setup;

pub use pipeline::{check_source, front_end, run_source, run_source_with, FrontEnd, RunOutcome};
pub use tracing_setup::init_tracing;
