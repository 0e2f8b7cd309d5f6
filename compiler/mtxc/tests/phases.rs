// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests through the driver pipeline.
//!
//! - `check/` - programs that must (or must not) produce diagnostics
//! - `eval/` - programs that run, with their output and result
//! - `common/` - shared helpers
//!
//! ```bash
//! cargo test -p mtxc --test phases
//! cargo test -p mtxc --test phases eval
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/check/mod.rs"]
mod check;

#[path = "phases/eval/mod.rs"]
mod eval;
