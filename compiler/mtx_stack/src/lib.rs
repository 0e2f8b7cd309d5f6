//! Stack growth for recursive tree walks.
//!
//! The parser, the tree printer, the checker and the interpreter all recurse
//! over the syntax tree. A source file with thousands of nested parentheses
//! or blocks would overflow the native stack, so each recursive step goes
//! through [`ensure_sufficient_stack`], which switches to a freshly allocated
//! segment when the current one runs low.
//!
//! On `wasm32` the call is a plain passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
