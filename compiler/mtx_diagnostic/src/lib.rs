//! Diagnostics for the mtx toolchain.
//!
//! Every compile-time problem (scanner, parser, checker) is reported as a
//! [`Diagnostic`]: an [`ErrorCode`] for searchability, the 1-based source
//! line, and a message. Diagnostics are accumulated in `Vec`s and returned,
//! never thrown; a pass that found problems still completes its walk.
//!
//! The textual form is `Line <n>: <message>`, which is exactly what the
//! `mtx` driver prints.
//!
//! Long-form documentation for each code is embedded in the binary and
//! available through [`ErrorDocs`] (`mtx explain E2002`).

mod diagnostic;
mod error_code;
pub mod errors;

pub use diagnostic::{
    illegal_character, invalid_number, syntax_error, undefined_variable, unexpected_eof,
    unterminated_string, Diagnostic,
};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use errors::ErrorDocs;

/// Returns `true` if any diagnostic in `diagnostics` is present.
///
/// Checking succeeded exactly when this is `false`.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    !diagnostics.is_empty()
}
