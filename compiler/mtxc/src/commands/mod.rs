//! Command handlers for the `mtx` binary.
//!
//! Each submodule implements one subcommand. Shared helpers live here.

use mtx_diagnostic::Diagnostic;

mod check;
mod debug;
mod explain;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::run_file;

/// Output options shared by `run` and `check`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    /// Print each diagnostic with its code and notes.
    pub verbose: bool,
}

/// Print diagnostics to stderr, one per line.
pub(crate) fn report_diagnostics(diagnostics: &[Diagnostic], options: ReportOptions) {
    for diagnostic in diagnostics {
        if options.verbose {
            eprintln!("{}", diagnostic.verbose());
        } else {
            eprintln!("{diagnostic}");
        }
    }
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
