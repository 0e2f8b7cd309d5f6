//! The `run` command: check and interpret an mtx source file.

use mtx_eval::stdout_handler;

use super::{read_file, report_diagnostics, ReportOptions};
use crate::pipeline::run_source_with;

/// Run a file, printing program output to stdout.
///
/// Nothing executes if the front end reported anything. Exits with status 1
/// on diagnostics or a runtime error; output printed before a fault stays.
pub fn run_file(path: &str, options: ReportOptions) {
    let content = read_file(path);
    let outcome = run_source_with(&content, stdout_handler());

    if !outcome.diagnostics.is_empty() {
        report_diagnostics(&outcome.diagnostics, options);
        eprintln!("Type checking failed, interpretation skipped");
        std::process::exit(1);
    }

    if let Some(error) = outcome.error {
        eprintln!("runtime error: {error}");
        std::process::exit(1);
    }

    if let Some(value) = outcome.value {
        tracing::debug!(%value, "program returned");
    }
}
