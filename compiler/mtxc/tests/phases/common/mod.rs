//! Shared helpers for phase tests.

use mtxc::{check_source, run_source, RunOutcome};

/// Run `source` and assert it checked clean and did not fault.
pub fn run_ok(source: &str) -> RunOutcome {
    let outcome = run_source(source);
    assert!(
        outcome.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        outcome.diagnostics
    );
    assert!(
        outcome.error.is_none(),
        "unexpected runtime error: {:?}",
        outcome.error
    );
    outcome
}

/// Captured `print` output of a clean run.
pub fn output(source: &str) -> String {
    run_ok(source).output
}

/// Diagnostics of `source`, rendered as `Line n: message`.
pub fn messages(source: &str) -> Vec<String> {
    check_source(source).iter().map(ToString::to_string).collect()
}
