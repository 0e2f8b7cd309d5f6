//! The `check` command: report diagnostics without running anything.

use super::{read_file, report_diagnostics, ReportOptions};
use crate::pipeline::check_source;

pub fn check_file(path: &str, options: ReportOptions) {
    let content = read_file(path);
    let diagnostics = check_source(&content);

    if diagnostics.is_empty() {
        println!("No semantic errors found");
        return;
    }

    report_diagnostics(&diagnostics, options);
    eprintln!("Found {} semantic error(s)", diagnostics.len());
    std::process::exit(1);
}
