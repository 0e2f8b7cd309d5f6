//! In-memory pipeline: source text to diagnostics, output and result.

use mtx_diagnostic::Diagnostic;
use mtx_eval::{buffer_handler, EvalError, InterpreterBuilder, SharedPrintHandler, Value};
use mtx_ir::Program;

/// Everything the front end produced for one source.
pub struct FrontEnd {
    /// The parsed program. Partial if parsing stopped at a syntax error.
    pub program: Program,
    /// Lexical, then syntax, then semantic diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl FrontEnd {
    pub fn has_errors(&self) -> bool {
        mtx_diagnostic::has_errors(&self.diagnostics)
    }
}

/// Result of running a source end to end.
#[derive(Debug)]
pub struct RunOutcome {
    /// Front-end diagnostics. When non-empty nothing was executed.
    pub diagnostics: Vec<Diagnostic>,
    /// Captured `print` output; empty when printing went elsewhere.
    pub output: String,
    /// Value of the `return` that ended the run, if any.
    pub value: Option<Value>,
    pub error: Option<EvalError>,
}

impl RunOutcome {
    /// `true` if there were no diagnostics and no runtime error.
    pub fn succeeded(&self) -> bool {
        self.diagnostics.is_empty() && self.error.is_none()
    }
}

/// Lex, parse and, if both were clean, check `source`.
///
/// Lexical and syntax diagnostics are both reported; semantic checking
/// only runs on a program that had neither.
#[tracing::instrument(level = "debug", skip_all)]
pub fn front_end(source: &str) -> FrontEnd {
    let lexed = mtx_lexer::lex(source);
    let parsed = mtx_parse::parse(&lexed.tokens);

    let mut diagnostics = lexed.errors;
    diagnostics.extend(parsed.errors);
    if diagnostics.is_empty() {
        diagnostics = mtx_types::check(&parsed.program);
    }

    tracing::debug!(diagnostics = diagnostics.len(), "front end complete");
    FrontEnd {
        program: parsed.program,
        diagnostics,
    }
}

/// Diagnostics for `source`; empty means it is ready to run.
pub fn check_source(source: &str) -> Vec<Diagnostic> {
    front_end(source).diagnostics
}

/// Run `source`, capturing its output.
pub fn run_source(source: &str) -> RunOutcome {
    let handler = buffer_handler();
    let mut outcome = run_source_with(source, handler.clone());
    outcome.output = handler.get_output();
    outcome
}

/// Run `source`, sending `print` output to `print_handler`.
pub fn run_source_with(source: &str, print_handler: SharedPrintHandler) -> RunOutcome {
    let front = front_end(source);
    if front.has_errors() {
        return RunOutcome {
            diagnostics: front.diagnostics,
            output: String::new(),
            value: None,
            error: None,
        };
    }

    let mut interpreter = InterpreterBuilder::new()
        .print_handler(print_handler)
        .build();
    let (value, error) = match interpreter.run(&front.program) {
        Ok(value) => (value, None),
        Err(error) => (None, Some(error)),
    };
    RunOutcome {
        diagnostics: Vec::new(),
        output: String::new(),
        value,
        error,
    }
}
