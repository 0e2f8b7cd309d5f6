use std::fmt;

use mtx_ir::Line;

use crate::ErrorCode;

/// A compile-time problem at a source line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// 1-based source line.
    pub line: Line,
    /// Main error message.
    pub message: String,
    /// Additional context, printed by `mtx check --verbose`.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic at line 0 with an empty message.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            line: 0,
            message: String::new(),
            notes: Vec::new(),
        }
    }

    /// Set the source line.
    pub fn at_line(mut self, line: Line) -> Self {
        self.line = line;
        self
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// `Line <n>: <message> [<code>]` followed by one `= note:` line per note.
    pub fn verbose(&self) -> String {
        let mut out = format!("{self} [{}]", self.code);
        for note in &self.notes {
            out.push_str("\n  = note: ");
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Create an "illegal character" diagnostic.
#[cold]
pub fn illegal_character(line: Line, c: char) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .at_line(line)
        .with_message(format!("Illegal character '{c}'"))
}

/// Create an "invalid number literal" diagnostic.
#[cold]
pub fn invalid_number(line: Line, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .at_line(line)
        .with_message(format!("Invalid number literal '{text}'"))
        .with_note(format!("integer literals must fit in 64 bits (max {})", i64::MAX))
}

/// Create an "unterminated string" diagnostic.
#[cold]
pub fn unterminated_string(line: Line) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0003)
        .at_line(line)
        .with_message("Unterminated string literal")
}

/// Create a "syntax error" diagnostic for an unexpected token.
#[cold]
pub fn syntax_error(line: Line, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .at_line(line)
        .with_message(format!("Syntax error at '{found}'"))
}

/// Create an "unexpected end of input" diagnostic.
#[cold]
pub fn unexpected_eof(line: Line) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .at_line(line)
        .with_message("Unexpected end of input")
}

/// Create an "undefined variable" diagnostic.
#[cold]
pub fn undefined_variable(line: Line, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .at_line(line)
        .with_message(format!("Variable '{name}' not defined"))
}

#[cfg(test)]
mod tests;
