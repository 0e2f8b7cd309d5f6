//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::MemoryStack;

/// Builder for [`Interpreter`].
///
/// Defaults to a fresh environment with a single global frame and output
/// on stdout.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<MemoryStack>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial environment.
    ///
    /// Variables already bound in it are visible to the program.
    #[must_use]
    pub fn env(mut self, env: MemoryStack) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
