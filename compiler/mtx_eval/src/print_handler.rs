//! Destination for `print` output.
//!
//! - Native: stdout (default)
//! - Tests and embedding: an in-memory buffer
//!
//! Enum dispatch keeps the per-line call static.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes each line straight to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Always empty; stdout is not captured.
    pub fn get_output(&self) -> String {
        String::new()
    }
}

/// Captures lines into a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Captured output; empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(h) => h.get_output(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Clear captured output. No-op for stdout.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_handler_captures_lines() {
        let handler = buffer_handler();
        handler.println("a 1");
        handler.println("[1 2]");
        assert_eq!(handler.get_output(), "a 1\n[1 2]\n");
    }

    #[test]
    fn buffer_handler_clear_empties_buffer() {
        let handler = BufferPrintHandler::new();
        handler.println("hello");
        handler.clear();
        assert!(handler.get_output().is_empty());
    }

    #[test]
    fn stdout_handler_captures_nothing() {
        let handler = stdout_handler();
        handler.clear();
        assert_eq!(handler.get_output(), "");
    }
}
