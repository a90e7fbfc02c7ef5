use log::{debug, log_enabled, Level};

use crate::config::LOG_TARGET;

/// Destination for the line an instrumented call emits.
#[cfg_attr(test, mockall::automock)]
pub trait CallSink {
    /// Whether debug lines would be kept. When `false` the wrapper skips
    /// formatting the call entirely.
    fn enabled(&self) -> bool {
        true
    }

    fn debug(&self, line: &str);
}

impl<S: CallSink + ?Sized> CallSink for &S {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn debug(&self, line: &str) {
        (**self).debug(line)
    }
}

/// Sink backed by the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    target: &'static str,
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink {
    pub fn new() -> Self {
        Self::with_target(LOG_TARGET)
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl CallSink for LogSink {
    fn enabled(&self) -> bool {
        log_enabled!(target: self.target, Level::Debug)
    }

    fn debug(&self, line: &str) {
        debug!(target: self.target, "{}", line);
    }
}
