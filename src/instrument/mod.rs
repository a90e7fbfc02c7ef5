//! Call instrumentation: wrap an operation so every successful call leaves
//! one debug line behind.

mod logged;
mod sink;

pub use logged::{logged, Invocation, Logged};
pub use sink::{CallSink, LogSink};
