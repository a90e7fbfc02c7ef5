pub mod config;
pub mod error;
pub mod host;
pub mod instrument;
pub mod value;

pub use error::{CallError, OperandError};
pub use host::Calculator;
pub use instrument::{logged, CallSink, Invocation, LogSink, Logged};
pub use value::{Args, Kwargs, Value};
