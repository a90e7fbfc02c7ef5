use log::trace;

use crate::{
    config::SUM_OPERATION,
    error::CallError,
    instrument::{CallSink, LogSink, Logged},
    value::{Args, Kwargs, Value},
};

use super::signature::Signature;

const SUM_SIGNATURE: Signature = Signature::new(SUM_OPERATION, &["a", "b"]);

/// Host object exposing one instrumented operation, `sum`.
///
/// Holds no data of its own, only the sink its calls are reported to.
#[derive(Debug, Clone)]
pub struct Calculator<S = LogSink> {
    sink: S,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_sink(LogSink::default())
    }
}

impl<S: CallSink> Calculator<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Adds parameters `a` and `b`, given positionally or by name.
    pub fn sum(&self, args: &Args, kwargs: &Kwargs) -> Result<Value, CallError> {
        Logged::new(SUM_OPERATION, sum::<S>, &self.sink).call(self, args, kwargs)
    }

    pub fn add(&self, a: impl Into<Value>, b: impl Into<Value>) -> Result<Value, CallError> {
        self.sum(&Args::from(vec![a.into(), b.into()]), &Kwargs::new())
    }
}

/// Undecorated addition behind [`Calculator::sum`].
fn sum<S>(_: &Calculator<S>, args: &Args, kwargs: &Kwargs) -> Result<Value, CallError> {
    let bound = SUM_SIGNATURE.bind(args, kwargs)?;
    let (a, b) = (bound[0], bound[1]);
    trace!("Adding {} and {}", a.type_name(), b.type_name());

    a.checked_add(b)
}
