use std::fmt::{self, Debug};

use super::sink::{CallSink, LogSink};

/// One completed call, as it is written to the sink.
pub struct Invocation<'a, A: ?Sized, K: ?Sized> {
    pub name: &'a str,
    pub args: &'a A,
    pub kwargs: &'a K,
}

impl<A: Debug + ?Sized, K: Debug + ?Sized> fmt::Display for Invocation<'_, A, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} :: args: {:?}, kwargs: {:?}",
            self.name, self.args, self.kwargs
        )
    }
}

/// An operation wrapped so that each successful call is reported to a sink.
///
/// The wrapped operation receives the receiver and both argument sets by
/// shared reference and its result is handed back untouched. Only `Ok`
/// results are reported; errors pass through without a line being written.
pub struct Logged<F, S = LogSink> {
    name: &'static str,
    operation: F,
    sink: S,
}

/// Wraps `operation` so its calls are logged through the `log` facade.
pub fn logged<F>(name: &'static str, operation: F) -> Logged<F> {
    Logged::new(name, operation, LogSink::default())
}

impl<F, S: CallSink> Logged<F, S> {
    pub fn new(name: &'static str, operation: F, sink: S) -> Self {
        Self {
            name,
            operation,
            sink,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call<R, A, K, T, E>(&self, receiver: &R, args: &A, kwargs: &K) -> Result<T, E>
    where
        R: ?Sized,
        A: Debug + ?Sized,
        K: Debug + ?Sized,
        F: Fn(&R, &A, &K) -> Result<T, E>,
    {
        let value = (self.operation)(receiver, args, kwargs)?;

        if self.sink.enabled() {
            let invocation = Invocation {
                name: self.name,
                args,
                kwargs,
            };
            self.sink.debug(&invocation.to_string());
        }

        Ok(value)
    }
}
