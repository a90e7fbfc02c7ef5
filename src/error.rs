use thiserror::Error;

/// Failures raised by an instrumented operation.
///
/// The instrumentation wrapper itself never produces one of these; it only
/// forwards whatever the wrapped operation returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("unsupported operand type(s) for +: '{left}' and '{right}'")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    #[error("integer overflow: {left} + {right}")]
    Overflow { left: i64, right: i64 },

    #[error("{operation}() takes {expected} positional arguments but {given} were given")]
    TooManyArguments {
        operation: &'static str,
        expected: usize,
        given: usize,
    },

    #[error("{operation}() got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword {
        operation: &'static str,
        name: String,
    },

    #[error("{operation}() got multiple values for argument '{name}'")]
    DuplicateArgument {
        operation: &'static str,
        name: &'static str,
    },

    #[error("{operation}() missing required argument: '{name}'")]
    MissingArgument {
        operation: &'static str,
        name: &'static str,
    },
}

/// Failures turning a textual operand into a [`Value`](crate::value::Value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("integer operand out of range: {0}")]
    IntegerOutOfRange(String),

    #[error("float operand out of range: {0}")]
    FloatOutOfRange(String),
}
