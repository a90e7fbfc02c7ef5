mod args;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use crate::error::{CallError, OperandError};

pub use args::{Args, Kwargs};

/// A dynamically typed argument or result of an instrumented call.
///
/// Deserializes from plain JSON scalars: integers become [`Value::Int`],
/// any other number [`Value::Float`], strings [`Value::Text`].
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Parses a command-line operand as JSON, keeping it as text otherwise.
    ///
    /// Number literals never change kind: an integer that does not fit in
    /// `i64` or a float that does not fit in `f64` is an error.
    pub fn parse(raw: &str) -> Result<Self, OperandError> {
        let token = raw.trim();
        match number_literal(token) {
            Some(NumberLiteral::Integer) => token
                .parse()
                .map(Value::Int)
                .map_err(|_| OperandError::IntegerOutOfRange(raw.to_string())),
            Some(NumberLiteral::Float) => match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Value::Float(value)),
                _ => Err(OperandError::FloatOutOfRange(raw.to_string())),
            },
            None => Ok(serde_json::from_str(raw)
                .unwrap_or_else(|_| Value::Text(raw.to_string()))),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Adds two numeric values.
    ///
    /// Two integers stay an integer; any other numeric mix widens to float.
    /// Non-numeric operands are rejected with [`CallError::TypeMismatch`].
    pub fn checked_add(&self, other: &Value) -> Result<Value, CallError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(*b)
                .map(Value::Int)
                .ok_or(CallError::Overflow { left: *a, right: *b }),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 + b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a + *b as f64)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            (left, right) => Err(CallError::TypeMismatch {
                left: left.type_name(),
                right: right.type_name(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum NumberLiteral {
    Integer,
    Float,
}

/// Classifies `token` by the JSON number grammar.
fn number_literal(token: &str) -> Option<NumberLiteral> {
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let (integral, fraction) = match mantissa.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (mantissa, None),
    };

    if !digits(integral) || (integral.len() > 1 && integral.starts_with('0')) {
        return None;
    }
    if fraction.is_some_and(|fraction| !digits(fraction)) {
        return None;
    }
    if let Some(exponent) = exponent {
        if !digits(exponent.strip_prefix(['+', '-']).unwrap_or(exponent)) {
            return None;
        }
    }

    if fraction.is_none() && exponent.is_none() {
        Some(NumberLiteral::Integer)
    } else {
        Some(NumberLiteral::Float)
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }

    // Debug keeps the trailing `.0` on integral floats; exponents are
    // written signed and at least two digits wide (`1e+16`, `1e-05`).
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, magnitude) = match exponent.strip_prefix('-') {
                Some(magnitude) => ('-', magnitude),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, magnitude)
        }
        None => f.write_str(&repr),
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// Renders the value the way it appears inside a call record: `2`, `3.0`,
/// `'text'`, `True`, `None`.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write_float(f, *value),
            Value::Text(text) => write_quoted(f, text),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
