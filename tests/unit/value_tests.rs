use call_logger::{Args, CallError, Kwargs, OperandError, Value};
use rstest::rstest;
use serde_test::{assert_de_tokens, assert_tokens, Token};

#[rstest]
#[case::int(Value::Int(2), "2")]
#[case::negative(Value::Int(-1), "-1")]
#[case::float(Value::Float(2.5), "2.5")]
#[case::integral_float(Value::Float(3.0), "3.0")]
#[case::large_exponent(Value::Float(1e16), "1e+16")]
#[case::fractional_large_exponent(Value::Float(1.5e300), "1.5e+300")]
#[case::small_exponent(Value::Float(1e-5), "1e-05")]
#[case::negative_small_exponent(Value::Float(-2.5e-7), "-2.5e-07")]
#[case::nan(Value::Float(f64::NAN), "nan")]
#[case::neg_inf(Value::Float(f64::NEG_INFINITY), "-inf")]
#[case::text(Value::from("x"), "'x'")]
#[case::text_with_quote(Value::from("it's"), "\"it's\"")]
#[case::text_with_both_quotes(Value::from("'\""), "'\\'\"'")]
#[case::text_with_newline(Value::from("a\nb"), "'a\\nb'")]
#[case::bool(Value::Bool(true), "True")]
#[case::null(Value::Null, "None")]
fn test_value_debug_rendering(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(format!("{:?}", value), expected);
}

#[rstest]
#[case::int(Value::Int(5), "5")]
#[case::float(Value::Float(3.0), "3.0")]
#[case::text(Value::from("x"), "x")]
#[case::bool(Value::Bool(false), "False")]
fn test_value_display_rendering(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
#[case::empty(vec![], "()")]
#[case::single(vec![Value::Int(2)], "(2,)")]
#[case::pair(vec![Value::Int(2), Value::Int(3)], "(2, 3)")]
#[case::mixed(vec![Value::Float(2.5), Value::from("x")], "(2.5, 'x')")]
fn test_args_render_as_tuple(#[case] values: Vec<Value>, #[case] expected: &str) {
    assert_eq!(format!("{:?}", Args::from(values)), expected);
}

#[test]
fn test_kwargs_render_as_sorted_dict() {
    assert_eq!(format!("{:?}", Kwargs::new()), "{}");

    let kwargs: Kwargs = [("b", Value::Int(3)), ("a", Value::from("x"))]
        .into_iter()
        .collect();
    assert_eq!(format!("{:?}", kwargs), "{'a': 'x', 'b': 3}");
}

#[test]
fn test_kwargs_insert_replaces() {
    let mut kwargs = Kwargs::new();

    assert_eq!(kwargs.insert("a", 1), None);
    assert_eq!(kwargs.insert("a", 2), Some(Value::Int(1)));
    assert_eq!(kwargs.len(), 1);
    assert!(kwargs.contains("a"));
    assert_eq!(kwargs.get("a"), Some(&Value::Int(2)));
}

#[rstest]
#[case::int("2", Value::Int(2))]
#[case::negative("-1", Value::Int(-1))]
#[case::float("2.5", Value::Float(2.5))]
#[case::integral_float("3.0", Value::Float(3.0))]
#[case::exponent("1e3", Value::Float(1000.0))]
#[case::quoted("\"7\"", Value::from("7"))]
#[case::bare_text("x", Value::from("x"))]
#[case::boolean("true", Value::Bool(true))]
#[case::null("null", Value::Null)]
#[case::array("[1, 2]", Value::from("[1, 2]"))]
#[case::i64_max("9223372036854775807", Value::Int(i64::MAX))]
#[case::i64_min("-9223372036854775808", Value::Int(i64::MIN))]
#[case::leading_zero("007", Value::from("007"))]
#[case::tiny_float("1e-400", Value::Float(0.0))]
fn test_value_parse(#[case] raw: &str, #[case] expected: Value) {
    assert_eq!(Value::parse(raw), Ok(expected));
}

#[rstest]
#[case::above_i64("9223372036854775808", OperandError::IntegerOutOfRange("9223372036854775808".to_string()))]
#[case::below_i64("-9223372036854775809", OperandError::IntegerOutOfRange("-9223372036854775809".to_string()))]
#[case::above_u64("123456789012345678901234567890", OperandError::IntegerOutOfRange("123456789012345678901234567890".to_string()))]
#[case::float_overflow("1e400", OperandError::FloatOutOfRange("1e400".to_string()))]
#[case::negative_float_overflow("-1.5E+400", OperandError::FloatOutOfRange("-1.5E+400".to_string()))]
fn test_value_parse_rejects_out_of_range_numbers(
    #[case] raw: &str,
    #[case] expected: OperandError,
) {
    assert_eq!(Value::parse(raw), Err(expected));
}

#[test]
fn test_out_of_range_message_shows_operand_as_given() {
    let err = Value::parse("9223372036854775808").unwrap_err();

    assert_eq!(err.to_string(), "integer operand out of range: 9223372036854775808");
}

#[test]
fn test_value_serde_tokens() {
    assert_tokens(&Value::Int(2), &[Token::I64(2)]);
    assert_tokens(&Value::Float(2.5), &[Token::F64(2.5)]);
    assert_tokens(&Value::from("x"), &[Token::Str("x")]);
    assert_tokens(&Value::Bool(true), &[Token::Bool(true)]);
    assert_tokens(&Value::Null, &[Token::Unit]);
    assert_de_tokens(&Value::Int(2), &[Token::U8(2)]);
}

#[rstest]
#[case::ints(Value::Int(2), Value::Int(3), Value::Int(5))]
#[case::int_float(Value::Int(2), Value::Float(0.5), Value::Float(2.5))]
#[case::float_int(Value::Float(0.5), Value::Int(2), Value::Float(2.5))]
#[case::floats(Value::Float(2.5), Value::Float(0.5), Value::Float(3.0))]
fn test_checked_add_numeric(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
    assert_eq!(a.checked_add(&b), Ok(expected));
}

#[test]
fn test_checked_add_rejects_non_numeric() {
    let err = Value::from("a").checked_add(&Value::from("b")).unwrap_err();

    assert_eq!(
        err,
        CallError::TypeMismatch {
            left: "text",
            right: "text"
        }
    );
    assert_eq!(err.to_string(), "unsupported operand type(s) for +: 'text' and 'text'");
}

#[test]
fn test_checked_add_reports_overflow() {
    assert_eq!(
        Value::Int(i64::MIN).checked_add(&Value::Int(-1)),
        Err(CallError::Overflow {
            left: i64::MIN,
            right: -1
        })
    );
}

#[test]
fn test_is_numeric() {
    assert!(Value::Int(0).is_numeric());
    assert!(Value::Float(0.0).is_numeric());
    assert!(!Value::Bool(false).is_numeric());
    assert!(!Value::Null.is_numeric());
}
