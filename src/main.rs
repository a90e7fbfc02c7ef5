use anyhow::Result;
use std::io::Write;

use call_logger::{config::DEFAULT_LOG_FILTER, Args, Calculator, Kwargs, OperandError, Value};

/// Splits `name=value` operands into named arguments, the rest positional.
fn parse_operands(operands: Vec<String>) -> Result<(Args, Kwargs), OperandError> {
    let mut args = Vec::new();
    let mut kwargs = Kwargs::new();

    for operand in &operands {
        match operand.split_once('=') {
            Some((name, raw)) if !name.is_empty() => {
                kwargs.insert(name, Value::parse(raw)?);
            }
            _ => args.push(Value::parse(operand)?),
        }
    }

    Ok((Args::from(args), kwargs))
}

fn main() -> Result<()> {
    // Initialize logging; records go to stderr as bare messages.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let mut operands: Vec<String> = std::env::args().skip(1).collect();
    if operands.is_empty() {
        operands = vec!["2".to_string(), "3".to_string()];
    }

    let (args, kwargs) = parse_operands(operands)?;
    let calculator = Calculator::new();
    let result = calculator.sum(&args, &kwargs)?;
    println!("{}", result);

    Ok(())
}
