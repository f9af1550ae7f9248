use crate::error::{EvalError, SyntaxError};
use crate::formula::{parse_numeric, Token};
use log::debug;
use std::collections::HashMap;

/// Runs a postfix sequence on a numeric stack.
///
/// Variables are read from `bindings` as text and converted with
/// [`parse_numeric`]; a missing name is an error, an unparsable value is NaN.
pub fn evaluate_postfix(
    postfix: &[Token],
    bindings: &HashMap<String, String>,
) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(value) => stack.push(*value),
            Token::Variable(name) => stack.push(lookup(bindings, name)?),
            Token::VariablePower { name, power } => {
                stack.push(lookup(bindings, name)?.powf(*power))
            }
            Token::Function(function) => {
                let args = pop_args(&mut stack, function.arity(), function.name())?;
                stack.push(function.apply(&args)?);
            }
            Token::FunctionPower { function, power } => {
                let args = pop_args(&mut stack, function.arity(), function.name())?;
                stack.push(function.apply(&args)?.powf(*power));
            }
            Token::Operator(operator) => {
                let args = pop_args(&mut stack, 2, &operator.symbol().to_string())?;
                stack.push(operator.apply(args[0], args[1])?);
            }
        }
    }

    match stack.as_slice() {
        [result] => {
            debug!("Evaluated to {}", result);
            Ok(*result)
        }
        _ => Err(SyntaxError::UnreducedStack(stack.len()).into()),
    }
}

fn lookup(bindings: &HashMap<String, String>, name: &str) -> Result<f64, EvalError> {
    bindings
        .get(name)
        .map(|value| parse_numeric(value))
        .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))
}

/// Takes the top `count` values, oldest first.
fn pop_args(stack: &mut Vec<f64>, count: usize, symbol: &str) -> Result<Vec<f64>, EvalError> {
    if stack.len() < count {
        return Err(EvalError::Arity {
            symbol: symbol.to_string(),
            expected: count,
            found: stack.len(),
        });
    }
    Ok(stack.split_off(stack.len() - count))
}
