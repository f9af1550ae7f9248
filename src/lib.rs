pub mod engine;
pub mod error;
pub mod formula;
pub mod functions;

pub use engine::Engine;
pub use error::{EvalError, SyntaxError};

use formula::{evaluate_postfix, format_number, to_postfix, tokenize};
use log::debug;
use std::collections::HashMap;

/// Shown instead of a result while the formula is blank.
pub const PROMPT_MESSAGE: &str = "Enter a formula to see the result.";

/// Shown for every failure, whatever its kind.
pub const FAILURE_MESSAGE: &str = "Invalid formula";

/// Evaluates a formula for display: the result as text, the prompt for blank
/// input, or [`FAILURE_MESSAGE`].
pub fn evaluate_expression(expression: &str, bindings: &HashMap<String, String>) -> String {
    display_result(expression, || evaluate(expression, bindings))
}

/// Maps an evaluation outcome to display text. `run` is skipped for blank input.
pub(crate) fn display_result<F>(expression: &str, run: F) -> String
where
    F: FnOnce() -> Result<f64, EvalError>,
{
    if expression.trim().is_empty() {
        return PROMPT_MESSAGE.to_string();
    }

    match run() {
        Ok(result) => format_number(result),
        Err(err) => {
            debug!("Formula '{}' failed: {}", expression, err);
            FAILURE_MESSAGE.to_string()
        }
    }
}

/// Runs tokenizer, converter and evaluator, keeping the error kind.
pub fn evaluate(expression: &str, bindings: &HashMap<String, String>) -> Result<f64, EvalError> {
    let postfix = to_postfix(tokenize(expression)?)?;
    evaluate_postfix(&postfix, bindings)
}

/// Names of the variables a formula reads, in order of first appearance.
pub fn free_variables(expression: &str) -> Result<Vec<String>, EvalError> {
    let mut names: Vec<String> = Vec::new();
    for token in tokenize(expression)? {
        if let Some(name) = token.variable_name() {
            if !names.iter().any(|seen| seen == name) {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}
