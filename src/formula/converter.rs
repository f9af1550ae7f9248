use crate::error::{EvalError, SyntaxError};
use crate::formula::{Operator, Token};
use log::debug;

/// Reorders infix tokens into postfix with the shunting-yard algorithm.
///
/// Functions wait on the operator stack until their closing parenthesis, and
/// grouping symbols never reach the output.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Variable(_) | Token::VariablePower { .. } => {
                output.push(token)
            }
            Token::Function(_) | Token::FunctionPower { .. } => stack.push(token),
            Token::Operator(Operator::LeftParen) => stack.push(token),
            Token::Operator(Operator::Comma) => {
                if !pop_until_left_paren(&mut stack, &mut output) {
                    return Err(SyntaxError::MisplacedSeparator.into());
                }
            }
            Token::Operator(Operator::RightParen) => {
                if !pop_until_left_paren(&mut stack, &mut output) {
                    return Err(SyntaxError::MismatchedParentheses.into());
                }
                stack.pop();

                if stack.last().is_some_and(Token::is_function) {
                    output.extend(stack.pop());
                }
            }
            Token::Operator(operator) => {
                while let Some(top) = stack.pop() {
                    let emit = match &top {
                        Token::Function(_) | Token::FunctionPower { .. } => true,
                        Token::Operator(top_operator) => operator.yields_to(*top_operator),
                        _ => false,
                    };
                    if !emit {
                        stack.push(top);
                        break;
                    }
                    output.push(top);
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(
            top,
            Token::Operator(Operator::LeftParen | Operator::RightParen)
        ) {
            return Err(SyntaxError::MismatchedParentheses.into());
        }
        output.push(top);
    }

    debug!(
        "Postfix: {}",
        output
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(output)
}

/// Moves stack entries to the output until a `(` is on top. Returns `false`
/// when the stack runs out first.
fn pop_until_left_paren(stack: &mut Vec<Token>, output: &mut Vec<Token>) -> bool {
    loop {
        match stack.last() {
            Some(Token::Operator(Operator::LeftParen)) => return true,
            Some(_) => output.extend(stack.pop()),
            None => return false,
        }
    }
}
