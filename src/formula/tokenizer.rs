use crate::error::EvalError;
use crate::formula::{parse_numeric, Operator, Token};
use crate::functions::Builtin;
use log::debug;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./formula.pest"]
pub struct FormulaParser;

/// Scans a formula into tokens, inserting the implicit `*` between adjacent
/// operands.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, EvalError> {
    let formula = FormulaParser::parse(Rule::formula, expression)
        .map_err(|e| {
            let position = match e.location {
                InputLocation::Pos(pos) => pos,
                InputLocation::Span((start, _)) => start,
            };
            EvalError::Lex(expression[position..].chars().next().unwrap_or('\0'))
        })?
        .next()
        .ok_or(EvalError::Lex('\0'))?;

    let mut tokens = Vec::new();

    for pair in formula.into_inner() {
        if pair.as_rule() == Rule::EOI {
            break;
        }

        let next_char = expression[pair.as_span().end()..].chars().next();
        let token = build_token(pair)?;
        let implicit_multiply = match (&token, next_char) {
            (_, None) => false,
            (Token::Number(_), Some(c)) => c == '(' || c.is_ascii_alphabetic(),
            (Token::Variable(_) | Token::VariablePower { .. }, Some(c)) => {
                c == '(' || c.is_ascii_alphanumeric()
            }
            // a call binds directly to its parenthesis
            (Token::Function(_) | Token::FunctionPower { .. }, Some(c)) => {
                c.is_ascii_alphanumeric()
            }
            (Token::Operator(_), _) => false,
        };

        tokens.push(token);
        if implicit_multiply {
            tokens.push(Token::Operator(Operator::Multiply));
        }
    }

    debug!("Tokenized '{}' into {} tokens", expression, tokens.len());
    Ok(tokens)
}

fn build_token(pair: Pair<Rule>) -> Result<Token, EvalError> {
    match pair.as_rule() {
        Rule::number => Ok(Token::Number(parse_numeric(pair.as_str()))),
        Rule::identifier => Ok(identifier_token(pair.as_str())),
        Rule::powered => {
            let mut inner = pair.into_inner();
            let name = inner.next().map(|p| p.as_str()).unwrap_or_default();
            let power = inner
                .next()
                .map(|p| parse_numeric(p.as_str()))
                .unwrap_or(f64::NAN);
            Ok(match Builtin::lookup(name) {
                Some(function) => Token::FunctionPower { function, power },
                None => Token::VariablePower {
                    name: name.to_string(),
                    power,
                },
            })
        }
        Rule::operator => first_char(pair.as_str())
            .map(Operator::try_from)
            .unwrap_or(Err(EvalError::Lex('\0')))
            .map(Token::Operator),
        _ => Err(EvalError::Lex(first_char(pair.as_str()).unwrap_or('\0'))),
    }
}

fn identifier_token(name: &str) -> Token {
    match Builtin::lookup(name) {
        Some(function) => Token::Function(function),
        None => Token::Variable(name.to_string()),
    }
}

fn first_char(text: &str) -> Option<char> {
    text.chars().next()
}
