use crate::error::EvalError;
use crate::functions::Builtin;
use std::fmt;

mod converter;
mod evaluator;
mod numeric;
mod tokenizer;

pub use converter::to_postfix;
pub use evaluator::evaluate_postfix;
pub use numeric::{format_number, parse_numeric};
pub use tokenizer::tokenize;

/// Smallest classified unit of formula text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Variable(String),
    /// Identifier directly followed by `^<number>`, e.g. `x^2`.
    VariablePower { name: String, power: f64 },
    Function(Builtin),
    /// Function name directly followed by `^<number>`, e.g. `sin^2`.
    FunctionPower { function: Builtin, power: f64 },
    Operator(Operator),
}

impl Token {
    pub fn is_function(&self) -> bool {
        matches!(self, Token::Function(_) | Token::FunctionPower { .. })
    }

    /// Name of the variable this token reads, if any.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Token::Variable(name) | Token::VariablePower { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", format_number(*value)),
            Token::Variable(name) => f.write_str(name),
            Token::VariablePower { name, power } => {
                write!(f, "{}^{}", name, format_number(*power))
            }
            Token::Function(function) => write!(f, "{}", function),
            Token::FunctionPower { function, power } => {
                write!(f, "{}^{}", function, format_number(*power))
            }
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    LeftParen,
    RightParen,
    Comma,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
            Operator::LeftParen => '(',
            Operator::RightParen => ')',
            Operator::Comma => ',',
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Power => 4,
            Operator::Multiply | Operator::Divide => 3,
            Operator::Add | Operator::Subtract => 2,
            Operator::LeftParen | Operator::RightParen | Operator::Comma => 1,
        }
    }

    /// Grouping symbols report `Left`; their associativity is never consulted.
    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Whether `top`, sitting on the operator stack, must be emitted before
    /// `self` is pushed.
    pub fn yields_to(&self, top: Operator) -> bool {
        match self.associativity() {
            Associativity::Left => top.precedence() >= self.precedence(),
            Associativity::Right => top.precedence() > self.precedence(),
        }
    }

    /// Applies a binary arithmetic operator. Division by zero follows IEEE 754.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => Ok(left / right),
            Operator::Power => Ok(left.powf(right)),
            Operator::LeftParen | Operator::RightParen | Operator::Comma => {
                Err(EvalError::UnknownOperator(self.symbol().to_string()))
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '^' => Ok(Operator::Power),
            '(' => Ok(Operator::LeftParen),
            ')' => Ok(Operator::RightParen),
            ',' => Ok(Operator::Comma),
            _ => Err(EvalError::Lex(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_table() {
        assert_eq!(Operator::Power.precedence(), 4);
        assert_eq!(Operator::Multiply.precedence(), 3);
        assert_eq!(Operator::Divide.precedence(), 3);
        assert_eq!(Operator::Add.precedence(), 2);
        assert_eq!(Operator::Subtract.precedence(), 2);
        assert_eq!(Operator::LeftParen.precedence(), 1);
    }

    #[test]
    fn test_yields_to_respects_associativity() {
        // left-associative: equal precedence pops
        assert!(Operator::Subtract.yields_to(Operator::Add));
        assert!(Operator::Add.yields_to(Operator::Multiply));
        assert!(!Operator::Multiply.yields_to(Operator::Add));
        // right-associative: equal precedence stays
        assert!(!Operator::Power.yields_to(Operator::Power));
        assert!(!Operator::Add.yields_to(Operator::LeftParen));
    }

    #[test]
    fn test_apply_arithmetic() {
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(Operator::Divide.apply(1.0, 0.0), Ok(f64::INFINITY));
        assert!(Operator::Divide.apply(0.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_apply_grouping_is_unknown() {
        assert_eq!(
            Operator::Comma.apply(1.0, 2.0),
            Err(EvalError::UnknownOperator(",".to_string()))
        );
    }

    #[test]
    fn test_operator_from_char() {
        assert_eq!(Operator::try_from('^'), Ok(Operator::Power));
        assert_eq!(Operator::try_from('%'), Err(EvalError::Lex('%')));
    }

    #[test]
    fn test_token_display() {
        let token = Token::VariablePower {
            name: "x".to_string(),
            power: 2.0,
        };
        assert_eq!(token.to_string(), "x^2");
        let token = Token::FunctionPower {
            function: Builtin::Sin,
            power: 0.5,
        };
        assert_eq!(token.to_string(), "sin^0.5");
        assert_eq!(Token::Operator(Operator::Comma).to_string(), ",");
    }
}
