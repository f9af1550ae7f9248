use thiserror::Error;

/// Structural problems found while converting or reducing a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error("Argument separator outside of a function call")]
    MisplacedSeparator,
    #[error("Invalid expression: {0} values left on the stack")]
    UnreducedStack(usize),
}

/// Every way a formula can fail, from tokenizing through evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Invalid character '{0}' in expression")]
    Lex(char),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),

    #[error("Not enough operands for '{symbol}': expected {expected}, got {found}")]
    Arity {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown operator or function '{0}'")]
    UnknownOperator(String),
}
