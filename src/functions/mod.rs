pub mod logarithm;
pub mod roots;
pub mod trig;

use crate::error::EvalError;
use std::fmt;

/// The closed set of functions a formula may call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Sqrt,
    NthRoot,
    Log,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::Sqrt,
        Builtin::NthRoot,
        Builtin::Log,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Sqrt => "sqrt",
            Builtin::NthRoot => "nthroot",
            Builtin::Log => "log",
        }
    }

    /// Number of values the function takes off the evaluation stack.
    pub fn arity(&self) -> usize {
        match self {
            Builtin::Sin | Builtin::Cos | Builtin::Tan | Builtin::Sqrt => 1,
            Builtin::NthRoot | Builtin::Log => 2,
        }
    }

    /// Resolves an identifier to a builtin, `None` for anything else.
    pub fn lookup(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Applies the function to its arguments, first argument first.
    pub fn apply(&self, args: &[f64]) -> Result<f64, EvalError> {
        match self {
            Builtin::Sin => trig::sin(args),
            Builtin::Cos => trig::cos(args),
            Builtin::Tan => trig::tan(args),
            Builtin::Sqrt => roots::sqrt(args),
            Builtin::NthRoot => roots::nthroot(args),
            Builtin::Log => logarithm::log(args),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
