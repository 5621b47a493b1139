use std::fmt;

use crate::interpreter::lexer::Token;

/// The four arithmetic operators of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Maps an operator token to its operator.
    ///
    /// # Returns
    /// `None` for tokens that are not operators.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns `true` if an operator already on the stack must be applied
    /// before `incoming` is pushed.
    ///
    /// All four operators are left-associative, so equal precedence reduces.
    ///
    /// # Example
    /// ```
    /// use symeval::interpreter::evaluator::operator::Operator;
    ///
    /// assert!(Operator::Mul.reduces_before(Operator::Add));
    /// assert!(Operator::Sub.reduces_before(Operator::Sub));
    /// assert!(!Operator::Add.reduces_before(Operator::Div));
    /// ```
    #[must_use]
    pub const fn reduces_before(self, incoming: Self) -> bool {
        self.precedence() >= incoming.precedence()
    }

    /// Applies the operator as `left OP right`.
    ///
    /// Arithmetic is plain `f64`: dividing by zero yields an infinity or NaN
    /// rather than an error.
    ///
    /// # Example
    /// ```
    /// use symeval::interpreter::evaluator::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(8.0, 3.0), 5.0);
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub const fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
