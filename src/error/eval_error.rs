#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while discovering symbols in, or
/// evaluating, an expression.
///
/// Every variant carries the byte offset of the offending token in the
/// expression text.
pub enum EvalError {
    /// A parenthesis or square bracket has no matching partner.
    UnbalancedBrackets {
        /// The bracket character that could not be matched.
        bracket:  char,
        /// Byte offset of the unmatched bracket.
        position: usize,
    },
    /// An array subscript is negative or not below the declared length.
    IndexOutOfRange {
        /// Name of the array symbol.
        name:     String,
        /// The subscript after truncation to an integer.
        index:    i64,
        /// The declared length, or `None` if the array was never loaded.
        length:   Option<usize>,
        /// Byte offset of the array name.
        position: usize,
    },
    /// An array subscript evaluated to NaN or an infinite value.
    InvalidIndex {
        /// Name of the array symbol.
        name:     String,
        /// The value the subscript evaluated to.
        value:    f64,
        /// Byte offset of the array name.
        position: usize,
    },
    /// An expression, parenthesized group or subscript contains no tokens.
    EmptyExpression {
        /// Byte offset where a value was expected.
        position: usize,
    },
    /// An operator has no operand on one of its sides.
    MissingOperand {
        /// Byte offset where the operand was expected.
        position: usize,
    },
    /// A token appeared where it is not allowed, or could not be recognized.
    UnexpectedToken {
        /// The offending token text.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Parentheses and subscripts are nested deeper than the evaluator
    /// allows.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:    usize,
        /// Byte offset of the first bracket past the limit.
        position: usize,
    },
    /// The same name is used both as a scalar and as an array.
    SymbolKindConflict {
        /// The conflicting name.
        name:     String,
        /// Byte offset of the second, conflicting use.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedBrackets { bracket, position } => write!(f,
                                                                     "Error at position {position}: Bracket '{bracket}' has no matching partner."),

            Self::IndexOutOfRange { name,
                                    index,
                                    length: Some(length),
                                    position, } => write!(f,
                                                          "Error at position {position}: Index {index} is out of range for array '{name}' of length {length}."),

            Self::IndexOutOfRange { name,
                                    index,
                                    length: None,
                                    position, } => write!(f,
                                                          "Error at position {position}: Index {index} is out of range for array '{name}'."),

            Self::InvalidIndex { name, value, position } => write!(f,
                                                                   "Error at position {position}: Subscript of '{name}' evaluated to {value}, which is not a valid index."),

            Self::EmptyExpression { position } => {
                write!(f, "Error at position {position}: Expected an expression but found nothing.")
            },

            Self::MissingOperand { position } => {
                write!(f, "Error at position {position}: Operator is missing an operand.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Brackets are nested deeper than {limit} levels."),

            Self::SymbolKindConflict { name, position } => write!(f,
                                                                  "Error at position {position}: '{name}' is used both as a scalar and as an array."),
        }
    }
}

impl std::error::Error for EvalError {}
