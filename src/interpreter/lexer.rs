use logos::Logos;

/// Characters that separate tokens in an expression.
///
/// Space and tab only separate; every other delimiter is also a token of its
/// own.
pub const DELIMITERS: &str = " \t*+-/()[]";

/// A token paired with the byte offset at which it starts.
pub type Spanned = (Token, usize);

/// Represents a lexical token in an expression.
///
/// Anything between two delimiters that is neither a number nor a name is
/// kept as [`Token::Unrecognized`] so that the evaluator can report it with
/// its position.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number, priority = 3)]
    #[regex(r"\.[0-9]+", parse_number, priority = 3)]
    Number(f64),
    /// Symbol names such as `x` or `varA`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string(), priority = 3)]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Any other run of non-delimiter characters, such as `x1` or `#`.
    #[regex(r"[^ \t*+\-/()\[\]]+", |lex| lex.slice().to_string(), priority = 1)]
    Unrecognized(String),
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) | Self::Unrecognized(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits an expression into tokens.
///
/// Tokenization never fails: fragments that cannot be classified come back
/// as [`Token::Unrecognized`] and are rejected later, when the evaluator
/// reaches them.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// Every token in order, each paired with its byte offset in `source`.
///
/// # Example
/// ```
/// use symeval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("A[i] * 2.5");
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("A".to_string()),
///                 Token::LBracket,
///                 Token::Identifier("i".to_string()),
///                 Token::RBracket,
///                 Token::Star,
///                 Token::Number(2.5)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Spanned> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, offset)),
            Err(()) => tokens.push((Token::Unrecognized(lexer.slice().to_string()), offset)),
        }
    }

    tokens
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
