use logos::Logos;

/// Represents a lexical token in one line of a values file.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum ValueToken {
    /// Floating-point literal tokens, such as `3.5`, `-.5` or `1.0e3`.
    #[regex(r"-?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
    /// Symbol names.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Name(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs and stray carriage returns.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for ValueToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(n) => write!(f, "{n}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits one values-file line into tokens.
///
/// # Errors
/// Returns the offending slice of text if the line contains something that
/// is not a number, a name or pair punctuation.
///
/// # Example
/// ```
/// use symeval::interpreter::loader::lexer::{ValueToken, tokenize_line};
///
/// let tokens = tokenize_line("A 2 (1, 4.5)").unwrap();
/// assert_eq!(tokens,
///            vec![ValueToken::Name("A".to_string()),
///                 ValueToken::Integer(2),
///                 ValueToken::LParen,
///                 ValueToken::Integer(1),
///                 ValueToken::Comma,
///                 ValueToken::Real(4.5),
///                 ValueToken::RParen]);
///
/// assert_eq!(tokenize_line("x = 3"), Err("=".to_string()));
/// ```
pub fn tokenize_line(line: &str) -> Result<Vec<ValueToken>, String> {
    let mut tokens = Vec::new();
    let mut lexer = ValueToken::lexer(line);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(lexer.slice().to_string()),
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &logos::Lexer<ValueToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<ValueToken>) -> Option<i64> {
    lex.slice().parse().ok()
}
