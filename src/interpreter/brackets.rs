use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Spanned, Token},
    },
};

/// The two bracket pairs of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    /// `(` and `)`, grouping.
    Paren,
    /// `[` and `]`, array subscripts.
    Square,
}

/// Which side of a pair a character or token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Open,
    Close,
}

impl BracketKind {
    /// The opening character, `(` or `[`.
    #[must_use]
    pub const fn open_char(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
        }
    }

    /// The closing character, `)` or `]`.
    #[must_use]
    pub const fn close_char(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
        }
    }

    const fn side_of_token(self, token: &Token) -> Option<Side> {
        match (self, token) {
            (Self::Paren, Token::LParen) | (Self::Square, Token::LBracket) => Some(Side::Open),
            (Self::Paren, Token::RParen) | (Self::Square, Token::RBracket) => Some(Side::Close),
            _ => None,
        }
    }

    fn side_of_char(self, c: char) -> Option<Side> {
        if c == self.open_char() {
            Some(Side::Open)
        } else if c == self.close_char() {
            Some(Side::Close)
        } else {
            None
        }
    }
}

/// Outcome of scanning for a matching pair.
enum Scan {
    Matched(usize, usize),
    /// No opening bracket at all.
    NoOpen,
    /// A closing bracket at this index before any opening one.
    StrayClose(usize),
    /// The opening bracket at this index is never closed.
    Unclosed(usize),
}

/// Counts brackets over `(index, side)` pairs until the first opening bracket
/// is balanced.
fn scan<I>(sides: I) -> Scan
    where I: IntoIterator<Item = (usize, Option<Side>)>
{
    let mut depth = 0usize;
    let mut open = None;

    for (index, side) in sides {
        match side {
            Some(Side::Open) => {
                if open.is_none() {
                    open = Some(index);
                }
                depth += 1;
            },
            Some(Side::Close) => {
                let Some(open_index) = open else {
                    return Scan::StrayClose(index);
                };
                depth -= 1;
                if depth == 0 {
                    return Scan::Matched(open_index, index);
                }
            },
            None => {},
        }
    }

    open.map_or(Scan::NoOpen, Scan::Unclosed)
}

/// Finds the first opening bracket of `kind` in a token slice and the
/// bracket that closes it.
///
/// Brackets of the same kind may nest; brackets of the other kind are
/// ignored.
///
/// # Parameters
/// - `tokens`: The span to search.
/// - `kind`: Which bracket pair to match.
///
/// # Returns
/// `(open, close)` as indices into `tokens`.
///
/// # Errors
/// Returns [`EvalError::UnbalancedBrackets`] if the span has no opening
/// bracket, has a closing bracket before the first opening one, or ends
/// before the opening bracket is closed.
///
/// # Example
/// ```
/// use symeval::interpreter::{
///     brackets::{BracketKind, match_closing},
///     lexer::tokenize,
/// };
///
/// let tokens = tokenize("A[B[1]+2]*3");
/// assert_eq!(match_closing(&tokens, BracketKind::Square).unwrap(), (1, 8));
/// ```
pub fn match_closing(tokens: &[Spanned], kind: BracketKind) -> EvalResult<(usize, usize)> {
    let sides = tokens.iter()
                      .enumerate()
                      .map(|(i, (token, _))| (i, kind.side_of_token(token)));

    let position_of = |index: usize| tokens.get(index).map_or(0, |(_, position)| *position);

    match scan(sides) {
        Scan::Matched(open, close) => Ok((open, close)),
        Scan::NoOpen => Err(EvalError::UnbalancedBrackets { bracket:  kind.open_char(),
                                                            position: position_of(0), }),
        Scan::StrayClose(index) => {
            Err(EvalError::UnbalancedBrackets { bracket:  kind.close_char(),
                                                position: position_of(index), })
        },
        Scan::Unclosed(index) => Err(EvalError::UnbalancedBrackets { bracket:  kind.open_char(),
                                                                     position: position_of(index), }),
    }
}

/// Finds the first opening bracket of `kind` in `text` and the bracket that
/// closes it.
///
/// Works directly on characters, so it can be applied to raw expression
/// text without tokenizing it first.
///
/// # Returns
/// `(open, close)` as byte offsets into `text`.
///
/// # Errors
/// Returns [`EvalError::UnbalancedBrackets`] under the same conditions as
/// [`match_closing`].
///
/// # Example
/// ```
/// use symeval::interpreter::brackets::{BracketKind, match_closing_in_text};
///
/// let text = "(a+(b-c))*(d+A[4])";
/// assert_eq!(match_closing_in_text(text, BracketKind::Paren).unwrap(), (0, 8));
/// assert_eq!(match_closing_in_text(text, BracketKind::Square).unwrap(), (14, 16));
/// assert!(match_closing_in_text("(1+2", BracketKind::Paren).is_err());
/// ```
pub fn match_closing_in_text(text: &str, kind: BracketKind) -> EvalResult<(usize, usize)> {
    let sides = text.char_indices().map(|(i, c)| (i, kind.side_of_char(c)));

    match scan(sides) {
        Scan::Matched(open, close) => Ok((open, close)),
        Scan::NoOpen => Err(EvalError::UnbalancedBrackets { bracket:  kind.open_char(),
                                                            position: 0, }),
        Scan::StrayClose(position) => Err(EvalError::UnbalancedBrackets { bracket:
                                                                              kind.close_char(),
                                                                          position }),
        Scan::Unclosed(position) => Err(EvalError::UnbalancedBrackets { bracket:
                                                                            kind.open_char(),
                                                                        position }),
    }
}
