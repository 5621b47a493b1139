use log::debug;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Spanned, Token, tokenize},
        symbols::core::{SymbolKind, SymbolTable},
    },
};

impl SymbolTable {
    /// Builds a symbol table from an already tokenized expression.
    ///
    /// Every identifier immediately followed by `[` is registered as an
    /// array, every other identifier as a scalar. Names seen more than once
    /// are registered once.
    ///
    /// # Errors
    /// Returns [`EvalError::SymbolKindConflict`] if a name is used both with
    /// and without a subscript.
    pub fn from_tokens(tokens: &[Spanned]) -> EvalResult<Self> {
        let mut table = Self::new();

        for (i, (token, position)) in tokens.iter().enumerate() {
            let Token::Identifier(name) = token else {
                continue;
            };

            let kind = match tokens.get(i + 1) {
                Some((Token::LBracket, _)) => SymbolKind::Array,
                _ => SymbolKind::Scalar,
            };

            match (table.kind_of(name), kind) {
                (None, SymbolKind::Scalar) => {
                    debug!("discovered scalar '{name}' at position {position}");
                    table.insert_scalar(name);
                },
                (None, SymbolKind::Array) => {
                    debug!("discovered array '{name}' at position {position}");
                    table.insert_array(name);
                },
                (Some(known), _) if known == kind => {},
                (Some(_), _) => {
                    return Err(EvalError::SymbolKindConflict { name:     name.clone(),
                                                               position: *position, });
                },
            }
        }

        Ok(table)
    }
}

/// Discovers every symbol referenced by an expression.
///
/// Scalars start at `0` and arrays start without a backing sequence; the
/// values loader fills them in afterwards.
///
/// # Errors
/// Returns [`EvalError::SymbolKindConflict`] if a name is used both as a
/// scalar and as an array.
///
/// # Example
/// ```
/// use symeval::interpreter::symbols::discover::discover_symbols;
///
/// let table = discover_symbols("a + A[a] * (b - a)").unwrap();
///
/// let scalars: Vec<&str> = table.scalars().iter().map(|s| s.name.as_str()).collect();
/// let arrays: Vec<&str> = table.arrays().iter().map(|a| a.name.as_str()).collect();
///
/// assert_eq!(scalars, ["a", "b"]);
/// assert_eq!(arrays, ["A"]);
/// ```
pub fn discover_symbols(source: &str) -> EvalResult<SymbolTable> {
    SymbolTable::from_tokens(&tokenize(source))
}
