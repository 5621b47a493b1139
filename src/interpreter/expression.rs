use std::io::BufRead;

use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    lexer::{Spanned, tokenize},
    loader::core::{LoadResult, load_values_from},
    symbols::core::{ArraySymbol, ScalarSymbol, SymbolTable},
};

/// An expression together with its tokens and symbols.
///
/// The text is tokenized once, on construction. The usual life cycle is
/// [`Expression::build_symbols`], then [`Expression::load_symbol_values`],
/// then any number of calls to [`Expression::evaluate`].
///
/// # Example
/// ```
/// use symeval::interpreter::expression::Expression;
///
/// let mut expression = Expression::new("a - (b + A[2]) * varx");
/// expression.build_symbols().unwrap();
/// expression.load_symbol_values("a 3\nb 2\nvarx 4\nA 5 (2,1)".as_bytes())
///           .unwrap();
///
/// assert_eq!(expression.evaluate().unwrap(), -9.0);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    text:    String,
    tokens:  Vec<Spanned>,
    symbols: SymbolTable,
}

impl Expression {
    /// Tokenizes `text`. The symbol table starts out empty.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        Self { text,
               tokens,
               symbols: SymbolTable::new() }
    }

    /// The expression text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Populates the symbol table with one entry per distinct name.
    ///
    /// Calling this again rebuilds the table from scratch, discarding loaded
    /// values.
    ///
    /// # Errors
    /// Returns an `EvalError` if a name is used both as a scalar and as an
    /// array.
    pub fn build_symbols(&mut self) -> EvalResult<()> {
        self.symbols = SymbolTable::from_tokens(&self.tokens)?;
        Ok(())
    }

    /// Loads symbol values from a line-oriented reader.
    ///
    /// # Errors
    /// Returns a `LoadError` for malformed lines, out-of-range array indices
    /// or read failures. Lines that failed are skipped and the rest are
    /// still applied.
    pub fn load_symbol_values<R: BufRead>(&mut self, reader: R) -> LoadResult<()> {
        load_values_from(&mut self.symbols, reader)
    }

    /// Evaluates the expression with the currently loaded values.
    ///
    /// # Errors
    /// Returns an `EvalError` if the expression is malformed or a subscript is
    /// out of range.
    pub fn evaluate(&self) -> EvalResult<f64> {
        Evaluator::new(&self.tokens, &self.symbols, self.text.len()).eval()
    }

    /// The symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Scalar symbols in discovery order.
    #[must_use]
    pub fn scalars(&self) -> &[ScalarSymbol] {
        self.symbols.scalars()
    }

    /// Array symbols in discovery order.
    #[must_use]
    pub fn arrays(&self) -> &[ArraySymbol] {
        self.symbols.arrays()
    }
}
