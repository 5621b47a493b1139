use std::ops::Range;

use log::trace;

use crate::{
    error::EvalError,
    interpreter::{
        brackets::{BracketKind, match_closing},
        evaluator::operator::Operator,
        lexer::{Spanned, Token, tokenize},
        symbols::core::SymbolTable,
    },
    util::num::{f64_to_i64_truncated, i64_to_usize_checked},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Deepest nesting of parenthesized groups and subscripts the evaluator
/// accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Evaluates a tokenized expression against a symbol table.
///
/// The evaluator never copies or re-tokenizes text: parenthesized groups and
/// array subscripts are evaluated as index ranges over the same token slice,
/// each with its own operator and operand stacks.
///
/// ## Usage
///
/// An `Evaluator` borrows its tokens and symbols, so any number of them may
/// run at once against one loaded table.
pub struct Evaluator<'a> {
    tokens:     &'a [Spanned],
    symbols:    &'a SymbolTable,
    /// Byte offset reported for errors found after the last token.
    end_offset: usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `tokens`, which were produced from a source
    /// text of `source_len` bytes.
    #[must_use]
    pub const fn new(tokens: &'a [Spanned], symbols: &'a SymbolTable, source_len: usize) -> Self {
        Self { tokens,
               symbols,
               end_offset: source_len }
    }

    /// Evaluates the whole token stream.
    ///
    /// # Errors
    /// Returns an `EvalError` if the expression is empty, has unbalanced
    /// brackets, misplaced tokens or an out-of-range subscript.
    pub fn eval(&self) -> EvalResult<f64> {
        self.eval_span(0..self.tokens.len())
    }

    /// Evaluates the tokens in `span` to a single number.
    ///
    /// Operands and operators must alternate, starting and ending with an
    /// operand. Each operand is a literal, a scalar, a subscripted array or a
    /// parenthesized group; the latter two recurse into their inner span.
    ///
    /// Before an operator is pushed, every operator on the stack that binds at
    /// least as tightly is applied, which yields the usual precedence with
    /// left-to-right evaluation inside each precedence level. The remaining
    /// operators are applied from the top of the stack once the span is
    /// exhausted.
    ///
    /// # Parameters
    /// - `span`: Index range into the token slice.
    ///
    /// # Returns
    /// The value of the span.
    pub fn eval_span(&self, span: Range<usize>) -> EvalResult<f64> {
        self.eval_nested(span, 0)
    }

    /// Evaluates `span`, which sits inside `depth` enclosing groups or
    /// subscripts.
    fn eval_nested(&self, span: Range<usize>, depth: usize) -> EvalResult<f64> {
        if span.is_empty() {
            return Err(EvalError::EmptyExpression { position: self.position_at(span.start) });
        }

        let mut operators: Vec<Operator> = Vec::new();
        let mut operands: Vec<f64> = Vec::new();
        let mut cursor = span.start;
        let mut expect_operand = true;

        while cursor < span.end {
            if expect_operand {
                let (value, next) = self.eval_operand(cursor, span.end, depth)?;
                trace!("push operand {value}");
                operands.push(value);
                cursor = next;
                expect_operand = false;
                continue;
            }

            let (token, position) = &self.tokens[cursor];
            let Some(op) = Operator::from_token(token) else {
                return Err(Self::misplaced(token, *position));
            };

            while let Some(&top) = operators.last()
                  && top.reduces_before(op)
            {
                Self::apply_top(&mut operators, &mut operands, *position)?;
            }

            trace!("push operator {op}");
            operators.push(op);
            cursor += 1;
            expect_operand = true;
        }

        if expect_operand {
            return Err(EvalError::MissingOperand { position: self.position_at(span.end) });
        }

        while !operators.is_empty() {
            Self::apply_top(&mut operators, &mut operands, self.position_at(span.end))?;
        }

        operands.pop()
                .ok_or(EvalError::MissingOperand { position: self.position_at(span.end) })
    }

    /// Evaluates the operand starting at `cursor`.
    ///
    /// # Returns
    /// The operand's value and the index of the first token after it.
    fn eval_operand(&self, cursor: usize, end: usize, depth: usize) -> EvalResult<(f64, usize)> {
        let (token, position) = &self.tokens[cursor];

        match token {
            Token::Number(value) => Ok((*value, cursor + 1)),

            Token::Identifier(name) => {
                if let Some((Token::LBracket, _)) = self.tokens[..end].get(cursor + 1) {
                    self.eval_subscript(name, cursor, end, depth)
                } else {
                    Ok((self.symbols.scalar_value(name), cursor + 1))
                }
            },

            Token::LParen => {
                let depth = Self::enter(depth, *position)?;
                let (_, close) = match_closing(&self.tokens[cursor..end], BracketKind::Paren)?;
                let close = cursor + close;
                let value = self.eval_nested(cursor + 1..close, depth)?;
                Ok((value, close + 1))
            },

            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                Err(EvalError::MissingOperand { position: *position })
            },

            _ => Err(Self::misplaced(token, *position)),
        }
    }

    /// Evaluates `name[...]`, where `cursor` points at `name`.
    ///
    /// The subscript is truncated toward zero. Arrays that were never loaded
    /// read `0` at every non-negative index.
    fn eval_subscript(&self,
                      name: &str,
                      cursor: usize,
                      end: usize,
                      depth: usize)
                      -> EvalResult<(f64, usize)> {
        let position = self.tokens[cursor].1;
        let bracket = cursor + 1;
        let depth = Self::enter(depth, self.tokens[bracket].1)?;

        let (_, close) = match_closing(&self.tokens[bracket..end], BracketKind::Square)?;
        let close = bracket + close;
        let subscript = self.eval_nested(bracket + 1..close, depth)?;

        let index =
            f64_to_i64_truncated(subscript, || EvalError::InvalidIndex { name: name.to_string(),
                                                                          value: subscript,
                                                                          position })?;

        let array = self.symbols.array(name);
        let length = array.and_then(|a| a.len());
        let out_of_range = || EvalError::IndexOutOfRange { name: name.to_string(),
                                                           index,
                                                           length,
                                                           position };

        let slot = i64_to_usize_checked(index, out_of_range)?;
        let value = match array {
            Some(array) => array.get(slot).ok_or_else(out_of_range)?,
            None => 0.0,
        };

        trace!("{name}[{index}] = {value}");
        Ok((value, close + 1))
    }

    /// Depth of a group opened at `position` inside `depth` others.
    const fn enter(depth: usize, position: usize) -> EvalResult<usize> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(EvalError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                   position });
        }
        Ok(depth + 1)
    }

    /// Pops one operator and its two operands and pushes `left OP right`.
    fn apply_top(operators: &mut Vec<Operator>,
                 operands: &mut Vec<f64>,
                 position: usize)
                 -> EvalResult<()> {
        let op = operators.pop().ok_or(EvalError::MissingOperand { position })?;
        let right = operands.pop().ok_or(EvalError::MissingOperand { position })?;
        let left = operands.pop().ok_or(EvalError::MissingOperand { position })?;

        let result = op.apply(left, right);
        trace!("apply {left} {op} {right} = {result}");
        operands.push(result);
        Ok(())
    }

    /// Error for a token that cannot appear where it was found.
    fn misplaced(token: &Token, position: usize) -> EvalError {
        match token {
            Token::RParen => EvalError::UnbalancedBrackets { bracket: ')',
                                                             position },
            Token::RBracket => EvalError::UnbalancedBrackets { bracket: ']',
                                                               position },
            _ => EvalError::UnexpectedToken { token: token.to_string(),
                                              position },
        }
    }

    /// Byte offset of the token at `index`, or the end of the source.
    fn position_at(&self, index: usize) -> usize {
        self.tokens.get(index).map_or(self.end_offset, |(_, position)| *position)
    }
}

/// Evaluates an expression against a loaded symbol table.
///
/// Names missing from the table read `0`, as do cells of arrays that were
/// never loaded.
///
/// # Errors
/// Returns an `EvalError` for unbalanced brackets, misplaced or unrecognized
/// tokens, empty groups and out-of-range subscripts. Division by zero is not
/// an error.
///
/// # Example
/// ```
/// use symeval::interpreter::{
///     evaluator::core::evaluate, loader::core::load_values, symbols::discover::discover_symbols,
/// };
///
/// let text = "(a + A[a]) * 2";
/// let mut table = discover_symbols(text).unwrap();
/// load_values(&mut table, "a 1\nA 3 (0,10) (1,20) (2,30)").unwrap();
///
/// assert_eq!(evaluate(text, &table).unwrap(), 42.0);
/// assert_eq!(evaluate("2+3*4", &table).unwrap(), 14.0);
/// ```
pub fn evaluate(source: &str, symbols: &SymbolTable) -> EvalResult<f64> {
    let tokens = tokenize(source);
    Evaluator::new(&tokens, symbols, source.len()).eval()
}
