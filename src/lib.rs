//! # symeval
//!
//! symeval evaluates arithmetic expressions over scalar and array symbols.
//! Expressions combine numeric literals, scalar names and subscripted array
//! names with `+ - * /` and parentheses; the values of the names come from a
//! line-oriented values file.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::cargo_common_metadata)]

/// Provides unified error types for evaluation and value loading.
///
/// This module defines all errors that can be raised while discovering
/// symbols, evaluating expressions or loading values. Evaluation errors carry
/// the byte offset of the offending token; loading errors carry the line
/// number in the values source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (evaluation, loading).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates expression evaluation.
///
/// This module ties together tokenizing, symbol discovery, value loading,
/// bracket matching and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, symbol table, loader, bracket
///   matcher and evaluator.
/// - Provides entry points for evaluating expressions.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

pub use crate::{
    error::{EvalError, LoadError},
    interpreter::{
        brackets::{BracketKind, match_closing, match_closing_in_text},
        evaluator::core::evaluate,
        expression::Expression,
        loader::core::{load_values, load_values_from},
        symbols::{
            core::{ArraySymbol, ScalarSymbol, SymbolTable},
            discover::discover_symbols,
        },
    },
};

/// Evaluates an expression, optionally loading symbol values first.
///
/// Symbols are discovered from `expression`, loaded from `values` when given,
/// and the expression is then evaluated. Names without a value read `0`.
///
/// # Errors
/// Returns an error if symbol discovery, value loading or evaluation fails.
///
/// # Examples
/// ```
/// use symeval::get_result;
///
/// assert_eq!(get_result("2 + 3 * 4", None).unwrap(), 14.0);
/// assert_eq!(get_result("x * A[1 + 1]", Some("x 2\nA 3 (2,5)")).unwrap(),
///            10.0);
///
/// // Unbalanced parentheses are reported rather than guessed at.
/// assert!(get_result("(1 + 2", None).is_err());
/// ```
pub fn get_result(expression: &str, values: Option<&str>) -> Result<f64, Box<dyn std::error::Error>> {
    let mut expression = Expression::new(expression);
    expression.build_symbols()?;

    if let Some(values) = values {
        expression.load_symbol_values(values.as_bytes())?;
    }

    Ok(expression.evaluate()?)
}
