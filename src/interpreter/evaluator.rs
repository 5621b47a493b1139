/// Core evaluation logic.
///
/// Contains the evaluator that walks a token span with an operator stack and
/// an operand stack, the recursion into bracketed sub-spans, and the public
/// `evaluate` entry point.
pub mod core;

/// Binary operator handling.
///
/// Maps operator tokens to operators and defines their precedence,
/// associativity and arithmetic.
pub mod operator;
