/// Evaluation errors.
///
/// Defines every error that can be raised while discovering symbols in an
/// expression or evaluating it: unbalanced brackets, out-of-range subscripts,
/// misplaced tokens and empty sub-expressions.
pub mod eval_error;
/// Values-file errors.
///
/// Contains the errors raised while loading symbol values from a line-oriented
/// source: malformed lines, out-of-range array indices and failed reads.
pub mod load_error;

pub use eval_error::EvalError;
pub use load_error::LoadError;
