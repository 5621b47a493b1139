/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. Array subscripts
/// and values-file literals pass through these helpers on their way between
/// `f64`, `i64` and `usize`.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or the caller-supplied error otherwise.
pub mod num;
