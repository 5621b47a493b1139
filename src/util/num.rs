/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Lower bound (inclusive) of the `f64` range that fits in an `i64`.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
/// Upper bound (exclusive) of the `f64` range that fits in an `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns the error produced by `error` if the value exceeds
/// `MAX_SAFE_U64_INT` in absolute value.
///
/// ## Example
/// ```
/// use symeval::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, || "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, || "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: impl FnOnce() -> E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error());
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero and converts it to an `i64`.
///
/// Fractional parts are discarded, so `2.9` becomes `2` and `-0.5` becomes
/// `0`.
///
/// ## Errors
/// Returns the error produced by `error` for NaN, infinite values and values
/// whose integer part does not fit in an `i64`.
///
/// ## Example
/// ```
/// use symeval::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9, || ()), Ok(2));
/// assert_eq!(f64_to_i64_truncated(-1.5, || ()), Ok(-1));
/// assert!(f64_to_i64_truncated(f64::NAN, || ()).is_err());
/// assert!(f64_to_i64_truncated(f64::INFINITY, || ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated<E>(value: f64, error: impl FnOnce() -> E) -> Result<i64, E> {
    let truncated = value.trunc();
    if !truncated.is_finite() || !(I64_LOWER..I64_UPPER).contains(&truncated) {
        return Err(error());
    }
    Ok(truncated as i64)
}

/// Safely converts an `i64` to `usize`.
///
/// ## Errors
/// Returns the error produced by `error` if the value is negative or does not
/// fit in a `usize` on the current platform.
///
/// ## Example
/// ```
/// use symeval::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(7, || "negative"), Ok(7));
/// assert_eq!(i64_to_usize_checked(-1, || "negative"), Err("negative"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: impl FnOnce() -> E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error())
}
