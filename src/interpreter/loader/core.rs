use std::io::BufRead;

use log::{debug, warn};

use crate::{
    error::LoadError,
    interpreter::{
        loader::lexer::{ValueToken, tokenize_line},
        symbols::core::{SymbolKind, SymbolTable},
    },
    util::num::{i64_to_f64_checked, i64_to_usize_checked},
};

/// Result type used by the values loader.
pub type LoadResult<T> = Result<T, LoadError>;

/// Largest array length a values line may declare.
pub const MAX_ARRAY_LENGTH: usize = 1 << 24;

/// Loads symbol values from a string, one symbol per line.
///
/// See [`load_values_from`] for the line format.
///
/// # Errors
/// Returns a `LoadError` describing the lines that failed; every other line
/// is applied.
///
/// # Example
/// ```
/// use symeval::interpreter::{loader::core::load_values, symbols::discover::discover_symbols};
///
/// let mut table = discover_symbols("x + A[1]").unwrap();
/// load_values(&mut table, "x 7\nA 3 (0,1) (1,2)\nunused 9").unwrap();
///
/// assert_eq!(table.scalar_value("x"), 7.0);
/// assert_eq!(table.array("A").unwrap().values, Some(vec![1.0, 2.0, 0.0]));
/// ```
pub fn load_values(symbols: &mut SymbolTable, source: &str) -> LoadResult<()> {
    load_values_from(symbols, source.as_bytes())
}

/// Loads symbol values from a line-oriented reader.
///
/// Each non-blank line is one of:
/// - `name value`: sets a scalar.
/// - `name length (index,value) (index,value) ...`: allocates an array of
///   `length` zeros and sets the listed cells. Whitespace around the pair
///   punctuation is allowed.
///
/// Lines for names that are not in the table are skipped. A later line for
/// the same name replaces the earlier one.
///
/// A line that fails leaves the table untouched and loading continues with
/// the next line. The failures are reported together once the source is
/// exhausted.
///
/// # Errors
/// - [`LoadError::MalformedValueLine`] if a line does not have one of the
///   shapes above, a number cannot be parsed, or the declared length exceeds
///   [`MAX_ARRAY_LENGTH`] or cannot be allocated.
/// - [`LoadError::IndexOutOfRange`] if a pair writes outside the declared
///   length.
/// - [`LoadError::Io`] if the reader fails. Reading stops there.
/// - [`LoadError::Lines`] if more than one of the above occurred.
pub fn load_values_from<R: BufRead>(symbols: &mut SymbolTable, reader: R) -> LoadResult<()> {
    let mut errors = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_number = i + 1;
        let text = match line {
            Ok(text) => text,
            Err(source) => {
                errors.push(LoadError::Io { source,
                                            line: line_number });
                break;
            },
        };

        if let Err(e) = load_line(symbols, &text, line_number) {
            warn!("skipping line {line_number}: {e}");
            errors.push(e);
        }
    }

    LoadError::from_errors(errors)
}

/// Applies a single values line to the table.
///
/// Lines whose first word is not a known symbol are skipped before the rest
/// of the line is looked at.
fn load_line(symbols: &mut SymbolTable, text: &str, line: usize) -> LoadResult<()> {
    let Some(word) = text.split_whitespace().next() else {
        return Ok(());
    };

    let Some(kind) = symbols.kind_of(word) else {
        debug!("line {line}: skipping values for unknown symbol '{word}'");
        return Ok(());
    };

    let tokens = tokenize_line(text).map_err(|slice| {
                                        malformed(format!("unexpected '{slice}'"), line)
                                    })?;

    let (name, rest) = match tokens.split_first() {
        Some((ValueToken::Name(name), rest)) if name == word => (name, rest),
        _ => return Err(malformed(format!("expected the line to start with '{word}'"), line)),
    };

    match kind {
        SymbolKind::Scalar => {
            let value = match rest {
                [value] => number(value, line)?,
                _ => {
                    return Err(malformed(format!("scalar '{name}' takes exactly one value"),
                                         line));
                },
            };
            if let Some(scalar) = symbols.scalar_mut(name) {
                debug!("line {line}: {name} = {value}");
                scalar.value = value;
            }
            Ok(())
        },
        SymbolKind::Array => {
            let (length, cells) = parse_array(name, rest, line)?;
            if let Some(array) = symbols.array_mut(name) {
                debug!("line {line}: allocating {name} with length {length}");
                array.allocate(length).map_err(|e| {
                                           malformed(format!("cannot allocate '{name}' with length {length}: {e}"),
                                                     line)
                                       })?;
                if let Some(values) = array.values.as_mut() {
                    for (index, value) in cells {
                        values[index] = value;
                    }
                }
            }
            Ok(())
        },
    }
}

/// Parses `length (index,value) ...` and checks every index against
/// `length`.
///
/// Nothing is written until the whole line is known to be valid.
fn parse_array(name: &str,
               tokens: &[ValueToken],
               line: usize)
               -> LoadResult<(usize, Vec<(usize, f64)>)> {
    let Some((first, mut rest)) = tokens.split_first() else {
        return Err(malformed(format!("array '{name}' is missing its length"), line));
    };

    let length = match first {
        ValueToken::Integer(n) => i64_to_usize_checked(*n, || {
                                      malformed(format!("array '{name}' has negative length {n}"),
                                                line)
                                  })?,
        other => {
            return Err(malformed(format!("array length must be an integer but found '{other}'"),
                                 line));
        },
    };
    if length > MAX_ARRAY_LENGTH {
        return Err(malformed(format!("array '{name}' declares length {length}, above the limit of {MAX_ARRAY_LENGTH}"),
                             line));
    }

    let mut cells = Vec::new();
    while !rest.is_empty() {
        let [ValueToken::LParen, index, ValueToken::Comma, value, ValueToken::RParen, tail @ ..] =
            rest
        else {
            return Err(malformed(format!("expected '(index,value)' pairs after the length of '{name}'"),
                                 line));
        };

        let ValueToken::Integer(index) = index else {
            return Err(malformed(format!("array index must be an integer but found '{index}'"),
                                 line));
        };

        let out_of_range = || LoadError::IndexOutOfRange { name: name.to_string(),
                                                           index: *index,
                                                           length,
                                                           line };
        let slot = i64_to_usize_checked(*index, out_of_range)?;
        if slot >= length {
            return Err(out_of_range());
        }

        cells.push((slot, number(value, line)?));
        rest = tail;
    }

    Ok((length, cells))
}

/// Reads a numeric token as `f64`.
fn number(token: &ValueToken, line: usize) -> LoadResult<f64> {
    match token {
        ValueToken::Real(value) => Ok(*value),
        ValueToken::Integer(value) => {
            i64_to_f64_checked(*value, || {
                malformed(format!("{value} is too large to represent exactly"), line)
            })
        },
        other => Err(malformed(format!("expected a number but found '{other}'"), line)),
    }
}

const fn malformed(details: String, line: usize) -> LoadError {
    LoadError::MalformedValueLine { details, line }
}
