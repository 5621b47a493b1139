/// Values-file loading.
///
/// Reads `name value` and `name length (index,value) ...` lines and writes
/// them into a symbol table.
pub mod core;

/// Tokens of a single values-file line.
///
/// Numbers, names and the punctuation of `(index,value)` pairs.
pub mod lexer;
