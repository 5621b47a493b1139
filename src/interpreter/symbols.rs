/// Symbol types and the symbol table.
///
/// Declares scalar and array symbols and the table that owns them, with
/// lookups by name and the zero-default reads used during evaluation.
pub mod core;

/// Symbol discovery.
///
/// Walks a token stream once and registers every name it finds, classifying
/// names followed by `[` as arrays and everything else as scalars.
pub mod discover;
