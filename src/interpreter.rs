/// The bracket matcher pairs opening and closing brackets.
///
/// Given a span of tokens or characters and a bracket kind, it finds the
/// first opening bracket and the bracket that closes it, allowing nesting of
/// the same kind.
pub mod brackets;
/// The evaluator computes the value of an expression.
///
/// It walks the token stream with an operator stack and an operand stack,
/// resolves names through the symbol table and recurses into parenthesized
/// groups and array subscripts.
///
/// # Responsibilities
/// - Applies `* /` before `+ -`, left to right within each level.
/// - Resolves scalar and array references, with zero defaults.
/// - Reports structural errors such as unbalanced brackets or out-of-range
///   subscripts.
pub mod evaluator;
/// The expression object ties text, tokens and symbols together.
pub mod expression;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces numbers, names, operators and
/// brackets, each with its byte offset. Spaces and tabs only separate tokens.
pub mod lexer;
/// The loader module fills a symbol table from a values source.
///
/// # Responsibilities
/// - Parses scalar lines (`name value`) and array lines
///   (`name length (index,value) ...`).
/// - Skips lines for names the expression does not use.
/// - Reports malformed lines and out-of-range indices with their line number.
pub mod loader;
/// The symbols module holds the scalar and array symbols of an expression.
///
/// Symbols are discovered from the expression text and later receive their
/// values from the loader.
pub mod symbols;
