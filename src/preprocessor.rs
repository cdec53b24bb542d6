/// Entry point of the rewrite pipeline.
///
/// Holds `normalize`, which trims the input and applies the glyph, percent
/// and factorial rewrites in order.
pub mod core;

/// Trailing-percent rewrite.
///
/// Turns a numeric literal followed by `%` into a division by one hundred.
pub mod percent;

/// Postfix factorial rewrites.
///
/// Expands `!` after literals, constant names and parenthesized groups into
/// calls to `factorial`.
pub mod factorial;

/// Byte-level scanning shared by the rewrites.
///
/// Splits text into literals, words and single bytes using the same literal
/// and identifier rules as the lexer.
pub mod utils;
