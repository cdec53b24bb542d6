/// Parser entry points and shared parser types.
///
/// Holds the `ParseResult` alias, the nesting limit, and `parse_tokens`, which
/// parses a complete token stream and rejects trailing tokens.
pub mod core;

/// Prefix operators, exponentiation, and atoms.
///
/// Parses unary sign, the right-associative `**` operator, literals,
/// identifiers, calls, and parenthesized groups.
pub mod unary;

/// Left-associative binary operators.
///
/// Parses the additive (`+`, `-`) and multiplicative (`*`, `/`) levels.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and the depth guard.
pub mod utils;
