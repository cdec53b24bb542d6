use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of groups, calls, sign chains and power chains.
///
/// Bounds the parser's (and the evaluator's) recursion on pathological input
/// such as thousands of nested parentheses.
pub const MAX_DEPTH: usize = 128;

/// Maximum number of tokens in one expression.
pub const MAX_TOKENS: usize = 10_000;

/// Parses a full expression.
///
/// This is the entry point for expression parsing at any nesting level. It
/// begins at the lowest-precedence level, addition, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Parses a complete token stream into a single expression.
///
/// After the expression, the stream must be exhausted.
///
/// # Errors
/// - `TooManyTokens` if the stream is longer than [`MAX_TOKENS`].
/// - `UnexpectedEndOfInput` for an empty stream or a dangling operator.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression, such
///   as an unmatched `)`.
/// - Any other grammar violation found while descending.
///
/// # Example
/// ```
/// use sciexpr::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("1 + 2").unwrap();
/// let expr = parse_tokens(&tokens).unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::TooManyTokens { limit: MAX_TOKENS });
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some((tok, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}
