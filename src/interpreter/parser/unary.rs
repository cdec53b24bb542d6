use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{enter, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Unary operators are right-associative and may repeat, so `--x` is parsed
/// as `-(-x)`. A sign binds looser than `**`: `-2**2` is `-(2**2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_power(tokens, depth),
    };
    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let expr = parse_unary(tokens, enter(depth, *position)?)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position: *position })
}

/// Parses exponentiation expressions.
///
/// Handles exponentiation with right-associativity:
/// `a ** b ** c` parses as `a ** (b ** c)`. The exponent may carry its own
/// sign, so `2 ** -1` is accepted.
///
/// The rule is: `power := primary ("**" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, depth)?;
    if let Some((Token::DoubleStar, position)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, enter(depth, *position)?)?;
        return Ok(Expr::BinaryOp { left:     Box::new(base),
                                   op:       BinaryOperator::Pow,
                                   right:    Box::new(exponent),
                                   position: *position, });
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENT
///              | IDENT "(" (expression ("," expression)*)? ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(value), position) => {
            let expr = Expr::Number { value:    *value,
                                      position: *position, };
            tokens.next();
            Ok(expr)
        },
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, depth),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression one level deeper, and then requires a closing `)`. Failure to
/// find the closing parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let expr = parse_expression(tokens, enter(depth, *position)?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position: *position }),
    }
}

/// Parses an identifier or a function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// Whether the name exists is not checked here; the evaluator resolves it.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Identifier`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if argument parsing fails or the closing `)` is
/// missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    match tokens.peek() {
        Some((Token::LParen, open)) => {
            let open = *open;
            tokens.next();
            let inner = enter(depth, open)?;
            let arguments = parse_comma_separated(tokens,
                                                  |t| parse_expression(t, inner),
                                                  &Token::RParen,
                                                  open)?;
            Ok(Expr::Call { name,
                            arguments,
                            position })
        },
        _ => Ok(Expr::Identifier { name, position }),
    }
}
