//! # sciexpr
//!
//! sciexpr is a scientific-expression evaluator written in Rust.
//! It rewrites human-typed expressions (`2^10`, `50%`, `5!!`, `6÷3×2`) into a
//! canonical form and evaluates that form to a single `f64`, with named
//! functions and constants, strict domain checking, and a typed error for
//! every way an evaluation can fail.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvaluationError, interpreter::evaluator::core::Evaluator};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// a canonical expression as a tree. The tree is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node type per grammar construct.
/// - Attaches the byte offset of each node's token for error reporting.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines every error that lexing, parsing or evaluating an
/// expression can raise, with the byte offset of the failure where there is
/// one.
///
/// # Responsibilities
/// - Defines `ParseError` for grammar violations.
/// - Defines `EvaluationError` and its payload-free `ErrorKind`.
/// - Implements `Display` and `std::error::Error` for both.
pub mod error;
/// Turns canonical text into a number.
///
/// This module ties together the lexer, the parser, the symbol table and the
/// evaluator.
///
/// # Responsibilities
/// - Tokenizes canonical text.
/// - Parses tokens into an expression tree with bounded nesting.
/// - Resolves names against a closed symbol table and computes the result.
pub mod interpreter;
/// Rewrites surface syntax into canonical text.
///
/// # Responsibilities
/// - Replaces operator glyphs and the caret exponent.
/// - Expands trailing percent on literals.
/// - Expands postfix factorial, including chained and parenthesized forms.
pub mod preprocessor;
/// General numeric and formatting helpers.
///
/// # Responsibilities
/// - Integrality checks and exact conversions on `f64`.
/// - Rendering results for display.
pub mod util;

pub use crate::{preprocessor::core::normalize, util::format::format_result};

/// Evaluates canonical expression text with the standard symbol table.
///
/// The text must already be in canonical form; surface syntax such as `^`,
/// `%` or `!` is a syntax error here. Use [`evaluate_expression`] for raw
/// input.
///
/// # Errors
/// Returns an [`EvaluationError`] describing the first failure.
///
/// # Examples
/// ```
/// use sciexpr::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2 ** 10"), Ok(1024.0));
/// assert_eq!(evaluate("2^10").unwrap_err().kind(), ErrorKind::SyntaxError);
/// ```
pub fn evaluate(text: &str) -> Result<f64, EvaluationError> {
    Evaluator::default().evaluate(text)
}

/// Normalizes raw expression text and evaluates it.
///
/// This is the whole pipeline: [`normalize`] followed by [`evaluate`].
///
/// # Errors
/// Returns an [`EvaluationError`] describing the first failure. Blank input
/// is `EmptyExpression`.
///
/// # Examples
/// ```
/// use sciexpr::{error::ErrorKind, evaluate_expression};
///
/// assert_eq!(evaluate_expression("2^10"), Ok(1024.0));
/// assert_eq!(evaluate_expression("(2+3)!"), Ok(120.0));
/// assert_eq!(evaluate_expression("1+50%"), Ok(1.5));
///
/// let err = evaluate_expression("foo(1)").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownName);
/// ```
pub fn evaluate_expression(text: &str) -> Result<f64, EvaluationError> {
    evaluate(&normalize(text))
}
