/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing canonical
/// expression text. Parse errors include unexpected characters, unbalanced
/// parentheses, trailing tokens and runaway nesting, all detected before
/// evaluation starts.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error taxonomy surfaced to callers of the evaluator: empty
/// input, syntax errors, unknown names, arity mismatches, domain errors and
/// division by zero.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvaluationError};
pub use parse_error::ParseError;
