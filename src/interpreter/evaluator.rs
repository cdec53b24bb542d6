/// Binary operator evaluation logic.
///
/// Handles `+ - * / **` on `f64`, including the division-by-zero and
/// finiteness checks.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix negation and identity.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, the tree walk, and the `EvalResult` alias.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides arity checks, the finiteness rule, and the factorial and gamma
/// computations.
pub mod utils;

mod factorial_table;

/// Function evaluation.
///
/// Resolves call sites against the symbol table, validates arity, and runs
/// builtins.
pub mod function;
