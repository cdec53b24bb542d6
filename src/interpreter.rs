/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree, resolves names, applies operators and
/// builtin functions, and enforces the domain rules. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every node kind of the expression tree.
/// - Checks arity before calling builtins.
/// - Reports division by zero, domain errors and unknown names.
pub mod evaluator;
/// The lexer module tokenizes canonical expression text.
///
/// The lexer reads the text and produces a stream of tokens (numbers,
/// identifiers, operators and delimiters), each with its byte offset. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with source positions.
/// - Reports the first character that starts no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes following operator precedence.
/// - Rejects grammar violations, runaway nesting and oversized input.
pub mod parser;
/// The symbol table of constants and builtin functions.
///
/// # Responsibilities
/// - Declares every callable builtin with its arity.
/// - Declares the named constants.
/// - Provides the shared, immutable lookup table.
pub mod symbols;
