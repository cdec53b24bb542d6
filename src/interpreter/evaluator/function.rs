/// Built-in function implementations.
///
/// Contains the single-valued real functions reachable from expressions.
pub mod builtin;

/// Call-site resolution and dispatch.
pub mod core;
