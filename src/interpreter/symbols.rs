use std::{
    collections::HashMap,
    f64::consts::{E, PI, TAU},
    sync::LazyLock,
};

use crate::interpreter::evaluator::{
    core::EvalResult,
    function::builtin,
    utils::{factorial, gamma, lgamma},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated arguments and the byte offset of
/// the call, and returns the raw result. Finiteness of the result is checked
/// by the caller.
pub type BuiltinFn = fn(&[f64], usize) -> EvalResult<f64>;

/// Describes one callable name in the symbol table.
pub struct FunctionDef {
    /// Name as written in expressions.
    pub name:  &'static str,
    /// Exact number of arguments the function takes.
    pub arity: usize,
    /// Implementation.
    pub func:  BuiltinFn,
}

impl std::fmt::Debug for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table of [`FunctionDef`]),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"       => { arity: 1, func: builtin::sin },
    "cos"       => { arity: 1, func: builtin::cos },
    "tan"       => { arity: 1, func: builtin::tan },
    "asin"      => { arity: 1, func: builtin::asin },
    "acos"      => { arity: 1, func: builtin::acos },
    "atan"      => { arity: 1, func: builtin::atan },
    "sinh"      => { arity: 1, func: builtin::sinh },
    "cosh"      => { arity: 1, func: builtin::cosh },
    "tanh"      => { arity: 1, func: builtin::tanh },
    "log"       => { arity: 1, func: builtin::ln },
    "ln"        => { arity: 1, func: builtin::ln },
    "log10"     => { arity: 1, func: builtin::log10 },
    "sqrt"      => { arity: 1, func: builtin::sqrt },
    "pow"       => { arity: 2, func: builtin::pow },
    "exp"       => { arity: 1, func: builtin::exp },
    "fabs"      => { arity: 1, func: builtin::abs },
    "abs"       => { arity: 1, func: builtin::abs },
    "floor"     => { arity: 1, func: builtin::floor },
    "ceil"      => { arity: 1, func: builtin::ceil },
    "degrees"   => { arity: 1, func: builtin::degrees },
    "radians"   => { arity: 1, func: builtin::radians },
    "factorial" => { arity: 1, func: |args, position| factorial(args[0], position) },
    "gamma"     => { arity: 1, func: |args, position| gamma(args[0], position) },
    "lgamma"    => { arity: 1, func: |args, position| lgamma(args[0], position) },
}

/// Named constants available in every expression.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", PI),
                                        ("e", E),
                                        ("tau", TAU),
                                        ("inf", f64::INFINITY),
                                        ("nan", f64::NAN)];

/// What a name in the symbol table refers to.
#[derive(Debug, Clone, Copy)]
pub enum Symbol {
    /// A fixed real number.
    Constant(f64),
    /// A function with fixed arity.
    Function(&'static FunctionDef),
}

static GLOBAL: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::standard);

/// Immutable mapping from case-sensitive names to constants and functions.
///
/// The table is closed: evaluation can only reach what is listed here. It is
/// never mutated after construction, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<&'static str, Symbol>,
}

impl SymbolTable {
    /// Builds the standard table: every builtin function and every constant.
    #[must_use]
    pub fn standard() -> Self {
        let mut entries = HashMap::with_capacity(BUILTIN_TABLE.len() + CONSTANTS.len());
        for def in BUILTIN_TABLE {
            entries.insert(def.name, Symbol::Function(def));
        }
        for &(name, value) in CONSTANTS {
            entries.insert(name, Symbol::Constant(value));
        }
        Self { entries }
    }

    /// Returns the process-wide standard table, building it on first use.
    ///
    /// # Example
    /// ```
    /// use sciexpr::interpreter::symbols::SymbolTable;
    ///
    /// let table = SymbolTable::global();
    /// assert_eq!(table.function("pow").map(|f| f.arity), Some(2));
    /// assert_eq!(table.constant("pi"), Some(std::f64::consts::PI));
    /// ```
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Looks up any symbol by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.entries.get(name).copied()
    }

    /// Looks up a constant by name. Functions are not constants.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Symbol::Constant(value) => Some(value),
            Symbol::Function(_) => None,
        }
    }

    /// Looks up a function by name. Constants are not callable.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&'static FunctionDef> {
        match self.get(name)? {
            Symbol::Function(def) => Some(def),
            Symbol::Constant(_) => None,
        }
    }

    /// Returns every name in the table, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Reports whether `name` is one of the named constants.
#[must_use]
pub fn is_constant_name(name: &str) -> bool {
    CONSTANTS.iter().any(|(constant, _)| *constant == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_closed_and_case_sensitive() {
        let table = SymbolTable::standard();
        assert!(table.get("sin").is_some());
        assert!(table.get("SIN").is_none());
        assert!(table.get("__import__").is_none());
        assert_eq!(table.names().len(), BUILTIN_FUNCTIONS.len() + CONSTANTS.len());
    }

    #[test]
    fn constants_and_functions_do_not_overlap() {
        let table = SymbolTable::global();
        assert!(table.constant("sqrt").is_none());
        assert!(table.function("e").is_none());
        assert!(table.constant("nan").is_some_and(f64::is_nan));
    }

    #[test]
    fn only_pow_takes_two_arguments() {
        for name in BUILTIN_FUNCTIONS {
            let expected = if *name == "pow" { 2 } else { 1 };
            assert_eq!(SymbolTable::global().function(name).map(|f| f.arity),
                       Some(expected),
                       "{name}");
        }
    }

    #[test]
    fn global_table_is_shareable() {
        fn assert_sync<T: Send + Sync>(_: &T) {}
        assert_sync(SymbolTable::global());
    }
}
