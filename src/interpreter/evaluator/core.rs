use crate::{
    ast::Expr,
    error::EvaluationError,
    interpreter::{lexer::tokenize, parser::core::parse_tokens, symbols::SymbolTable},
    util::num::normalize_zero,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Evaluates canonical expression text against a symbol table.
///
/// ## Usage
///
/// An `Evaluator` only borrows its table and holds no other state, so one
/// instance (or many) can serve any number of calls, from any number of
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'s> {
    /// The names this evaluator can resolve.
    pub symbols: &'s SymbolTable,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(SymbolTable::global())
    }
}

impl<'s> Evaluator<'s> {
    /// Creates an evaluator over `symbols`.
    #[must_use]
    pub const fn new(symbols: &'s SymbolTable) -> Self {
        Self { symbols }
    }

    /// Lexes, parses and evaluates canonical text.
    ///
    /// Blank text is reported as `EmptyExpression`. A result of negative zero
    /// is returned as positive zero.
    ///
    /// # Errors
    /// Any [`EvaluationError`]; the first failure ends the evaluation.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{error::EvaluationError, interpreter::evaluator::core::Evaluator};
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.evaluate("2 ** 10"), Ok(1024.0));
    /// assert_eq!(evaluator.evaluate("   "), Err(EvaluationError::EmptyExpression));
    /// ```
    pub fn evaluate(&self, text: &str) -> EvalResult<f64> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EvaluationError::EmptyExpression);
        }

        let tokens = tokenize(text)?;
        let expr = parse_tokens(&tokens)?;
        let value = self.eval(&expr)?;

        log::debug!("evaluated {text:?} to {value}");
        Ok(normalize_zero(value))
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// Chains of left-associative operators are walked iteratively along the
    /// left spine, so recursion depth follows the nesting of groups, calls
    /// and right operands only.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, position } if !value.is_finite() => {
                Err(EvaluationError::domain("numeric literal is too large to represent", *position))
            }
            Expr::Number { value, .. } => Ok(*value),
            Expr::Identifier { name, position } => self.eval_identifier(name, *position),
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, self.eval(expr)?)),
            Expr::BinaryOp { .. } => self.eval_binary_chain(expr),
            Expr::Call { name,
                         arguments,
                         position, } => self.eval_call(name, arguments, *position),
        }
    }

    /// Resolves a bare identifier to a constant.
    ///
    /// Function names are not values, so they are as unknown here as any
    /// name missing from the table.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{error::ErrorKind, interpreter::evaluator::core::Evaluator};
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.eval_identifier("tau", 0), Ok(std::f64::consts::TAU));
    /// assert_eq!(evaluator.eval_identifier("sin", 0).unwrap_err().kind(),
    ///            ErrorKind::UnknownName);
    /// ```
    pub fn eval_identifier(&self, name: &str, position: usize) -> EvalResult<f64> {
        self.symbols
            .constant(name)
            .ok_or_else(|| EvaluationError::UnknownName { name: name.to_owned(),
                                                          position })
    }

    fn eval_binary_chain(&self, expr: &Expr) -> EvalResult<f64> {
        let mut spine = Vec::new();
        let mut node = expr;
        while let Expr::BinaryOp { left,
                                   op,
                                   right,
                                   position, } = node
        {
            spine.push((*op, right, *position));
            node = left.as_ref();
        }

        let mut acc = self.eval(node)?;
        for (op, right, position) in spine.into_iter().rev() {
            let rhs = self.eval(right)?;
            acc = Self::eval_binary(op, acc, rhs, position)?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ParseError};

    fn eval(text: &str) -> EvalResult<f64> {
        Evaluator::default().evaluate(text)
    }

    #[test]
    fn arithmetic_follows_precedence() {
        assert_eq!(eval("1 + 2 * 3"), Ok(7.0));
        assert_eq!(eval("(1 + 2) * 3"), Ok(9.0));
        assert_eq!(eval("2 ** 3 ** 2"), Ok(512.0));
        assert_eq!(eval("-2 ** 2"), Ok(-4.0));
        assert_eq!(eval("2 ** -1"), Ok(0.5));
        assert_eq!(eval("10 - 4 - 3"), Ok(3.0));
        assert_eq!(eval("64 / 4 / 2"), Ok(8.0));
    }

    #[test]
    fn negative_zero_is_normalized() {
        let value = eval("-0").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
        assert!(eval("0 * -1").unwrap().is_sign_positive());
    }

    #[test]
    fn long_chains_do_not_recurse() {
        let text = vec!["1"; 4000].join("+");
        assert_eq!(eval(&text), Ok(4000.0));
    }

    #[test]
    fn oversized_literals_are_domain_errors() {
        assert_eq!(eval("1e400"),
                   Err(EvaluationError::DomainError { details:  "numeric literal is too large to represent".into(),
                                                      position: 0, }));
        assert!(matches!(eval("sin(1e400)"), Err(EvaluationError::DomainError { position: 4, .. })));
        assert_eq!(eval("1 - 1e400").unwrap_err().kind(), ErrorKind::DomainError);
        assert_eq!(eval(&"9".repeat(400)).unwrap_err().kind(), ErrorKind::DomainError);
        assert_eq!(eval("1e-400"), Ok(0.0));
    }

    #[test]
    fn names_resolve_at_evaluation() {
        assert_eq!(eval("pi"), Ok(std::f64::consts::PI));
        assert_eq!(eval("undefined_name").unwrap_err().kind(), ErrorKind::UnknownName);
        assert_eq!(eval("sqrt + 1").unwrap_err().kind(), ErrorKind::UnknownName);
    }

    #[test]
    fn syntax_errors_are_wrapped() {
        assert_eq!(eval("1 +"),
                   Err(EvaluationError::Syntax(ParseError::UnexpectedEndOfInput)));
        assert_eq!(eval("4!").unwrap_err().kind(), ErrorKind::SyntaxError);
    }

    #[test]
    fn evaluator_borrows_any_table() {
        let table = SymbolTable::standard();
        let evaluator = Evaluator::new(&table);
        assert_eq!(evaluator.evaluate("e ** 0"), Ok(1.0));
    }
}
