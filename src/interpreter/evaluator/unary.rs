use crate::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Plus`: identity.
    ///
    /// Neither can fail or turn a finite value into a non-finite one.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, 5.0), 5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
            UnaryOperator::Plus => value,
        }
    }
}
