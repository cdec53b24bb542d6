use crate::{
    ast::BinaryOperator,
    error::EvaluationError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::ensure_finite,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Division by zero is reported as `DivisionByZero` whatever the
    /// dividend. A non-finite result from finite operands (overflow, `0 **
    /// -1`, a negative base with a fractional exponent) is a `DomainError`;
    /// non-finite operands, which only come from `inf` and `nan`, propagate
    /// per IEEE 754.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{
    ///     ast::BinaryOperator,
    ///     error::EvaluationError,
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Pow, 2.0, 10.0, 1).unwrap();
    /// assert_eq!(result, 1024.0);
    ///
    /// let err = Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).unwrap_err();
    /// assert_eq!(err, EvaluationError::DivisionByZero { position: 1 });
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let result = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(EvaluationError::DivisionByZero { position });
                }
                left / right
            },
            Pow => left.powf(right),
        };

        ensure_finite(&[left, right], result, position, || {
            format!("{left} {op} {right} has no finite real result")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind(op: BinaryOperator, left: f64, right: f64) -> Option<ErrorKind> {
        Evaluator::eval_binary(op, left, right, 0).err()
                                                  .map(|e| e.kind())
    }

    #[test]
    fn division_by_either_zero_is_rejected() {
        assert_eq!(kind(BinaryOperator::Div, 1.0, 0.0), Some(ErrorKind::DivisionByZero));
        assert_eq!(kind(BinaryOperator::Div, 0.0, -0.0), Some(ErrorKind::DivisionByZero));
        assert_eq!(kind(BinaryOperator::Div, f64::INFINITY, 0.0),
                   Some(ErrorKind::DivisionByZero));
    }

    #[test]
    fn undefined_powers_are_domain_errors() {
        assert_eq!(kind(BinaryOperator::Pow, 0.0, -1.0), Some(ErrorKind::DomainError));
        assert_eq!(kind(BinaryOperator::Pow, -8.0, 1.0 / 3.0), Some(ErrorKind::DomainError));
        assert_eq!(kind(BinaryOperator::Pow, 10.0, 400.0), Some(ErrorKind::DomainError));
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Pow, -2.0, 3.0, 0), Ok(-8.0));
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Pow, 0.0, 0.0, 0), Ok(1.0));
    }

    #[test]
    fn overflow_is_a_domain_error() {
        assert_eq!(kind(BinaryOperator::Mul, 1e200, 1e200), Some(ErrorKind::DomainError));
        assert_eq!(kind(BinaryOperator::Add, f64::MAX, f64::MAX), Some(ErrorKind::DomainError));
    }

    #[test]
    fn explicit_infinities_propagate() {
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Add, f64::INFINITY, 1.0, 0),
                   Ok(f64::INFINITY));
        assert!(Evaluator::eval_binary(BinaryOperator::Sub, f64::INFINITY, f64::INFINITY, 0)
                .unwrap()
                .is_nan());
    }
}
