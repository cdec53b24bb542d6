use crate::{
    ast::Expr,
    error::EvaluationError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::{check_arity, ensure_finite},
    },
};

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The name must resolve to a function in the symbol table, and the
    /// argument count must match its arity. Both checks happen before any
    /// argument is evaluated. Arguments are then evaluated left to right and
    /// the builtin runs; a non-finite result from finite arguments is a
    /// `DomainError`.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `position`: Byte offset of the call for error reporting.
    ///
    /// # Returns
    /// The function's value.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{ast::Expr, error::ErrorKind, interpreter::evaluator::core::Evaluator};
    ///
    /// let evaluator = Evaluator::default();
    /// let sixteen = Expr::Number { value:    16.0,
    ///                              position: 5, };
    ///
    /// assert_eq!(evaluator.eval_call("sqrt", &[sixteen.clone()], 0), Ok(4.0));
    /// assert_eq!(evaluator.eval_call("sqrt", &[sixteen.clone(), sixteen], 0)
    ///                     .unwrap_err()
    ///                     .kind(),
    ///            ErrorKind::ArityError);
    /// ```
    pub fn eval_call(&self, name: &str, arguments: &[Expr], position: usize) -> EvalResult<f64> {
        let def = self.symbols
                      .function(name)
                      .ok_or_else(|| EvaluationError::UnknownName { name: name.to_owned(),
                                                                    position })?;

        check_arity(arguments, def.name, def.arity, position)?;

        let args = arguments.iter()
                            .map(|arg| self.eval(arg))
                            .collect::<EvalResult<Vec<_>>>()?;

        let result = (def.func)(&args, position)?;
        ensure_finite(&args, result, position, || {
            let rendered = args.iter()
                               .map(ToString::to_string)
                               .collect::<Vec<_>>()
                               .join(", ");
            format!("{name}({rendered}) has no finite real result")
        })
    }
}
