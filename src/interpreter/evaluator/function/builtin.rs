use crate::interpreter::evaluator::{core::EvalResult, utils::check_arity};

/// Applies a unary real function to one argument.
///
/// The generated functions accept exactly one argument and return the raw
/// `f64` result; values such as `sqrt(-1) = NaN` are left for the caller's
/// finiteness check to reject.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `position`: Byte offset of the call for error reporting.
///
/// # Example
/// ```
/// use sciexpr::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::FRAC_PI_2], 0).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "(x)`, computed with `f64::", stringify!($real_fn), "`.")]
        pub fn $fname(args: &[f64], position: usize) -> EvalResult<f64> {
            check_arity(args, stringify!($fname), 1, position)?;
            Ok(args[0].$real_fn())
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);
real_builtin!(ln, ln);
real_builtin!(log10, log10);
real_builtin!(sqrt, sqrt);
real_builtin!(exp, exp);
real_builtin!(abs, abs);
real_builtin!(floor, floor);
real_builtin!(ceil, ceil);
real_builtin!(degrees, to_degrees);
real_builtin!(radians, to_radians);

/// Raises `args[0]` to the power `args[1]`.
///
/// Accepts exactly two arguments. Same semantics as the `**` operator.
///
/// # Example
/// ```
/// use sciexpr::interpreter::evaluator::function::builtin::pow;
///
/// assert_eq!(pow(&[2.0, 0.5], 0).unwrap(), std::f64::consts::SQRT_2);
/// assert!(pow(&[2.0], 0).is_err());
/// ```
pub fn pow(args: &[f64], position: usize) -> EvalResult<f64> {
    check_arity(args, "pow", 2, position)?;

    Ok(args[0].powf(args[1]))
}
