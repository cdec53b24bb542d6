use std::f64::consts::{PI, TAU};

use crate::{
    error::EvaluationError,
    interpreter::evaluator::{core::EvalResult, factorial_table::FACTORIALS},
    util::num::{f64_to_u32_exact, is_integral},
};

/// Largest argument accepted by `factorial`.
///
/// `170!` ≈ 7.257e306 is the largest factorial representable as a finite
/// `f64`; `171!` overflows.
pub const MAX_FACTORIAL_ARGUMENT: f64 = 170.0;

/// Checks if the argument list matches the expected count.
/// Returns an `ArityError` naming the function if it does not.
///
/// ## Example
/// ```
/// use sciexpr::interpreter::evaluator::utils::check_arity;
///
/// let args = vec![2.0, 1.0];
///
/// assert!(check_arity(&args, "pow", 2, 0).is_ok()); // Requires exactly 2 arguments.
/// assert!(check_arity(&args, "sin", 1, 0).is_err());
/// ```
pub fn check_arity<T>(args: &[T], name: &str, expected: usize, position: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvaluationError::ArityError { name: name.to_owned(),
                                          expected,
                                          found: args.len(),
                                          position })
    }
}

/// Enforces the finiteness rule on a computed value.
///
/// If every input is finite but the result is not, the operation overflowed
/// or left the real domain, and a `DomainError` built from `details` is
/// returned. Otherwise the result passes through unchanged, including
/// non-finite results of non-finite inputs.
///
/// ## Example
/// ```
/// use sciexpr::interpreter::evaluator::utils::ensure_finite;
///
/// assert_eq!(ensure_finite(&[4.0], 2.0, 0, || unreachable!()), Ok(2.0));
/// assert!(ensure_finite(&[-1.0], f64::NAN, 0, || "sqrt(-1)".into()).is_err());
/// assert!(ensure_finite(&[f64::NAN], f64::NAN, 0, || unreachable!()).unwrap().is_nan());
/// ```
pub fn ensure_finite(inputs: &[f64],
                     result: f64,
                     position: usize,
                     details: impl FnOnce() -> String)
                     -> EvalResult<f64> {
    if !result.is_finite() && inputs.iter().all(|x| x.is_finite()) {
        return Err(EvaluationError::domain(details(), position));
    }
    Ok(result)
}

/// Computes `x!` for a non-negative integer-valued `x`.
///
/// The result is the exact factorial rounded once to the nearest `f64`.
///
/// ## Example
/// ```
/// use sciexpr::interpreter::evaluator::utils::factorial;
///
/// assert_eq!(factorial(5.0, 0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0, 0).unwrap(), 1.0);
/// assert!(factorial(171.0, 0).is_err());
/// assert!(factorial(2.5, 0).is_err());
/// ```
///
/// ## Errors
/// `DomainError` if `x` is negative, fractional, NaN, or larger than
/// [`MAX_FACTORIAL_ARGUMENT`].
pub fn factorial(x: f64, position: usize) -> EvalResult<f64> {
    if x < 0.0 || !is_integral(x) {
        return Err(EvaluationError::domain(format!("factorial is only defined for non-negative integers, but found {x}"),
                                           position));
    }
    if x > MAX_FACTORIAL_ARGUMENT {
        return Err(EvaluationError::domain(format!("{x}! is too large (the limit is {MAX_FACTORIAL_ARGUMENT})"),
                                           position));
    }

    f64_to_u32_exact(x).and_then(|n| FACTORIALS.get(n as usize))
                       .copied()
                       .ok_or_else(|| {
                           EvaluationError::domain(format!("factorial argument {x} is not a small integer"),
                                                   position)
                       })
}

/// Computes the gamma function Γ(z).
///
/// Positive integers up to `171` are computed exactly as `(z - 1)!`. Other
/// values use the Lanczos approximation with the standard 9-term coefficients
/// (`g = 7`), with the reflection formula
///
/// `Γ(z) = π / (sin(πz) * Γ(1 − z))`
///
/// for `z < 0.5`.
///
/// # Errors
/// `DomainError` at the poles `0, -1, -2, …`. Overflow (for `z` above about
/// 171.6) yields infinity, which the caller rejects.
///
/// # Example
/// ```
/// use sciexpr::interpreter::evaluator::utils::gamma;
///
/// // Γ(5) = 4! = 24
/// assert_eq!(gamma(5.0, 1).unwrap(), 24.0);
/// assert!((gamma(0.5, 1).unwrap() - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// assert!(gamma(-2.0, 1).is_err());
/// ```
pub fn gamma(z: f64, position: usize) -> EvalResult<f64> {
    if z <= 0.0 && is_integral(z) {
        return Err(pole(z, "gamma", position));
    }
    if z >= 1.0 && z <= MAX_FACTORIAL_ARGUMENT + 1.0 && is_integral(z) {
        return factorial(z - 1.0, position);
    }
    Ok(lanczos_gamma(z))
}

/// Computes `ln |Γ(z)|`.
///
/// Positive integers up to `171` use the exact factorial; other values use the
/// logarithmic form of the same Lanczos approximation as [`gamma`], so the
/// result stays finite far beyond the range where Γ itself overflows.
///
/// # Errors
/// `DomainError` at the poles `0, -1, -2, …`.
///
/// # Example
/// ```
/// use sciexpr::interpreter::evaluator::utils::lgamma;
///
/// assert_eq!(lgamma(1.0, 0).unwrap(), 0.0);
/// assert!((lgamma(200.0, 0).unwrap() - 857.933_669_825_857_2).abs() < 1e-9);
/// assert!(lgamma(0.0, 0).is_err());
/// ```
pub fn lgamma(z: f64, position: usize) -> EvalResult<f64> {
    if z <= 0.0 && is_integral(z) {
        return Err(pole(z, "lgamma", position));
    }
    if z >= 1.0 && z <= MAX_FACTORIAL_ARGUMENT + 1.0 && is_integral(z) {
        return Ok(factorial(z - 1.0, position)?.ln());
    }
    Ok(lanczos_ln_gamma(z))
}

fn pole(z: f64, name: &str, position: usize) -> EvaluationError {
    EvaluationError::domain(format!("{name} has a pole at {z}"), position)
}

// Lanczos coefficients, g = 7, n = 9.
const LANCZOS_COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                                  676.520_368_121_885_1,
                                  -1_259.139_216_722_402_8,
                                  771.323_428_777_653_1,
                                  -176.615_029_162_140_6,
                                  12.507_343_278_686_905,
                                  -0.138_571_095_265_720_12,
                                  9.984_369_578_019_572e-6,
                                  1.505_632_735_149_311_6e-7];
const LANCZOS_G: f64 = 7.0;

/// Returns `(t, series)` for `z >= 0.5`, where
/// `Γ(z) = sqrt(2π) * t^(z − 0.5) * e^(−t) * series`.
fn lanczos_terms(z: f64) -> (f64, f64) {
    let z_minus_1 = z - 1.0;
    let mut series = LANCZOS_COEFFS[0];
    let mut offset = 1.0;
    for &c in &LANCZOS_COEFFS[1..] {
        series += c / (z_minus_1 + offset);
        offset += 1.0;
    }
    (z_minus_1 + LANCZOS_G + 0.5, series)
}

fn lanczos_gamma(z: f64) -> f64 {
    if z < 0.5 {
        return PI / ((PI * z).sin() * lanczos_gamma(1.0 - z));
    }
    let (t, series) = lanczos_terms(z);
    // Split t^(z - 0.5) so the intermediate power does not overflow before
    // e^(-t) scales it back down.
    let half_power = t.powf((z - 0.5) / 2.0);
    TAU.sqrt() * half_power * (half_power * (-t).exp()) * series
}

fn lanczos_ln_gamma(z: f64) -> f64 {
    if z < 0.5 {
        return (PI / (PI * z).sin().abs()).ln() - lanczos_ln_gamma(1.0 - z);
    }
    let (t, series) = lanczos_terms(z);
    0.5 * TAU.ln() + (z - 0.5) * t.ln() - t + series.ln()
}
