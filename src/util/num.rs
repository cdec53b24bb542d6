/// Reports whether `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use sciexpr::util::num::is_integral;
///
/// assert!(is_integral(120.0));
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::INFINITY));
/// assert!(!is_integral(f64::NAN));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Converts an `f64` to `u32` if and only if the conversion is exact.
///
/// ## Returns
/// - `Some(u32)`: The value, if it is integral and within `0..=u32::MAX`.
/// - `None`: If it is negative, fractional, non-finite or too large.
///
/// ## Example
/// ```
/// use sciexpr::util::num::f64_to_u32_exact;
///
/// assert_eq!(f64_to_u32_exact(170.0), Some(170));
/// assert_eq!(f64_to_u32_exact(1.5), None);
/// assert_eq!(f64_to_u32_exact(-1.0), None);
/// assert_eq!(f64_to_u32_exact(1e10), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u32_exact(value: f64) -> Option<u32> {
    if !is_integral(value) || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

/// Maps `-0.0` to `0.0` and leaves every other value untouched.
///
/// ## Example
/// ```
/// use sciexpr::util::num::normalize_zero;
///
/// assert!(normalize_zero(-0.0).is_sign_positive());
/// assert_eq!(normalize_zero(-2.0), -2.0);
/// assert!(normalize_zero(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
