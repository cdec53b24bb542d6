use crate::util::num::{is_integral, normalize_zero};

/// Significant digits used when the caller does not choose.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

/// Integral values at or above this magnitude are shown in general notation
/// instead of as a full integer.
const MAX_PLAIN_INTEGER: f64 = 1e15;

/// Renders a result for display.
///
/// Integral values are printed without a decimal point. Every other value is
/// printed like C's `%.{n}g`: `significant_digits` significant digits,
/// trailing zeros stripped, and scientific notation when the decimal exponent
/// is below `-4` or at least `significant_digits`.
///
/// # Parameters
/// - `value`: The value to render.
/// - `significant_digits`: Precision for non-integral values; `0` is treated
///   as `1`.
///
/// # Returns
/// The display string. Infinities and NaN render as `inf`, `-inf` and `nan`.
///
/// # Example
/// ```
/// use sciexpr::format_result;
///
/// assert_eq!(format_result(120.0, 12), "120");
/// assert_eq!(format_result(0.1 + 0.2, 12), "0.3");
/// assert_eq!(format_result(std::f64::consts::PI, 12), "3.14159265359");
/// assert_eq!(format_result(1.5e-7, 12), "1.5e-07");
/// assert_eq!(format_result(f64::NEG_INFINITY, 12), "-inf");
/// ```
#[must_use]
pub fn format_result(value: f64, significant_digits: usize) -> String {
    let value = normalize_zero(value);
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if is_integral(value) && value.abs() < MAX_PLAIN_INTEGER {
        return format!("{value:.0}");
    }
    format_general(value, significant_digits.max(1))
}

fn format_general(value: f64, digits: usize) -> String {
    let scientific = format!("{value:.prec$e}", prec = digits - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let limit = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs());
    }

    let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
