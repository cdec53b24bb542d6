use crate::preprocessor::{
    factorial::{expand_group_factorials, expand_literal_factorials},
    percent::expand_percent,
};

/// Rewrites human-typed surface syntax into the canonical expression form.
///
/// The input is trimmed, then rewritten in this order:
/// 1. `×` and `÷` become `*` and `/`.
/// 2. `^` becomes `**`.
/// 3. A numeric literal followed by `%` becomes `(<literal>/100)`.
/// 4. `!` after a literal or constant name becomes a `factorial` call.
/// 5. `!` after a parenthesized group or call wraps it in `factorial`.
///
/// The function never fails: malformed input is passed through for the
/// evaluator to reject. Applying it twice gives the same result as applying
/// it once.
///
/// # Parameters
/// - `text`: Raw expression text.
///
/// # Returns
/// The canonical text, or an empty string for blank input.
///
/// # Example
/// ```
/// use sciexpr::normalize;
///
/// assert_eq!(normalize(" 2^3 × 4 "), "2**3 * 4");
/// assert_eq!(normalize("1+50%"), "1+(50/100)");
/// assert_eq!(normalize("5!!"), "factorial(factorial(5))");
/// assert_eq!(normalize("(2+3)!"), "factorial(2+3)");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let glyphs = replace_glyphs(text);
    log::trace!("operator glyphs: {glyphs:?}");
    let percent = expand_percent(&glyphs);
    log::trace!("percent: {percent:?}");
    let literals = expand_literal_factorials(&percent);
    log::trace!("literal factorials: {literals:?}");
    let canonical = expand_group_factorials(&literals);

    log::debug!("normalized {text:?} to {canonical:?}");
    canonical
}

fn replace_glyphs(text: &str) -> String {
    text.replace('×', "*").replace('÷', "/").replace('^', "**")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn glyphs_and_caret() {
        assert_eq!(normalize("6÷3×2"), "6/3*2");
        assert_eq!(normalize("2^-1"), "2**-1");
        assert_eq!(normalize("2^3^2"), "2**3**2");
    }

    #[test]
    fn stages_compose() {
        assert_eq!(normalize("50%!"), "factorial(50/100)");
        assert_eq!(normalize("3!^2"), "factorial(3)**2");
        assert_eq!(normalize("(1+2)!×pi!"), "factorial(1+2)*factorial(pi)");
        assert_eq!(normalize("sqrt(4)!!"), "factorial(factorial(sqrt(4)))");
    }

    #[test]
    fn malformed_input_passes_through() {
        assert_eq!(normalize("2+)!"), "2+)!");
        assert_eq!(normalize("x!"), "x!");
        assert_eq!(normalize("(5)%"), "(5)%");
    }

    #[test]
    fn output_is_stable_under_a_second_pass() {
        for text in ["5!!", "((2)!)!", "1)!(2)!", "50%%", "log10(100)!", "2.e!", "x.5!"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "{text}");
        }
    }
}
