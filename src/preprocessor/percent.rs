use crate::preprocessor::utils::{Unit, next_unit};

/// Rewrites every numeric literal immediately followed by `%` as
/// `(<literal>/100)`.
///
/// Only literals qualify; `%` after `)` or a name is left in place for the
/// evaluator to reject.
///
/// # Example
/// ```
/// use sciexpr::preprocessor::percent::expand_percent;
///
/// assert_eq!(expand_percent("1+50%"), "1+(50/100)");
/// assert_eq!(expand_percent("12.5%*8"), "(12.5/100)*8");
/// assert_eq!(expand_percent("(50)%"), "(50)%");
/// ```
#[must_use]
pub fn expand_percent(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 8);
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let (unit, end) = next_unit(bytes, i);
        if unit == Unit::Literal && bytes.get(end) == Some(&b'%') {
            out.push_str(&text[copied..i]);
            out.push('(');
            out.push_str(&text[i..end]);
            out.push_str("/100)");
            copied = end + 1;
            i = end + 1;
        } else {
            i = end;
        }
    }

    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_literal_is_rewritten_once() {
        assert_eq!(expand_percent("50%+25%"), "(50/100)+(25/100)");
        assert_eq!(expand_percent("50%%"), "(50/100)%");
        assert_eq!(expand_percent(".5%"), "(.5/100)");
        assert_eq!(expand_percent("1e2%"), "(1e2/100)");
    }

    #[test]
    fn names_are_left_alone() {
        assert_eq!(expand_percent("x5%"), "x5%");
        assert_eq!(expand_percent("pi%"), "pi%");
        assert_eq!(expand_percent("log10%"), "log10%");
    }
}
