use crate::{
    interpreter::symbols::is_constant_name,
    preprocessor::utils::{Unit, next_unit},
};

/// Rewrites `!` after a numeric literal or a constant name.
///
/// `5!` becomes `factorial(5)` and `pi!` becomes `factorial(pi)`. Constant
/// names must be whole words, so the `e` in `sine!` is not touched. The pass
/// is repeated until the text stops changing. A second `!` in `5!!` now
/// follows a `)` and is handled by [`expand_group_factorials`].
///
/// # Example
/// ```
/// use sciexpr::preprocessor::factorial::expand_literal_factorials;
///
/// assert_eq!(expand_literal_factorials("3!+e!"), "factorial(3)+factorial(e)");
/// assert_eq!(expand_literal_factorials("5!!"), "factorial(5)!");
/// ```
#[must_use]
pub fn expand_literal_factorials(text: &str) -> String {
    let mut current = text.to_owned();
    loop {
        let next = literal_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn literal_pass(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 16);
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let (unit, end) = next_unit(bytes, i);
        let is_operand = match unit {
            Unit::Literal => true,
            Unit::Word => is_constant_name(&text[i..end]),
            Unit::Other => false,
        };
        if is_operand && bytes.get(end) == Some(&b'!') {
            out.push_str(&text[copied..i]);
            out.push_str("factorial(");
            out.push_str(&text[i..end]);
            out.push(')');
            copied = end + 1;
            i = end + 1;
        } else {
            i = end;
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Rewrites `!` after a closing parenthesis.
///
/// Scans left to right once, keeping a stack of the output offsets where each
/// open group's operand starts. A `)` followed by one or more `!` pops its
/// `(` and wraps the group once per `!`, innermost first. If the `(` opens a
/// call, the whole call is the operand. An `)!` with no matching `(` ends the
/// pass and the rest of the text is left as it is.
///
/// # Example
/// ```
/// use sciexpr::preprocessor::factorial::expand_group_factorials;
///
/// assert_eq!(expand_group_factorials("(2+3)!"), "factorial(2+3)");
/// assert_eq!(expand_group_factorials("(3)!!"), "factorial(factorial(3))");
/// assert_eq!(expand_group_factorials("sqrt(4)!"), "factorial(sqrt(4))");
/// assert_eq!(expand_group_factorials("1)!"), "1)!");
/// ```
#[must_use]
pub fn expand_group_factorials(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 16);
    // Wrapping prefixes, keyed by the output offset they go in front of.
    let mut prefixes: Vec<(usize, String)> = Vec::new();
    let mut opens: Vec<Operand> = Vec::new();
    // Output offset of the word just before the cursor, skipping blanks.
    let mut last_word: Option<usize> = None;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let (unit, end) = next_unit(bytes, i);
        match (unit, bytes[i]) {
            (Unit::Word, _) => last_word = Some(out.len() + i - copied),
            (Unit::Other, b'(') => {
                let is_call = last_word.is_some();
                let start = last_word.unwrap_or(out.len() + i - copied);
                opens.push(Operand { start, is_call });
                last_word = None;
            },
            (Unit::Other, b')') => {
                out.push_str(&text[copied..end]);
                copied = end;
                last_word = None;
                let open = opens.pop();
                let bangs = bytes[end..].iter().take_while(|&&b| b == b'!').count();
                if bangs > 0 {
                    let Some(operand) = open else {
                        log::trace!("unmatched ')' at {i}, leaving the rest as is");
                        break;
                    };
                    let (prefix, closing) = operand.wrapping(bangs);
                    prefixes.push((operand.start, prefix));
                    out.push_str(&closing);
                    copied = end + bangs;
                    i = copied;
                    continue;
                }
            },
            (_, b) if b.is_ascii_whitespace() => {},
            _ => last_word = None,
        }
        i = end;
    }

    out.push_str(&text[copied..]);
    splice(&out, prefixes)
}

/// Where a group's factorial operand starts in the output.
#[derive(Debug, Clone, Copy)]
struct Operand {
    start:   usize,
    is_call: bool,
}

impl Operand {
    /// The text to put before and after the operand for `bangs` factorials.
    fn wrapping(self, bangs: usize) -> (String, String) {
        if self.is_call {
            ("factorial(".repeat(bangs), ")".repeat(bangs))
        } else {
            ("factorial(".repeat(bangs - 1) + "factorial", ")".repeat(bangs - 1))
        }
    }
}

/// Inserts each prefix at its offset in `body`.
///
/// Offsets are distinct, since an enclosing group always starts before the
/// groups inside it.
fn splice(body: &str, mut prefixes: Vec<(usize, String)>) -> String {
    if prefixes.is_empty() {
        return body.to_owned();
    }
    prefixes.sort_by_key(|(at, _)| *at);

    let extra: usize = prefixes.iter().map(|(_, p)| p.len()).sum();
    let mut out = String::with_capacity(body.len() + extra);
    let mut copied = 0;
    for (at, prefix) in &prefixes {
        out.push_str(&body[copied..*at]);
        out.push_str(prefix);
        copied = *at;
    }
    out.push_str(&body[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_and_constants() {
        assert_eq!(expand_literal_factorials("2.5!"), "factorial(2.5)");
        assert_eq!(expand_literal_factorials("1e2!"), "factorial(1e2)");
        assert_eq!(expand_literal_factorials("tau!*2"), "factorial(tau)*2");
    }

    #[test]
    fn only_whole_constant_names() {
        assert_eq!(expand_literal_factorials("sine!"), "sine!");
        assert_eq!(expand_literal_factorials("x5!"), "x5!");
        assert_eq!(expand_literal_factorials("5 !"), "5 !");
    }

    #[test]
    fn nested_groups_resolve_inside_out() {
        assert_eq!(expand_group_factorials("((1+2)!)!"),
                   "factorial(factorial(1+2))");
        assert_eq!(expand_group_factorials("(2)!+(3)!"), "factorial(2)+factorial(3)");
    }

    #[test]
    fn chained_bangs_nest_outward() {
        assert_eq!(expand_group_factorials("factorial(3)!"),
                   "factorial(factorial(3))");
        assert_eq!(expand_group_factorials("(3)!!!"),
                   "factorial(factorial(factorial(3)))");
    }

    #[test]
    fn calls_are_whole_operands() {
        assert_eq!(expand_group_factorials("2*sqrt (9)!"), "2*factorial(sqrt (9))");
        assert_eq!(expand_group_factorials("2(3)!"), "2factorial(3)");
    }

    #[test]
    fn unmatched_close_stops_the_pass() {
        assert_eq!(expand_group_factorials("(2)!+1)!+(3)!"), "factorial(2)+1)!+(3)!");
    }

    #[test]
    fn long_inputs_are_rewritten_in_one_pass() {
        let text = "(1)!+".repeat(20_000);
        let expected = "factorial(1)+".repeat(20_000);
        assert_eq!(expand_group_factorials(&text), expected);

        let nested = format!("{}1{}", "(".repeat(5_000), ")!".repeat(5_000));
        let canonical = expand_group_factorials(&nested);
        assert!(!canonical.contains('!'));
        assert!(canonical.starts_with("factorial(factorial"));
        assert_eq!(canonical.len(), nested.len() + 5_000 * "factorial".len() - 5_000);
    }
}
