/// The kind of a scanned unit of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A numeric literal such as `12`, `12.`, `.5` or `1e-3`.
    Literal,
    /// An identifier such as `pi` or `log10`.
    Word,
    /// Any other single byte.
    Other,
}

/// Scans the unit starting at byte `start`.
///
/// Literals and words are maximal, so the digits of `log10` belong to the
/// word and never start a literal.
///
/// # Returns
/// The unit's kind and the byte offset just past it.
///
/// # Example
/// ```
/// use sciexpr::preprocessor::utils::{Unit, next_unit};
///
/// assert_eq!(next_unit(b"12.5e3+x", 0), (Unit::Literal, 6));
/// assert_eq!(next_unit(b"log10(", 0), (Unit::Word, 5));
/// assert_eq!(next_unit(b"(1)", 0), (Unit::Other, 1));
/// ```
#[must_use]
pub fn next_unit(bytes: &[u8], start: usize) -> (Unit, usize) {
    match bytes.get(start) {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => (Unit::Word, word_end(bytes, start)),
        Some(b) if b.is_ascii_digit() => (Unit::Literal, literal_end(bytes, start)),
        Some(b'.') if bytes.get(start + 1).is_some_and(u8::is_ascii_digit) => {
            (Unit::Literal, literal_end(bytes, start))
        },
        Some(_) => (Unit::Other, start + 1),
        None => (Unit::Other, start),
    }
}

fn word_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while bytes.get(i).is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_') {
        i += 1;
    }
    i
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

fn literal_end(bytes: &[u8], start: usize) -> usize {
    let mut i = digits_end(bytes, start);
    if bytes.get(i) == Some(&b'.') {
        let fraction = digits_end(bytes, i + 1);
        // `12.` ends at the point; an exponent needs fraction digits first.
        if fraction == i + 1 {
            return fraction;
        }
        i = fraction;
    }
    exponent_end(bytes, i)
}

fn exponent_end(bytes: &[u8], start: usize) -> usize {
    if !matches!(bytes.get(start), Some(b'e' | b'E')) {
        return start;
    }
    let mut i = start + 1;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let end = digits_end(bytes, i);
    if end > i { end } else { start }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(text: &str) -> Vec<(Unit, &str)> {
        let bytes = text.as_bytes();
        let mut out = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            let (unit, end) = next_unit(bytes, i);
            out.push((unit, &text[i..end]));
            i = end;
        }
        out
    }

    #[test]
    fn literal_forms_match_the_lexer() {
        assert_eq!(units("12.")[0], (Unit::Literal, "12."));
        assert_eq!(units(".5e+2")[0], (Unit::Literal, ".5e+2"));
        assert_eq!(units("1E3"), vec![(Unit::Literal, "1E3")]);
        assert_eq!(units("12.e3"),
                   vec![(Unit::Literal, "12."), (Unit::Word, "e3")]);
        assert_eq!(units("2e"), vec![(Unit::Literal, "2"), (Unit::Word, "e")]);
    }

    #[test]
    fn digits_inside_words_are_not_literals() {
        assert_eq!(units("log10(x_2)"),
                   vec![(Unit::Word, "log10"),
                        (Unit::Other, "("),
                        (Unit::Word, "x_2"),
                        (Unit::Other, ")")]);
    }
}
