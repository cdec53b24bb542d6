use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sciexpr::{error::ErrorKind, evaluate_expression, normalize};

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "[0-9a-z().!%^×÷+*/, -]{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_no_glyphs_or_caret(text in "[0-9().!%^×÷+ ]{0,30}") {
        let canonical = normalize(&text);
        prop_assert!(!canonical.contains(['×', '÷', '^']), "{canonical}");
    }

    #[test]
    fn postfix_factorial_matches_the_function(n in 0_u32..=170) {
        prop_assert_eq!(evaluate_expression(&format!("{n}!")),
                        evaluate_expression(&format!("factorial({n})")));
        prop_assert_eq!(evaluate_expression(&format!("({n})!")),
                        evaluate_expression(&format!("factorial({n})")));
    }

    #[test]
    fn factorial_beyond_the_bound_fails(n in 171_u32..100_000) {
        let err = evaluate_expression(&format!("{n}!")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    #[test]
    fn percent_divides_by_one_hundred(n in 0_u32..1_000_000) {
        prop_assert_eq!(evaluate_expression(&format!("{n}%")), Ok(f64::from(n) / 100.0));
    }

    #[test]
    fn addition_matches_f64(a in -1e12_f64..1e12, b in -1e12_f64..1e12) {
        let text = format!("({a:?}) + ({b:?})");
        prop_assert_eq!(evaluate_expression(&text), Ok(a + b));
    }

    #[test]
    fn division_by_zero_is_always_reported(a in -1e6_f64..1e6) {
        let err = evaluate_expression(&format!("({a:?}) / 0")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }
}

#[test]
fn canonical_forms() {
    let cases = [("3 × 4 ÷ 2", "3 * 4 / 2"),
                 ("10^-2", "10**-2"),
                 ("25%+(4)!", "(25/100)+factorial(4)"),
                 ("cos(0)!!", "factorial(factorial(cos(0)))"),
                 ("((3)!)!", "factorial(factorial(3))"),
                 ("log10(100)", "log10(100)")];
    for (raw, canonical) in cases {
        assert_eq!(normalize(raw), canonical);
    }
}
