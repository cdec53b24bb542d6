use std::fs::{self};

use sciexpr::{
    error::{ErrorKind, EvaluationError},
    evaluate, evaluate_expression, format_result, normalize,
};
use walkdir::WalkDir;

#[test]
fn case_files_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            let at = format!("{}:{}", path.display(), i + 1);
            match parse_case(line) {
                Case::Value(text, expected) => assert_value_at(text, expected, &at),
                Case::Failure(text, kind) => assert_kind_at(text, kind, &at),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

enum Case<'a> {
    Value(&'a str, f64),
    Failure(&'a str, ErrorKind),
}

fn parse_case(line: &str) -> Case<'_> {
    if let Some((text, kind)) = line.rsplit_once(" ! ")
       && let Some(kind) = kind_from_name(kind.trim())
    {
        return Case::Failure(text.trim(), kind);
    }
    let (text, expected) =
        line.rsplit_once(" = ").unwrap_or_else(|| panic!("Malformed case line: {line}"));
    let expected = expected.trim()
                           .parse::<f64>()
                           .unwrap_or_else(|e| panic!("Bad expected value in {line}: {e}"));
    Case::Value(text.trim(), expected)
}

fn kind_from_name(name: &str) -> Option<ErrorKind> {
    Some(match name {
             "EmptyExpression" => ErrorKind::EmptyExpression,
             "SyntaxError" => ErrorKind::SyntaxError,
             "UnknownName" => ErrorKind::UnknownName,
             "ArityError" => ErrorKind::ArityError,
             "DomainError" => ErrorKind::DomainError,
             "DivisionByZero" => ErrorKind::DivisionByZero,
             _ => return None,
         })
}

fn close_enough(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        return actual.is_nan();
    }
    if expected.is_infinite() {
        return actual == expected;
    }
    (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0)
}

fn assert_value_at(src: &str, expected: f64, at: &str) {
    match evaluate_expression(src) {
        Ok(actual) => assert!(close_enough(actual, expected),
                              "{at}: {src} gave {actual}, expected {expected}"),
        Err(e) => panic!("{at}: {src} failed: {e}"),
    }
}

fn assert_kind_at(src: &str, kind: ErrorKind, at: &str) {
    match evaluate_expression(src) {
        Ok(v) => panic!("{at}: {src} succeeded with {v} but was expected to fail with {kind:?}"),
        Err(e) => assert_eq!(e.kind(), kind, "{at}: {src} failed with {e}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    assert_value_at(src, expected, "inline");
}

fn assert_kind(src: &str, kind: ErrorKind) {
    assert_kind_at(src, kind, "inline");
}

#[test]
fn factorial_is_the_correctly_rounded_product() {
    // n! rounded once to the nearest f64.
    let known = [(0, 1.0),
                 (18, 6_402_373_705_728_000.0),
                 (25, 1.551_121_004_333_098_6e25),
                 (28, 3.048_883_446_117_138_7e29),
                 (29, 8.841_761_993_739_702e30),
                 (100, 9.332_621_544_394_415e157),
                 (170, 7.257_415_615_307_999e306)];
    for (n, expected) in known {
        assert_eq!(evaluate_expression(&format!("{n}!")), Ok(expected), "{n}!");
        assert_eq!(evaluate_expression(&format!("({n})!")), Ok(expected), "({n})!");
    }
    for n in 0..=170_u32 {
        assert!(evaluate_expression(&format!("{n}!")).is_ok_and(f64::is_finite), "{n}!");
    }
    assert_kind("171!", ErrorKind::DomainError);
}

#[test]
fn chained_factorial_uses_the_same_bound() {
    assert_eq!(evaluate_expression("5!!"), evaluate("factorial(120)"));
    assert_kind("6!!", ErrorKind::DomainError);
    assert_value("(2+3)!", 120.0);
}

#[test]
fn percent_and_caret() {
    assert_value("50%", 0.5);
    assert_value("1+50%", 1.5);
    assert_value("2^10", 1024.0);
}

#[test]
fn functions_and_constants() {
    assert_value("sqrt(16)", 4.0);
    assert_value("ln(e)", 1.0);
    assert_kind("foo(1)", ErrorKind::UnknownName);
    assert_kind("sin(1,2)", ErrorKind::ArityError);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(evaluate_expression("10/0"),
               Err(EvaluationError::DivisionByZero { position: 2 }));
}

#[test]
fn blank_input_is_empty_expression() {
    for src in ["", "   ", "\t\n"] {
        assert_eq!(evaluate_expression(src), Err(EvaluationError::EmptyExpression));
    }
}

#[test]
fn normalize_is_idempotent_on_samples() {
    for src in ["5!!", "(2+3)!", "sqrt(4)!!", "50%%", "2^3^2", "6÷3×2", "1)!+2!", "pi!+e!", ""] {
        let once = normalize(src);
        assert_eq!(normalize(&once), once, "{src}");
    }
}

#[test]
fn long_factorial_chains_normalize() {
    let text = "(1)!+".repeat(20_000);
    assert_eq!(normalize(&text), "factorial(1)+".repeat(20_000));
    assert_eq!(normalize("(1)!+".repeat(2_000).trim_end_matches('+')).matches("factorial").count(),
               2_000);
}

#[test]
fn oversized_literals_are_rejected() {
    for src in ["1e400", "-1e400", "sin(1e400)", "1e400-1e400"] {
        assert_kind(src, ErrorKind::DomainError);
    }
    assert_eq!(evaluate_expression("2 * 1e999"),
               Err(EvaluationError::DomainError { details:  "numeric literal is too large to represent".into(),
                                                  position: 4, }));
}

#[test]
fn errors_report_positions_in_canonical_text() {
    let err = evaluate_expression("1 + 2 * (3 $ 4)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert!(err.to_string().contains("position 11"), "{err}");

    let err = evaluate_expression("2 * unknown").unwrap_err();
    assert_eq!(err,
               EvaluationError::UnknownName { name:     "unknown".into(),
                                              position: 4, });
}

#[test]
fn syntax_errors_keep_their_source() {
    let err = evaluate_expression("(1 + 2").unwrap_err();
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(),
               Some("Expected closing parenthesis ')' for the '(' at position 0."));
}

#[test]
fn results_render_like_the_calculator() {
    let show = |src: &str| format_result(evaluate_expression(src).unwrap(), 12);
    assert_eq!(show("5!"), "120");
    assert_eq!(show("1/3"), "0.333333333333");
    assert_eq!(show("2^-20"), "9.53674316406e-07");
    assert_eq!(show("-0"), "0");
}

#[test]
fn evaluation_is_shareable_across_threads() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8_u32).map(|n| scope.spawn(move || evaluate_expression(&format!("{n}!+sqrt({n}^2)"))))
                                        .collect();
        for (n, handle) in (0..8_u32).zip(handles) {
            let expected = (1..=n).map(f64::from).product::<f64>() + f64::from(n);
            assert_eq!(handle.join().unwrap(), Ok(expected));
        }
    });
}
