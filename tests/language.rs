use std::fs;

use symeval::{
    EvalError, get_result,
    interpreter::{evaluator::core::MAX_NESTING_DEPTH, lexer::DELIMITERS},
};
use walkdir::WalkDir;

/// One fixture from `tests/cases`.
struct Case {
    expression: String,
    values:     String,
    expected:   f64,
}

fn parse_case(content: &str) -> Case {
    let mut expression = None;
    let mut expected = None;
    let mut values = String::new();
    let mut inside_values = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("expression:") {
            expression = Some(rest.trim().to_string());
            inside_values = false;
        } else if let Some(rest) = trimmed.strip_prefix("expected:") {
            expected = Some(rest.trim().parse::<f64>().expect("expected value is a number"));
            inside_values = false;
        } else if trimmed == "values:" {
            inside_values = true;
        } else if inside_values {
            values.push_str(line);
            values.push('\n');
        }
    }

    Case { expression: expression.expect("case has an expression"),
           values,
           expected: expected.expect("case has an expected value") }
}

#[test]
fn case_files_evaluate_to_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "case"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let case = parse_case(&content);
        count += 1;

        match get_result(&case.expression, Some(&case.values)) {
            Ok(value) => assert!((value - case.expected).abs() < 1e-9,
                                 "{path:?}: '{}' evaluated to {value}, expected {}",
                                 case.expression,
                                 case.expected),
            Err(e) => panic!("{path:?}: '{}' failed: {e}", case.expression),
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_value(src: &str, values: Option<&str>, expected: f64) {
    match get_result(src, values) {
        Ok(value) => assert_eq!(value, expected, "'{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn eval_error(src: &str, values: Option<&str>) -> EvalError {
    match get_result(src, values) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => *e.downcast::<EvalError>()
                    .unwrap_or_else(|e| panic!("'{src}' failed with a non-evaluation error: {e}")),
    }
}

#[test]
fn precedence_of_multiplication_over_addition() {
    assert_value("2+3*4", None, 14.0);
    assert_value("(2+3)*4", None, 20.0);
    assert_value("2*3+4", None, 10.0);
    assert_value("2 + 12 / 4 - 1", None, 4.0);
}

#[test]
fn left_to_right_within_a_precedence_level() {
    assert_value("8-3-2", None, 3.0);
    assert_value("16/4/2", None, 2.0);
    assert_value("10-2+3", None, 11.0);
    assert_value("12/3*2", None, 8.0);
    assert_value("1-2-3-4-5", None, -13.0);
    assert_value("64/2/2/2/2", None, 4.0);
    assert_value("2*6/3/2*5", None, 10.0);
}

#[test]
fn literals_and_whitespace() {
    assert_value("42", None, 42.0);
    assert_value("3.5", None, 3.5);
    assert_value(".5 + 2.", None, 2.5);
    assert_value(" \t1 +\t2 ", None, 3.0);
}

#[test]
fn nested_parentheses() {
    assert_value("((((7))))", None, 7.0);
    assert_value("(1+(2*(3+4)))*2", None, 30.0);
    assert_value("(8-(3-2))", None, 7.0);
}

#[test]
fn scalar_substitution() {
    assert_value("x*2", Some("x 5"), 10.0);
    assert_value("a + b * c", Some("a 1\nb 2\nc 3"), 7.0);
    assert_value("x + x * x", Some("x 3"), 12.0);
}

#[test]
fn array_substitution_with_index_expressions() {
    let values = "A 3 (0,10) (1,20) (2,30)";
    assert_value("A[1+1]", Some(values), 30.0);
    assert_value("A[0] + A[1] * A[2]", Some(values), 610.0);
    assert_value("A[(1)]", Some(values), 20.0);
}

#[test]
fn nested_subscripts() {
    let values = "A 3 (0,2) (1,0) (2,1)\nB 4 (0,5) (1,6) (2,7) (3,8)\ni 1";
    assert_value("A[A[A[0]]]", Some(values), 0.0);
    assert_value("B[A[i] + A[i+1]] * 2", Some(values), 12.0);
    assert_value("(B[A[0]+1] - i) / 2", Some(values), 3.5);
}

#[test]
fn fractional_subscripts_truncate() {
    assert_value("A[1.9]", Some("A 3 (1,4)"), 4.0);
    assert_value("A[5/2]", Some("A 3 (2,9)"), 9.0);
}

#[test]
fn missing_values_read_zero() {
    assert_value("x + 1", None, 1.0);
    assert_value("A[7] + 1", None, 1.0);
    assert_value("A[1] + 1", Some("A 3"), 1.0);
}

#[test]
fn division_by_zero_follows_float_semantics() {
    assert_eq!(get_result("1/0", None).unwrap(), f64::INFINITY);
    assert_eq!(get_result("0-1/0", None).unwrap(), f64::NEG_INFINITY);
    assert!(get_result("0/0", None).unwrap().is_nan());
    assert!(get_result("x/y", Some("x 0\ny 0")).unwrap().is_nan());
}

#[test]
fn subscript_out_of_range_is_error() {
    let err = eval_error("A[5]", Some("A 3 (0,1)"));
    assert!(matches!(err,
                     EvalError::IndexOutOfRange { ref name,
                                                  index: 5,
                                                  length: Some(3),
                                                  position: 0, } if name == "A"));

    let err = eval_error("A[3]", Some("A 3"));
    assert!(matches!(err, EvalError::IndexOutOfRange { index: 3, .. }));
}

#[test]
fn negative_subscript_is_error() {
    assert!(matches!(eval_error("A[0-1]", Some("A 3")),
                     EvalError::IndexOutOfRange { index: -1, .. }));
    assert!(matches!(eval_error("A[0-1]", None),
                     EvalError::IndexOutOfRange { index: -1,
                                                  length: None,
                                                  .. }));
}

#[test]
fn non_finite_subscript_is_error() {
    assert!(matches!(eval_error("A[1/0]", Some("A 3")),
                     EvalError::InvalidIndex { .. }));
    assert!(matches!(eval_error("A[0/0]", Some("A 3")),
                     EvalError::InvalidIndex { .. }));
}

#[test]
fn unbalanced_brackets_are_errors() {
    assert!(matches!(eval_error("(1+2", None),
                     EvalError::UnbalancedBrackets { bracket: '(',
                                                     position: 0, }));
    assert!(matches!(eval_error("1+2)", None),
                     EvalError::UnbalancedBrackets { bracket: ')',
                                                     position: 3, }));
    assert!(matches!(eval_error("A[1", Some("A 3")),
                     EvalError::UnbalancedBrackets { bracket: '[', .. }));
    assert!(matches!(eval_error("A[1]]", Some("A 3")),
                     EvalError::UnbalancedBrackets { bracket: ']', .. }));
    assert!(matches!(eval_error("((1)", None),
                     EvalError::UnbalancedBrackets { .. }));
}

#[test]
fn brackets_do_not_match_across_kinds() {
    assert!(matches!(eval_error("A[(1]+2)", Some("A 3")),
                     EvalError::UnbalancedBrackets { .. }));
}

fn nested_parens(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_evaluates() {
    assert_value(&nested_parens(MAX_NESTING_DEPTH), None, 1.0);
}

#[test]
fn nesting_past_the_limit_is_error() {
    let err = eval_error(&nested_parens(MAX_NESTING_DEPTH + 1), None);
    assert_eq!(err,
               EvalError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                           position: MAX_NESTING_DEPTH, });

    assert!(matches!(eval_error(&nested_parens(20_000), None),
                     EvalError::NestingTooDeep { .. }));

    let subscripts = format!("{}0{}", "A[".repeat(300), "]".repeat(300));
    assert!(matches!(eval_error(&subscripts, Some("A 1")),
                     EvalError::NestingTooDeep { .. }));
}

#[test]
fn empty_groups_are_errors() {
    assert!(matches!(eval_error("", None), EvalError::EmptyExpression { position: 0 }));
    assert!(matches!(eval_error("   ", None), EvalError::EmptyExpression { .. }));
    assert!(matches!(eval_error("()", None), EvalError::EmptyExpression { position: 1 }));
    assert!(matches!(eval_error("A[]", Some("A 3")),
                     EvalError::EmptyExpression { position: 2 }));
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(eval_error("-1", None), EvalError::MissingOperand { position: 0 }));
    assert!(matches!(eval_error("2*-1", None), EvalError::MissingOperand { position: 2 }));
}

#[test]
fn dangling_operator_is_error() {
    assert!(matches!(eval_error("1+", None), EvalError::MissingOperand { position: 2 }));
    assert!(matches!(eval_error("(1*)", None), EvalError::MissingOperand { position: 3 }));
}

#[test]
fn adjacent_operands_are_errors() {
    assert!(matches!(eval_error("1 2", None), EvalError::UnexpectedToken { .. }));
    assert!(matches!(eval_error("x (1)", None), EvalError::UnexpectedToken { .. }));
}

#[test]
fn unrecognized_fragments_are_errors() {
    let err = eval_error("1 + x1", None);
    assert!(matches!(err,
                     EvalError::UnexpectedToken { ref token,
                                                  position: 4, } if token == "x1"));
    assert!(matches!(eval_error("3 % 2", None), EvalError::UnexpectedToken { .. }));
    assert!(matches!(eval_error("1.2.3", None), EvalError::UnexpectedToken { .. }));
}

#[test]
fn every_delimiter_splits_tokens() {
    for delimiter in DELIMITERS.chars() {
        let text = format!("ab{delimiter}cd");
        let tokens = symeval::interpreter::lexer::tokenize(&text);
        assert!(tokens.len() >= 2, "'{text}' was not split");
    }
}

#[test]
fn malformed_values_are_reported() {
    let err = get_result("x", Some("x seven")).unwrap_err();
    assert!(err.downcast_ref::<symeval::LoadError>().is_some());
}
