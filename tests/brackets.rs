use symeval::{
    BracketKind, EvalError, match_closing, match_closing_in_text, interpreter::lexer::tokenize,
};

#[test]
fn text_matching_finds_first_pair() {
    let text = "(a+(b-c))*(d+A[4])";
    assert_eq!(match_closing_in_text(text, BracketKind::Paren), Ok((0, 8)));
    assert_eq!(match_closing_in_text(&text[1..], BracketKind::Paren), Ok((2, 6)));
    assert_eq!(match_closing_in_text(&text[9..], BracketKind::Paren), Ok((1, 8)));
    assert_eq!(match_closing_in_text(text, BracketKind::Square), Ok((14, 16)));
}

#[test]
fn text_matching_skips_leading_text() {
    assert_eq!(match_closing_in_text("abc[[1]+[2]]d", BracketKind::Square),
               Ok((3, 11)));
}

#[test]
fn other_bracket_kind_is_ignored() {
    assert_eq!(match_closing_in_text("(A[)])", BracketKind::Paren), Ok((0, 3)));
    assert_eq!(match_closing_in_text("[(])", BracketKind::Square), Ok((0, 2)));
}

#[test]
fn text_matching_reports_unbalanced_input() {
    assert_eq!(match_closing_in_text("1+2", BracketKind::Paren),
               Err(EvalError::UnbalancedBrackets { bracket:  '(',
                                                   position: 0, }));
    assert_eq!(match_closing_in_text("x)(", BracketKind::Paren),
               Err(EvalError::UnbalancedBrackets { bracket:  ')',
                                                   position: 1, }));
    assert_eq!(match_closing_in_text("a[[1]", BracketKind::Square),
               Err(EvalError::UnbalancedBrackets { bracket:  '[',
                                                   position: 1, }));
}

#[test]
fn token_matching_uses_token_indices() {
    let tokens = tokenize("x * (1 + (2 - 3)) + 4");
    assert_eq!(match_closing(&tokens, BracketKind::Paren), Ok((2, 10)));
}

#[test]
fn token_matching_handles_nested_subscripts() {
    let tokens = tokenize("A[B[C[0]]]");
    assert_eq!(match_closing(&tokens, BracketKind::Square), Ok((1, 9)));
    assert_eq!(match_closing(&tokens[2..], BracketKind::Square), Ok((1, 6)));
}

#[test]
fn token_matching_reports_byte_positions() {
    let tokens = tokenize("1 + (2 * (3 - 4)");
    assert_eq!(match_closing(&tokens, BracketKind::Paren),
               Err(EvalError::UnbalancedBrackets { bracket:  '(',
                                                   position: 4, }));

    let tokens = tokenize("1 ] [");
    assert_eq!(match_closing(&tokens, BracketKind::Square),
               Err(EvalError::UnbalancedBrackets { bracket:  ']',
                                                   position: 2, }));

    assert_eq!(match_closing(&[], BracketKind::Square),
               Err(EvalError::UnbalancedBrackets { bracket:  '[',
                                                   position: 0, }));
}
