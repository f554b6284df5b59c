use super::*;

#[test]
fn blank_line_inside_span_is_comment() {
    let syntax = c_syntax();
    let (state, kind) = classify_line(ScanState::InMultiLineComment, &syntax, "   ");

    assert_eq!(kind, LineKind::Comment);
    assert_eq!(state, ScanState::InMultiLineComment);
}

#[test]
fn blank_line_outside_span_is_empty() {
    let syntax = c_syntax();
    let (state, kind) = classify_line(ScanState::Normal, &syntax, "\t");

    assert_eq!(kind, LineKind::Empty);
    assert_eq!(state, ScanState::Normal);
}

#[test]
fn span_wins_over_code_looking_lines() {
    let syntax = c_syntax();
    let (_, kind) = classify_line(ScanState::InMultiLineComment, &syntax, "return 0;");
    assert_eq!(kind, LineKind::Comment);
}

#[test]
fn single_prefix_wins_over_multi_opener() {
    // "//*" also contains the "/*" opener; the prefix check runs first.
    let syntax = c_syntax();
    let (state, kind) = classify_line(ScanState::Normal, &syntax, "//* banner");

    assert_eq!(kind, LineKind::Comment);
    assert_eq!(state, ScanState::Normal);
}

#[test]
fn line_after_closer_is_evaluated_fresh() {
    let syntax = c_syntax();
    let mut classifier = Classifier::with_state(&syntax, ScanState::InMultiLineComment);
    classifier.classify("*/");

    assert_eq!(classifier.classify(""), LineKind::Empty);
    assert_eq!(classifier.classify("// c"), LineKind::Comment);
    assert_eq!(classifier.classify("x();"), LineKind::Code);
}

#[test]
fn classify_is_pure_over_state() {
    let syntax = c_syntax();
    let first = classify_line(ScanState::Normal, &syntax, "/* a");
    let second = classify_line(ScanState::Normal, &syntax, "/* a");
    assert_eq!(first, second);
}

#[test]
fn new_classifier_starts_outside_span() {
    let syntax = hash_syntax();
    let classifier = Classifier::new(&syntax);
    assert_eq!(classifier.state(), ScanState::default());
    assert!(classifier.tally().is_empty());
}
