use super::*;

mod precedence_tests;

// Re-export shared test fixtures for submodules
pub(super) use crate::counter::test_fixtures::{c_syntax, hash_syntax, haskell_syntax, ruby_syntax};

/// Feed `lines` to a fresh classifier and return the kinds in order.
pub(super) fn kinds(syntax: &CommentSyntax, lines: &[&str]) -> Vec<LineKind> {
    let mut classifier = Classifier::new(syntax);
    lines.iter().map(|line| classifier.classify(line)).collect()
}
