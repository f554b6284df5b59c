mod classifier;
mod syntax;
mod tally;

pub use classifier::{Classifier, ScanState, TRIM_CHARS, classify_line, trim_line};
pub use syntax::{CommentSyntax, DEFAULT_MULTI_LINE, DEFAULT_SINGLE_LINE, MultiLineComment};
pub use tally::{LineKind, LineTally};

#[cfg(test)]
mod test_fixtures;
