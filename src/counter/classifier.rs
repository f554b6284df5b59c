use super::syntax::{CommentSyntax, MultiLineComment};
use super::tally::{LineKind, LineTally};

/// Characters stripped from both ends of a line before classification.
pub const TRIM_CHARS: [char; 2] = [' ', '\t'];

/// Whether a multi-line comment span is open at a line boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Normal,
    InMultiLineComment,
}

impl ScanState {
    const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::InMultiLineComment,
            Self::InMultiLineComment => Self::Normal,
        }
    }
}

#[must_use]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(TRIM_CHARS)
}

/// Classify one line given the span state left by the previous line.
///
/// Precedence: an open span makes the line a comment, then blank lines,
/// then the single-line prefix, then code. A line whose trimmed text starts
/// with the multi-line opener counts as a comment; a line with code before
/// the opener stays code but still opens the span for the lines after it.
#[must_use]
pub fn classify_line(
    state: ScanState,
    syntax: &CommentSyntax,
    line: &str,
) -> (ScanState, LineKind) {
    if state == ScanState::InMultiLineComment {
        return (state_after(syntax, line, state), LineKind::Comment);
    }

    let trimmed = trim_line(line);

    if trimmed.is_empty() {
        return (ScanState::Normal, LineKind::Empty);
    }

    // Openers after a single-line prefix are part of that comment.
    if syntax.is_single_line_comment(trimmed) {
        return (ScanState::Normal, LineKind::Comment);
    }

    let kind = if syntax.starts_multi_line_comment(trimmed) {
        LineKind::Comment
    } else {
        LineKind::Code
    };

    (state_after(syntax, line, state), kind)
}

fn state_after(syntax: &CommentSyntax, line: &str, state: ScanState) -> ScanState {
    match &syntax.multi_line {
        Some(multi) => scan_markers(multi, &syntax.single_line, line, state),
        None => ScanState::Normal,
    }
}

/// Walk the line alternating between looking for the opener and the closer.
///
/// Outside a span, a single-line prefix found before the next opener ends the
/// walk: anything after it is trailing comment text.
fn scan_markers(
    multi: &MultiLineComment,
    single_line: &str,
    line: &str,
    mut state: ScanState,
) -> ScanState {
    let mut rest = line;
    loop {
        let marker = match state {
            ScanState::Normal => multi.start.as_str(),
            ScanState::InMultiLineComment => multi.end.as_str(),
        };
        if marker.is_empty() {
            return state;
        }
        let Some(pos) = rest.find(marker) else {
            return state;
        };
        if state == ScanState::Normal && prefix_precedes(single_line, rest, pos) {
            return state;
        }
        rest = &rest[pos + marker.len()..];
        state = state.toggled();
    }
}

fn prefix_precedes(prefix: &str, text: &str, pos: usize) -> bool {
    !prefix.is_empty() && text.find(prefix).is_some_and(|found| found < pos)
}

/// Stateful line classifier accumulating counts across every line fed to it.
///
/// One instance serves a whole invocation: span state and counts carry over
/// from one input source to the next.
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    syntax: &'a CommentSyntax,
    state: ScanState,
    tally: LineTally,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self::with_state(syntax, ScanState::Normal)
    }

    /// Start in a given span state, e.g. to resume mid-comment.
    #[must_use]
    pub const fn with_state(syntax: &'a CommentSyntax, state: ScanState) -> Self {
        Self {
            syntax,
            state,
            tally: LineTally::new(),
        }
    }

    pub fn classify(&mut self, line: &str) -> LineKind {
        let (next, kind) = classify_line(self.state, self.syntax, line);
        self.state = next;
        self.tally.record(kind);
        kind
    }

    /// Classify every line of an in-memory source.
    pub fn count(&mut self, source: &str) -> LineTally {
        for line in source.lines() {
            self.classify(line);
        }
        self.tally
    }

    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    #[must_use]
    pub const fn tally(&self) -> LineTally {
        self.tally
    }
}

#[cfg(test)]
#[path = "classifier_tests/mod.rs"]
mod tests;
