/// Category a single line is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Empty,
}

/// Running counts of classified lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub code: u64,
    pub comment: u64,
    pub empty: u64,
}

impl LineTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: 0,
            comment: 0,
            empty: 0,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.code + self.comment + self.empty
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub const fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Empty => self.empty += 1,
        }
    }
}
