use crate::error::{CocoError, Result};

pub const DEFAULT_SINGLE_LINE: &str = "//";
pub const DEFAULT_MULTI_LINE: &str = "/* */";

/// Open/close markers of a multi-line comment span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLineComment {
    pub start: String,
    pub end: String,
}

impl MultiLineComment {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Parse the `"<start> <end>"` form used by `--multi`.
    ///
    /// An empty string disables multi-line detection and yields `None`.
    ///
    /// # Errors
    /// Returns `CocoError::Config` unless the value splits on a single space
    /// into exactly two non-empty markers.
    pub fn parse(spec: &str) -> Result<Option<Self>> {
        if spec.is_empty() {
            return Ok(None);
        }

        let parts: Vec<&str> = spec.split(' ').collect();
        match parts.as_slice() {
            [start, end] if !start.is_empty() && !end.is_empty() => {
                Ok(Some(Self::new(start, end)))
            }
            _ => Err(CocoError::Config(format!(
                "bad format in --multi: expected \"<start> <end>\", got {spec:?}"
            ))),
        }
    }
}

/// Comment delimiters in effect for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Empty disables single-line detection.
    pub single_line: String,
    pub multi_line: Option<MultiLineComment>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: &str, multi_line: Option<(&str, &str)>) -> Self {
        Self {
            single_line: single_line.to_string(),
            multi_line: multi_line.map(|(s, e)| MultiLineComment::new(s, e)),
        }
    }

    /// Build a syntax from the raw `--single` and `--multi` values.
    ///
    /// # Errors
    /// Returns `CocoError::Config` when `multi` is malformed.
    pub fn from_spec(single_line: &str, multi: &str) -> Result<Self> {
        Ok(Self {
            single_line: single_line.to_string(),
            multi_line: MultiLineComment::parse(multi)?,
        })
    }

    #[must_use]
    pub fn is_single_line_comment(&self, trimmed: &str) -> bool {
        !self.single_line.is_empty() && trimmed.starts_with(self.single_line.as_str())
    }

    #[must_use]
    pub fn starts_multi_line_comment(&self, trimmed: &str) -> bool {
        self.multi_line
            .as_ref()
            .is_some_and(|m| trimmed.starts_with(m.start.as_str()))
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::new(DEFAULT_SINGLE_LINE, Some(("/*", "*/")))
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
