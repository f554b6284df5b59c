use std::fmt::Write;

use crate::counter::LineTally;
use crate::error::Result;

use super::OutputFormatter;

/// Plain text report.
///
/// Compact form is `"<total> <code> <comment> <empty>"` on one line; verbose
/// form prints one `Label: value` line per metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, tally: &LineTally) -> Result<String> {
        let mut output = String::new();
        if tally.is_empty() {
            return Ok(output);
        }

        let total = tally.total();
        if self.verbose {
            writeln!(output, "Total: {total}").ok();
            writeln!(output, "Lines: {}", tally.code).ok();
            writeln!(output, "Comments: {}", tally.comment).ok();
            writeln!(output, "Empty: {}", tally.empty).ok();
        } else {
            writeln!(
                output,
                "{total} {} {} {}",
                tally.code, tally.comment, tally.empty
            )
            .ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
