use serde::Serialize;

use crate::counter::LineTally;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    total: u64,
    code: u64,
    comment: u64,
    empty: u64,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, tally: &LineTally) -> Result<String> {
        if tally.is_empty() {
            return Ok(String::new());
        }

        let output = JsonOutput {
            total: tally.total(),
            code: tally.code,
            comment: tally.comment,
            empty: tally.empty,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
