use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Comment delimiter settings from `[comments]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CommentsConfig {
    /// Single-line comment prefix. Empty disables single-line detection.
    #[serde(default)]
    pub single: Option<String>,

    /// Multi-line delimiters as `"<start> <end>"`. Empty disables detection.
    #[serde(default)]
    pub multi: Option<String>,
}

/// Report settings from `[output]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbose: Option<bool>,

    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Contents of a `.coco.toml` file. Every field is optional; unset fields
/// fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub comments: CommentsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
