use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CocoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to open {path}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CocoError {
    /// Short category label used as the diagnostic heading.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => "Config",
            Self::SourceOpen { .. } => "Open",
            Self::SourceRead { .. } => "Read",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Diagnostic message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::ConfigRead { path, .. } => {
                format!("failed to read config file {}", path.display())
            }
            Self::TomlParse(_) => "invalid TOML in config file".to_string(),
            Self::SourceOpen { path, .. } => format!("cannot open {}", path.display()),
            Self::SourceRead { path, .. } => format!("error reading {}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::JsonSerialize(e) => format!("failed to serialize report: {e}"),
        }
    }

    /// Underlying cause, when one exists.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ConfigRead { source, .. }
            | Self::SourceOpen { source, .. }
            | Self::SourceRead { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => Some(e.message().to_string()),
            Self::Config(_) | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some(
                "multi-line delimiters are given as \"<start> <end>\" separated by one space, e.g. -m \"/* */\"",
            ),
            Self::TomlParse(_) => Some("check the syntax of .coco.toml"),
            Self::ConfigRead { .. } => Some("pass --no-config to ignore configuration files"),
            Self::SourceOpen { .. }
            | Self::SourceRead { .. }
            | Self::Io(_)
            | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CocoError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
