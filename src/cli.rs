use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};

use crate::config::SettingOverrides;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

const AFTER_HELP: &str = "\
The default comment style is C. To change it, use the -s and -m options.

If no files are given, standard input is used.

Example:
    coco -s \"#\" -m \"\" main.py
    cat lib.c | coco";

#[derive(Parser, Debug)]
#[command(name = "coco")]
#[command(
    version,
    about = "Prints a summary of total, non-commented, commented and empty lines."
)]
#[command(long_about = "Prints a summary of total, non-commented, commented and empty lines.\n\n\
    Output: <total> <code> <comments> <empty>\n\n\
    Exit codes:\n  \
    0 - Counted (unreadable files are reported and skipped)\n  \
    1 - Help shown or configuration error")]
#[command(after_help = AFTER_HELP)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Show usage
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Output title for each count
    #[arg(short, long)]
    pub verbose: bool,

    /// Single-line comment prefix [default: //]
    #[arg(short, long, allow_hyphen_values = true)]
    pub single: Option<String>,

    /// Multi-line comment with start and end separated by a space; "" disables [default: "/* */"]
    #[arg(short, long, allow_hyphen_values = true)]
    pub multi: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Control color of diagnostics
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Files to count; standard input when none are given
    pub files: Vec<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> SettingOverrides {
        SettingOverrides {
            single: self.single.clone(),
            multi: self.multi.clone(),
            verbose: self.verbose,
            format: self.format,
        }
    }

    #[must_use]
    pub fn render_help() -> String {
        Self::command().render_help().to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
