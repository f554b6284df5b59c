pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod output;
pub mod source;

pub use error::{CocoError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_HELP: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
