pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod inspector;
pub mod output;
pub mod pattern;
pub mod scanner;

pub use error::{BiteSizedError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECKS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
