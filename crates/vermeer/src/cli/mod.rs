//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vermeer binary.

mod commands;
mod generate;
mod styles;

pub use commands::{Cli, Commands};
pub use generate::{GenerateOptions, run_generate};
pub use styles::print_styles;
