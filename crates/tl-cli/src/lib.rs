//! Time log CLI library.
//!
//! This crate provides the `tl` command: the line parser that turns free text
//! into time periods, and the report built from the calculated totals.

mod cli;
pub mod commands;
mod config;
pub mod parser;
pub mod report;

pub use cli::{Cli, Commands};
pub use config::Config;
