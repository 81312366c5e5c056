//! respan CLI library
//!
//! This library provides the command-line interface for rewriting
//! mentions, hashtags, URLs and emoji in text.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod templates;

pub use error::{CliError, CliResult};
