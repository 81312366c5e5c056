//! Error types
//!
//! Rewriting and emoji matching are infallible; errors only come from
//! loading and compiling extractor configuration.

use thiserror::Error;

/// Errors raised while configuring the bundled extractor
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A configured pattern did not compile or lacks a required group
    #[error("Invalid {category} pattern: {reason}")]
    InvalidPattern {
        /// Entity category the pattern belongs to
        category: &'static str,
        /// What went wrong
        reason: String,
    },

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;
