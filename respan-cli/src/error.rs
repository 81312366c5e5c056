//! Error handling for the CLI application

use std::fmt;

/// Errors the CLI raises on its own, as opposed to ones bubbled up from core
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Template could not be parsed
    TemplateError(String),
    /// Entity list supplied with `--entities` is malformed
    InvalidEntities(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::TemplateError(msg) => write!(f, "Invalid template: {msg}"),
            CliError::InvalidEntities(msg) => write!(f, "Invalid entities: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("tweet.txt".to_string());
        assert_eq!(error.to_string(), "File not found: tweet.txt");
    }

    #[test]
    fn test_template_error_display() {
        let error = CliError::TemplateError("unknown placeholder {nope}".to_string());
        assert_eq!(error.to_string(), "Invalid template: unknown placeholder {nope}");
    }

    #[test]
    fn test_invalid_entities_display() {
        let error = CliError::InvalidEntities("entity [3, 9) overlaps [5, 6)".to_string());
        assert!(error.to_string().starts_with("Invalid entities:"));
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad format".to_string()).into());
        let err = failure.unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: bad format");
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
