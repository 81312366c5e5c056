//! Text input from files or stdin

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::CliError;

/// Reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of `reader` as UTF-8 text
    pub fn read_from(mut reader: impl Read) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read input as UTF-8")?;
        Ok(content)
    }

    /// Read `path`, or stdin when no path (or `-`) is given
    pub fn read_input(path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) if path != Path::new("-") => Self::read_text(path),
            _ => {
                log::debug!("reading input from stdin");
                Self::read_from(io::stdin().lock())
            }
        }
    }
}
