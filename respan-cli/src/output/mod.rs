//! Output formatting module

use anyhow::Result;
use respan_core::EmojiSpan;
use serde::{Deserialize, Serialize};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rewritten text as is; emoji as tab-separated lines
    #[default]
    Text,
    /// JSON document with metadata
    Json,
}

impl OutputFormat {
    /// All formats with a short description
    pub const ALL: [(OutputFormat, &'static str); 2] = [
        (OutputFormat::Text, "Plain text"),
        (OutputFormat::Json, "JSON with metadata"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Output a rewritten text together with the number of replacements
    fn format_rewrite(&mut self, text: &str, replacements: usize) -> Result<()>;

    /// Output a single emoji span
    fn format_emoji(&mut self, span: &EmojiSpan, emoji: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    pretty_json: bool,
    writer: Box<dyn std::io::Write + 'w>,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
