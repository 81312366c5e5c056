//! JSON output formatter

use super::OutputFormatter;
use crate::templates::codepoint_list;
use anyhow::Result;
use respan_core::{EmojiCategory, EmojiSpan};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects records and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    rewrites: Vec<RewriteData>,
    emoji: Vec<EmojiData>,
}

/// A rewritten text
#[derive(Debug, Serialize, Deserialize)]
pub struct RewriteData {
    /// The rewritten text
    pub text: String,
    /// Number of entities replaced
    pub replacements: usize,
}

/// One emoji span
#[derive(Debug, Serialize, Deserialize)]
pub struct EmojiData {
    /// Starting codepoint index
    pub start: usize,
    /// Length in codepoints
    pub length: usize,
    pub category: EmojiCategory,
    pub emoji: String,
    /// Codepoints as `U+XXXX`
    pub codepoints: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            rewrites: Vec::new(),
            emoji: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_rewrite(&mut self, text: &str, replacements: usize) -> Result<()> {
        self.rewrites.push(RewriteData {
            text: text.to_string(),
            replacements,
        });
        Ok(())
    }

    fn format_emoji(&mut self, span: &EmojiSpan, emoji: &str) -> Result<()> {
        self.emoji.push(EmojiData {
            start: span.start,
            length: span.length,
            category: span.category,
            emoji: emoji.to_string(),
            codepoints: codepoint_list(emoji),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let rewrites = std::mem::take(&mut self.rewrites);
        let emoji = std::mem::take(&mut self.emoji);

        match rewrites.as_slice() {
            [single] => self.write_value(single)?,
            [] => self.write_value(&emoji)?,
            _ => self.write_value(&rewrites)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
