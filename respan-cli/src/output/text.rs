//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use respan_core::EmojiSpan;
use std::io::Write;

/// Plain text formatter
///
/// Rewritten text is written unchanged; emoji spans become one
/// `start<TAB>length<TAB>category<TAB>emoji` line each.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_rewrite(&mut self, text: &str, _replacements: usize) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn format_emoji(&mut self, span: &EmojiSpan, emoji: &str) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            span.start, span.length, span.category, emoji
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
