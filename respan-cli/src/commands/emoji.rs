//! Emoji command implementation

use anyhow::Result;
use clap::Args;
use respan_core::{Codepoints, EmojiPattern};
use std::path::PathBuf;

use super::open_output;
use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::{create_formatter, OutputFormat};

/// Arguments for the emoji command
#[derive(Debug, Args)]
pub struct EmojiArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl EmojiArgs {
    /// Execute the emoji command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let text = FileReader::read_input(self.input.as_deref())?;
        let codepoints = Codepoints::new(&text);

        let spans: Vec<_> = EmojiPattern::global()
            .find_iter(codepoints.as_slice())
            .collect();
        log::info!("found {} emoji", spans.len());

        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(
            format,
            config.output.pretty_json,
            open_output(self.output.as_deref())?,
        );
        for span in &spans {
            let emoji = codepoints.substring(span.start, span.start + span.length);
            formatter.format_emoji(span, &emoji)?;
        }
        formatter.finish()
    }
}
