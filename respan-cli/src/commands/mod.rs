//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use respan_core::emoji::{EmojiCategory, EMOJI_VERSION};

use crate::output::OutputFormat;

pub mod emoji;
pub mod rewrite;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite mentions, hashtags, URLs and emoji in text
    Rewrite(rewrite::RewriteArgs),

    /// List the emoji sequences found in text
    Emoji(emoji::EmojiArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List emoji categories
    Categories,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Rewrite(args) => args.execute(),
            Commands::Emoji(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = io::stdout();
                subcommand.write_to(&mut stdout.lock())
            }
        }
    }
}

impl ListCommands {
    /// Write the listing to `out`
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Categories => {
                writeln!(out, "Emoji categories (emoji data {EMOJI_VERSION}):")?;
                for category in EmojiCategory::ALL {
                    writeln!(out, "  {:<20} {}", category.as_str(), describe(category))?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                for (format, description) in OutputFormat::ALL {
                    writeln!(out, "  {:<20} {}", format.as_str(), description)?;
                }
            }
        }
        Ok(())
    }
}

fn describe(category: EmojiCategory) -> &'static str {
    match category {
        EmojiCategory::ZwjSequence => "Sequences joined by U+200D",
        EmojiCategory::Keycap => "Keycaps such as 3\u{FE0F}\u{20E3}",
        EmojiCategory::Flag => "Regional indicator pairs and tag flags",
        EmojiCategory::Modifier => "Emoji with an optional skin tone",
        EmojiCategory::Presentation => "Single codepoint emoji",
        EmojiCategory::VariationSelector => "A lone U+FE0F",
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()?;
    }

    Ok(())
}

/// Writer for `path`, or stdout when none is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
