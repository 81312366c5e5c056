//! respan command-line entry point

use anyhow::Result;
use clap::Parser;
use respan_cli::commands::{self, Commands};

#[derive(Debug, Parser)]
#[command(name = "respan", version, about = "Rewrite entities and emoji in text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose, cli.quiet)?;
    log::debug!("Arguments: {:?}", cli);

    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["respan", "emoji", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }
}
