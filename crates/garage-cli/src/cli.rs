//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "parking-garage")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Track vehicles parked in a fixed-capacity garage")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: Config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Price list file (default: Pricelist.json)
    #[arg(long, global = true)]
    pub prices: Option<PathBuf>,

    /// Output format (json, table)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu (default)
    Run,

    /// Show the loaded configuration and price list
    Config,

    /// Calculate the fee for a stay without parking anything
    Fee {
        /// Vehicle category code (CAR, MC)
        #[arg(long, short = 'c')]
        category: String,

        /// Length of the stay in minutes
        #[arg(long, short = 'm')]
        minutes: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_menu() {
        let cli = Cli::try_parse_from(["parking-garage"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_fee_subcommand() {
        let cli = Cli::try_parse_from([
            "parking-garage",
            "--prices",
            "prices.toml",
            "fee",
            "-c",
            "CAR",
            "-m",
            "65",
        ])
        .unwrap();
        assert_eq!(cli.prices, Some(PathBuf::from("prices.toml")));
        match cli.command {
            Some(Commands::Fee { category, minutes }) => {
                assert_eq!(category, "CAR");
                assert_eq!(minutes, 65);
            }
            _ => panic!("expected fee command"),
        }
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["parking-garage", "run", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
