use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Which derived score a ranking is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankBy {
    /// Lock-in score, highest risk first
    LockIn,
    /// Exit-readiness score, most ready first
    Readiness,
}

#[derive(Parser, Debug)]
#[command(name = "vendormap")]
#[command(about = "Vendor lock-in and migration analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a vendor portfolio file
    Analyze {
        /// Path to the portfolio JSON file
        path: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Limit rankings to the top N vendors
        #[arg(long)]
        top: Option<usize>,

        /// Configuration file (defaults to ./.vendormap.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Rank portfolio vendors by a single score
    Rank {
        /// Path to the portfolio JSON file
        path: PathBuf,

        /// Score to rank by
        #[arg(long, value_enum, default_value = "lock-in")]
        by: RankBy,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Limit the ranking to the top N vendors
        #[arg(long)]
        top: Option<usize>,

        /// Configuration file (defaults to ./.vendormap.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Initialize a vendormap configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_parses_with_defaults() {
        let cli = Cli::try_parse_from(["vendormap", "analyze", "portfolio.json"]).unwrap();
        match cli.command {
            Commands::Analyze { path, format, .. } => {
                assert_eq!(path, PathBuf::from("portfolio.json"));
                assert!(format.is_none());
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn rank_accepts_kebab_case_score_names() {
        let cli =
            Cli::try_parse_from(["vendormap", "rank", "p.json", "--by", "readiness"]).unwrap();
        match cli.command {
            Commands::Rank { by, .. } => assert_eq!(by, RankBy::Readiness),
            _ => panic!("expected rank command"),
        }
    }
}
