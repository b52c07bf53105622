use anyhow::Result;
use clap::Parser;
use vendormap::cli::{Cli, Commands};
use vendormap::commands::{self, AnalyzeConfig, RankConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            top,
            config,
        } => commands::handle_analyze(AnalyzeConfig {
            path,
            format,
            output,
            top,
            config,
        }),
        Commands::Rank {
            path,
            by,
            format,
            output,
            top,
            config,
        } => commands::handle_rank(RankConfig {
            path,
            by,
            format,
            output,
            top,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
