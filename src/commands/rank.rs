//! The `rank` command: a single ranking table without the full report.

use crate::cli::RankBy;
use crate::io::output::OutputFormat;
use crate::portfolio::Portfolio;
use crate::ranking::RankedEntry;
use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use super::analyze::{analyze_portfolio, resolve_config, resolve_format};

pub struct RankConfig {
    pub path: PathBuf,
    pub by: RankBy,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RankingDocument {
    by: &'static str,
    entries: Vec<RankedEntry>,
}

pub fn handle_rank(cfg: RankConfig) -> anyhow::Result<()> {
    let config = resolve_config(cfg.config.as_deref())?;
    let portfolio = Portfolio::load(&cfg.path)
        .with_context(|| format!("failed to load portfolio from {}", cfg.path.display()))?;
    let report = analyze_portfolio(&portfolio, &config)?;

    let (by, mut entries) = match cfg.by {
        RankBy::LockIn => ("lock-in", report.lock_in_ranking),
        RankBy::Readiness => ("readiness", report.readiness_ranking),
    };
    if let Some(top) = cfg.top {
        entries.truncate(top);
    }

    let format = resolve_format(cfg.format, &config)?;
    let mut writer: Box<dyn Write> = match cfg.output.as_deref() {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    match format {
        OutputFormat::Json => {
            let document = RankingDocument { by, entries };
            let json = serde_json::to_string_pretty(&document)?;
            writeln!(writer, "{json}")?;
        }
        OutputFormat::Markdown => {
            writeln!(writer, "# Vendor ranking by {by}")?;
            writeln!(writer)?;
            writeln!(writer, "| Rank | Vendor | Score |")?;
            writeln!(writer, "|------|--------|-------|")?;
            for entry in &entries {
                writeln!(writer, "| {} | {} | {:.2} |", entry.rank, entry.id, entry.score)?;
            }
        }
        OutputFormat::Terminal => {
            writeln!(writer, "{}", format!("Vendor ranking by {by}").bold().blue())?;
            for entry in &entries {
                writeln!(writer, "  {:>3}. {:<20} {:.2}", entry.rank, entry.id, entry.score)?;
            }
        }
    }
    Ok(())
}
