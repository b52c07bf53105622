//! Report writers for the supported output formats.

use crate::ranking::RankedEntry;
use crate::report::{PortfolioReport, VendorReport};
use clap::ValueEnum;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "markdown" => Ok(Self::Markdown),
            "terminal" => Ok(Self::Terminal),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &PortfolioReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &PortfolioReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &PortfolioReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Vendor Portfolio Analysis")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_vendor(&mut self, vendor: &VendorReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "## {} ({})",
            vendor.display_name, vendor.vendor_id
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Lock-in score | {:.2}{} |",
            vendor.lock_in_score,
            if vendor.high_lock_in { " ⚠" } else { "" }
        )?;
        writeln!(
            self.writer,
            "| Migration difficulty | {:.2} |",
            vendor.migration_difficulty
        )?;
        writeln!(self.writer, "| Total days | {} |", vendor.total_days)?;
        if let Some(readiness) = &vendor.readiness {
            writeln!(
                self.writer,
                "| Exit readiness | {:.2}{} |",
                readiness.score,
                if readiness.low_readiness { " ⚠" } else { "" }
            )?;
        }
        writeln!(self.writer)?;

        if !vendor.execution_order.sequence.is_empty() {
            writeln!(
                self.writer,
                "Execution order: {}",
                vendor.execution_order.sequence.join(" → ")
            )?;
            if !vendor.execution_order.is_reliable() {
                writeln!(
                    self.writer,
                    "*Order is partial: unresolved {:?}, dangling {:?}*",
                    vendor.execution_order.unresolved, vendor.execution_order.dangling
                )?;
            }
            writeln!(self.writer)?;
        }
        if !vendor.critical_path.is_empty() {
            writeln!(
                self.writer,
                "Critical path: {}",
                vendor.critical_path.join(" → ")
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_ranking(&mut self, title: &str, ranking: &[RankedEntry]) -> anyhow::Result<()> {
        if ranking.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rank | Vendor | Score |")?;
        writeln!(self.writer, "|------|--------|-------|")?;
        for entry in ranking {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} |",
                entry.rank, entry.id, entry.score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &PortfolioReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        for vendor in &report.vendors {
            self.write_vendor(vendor)?;
        }
        self.write_ranking("Lock-in ranking", &report.lock_in_ranking)?;
        self.write_ranking("Exit-readiness ranking", &report.readiness_ranking)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_vendor(&mut self, vendor: &VendorReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            vendor.display_name.bold(),
            format!("({})", vendor.vendor_id).dimmed()
        )?;

        let lock_in = format!("{:.2}", vendor.lock_in_score);
        let lock_in = if vendor.high_lock_in {
            lock_in.red().to_string()
        } else {
            lock_in.green().to_string()
        };
        writeln!(self.writer, "  Lock-in score:        {lock_in}")?;
        writeln!(
            self.writer,
            "  Migration difficulty: {:.2}",
            vendor.migration_difficulty
        )?;
        writeln!(self.writer, "  Total days:           {}", vendor.total_days)?;

        if let Some(readiness) = &vendor.readiness {
            let score = format!("{:.2}", readiness.score);
            let score = if readiness.low_readiness {
                score.red().to_string()
            } else {
                score.green().to_string()
            };
            writeln!(self.writer, "  Exit readiness:       {score}")?;
        }

        if !vendor.execution_order.sequence.is_empty() {
            writeln!(
                self.writer,
                "  Sequence: {}",
                vendor.execution_order.sequence.join(" → ")
            )?;
            if !vendor.execution_order.is_reliable() {
                writeln!(
                    self.writer,
                    "  {} unresolved {:?}, dangling {:?}",
                    "partial order:".yellow(),
                    vendor.execution_order.unresolved,
                    vendor.execution_order.dangling
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ranking(&mut self, title: &str, ranking: &[RankedEntry]) -> anyhow::Result<()> {
        if ranking.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", title.bold().blue())?;
        for entry in ranking {
            writeln!(
                self.writer,
                "  {:>3}. {:<20} {:.2}",
                entry.rank, entry.id, entry.score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &PortfolioReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Vendor Portfolio Analysis".bold().blue())?;
        writeln!(self.writer, "{}", "=========================".blue())?;
        writeln!(self.writer)?;
        for vendor in &report.vendors {
            self.write_vendor(vendor)?;
        }
        self.write_ranking("Lock-in ranking (highest risk first)", &report.lock_in_ranking)?;
        self.write_ranking(
            "Exit-readiness ranking (most ready first)",
            &report.readiness_ranking,
        )?;
        Ok(())
    }
}

/// Build a writer for the requested format, targeting a file when an
/// output path is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    })
}
