//! The `analyze` command: load a portfolio, run every analysis, render a
//! report.

use crate::analyzer::MigrationAnalyzer;
use crate::config::VendormapConfig;
use crate::core::{ReadinessInputs, Result};
use crate::io::output::{create_writer, OutputFormat};
use crate::portfolio::Portfolio;
use crate::ranking::rank_descending;
use crate::readiness::ReadinessRegistry;
use crate::registry::VendorRegistry;
use crate::report::{PortfolioReport, ReadinessReport, VendorReport};
use anyhow::Context;
use chrono::Utc;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(cfg: AnalyzeConfig) -> anyhow::Result<()> {
    let config = resolve_config(cfg.config.as_deref())?;
    let portfolio = Portfolio::load(&cfg.path)
        .with_context(|| format!("failed to load portfolio from {}", cfg.path.display()))?;

    let mut report = analyze_portfolio(&portfolio, &config)?;
    if let Some(top) = cfg.top {
        report.lock_in_ranking.truncate(top);
        report.readiness_ranking.truncate(top);
    }

    let format = resolve_format(cfg.format, &config)?;
    let mut writer = create_writer(format, cfg.output.as_deref())?;
    writer.write_report(&report)
}

pub(crate) fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<VendormapConfig> {
    let config = match explicit {
        Some(path) => VendormapConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => VendormapConfig::load_or_default(Path::new("."))?,
    };
    Ok(config)
}

pub(crate) fn resolve_format(
    explicit: Option<OutputFormat>,
    config: &VendormapConfig,
) -> anyhow::Result<OutputFormat> {
    match explicit {
        Some(format) => Ok(format),
        None => config
            .output
            .default_format
            .parse()
            .map_err(anyhow::Error::msg),
    }
}

/// Run every analysis over a portfolio and assemble the report.
///
/// This is the whole engine pipeline: registry upserts with derived
/// lock-in scores, per-vendor task graphs with deterministic scheduling,
/// readiness scores where the portfolio supplies an assessment, and both
/// rankings.
pub fn analyze_portfolio(
    portfolio: &Portfolio,
    config: &VendormapConfig,
) -> Result<PortfolioReport> {
    let mut registry = VendorRegistry::new();
    let mut analyzer = MigrationAnalyzer::new();
    let mut readiness_registry = ReadinessRegistry::new();

    for vendor in &portfolio.vendors {
        registry.upsert(vendor.attributes.clone())?;
        for target in &vendor.depends_on {
            registry.add_dependency(&vendor.attributes.vendor_id, target)?;
        }
    }

    for (vendor_id, tasks) in &portfolio.tasks {
        if !registry.contains(vendor_id) {
            log::warn!("task set for unknown vendor id {vendor_id} is analyzed but unreported");
        }
        for task in tasks {
            analyzer.add_task(vendor_id, task.clone())?;
        }
    }

    for vendor in &portfolio.vendors {
        let Some(assessment) = vendor.readiness else {
            continue;
        };
        let vendor_id = vendor.attributes.vendor_id.as_str();
        let inputs = ReadinessInputs {
            lock_in_score: registry.score(vendor_id)?,
            migration_difficulty: analyzer.difficulty_score(vendor_id),
            data_export_capability: assessment.data_export_capability,
            contract_flexibility: assessment.contract_flexibility,
            technical_complexity: assessment.technical_complexity,
        };
        readiness_registry.upsert(vendor_id, inputs)?;
    }

    let mut vendors = Vec::with_capacity(portfolio.vendors.len());
    for vendor in &portfolio.vendors {
        let vendor_id = vendor.attributes.vendor_id.as_str();
        let lock_in_score = registry.score(vendor_id)?;
        let execution_order = analyzer.optimal_sequence(vendor_id);
        if !execution_order.is_reliable() {
            log::warn!(
                "execution order for {vendor_id} is partial: {} unresolved, {} dangling",
                execution_order.unresolved.len(),
                execution_order.dangling.len()
            );
        }

        let readiness = match readiness_registry.score(vendor_id) {
            Ok(score) => Some(ReadinessReport {
                score,
                breakdown: readiness_registry.breakdown(vendor_id)?,
                low_readiness: score <= config.thresholds.low_readiness,
                exit_plan: readiness_registry.exit_plan(vendor_id)?,
            }),
            Err(_) => None,
        };

        vendors.push(VendorReport {
            vendor_id: vendor_id.to_string(),
            display_name: vendor.attributes.display_name.clone(),
            lock_in_score,
            lock_in_breakdown: registry.breakdown(vendor_id)?,
            high_lock_in: lock_in_score >= config.thresholds.high_lock_in,
            migration_difficulty: analyzer.difficulty_score(vendor_id),
            total_days: analyzer.total_days(vendor_id),
            execution_order,
            critical_path: analyzer.critical_path(vendor_id),
            prioritized_tasks: analyzer.prioritized_tasks(vendor_id),
            dependency_closure: registry.dependency_closure(vendor_id),
            readiness,
        });
    }

    let lock_in_ranking = rank_descending(
        registry
            .all_scored()
            .map(|(id, score, _)| (id.to_string(), score))
            .collect(),
    );
    let readiness_ranking = readiness_registry.ranked();

    log::info!(
        "analyzed {} vendors, {} with readiness assessments",
        vendors.len(),
        readiness_ranking.len()
    );

    Ok(PortfolioReport {
        generated_at: Utc::now(),
        vendors,
        lock_in_ranking,
        readiness_ranking,
    })
}
