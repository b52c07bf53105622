//! Aggregated portfolio report consumed by the output writers.

use crate::analyzer::TaskPriority;
use crate::graph::ExecutionOrder;
use crate::ranking::RankedEntry;
use crate::readiness::ExitPlan;
use crate::scoring::{LockInBreakdown, ReadinessBreakdown};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Readiness slice of a vendor report; present only when the portfolio
/// supplied a readiness assessment for the vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub score: f64,
    pub breakdown: ReadinessBreakdown,
    /// Flagged by the configured low-readiness threshold
    pub low_readiness: bool,
    pub exit_plan: ExitPlan,
}

/// Everything the engine derived for one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorReport {
    pub vendor_id: String,
    pub display_name: String,
    pub lock_in_score: f64,
    pub lock_in_breakdown: LockInBreakdown,
    /// Flagged by the configured high-lock-in threshold
    pub high_lock_in: bool,
    pub migration_difficulty: f64,
    pub total_days: u32,
    pub execution_order: ExecutionOrder,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critical_path: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prioritized_tasks: Vec<TaskPriority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependency_closure: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness: Option<ReadinessReport>,
}

/// The full analysis of a portfolio at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub generated_at: DateTime<Utc>,
    pub vendors: Vec<VendorReport>,
    pub lock_in_ranking: Vec<RankedEntry>,
    /// Empty when no vendor carries a readiness assessment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub readiness_ranking: Vec<RankedEntry>,
}

impl PortfolioReport {
    /// Vendors flagged against either configured threshold.
    pub fn flagged(&self) -> impl Iterator<Item = &VendorReport> {
        self.vendors.iter().filter(|vendor| {
            vendor.high_lock_in
                || vendor
                    .readiness
                    .as_ref()
                    .is_some_and(|readiness| readiness.low_readiness)
        })
    }
}
