//! Exit-readiness bookkeeping and phased exit planning.
//!
//! Mirrors the registry's upsert-and-cache lifecycle for readiness inputs,
//! and derives a four-phase exit plan whose costs fall as readiness rises.

use crate::core::{Error, ReadinessInputs, Result};
use crate::ranking::{rank_descending, RankedEntry};
use crate::scoring::{self, ReadinessBreakdown};
use im::{HashMap, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The stages a vendor exit moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitStage {
    Planning,
    Preparation,
    Migration,
    Exited,
}

impl fmt::Display for ExitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExitStage::Planning => "planning",
            ExitStage::Preparation => "preparation",
            ExitStage::Migration => "migration",
            ExitStage::Exited => "exited",
        };
        write!(f, "{label}")
    }
}

/// One phase of a vendor exit with the estimated effort to enter it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitPhase {
    pub stage: ExitStage,
    pub cost: f64,
}

/// A vendor's full exit route: the four phases and their summed cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitPlan {
    pub vendor_id: String,
    pub phases: Vec<ExitPhase>,
    pub total_cost: f64,
}

#[derive(Debug, Clone)]
struct ReadinessRecord {
    inputs: ReadinessInputs,
    score: f64,
}

/// Keyed store of readiness inputs with cached exit-readiness scores.
#[derive(Debug, Clone, Default)]
pub struct ReadinessRegistry {
    vendors: HashMap<String, ReadinessRecord>,
    insertion_order: Vector<String>,
}

impl ReadinessRegistry {
    pub fn new() -> Self {
        Self {
            vendors: HashMap::new(),
            insertion_order: Vector::new(),
        }
    }

    /// Store or overwrite a vendor's readiness inputs, recompute and cache
    /// the exit-readiness score, and return it.
    pub fn upsert(&mut self, vendor_id: &str, inputs: ReadinessInputs) -> Result<f64> {
        if vendor_id.is_empty() {
            return Err(Error::InvalidVendorId);
        }
        inputs.validate()?;

        let score = scoring::exit_readiness_score(&inputs);
        if !self.vendors.contains_key(vendor_id) {
            self.insertion_order.push_back(vendor_id.to_string());
        }
        self.vendors
            .insert(vendor_id.to_string(), ReadinessRecord { inputs, score });
        Ok(score)
    }

    /// The cached exit-readiness score for a vendor.
    pub fn score(&self, vendor_id: &str) -> Result<f64> {
        self.vendors
            .get(vendor_id)
            .map(|record| record.score)
            .ok_or_else(|| Error::vendor_not_found(vendor_id))
    }

    /// The per-factor breakdown behind a vendor's cached score.
    pub fn breakdown(&self, vendor_id: &str) -> Result<ReadinessBreakdown> {
        self.vendors
            .get(vendor_id)
            .map(|record| scoring::readiness_breakdown(&record.inputs))
            .ok_or_else(|| Error::vendor_not_found(vendor_id))
    }

    pub fn inputs(&self, vendor_id: &str) -> Option<&ReadinessInputs> {
        self.vendors.get(vendor_id).map(|record| &record.inputs)
    }

    pub fn contains(&self, vendor_id: &str) -> bool {
        self.vendors.contains_key(vendor_id)
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Lazy sequence of (id, score) pairs in insertion order.
    pub fn all_scored(&self) -> impl Iterator<Item = (&str, f64)> {
        self.insertion_order.iter().filter_map(move |id| {
            self.vendors
                .get(id)
                .map(|record| (id.as_str(), record.score))
        })
    }

    /// All vendors ranked by exit readiness, most ready first.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        rank_descending(
            self.all_scored()
                .map(|(id, score)| (id.to_string(), score))
                .collect(),
        )
    }

    /// The phased exit route for a vendor.
    ///
    /// Phase costs are derived from the cached scores: getting a plan
    /// together costs what the vendor still lacks in readiness, the two
    /// execution phases track migration difficulty, and the final
    /// contract exit tracks lock-in.
    pub fn exit_plan(&self, vendor_id: &str) -> Result<ExitPlan> {
        let record = self
            .vendors
            .get(vendor_id)
            .ok_or_else(|| Error::vendor_not_found(vendor_id))?;

        let phases = vec![
            ExitPhase {
                stage: ExitStage::Planning,
                cost: 100.0 - record.score,
            },
            ExitPhase {
                stage: ExitStage::Preparation,
                cost: record.inputs.migration_difficulty,
            },
            ExitPhase {
                stage: ExitStage::Migration,
                cost: record.inputs.migration_difficulty * 0.7,
            },
            ExitPhase {
                stage: ExitStage::Exited,
                cost: record.inputs.lock_in_score * 0.5,
            },
        ];
        let total_cost = phases.iter().map(|phase| phase.cost).sum();

        Ok(ExitPlan {
            vendor_id: vendor_id.to_string(),
            phases,
            total_cost,
        })
    }
}
