//! Exit-readiness scoring: a weighted blend of five 0-100 inputs.
//!
//! Three of the five terms are inverted: lower lock-in, lower migration
//! difficulty, and lower technical complexity all mean the organization
//! is more ready to leave. The weights sum to 1.0 against a 100-point
//! scale.

use super::clamp_score;
use crate::core::ReadinessInputs;
use serde::{Deserialize, Serialize};

const LOCK_IN_WEIGHT: f64 = 0.30;
const MIGRATION_WEIGHT: f64 = 0.25;
const DATA_EXPORT_WEIGHT: f64 = 0.20;
const CONTRACT_WEIGHT: f64 = 0.15;
const TECHNICAL_WEIGHT: f64 = 0.10;

/// Per-factor decomposition of an exit-readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessBreakdown {
    /// 0-30, inverted lock-in
    pub lock_in: f64,
    /// 0-25, inverted migration difficulty
    pub migration: f64,
    /// 0-20, data export capability
    pub data_export: f64,
    /// 0-15, contract flexibility
    pub contract: f64,
    /// 0-10, inverted technical complexity
    pub technical: f64,
}

impl ReadinessBreakdown {
    pub fn total(&self) -> f64 {
        clamp_score(self.lock_in + self.migration + self.data_export + self.contract + self.technical)
    }
}

/// Compute the five weighted readiness factors.
pub fn readiness_breakdown(inputs: &ReadinessInputs) -> ReadinessBreakdown {
    ReadinessBreakdown {
        lock_in: (100.0 - inputs.lock_in_score) * LOCK_IN_WEIGHT,
        migration: (100.0 - inputs.migration_difficulty) * MIGRATION_WEIGHT,
        data_export: inputs.data_export_capability * DATA_EXPORT_WEIGHT,
        contract: inputs.contract_flexibility * CONTRACT_WEIGHT,
        technical: (100.0 - inputs.technical_complexity) * TECHNICAL_WEIGHT,
    }
}

/// How prepared the organization is to leave a vendor relationship, 0-100.
pub fn exit_readiness_score(inputs: &ReadinessInputs) -> f64 {
    readiness_breakdown(inputs).total()
}
