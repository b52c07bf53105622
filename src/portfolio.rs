//! Portfolio description files: the JSON input the CLI consumes.
//!
//! A portfolio lists vendors with their contract attributes, optional
//! readiness assessments, optional inter-vendor dependencies, and a task
//! map keyed by vendor id. Everything else the reports contain is derived.

use crate::core::{MigrationTask, Result, VendorAttributes};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Caller-supplied readiness assessments, all 0-100.
///
/// Lock-in and migration difficulty are intentionally absent: the engine
/// derives both from the vendor's attributes and task set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessAssessment {
    pub data_export_capability: f64,
    pub contract_flexibility: f64,
    pub technical_complexity: f64,
}

/// One vendor entry in a portfolio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioVendor {
    #[serde(flatten)]
    pub attributes: VendorAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness: Option<ReadinessAssessment>,
    /// Ids of vendors this vendor's services depend on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// A full portfolio description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub vendors: Vec<PortfolioVendor>,
    /// Migration tasks keyed by owning vendor id
    #[serde(default)]
    pub tasks: BTreeMap<String, Vec<MigrationTask>>,
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
