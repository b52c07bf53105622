//! Core data model shared across the engine.
//!
//! Every analysis consumes one of three record types: contract attributes
//! for a vendor, readiness inputs for a vendor, or a migration task owned
//! by a vendor's task set. Records are plain values; derived scores live
//! with the stores that compute them, never on the records themselves.

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};

/// Raw contract and integration attributes for a single vendor.
///
/// Attributes are immutable until overwritten: re-submitting a vendor id
/// replaces the whole record and forces a score recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorAttributes {
    pub vendor_id: String,
    pub display_name: String,
    /// Annual contract value in the portfolio's currency
    pub contract_value: f64,
    pub contract_months: u32,
    pub data_volume_gb: f64,
    /// Count of API integrations depending on this vendor
    pub api_dependencies: u32,
    pub has_custom_integration: bool,
    /// Estimated one-off cost of switching away
    pub switching_cost: f64,
}

impl VendorAttributes {
    pub fn new(vendor_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            display_name: display_name.into(),
            contract_value: 0.0,
            contract_months: 0,
            data_volume_gb: 0.0,
            api_dependencies: 0,
            has_custom_integration: false,
            switching_cost: 0.0,
        }
    }

    /// Check that every currency/volume field is non-negative and finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.contract_value >= 0.0 && self.contract_value.is_finite()) {
            return Err(Error::negative_attribute("contract_value"));
        }
        if !(self.data_volume_gb >= 0.0 && self.data_volume_gb.is_finite()) {
            return Err(Error::negative_attribute("data_volume_gb"));
        }
        if !(self.switching_cost >= 0.0 && self.switching_cost.is_finite()) {
            return Err(Error::negative_attribute("switching_cost"));
        }
        Ok(())
    }
}

/// Inputs for the exit-readiness computation, all on a 0-100 scale.
///
/// `lock_in_score` and `migration_difficulty` are usually derived by the
/// engine from the vendor's attributes and task set; the remaining three
/// are caller-supplied assessments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessInputs {
    pub lock_in_score: f64,
    pub migration_difficulty: f64,
    pub data_export_capability: f64,
    pub contract_flexibility: f64,
    pub technical_complexity: f64,
}

impl ReadinessInputs {
    /// Check that every input sits within the 0-100 scale.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("lock_in_score", self.lock_in_score),
            ("migration_difficulty", self.migration_difficulty),
            ("data_export_capability", self.data_export_capability),
            ("contract_flexibility", self.contract_flexibility),
            ("technical_complexity", self.technical_complexity),
        ];
        for (name, value) in fields {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::out_of_range(name));
            }
        }
        Ok(())
    }
}

/// A single migration task inside one vendor's task set.
///
/// `task_id` is unique within the owning vendor only. `difficulty` is
/// intended to sit in 1-10 but the model does not enforce it; callers
/// validate where a hard range matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationTask {
    pub task_id: String,
    pub name: String,
    pub difficulty: u8,
    pub estimated_days: u32,
    /// Ids of tasks in the same vendor's set that must complete first
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl MigrationTask {
    pub fn new(
        task_id: impl Into<String>,
        name: impl Into<String>,
        difficulty: u8,
        estimated_days: u32,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            name: name.into(),
            difficulty,
            estimated_days,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}
