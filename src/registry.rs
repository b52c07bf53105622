//! Vendor registry: attribute storage with derived lock-in scores.
//!
//! The registry owns its records outright: callers create as many
//! independent instances as they need and serialize writes per vendor id
//! themselves if they embed the engine in a concurrent host. The cached
//! lock-in score is recomputed on every write and never independently
//! mutated.

use crate::core::{Error, Result, VendorAttributes};
use crate::scoring::{self, LockInBreakdown};
use im::{HashMap, Vector};

/// Score substituted by [`VendorRegistry::score_or_neutral`] for vendors
/// with no record yet.
pub const NEUTRAL_SCORE: f64 = 50.0;

#[derive(Debug, Clone)]
struct VendorRecord {
    attributes: VendorAttributes,
    score: f64,
}

/// Keyed store of vendor attribute records and inter-vendor dependency
/// edges.
#[derive(Debug, Clone, Default)]
pub struct VendorRegistry {
    vendors: HashMap<String, VendorRecord>,
    insertion_order: Vector<String>,
    dependencies: HashMap<String, Vector<String>>,
}

impl VendorRegistry {
    pub fn new() -> Self {
        Self {
            vendors: HashMap::new(),
            insertion_order: Vector::new(),
            dependencies: HashMap::new(),
        }
    }

    /// Store or overwrite a vendor's attributes, recompute and cache its
    /// lock-in score, and return the new score.
    pub fn upsert(&mut self, attributes: VendorAttributes) -> Result<f64> {
        if attributes.vendor_id.is_empty() {
            return Err(Error::InvalidVendorId);
        }
        attributes.validate()?;

        let score = scoring::lock_in_score(&attributes);
        if !self.vendors.contains_key(&attributes.vendor_id) {
            self.insertion_order.push_back(attributes.vendor_id.clone());
        }
        let vendor_id = attributes.vendor_id.clone();
        self.vendors.insert(vendor_id, VendorRecord { attributes, score });
        Ok(score)
    }

    /// The cached lock-in score for a vendor.
    ///
    /// Fails with [`Error::VendorNotFound`] for unknown ids; callers that
    /// prefer a continuity default use [`Self::score_or_neutral`].
    pub fn score(&self, vendor_id: &str) -> Result<f64> {
        self.vendors
            .get(vendor_id)
            .map(|record| record.score)
            .ok_or_else(|| Error::vendor_not_found(vendor_id))
    }

    /// The cached lock-in score, or [`NEUTRAL_SCORE`] when the vendor has
    /// no record yet.
    pub fn score_or_neutral(&self, vendor_id: &str) -> f64 {
        self.vendors
            .get(vendor_id)
            .map_or(NEUTRAL_SCORE, |record| record.score)
    }

    /// The per-factor breakdown behind a vendor's cached score.
    pub fn breakdown(&self, vendor_id: &str) -> Result<LockInBreakdown> {
        self.vendors
            .get(vendor_id)
            .map(|record| scoring::lock_in_breakdown(&record.attributes))
            .ok_or_else(|| Error::vendor_not_found(vendor_id))
    }

    pub fn attributes(&self, vendor_id: &str) -> Option<&VendorAttributes> {
        self.vendors.get(vendor_id).map(|record| &record.attributes)
    }

    pub fn contains(&self, vendor_id: &str) -> bool {
        self.vendors.contains_key(vendor_id)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Lazy sequence of (id, score, display name) triples in insertion
    /// order. Ranking is the caller's concern.
    pub fn all_scored(&self) -> impl Iterator<Item = (&str, f64, &str)> {
        self.insertion_order.iter().filter_map(move |id| {
            self.vendors.get(id).map(|record| {
                (
                    id.as_str(),
                    record.score,
                    record.attributes.display_name.as_str(),
                )
            })
        })
    }

    /// Record a directed dependency edge between two vendors. Ids need not
    /// be registered; unknown ids become graph-only vertices.
    pub fn add_dependency(&mut self, from: &str, to: &str) -> Result<()> {
        if from.is_empty() || to.is_empty() {
            return Err(Error::InvalidVendorId);
        }
        if !self.dependencies.contains_key(from) {
            self.dependencies.insert(from.to_string(), Vector::new());
        }
        if let Some(edges) = self.dependencies.get_mut(from) {
            if !edges.contains(&to.to_string()) {
                edges.push_back(to.to_string());
            }
        }
        Ok(())
    }

    /// Every vendor reachable from `vendor_id` through dependency edges,
    /// depth-first in edge insertion order. The starting vendor itself is
    /// not included.
    pub fn dependency_closure(&self, vendor_id: &str) -> Vec<String> {
        let mut visited: std::collections::HashSet<&str> = std::collections::HashSet::new();
        let mut closure: Vec<String> = Vec::new();
        let mut stack: Vec<&str> = Vec::new();
        visited.insert(vendor_id);

        if let Some(edges) = self.dependencies.get(vendor_id) {
            for edge in edges.iter().rev() {
                stack.push(edge.as_str());
            }
        }

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            closure.push(current.to_string());
            if let Some(edges) = self.dependencies.get(current) {
                for edge in edges.iter().rev() {
                    if !visited.contains(edge.as_str()) {
                        stack.push(edge.as_str());
                    }
                }
            }
        }

        closure
    }
}
