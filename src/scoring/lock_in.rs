//! Lock-in scoring: six independently capped contract and integration
//! factors summed onto the 0-100 scale.

use super::clamp_score;
use crate::core::VendorAttributes;
use serde::{Deserialize, Serialize};

/// Per-factor decomposition of a lock-in score.
///
/// The factor caps sum to 100, so `total()` only clamps defensively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LockInBreakdown {
    /// 0-25, scales with annual contract value (saturates at $5M)
    pub contract_value: f64,
    /// 0-20, saturates at 36 months
    pub contract_duration: f64,
    /// 0-15, saturates at 1000 GB
    pub data_volume: f64,
    /// 0-15, saturates at 10 integrations
    pub api_dependencies: f64,
    /// 10 when a custom integration exists, otherwise 0
    pub custom_integration: f64,
    /// 0-15, switching cost relative to contract value
    pub switching_cost: f64,
}

impl LockInBreakdown {
    pub fn total(&self) -> f64 {
        clamp_score(
            self.contract_value
                + self.contract_duration
                + self.data_volume
                + self.api_dependencies
                + self.custom_integration
                + self.switching_cost,
        )
    }
}

/// Compute the six lock-in factors for a vendor.
pub fn lock_in_breakdown(attrs: &VendorAttributes) -> LockInBreakdown {
    let contract_value = (attrs.contract_value / 1_000_000.0 * 5.0).min(25.0);
    let contract_duration = (f64::from(attrs.contract_months) / 36.0 * 20.0).min(20.0);
    let data_volume = (attrs.data_volume_gb / 1000.0 * 15.0).min(15.0);
    let api_dependencies = (f64::from(attrs.api_dependencies) / 10.0 * 15.0).min(15.0);
    let custom_integration = if attrs.has_custom_integration {
        10.0
    } else {
        0.0
    };
    // A zero-value contract contributes nothing here; the ratio is undefined.
    let switching_cost = if attrs.contract_value > 0.0 {
        (attrs.switching_cost / attrs.contract_value * 15.0).min(15.0)
    } else {
        0.0
    };

    LockInBreakdown {
        contract_value,
        contract_duration,
        data_volume,
        api_dependencies,
        custom_integration,
        switching_cost,
    }
}

/// How contractually and technically entangled the organization is with a
/// vendor, 0-100.
///
/// # Examples
///
/// ```
/// use vendormap::core::VendorAttributes;
/// use vendormap::scoring::lock_in_score;
///
/// let mut attrs = VendorAttributes::new("AWS-001", "Amazon Web Services");
/// attrs.contract_value = 500_000.0;
/// attrs.contract_months = 36;
/// attrs.data_volume_gb = 15_000.0;
/// attrs.api_dependencies = 25;
/// attrs.has_custom_integration = true;
/// attrs.switching_cost = 75_000.0;
///
/// assert_eq!(lock_in_score(&attrs), 64.75);
/// ```
pub fn lock_in_score(attrs: &VendorAttributes) -> f64 {
    lock_in_breakdown(attrs).total()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_factor_saturates_at_its_cap() {
        let mut attrs = VendorAttributes::new("V-1", "Everything Corp");
        attrs.contract_value = 100_000_000.0;
        attrs.contract_months = 600;
        attrs.data_volume_gb = 1_000_000.0;
        attrs.api_dependencies = 10_000;
        attrs.has_custom_integration = true;
        attrs.switching_cost = 100_000_000.0;

        let breakdown = lock_in_breakdown(&attrs);
        assert_eq!(breakdown.contract_value, 25.0);
        assert_eq!(breakdown.contract_duration, 20.0);
        assert_eq!(breakdown.data_volume, 15.0);
        assert_eq!(breakdown.api_dependencies, 15.0);
        assert_eq!(breakdown.custom_integration, 10.0);
        assert_eq!(breakdown.switching_cost, 15.0);
        assert_eq!(breakdown.total(), 100.0);
    }

    #[test]
    fn zero_contract_value_contributes_no_switching_factor() {
        let mut attrs = VendorAttributes::new("V-2", "Free Tier Inc");
        attrs.switching_cost = 50_000.0;

        let breakdown = lock_in_breakdown(&attrs);
        assert_eq!(breakdown.switching_cost, 0.0);
        assert_eq!(breakdown.total(), 0.0);
    }

    #[test]
    fn empty_attributes_score_zero() {
        let attrs = VendorAttributes::new("V-3", "Nobody");
        assert_eq!(lock_in_score(&attrs), 0.0);
    }
}
