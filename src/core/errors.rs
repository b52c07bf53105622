//! Shared error types for the library

use thiserror::Error;

/// Convenience alias used throughout the engine
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for vendormap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Vendor identifiers must be non-empty strings
    #[error("invalid vendor id: identifier must be non-empty")]
    InvalidVendorId,

    /// Task identifiers must be non-empty strings
    #[error("invalid task id: identifier must be non-empty")]
    InvalidTaskId,

    /// Attribute validation errors (negative amounts, out-of-range inputs)
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Query against a vendor id that was never submitted
    #[error("vendor not found: {vendor_id}")]
    VendorNotFound { vendor_id: String },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an attribute validation error for a negative field
    pub fn negative_attribute(field: &str) -> Self {
        Self::InvalidAttribute(format!("{field} must be non-negative"))
    }

    /// Create an attribute validation error for an out-of-range 0-100 field
    pub fn out_of_range(field: &str) -> Self {
        Self::InvalidAttribute(format!("{field} must be within 0-100"))
    }

    /// Create a not-found error for the given vendor id
    pub fn vendor_not_found(vendor_id: impl Into<String>) -> Self {
        Self::VendorNotFound {
            vendor_id: vendor_id.into(),
        }
    }
}
