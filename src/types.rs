//! Core types and data structures for the tax calculation engine

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// How a tax amount is divided between reporting components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitType {
    /// Equal CGST/SGST split for intra-state Indian GST
    HalfSplit,
    /// Entire tax reported under a single component
    NoSplit,
}

/// Tax configuration for a product or a service charge
///
/// Supplied fresh by the caller for every calculation. The engine never
/// caches or mutates a configuration, so changing a tax group later can
/// never alter bills that were already calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Human-readable tax group name (e.g. "GST 18%")
    pub name: String,
    /// Total tax rate percentage (e.g. 18.0 for 18%)
    pub rate: BigDecimal,
    /// How the calculated tax is split between components
    pub split_type: SplitType,
    /// Whether supplied unit prices already contain tax
    pub inclusive: bool,
}

impl TaxConfig {
    /// Create a new tax configuration
    pub fn new(name: String, rate: BigDecimal, split_type: SplitType, inclusive: bool) -> Self {
        Self {
            name,
            rate,
            split_type,
            inclusive,
        }
    }
}

/// Errors that can occur in the tax engine
#[derive(Debug, thiserror::Error)]
pub enum TaxError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for tax engine operations
pub type TaxResult<T> = Result<T, TaxError>;
