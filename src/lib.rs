//! # Billing Core
//!
//! A pure tax calculation engine for GST-compliant retail billing,
//! producing the per-line and whole-bill figures a point-of-sale persists
//! as an immutable audit snapshot on every sale.
//!
//! ## Features
//!
//! - **Line item breakdowns**: Inclusive and exclusive pricing with
//!   CGST/SGST splits and exact minor-unit arithmetic
//! - **Bill aggregation**: Subtotals, service charges with GST on the
//!   charge itself, and a balanced bill-level tax split
//! - **Audit snapshots**: Immutable bill records in the shape callers
//!   persist alongside a sale
//! - **Pure functions only**: No storage, no I/O, no shared state;
//!   identical inputs always produce identical outputs
//!
//! ## Quick Start
//!
//! ```rust
//! use billing_core::{calculate_line, SplitType, TaxConfig};
//! use bigdecimal::BigDecimal;
//!
//! let gst_18 = TaxConfig::new(
//!     "GST 18%".to_string(),
//!     BigDecimal::from(18),
//!     SplitType::HalfSplit,
//!     false,
//! );
//!
//! let line = calculate_line(&BigDecimal::from(100), 2, &gst_18).unwrap();
//! assert_eq!(line.taxable_value, BigDecimal::from(200));
//! assert_eq!(line.tax_amount, BigDecimal::from(36));
//! assert_eq!(line.line_total, BigDecimal::from(236));
//! ```

pub mod snapshot;
pub mod tax;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use snapshot::*;
pub use tax::engine::*;
pub use types::*;
