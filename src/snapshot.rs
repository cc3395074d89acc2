//! Immutable bill snapshot records
//!
//! A billing orchestrator resolves prices and tax configurations, runs the
//! calculators, and persists the resulting figures verbatim as an audit
//! record attached to the sale. Later queries and reports read only these
//! snapshots; tax is never recomputed retroactively, so a product's tax
//! configuration can change without altering historical bills.
//!
//! Assembly is pure: identifiers and timestamps are supplied by the
//! caller, so identical inputs always produce identical records.

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tax::engine::{BillSummary, LineTaxResult};

/// Payment method recorded on a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Cash,
    Upi,
    Card,
}

/// Snapshot of a single sold line, persisted with the bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItemSnapshot {
    /// Product the line was sold against
    pub product_id: Uuid,
    /// Product name at the time of sale
    pub product_name: String,
    /// Quantity sold
    pub quantity: i64,
    /// Unit price as charged (inclusive or exclusive per the tax group)
    pub unit_price: BigDecimal,
    /// Pre-tax value attributable to the line
    pub taxable_value: BigDecimal,
    /// Total tax for the line
    pub tax_amount: BigDecimal,
    /// Central GST component
    pub cgst_amount: BigDecimal,
    /// State GST component
    pub sgst_amount: BigDecimal,
    /// Final payable amount for the line
    pub line_total: BigDecimal,
}

impl BillItemSnapshot {
    /// Snapshot a calculated line against the product it was sold for
    pub fn from_line(
        product_id: Uuid,
        product_name: String,
        quantity: i64,
        unit_price: BigDecimal,
        line: &LineTaxResult,
    ) -> Self {
        Self {
            product_id,
            product_name,
            quantity,
            unit_price,
            taxable_value: line.taxable_value.clone(),
            tax_amount: line.tax_amount.clone(),
            cgst_amount: line.cgst_amount.clone(),
            sgst_amount: line.sgst_amount.clone(),
            line_total: line.line_total.clone(),
        }
    }
}

/// Complete bill snapshot persisted at the time of sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSnapshot {
    /// Unique bill identifier
    pub id: Uuid,
    /// Human-readable bill number
    pub bill_number: String,
    /// How the bill was paid
    pub payment_method: PaymentMethod,
    /// Itemized lines with their tax breakdowns
    pub items: Vec<BillItemSnapshot>,
    /// Sum of all line taxable values
    pub subtotal: BigDecimal,
    /// Service charge levied on the subtotal
    pub service_charge_amount: BigDecimal,
    /// Item tax plus GST on the service charge
    pub total_tax: BigDecimal,
    /// Central GST share of the total tax
    pub total_cgst: BigDecimal,
    /// State GST share of the total tax
    pub total_sgst: BigDecimal,
    /// Final bill total
    pub total_amount: BigDecimal,
    /// When the sale happened
    pub created_at: NaiveDateTime,
}

impl BillSnapshot {
    /// Assemble the record a caller persists alongside the sale
    pub fn assemble(
        id: Uuid,
        bill_number: String,
        payment_method: PaymentMethod,
        items: Vec<BillItemSnapshot>,
        summary: &BillSummary,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            bill_number,
            payment_method,
            items,
            subtotal: summary.subtotal.clone(),
            service_charge_amount: summary.service_charge_amount.clone(),
            total_tax: summary.total_tax.clone(),
            total_cgst: summary.total_cgst.clone(),
            total_sgst: summary.total_sgst.clone(),
            total_amount: summary.total_amount.clone(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::engine::{aggregate_bill, calculate_line};
    use crate::types::{SplitType, TaxConfig};

    fn dec(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_snapshot_carries_summary_fields_verbatim() {
        let config = TaxConfig::new(
            "GST 18%".to_string(),
            BigDecimal::from(18),
            SplitType::HalfSplit,
            false,
        );
        let line = calculate_line(&dec("100.00"), 2, &config).unwrap();
        let summary = aggregate_bill(
            &[line.clone()],
            false,
            &BigDecimal::from(0),
            None,
        )
        .unwrap();

        let item = BillItemSnapshot::from_line(
            Uuid::new_v4(),
            "Masala Dosa".to_string(),
            2,
            dec("100.00"),
            &line,
        );
        let snapshot = BillSnapshot::assemble(
            Uuid::new_v4(),
            "BILL-0001".to_string(),
            PaymentMethod::Upi,
            vec![item],
            &summary,
            chrono::NaiveDate::from_ymd_opt(2024, 4, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
        );

        assert_eq!(snapshot.subtotal, summary.subtotal);
        assert_eq!(snapshot.total_tax, summary.total_tax);
        assert_eq!(snapshot.total_amount, summary.total_amount);
        assert_eq!(snapshot.items[0].taxable_value, line.taxable_value);
        assert_eq!(snapshot.items[0].line_total, line.line_total);
    }

    #[test]
    fn test_payment_method_wire_format() {
        let json = serde_json::to_string(&PaymentMethod::Upi).unwrap();
        assert_eq!(json, "\"UPI\"");
        let parsed: PaymentMethod = serde_json::from_str("\"CASH\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Cash);
    }
}
