//! Tax calculation engine for GST-compliant billing
//!
//! Pure calculation only: no storage, no side effects, and every monetary
//! value is a `BigDecimal` rounded at the currency's minor unit. The line
//! calculator produces a per-item breakdown; the bill aggregator folds
//! line breakdowns into bill totals, including the GST owed on an optional
//! service charge.

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

use crate::types::{SplitType, TaxConfig, TaxError, TaxResult};
use crate::utils::validation::{validate_quantity, validate_rate};

/// Tax breakdown for a single line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTaxResult {
    /// Price before tax (for exclusive) or extracted price (for inclusive)
    pub taxable_value: BigDecimal,
    /// Total tax amount for the line
    pub tax_amount: BigDecimal,
    /// Central GST component
    pub cgst_amount: BigDecimal,
    /// State GST component (zero under `SplitType::NoSplit`)
    pub sgst_amount: BigDecimal,
    /// Final payable amount including tax
    pub line_total: BigDecimal,
}

/// Aggregated tax totals for an entire bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSummary {
    /// Sum of all line taxable values
    pub subtotal: BigDecimal,
    /// Percentage surcharge on the subtotal, zero when not levied
    pub service_charge_amount: BigDecimal,
    /// Item tax plus GST owed on the service charge
    pub total_tax: BigDecimal,
    /// Central GST share of the total tax
    pub total_cgst: BigDecimal,
    /// State GST share of the total tax
    pub total_sgst: BigDecimal,
    /// Subtotal + service charge + total tax
    pub total_amount: BigDecimal,
}

/// Round a monetary value to two decimal places using half-up rounding
pub fn round_currency(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

/// Split a tax amount into CGST and SGST components
///
/// The CGST half is rounded and the SGST half is derived by subtraction,
/// so the two components always sum exactly to `tax_amount` even when the
/// amount has an odd number of minor units.
fn split_tax(tax_amount: &BigDecimal, split_type: SplitType) -> (BigDecimal, BigDecimal) {
    match split_type {
        SplitType::HalfSplit => {
            let half = tax_amount / BigDecimal::from(2);
            let cgst = round_currency(&half);
            let sgst = tax_amount - &cgst;
            (cgst, sgst)
        }
        // All tax goes to a single component (CGST for reporting)
        SplitType::NoSplit => (tax_amount.clone(), BigDecimal::from(0)),
    }
}

/// Calculate the tax breakdown for a single line item
///
/// `unit_price` may be inclusive or exclusive of tax depending on the
/// configuration. Fails with [`TaxError::InvalidInput`] when `quantity`
/// is not positive or the configured rate is negative; these are the only
/// failure cases.
pub fn calculate_line(
    unit_price: &BigDecimal,
    quantity: i64,
    config: &TaxConfig,
) -> TaxResult<LineTaxResult> {
    validate_quantity(quantity)?;
    validate_rate(&config.rate)?;

    let unit_price = round_currency(unit_price);
    let zero = BigDecimal::from(0);

    let taxable_value;
    let tax_amount;
    let mut line_total;

    if config.inclusive {
        // Price already contains tax; extract the taxable value from it
        line_total = round_currency(&(&unit_price * BigDecimal::from(quantity)));

        if config.rate == zero {
            taxable_value = line_total.clone();
            tax_amount = zero.clone();
        } else {
            let tax_multiplier = BigDecimal::from(1) + &config.rate / BigDecimal::from(100);
            taxable_value = round_currency(&(&line_total / &tax_multiplier));
            // Subtract after rounding the quotient; this ordering fixes
            // the exact cent split
            tax_amount = round_currency(&(&line_total - &taxable_value));
        }
    } else {
        // Price excludes tax; add tax on top of the base amount
        taxable_value = round_currency(&(&unit_price * BigDecimal::from(quantity)));

        if config.rate == zero {
            tax_amount = zero.clone();
            line_total = taxable_value.clone();
        } else {
            tax_amount = round_currency(&(&taxable_value * &config.rate / BigDecimal::from(100)));
            line_total = round_currency(&(&taxable_value + &tax_amount));
        }
    }

    let (cgst_amount, sgst_amount) = split_tax(&tax_amount, config.split_type);

    // The additive identity wins over the multiplicative derivation if
    // rounding ever pulls them apart by more than one minor unit
    let calculated_total = &taxable_value + &tax_amount;
    let one_minor_unit = BigDecimal::from(1) / BigDecimal::from(100);
    if (&calculated_total - &line_total).abs() > one_minor_unit {
        line_total = calculated_total;
    }

    Ok(LineTaxResult {
        taxable_value,
        tax_amount,
        cgst_amount,
        sgst_amount,
        line_total: round_currency(&line_total),
    })
}

/// Aggregate line breakdowns into bill-level totals
///
/// A service charge is levied as a percentage of the subtotal, and the GST
/// owed on the charge itself is computed by running the charge through
/// [`calculate_line`] with the supplied configuration, which must be
/// exclusive. The bill-level CGST/SGST figures are re-derived from the
/// aggregate tax with the half/remainder rule rather than summed from the
/// per-line splits, so they always balance exactly.
pub fn aggregate_bill(
    lines: &[LineTaxResult],
    service_charge_enabled: bool,
    service_charge_rate: &BigDecimal,
    service_charge_config: Option<&TaxConfig>,
) -> TaxResult<BillSummary> {
    let zero = BigDecimal::from(0);

    let subtotal = round_currency(
        &lines
            .iter()
            .map(|line| &line.taxable_value)
            .sum::<BigDecimal>(),
    );
    let item_tax = round_currency(
        &lines
            .iter()
            .map(|line| &line.tax_amount)
            .sum::<BigDecimal>(),
    );

    let service_charge_amount = if service_charge_enabled && *service_charge_rate > zero {
        round_currency(&(&subtotal * service_charge_rate / BigDecimal::from(100)))
    } else {
        zero.clone()
    };

    let gst_on_service_charge = if service_charge_amount > zero {
        // A levied service charge cannot go untaxed
        let config = service_charge_config.ok_or_else(|| {
            TaxError::InvalidInput("Service charge requires a tax configuration".to_string())
        })?;

        // Service charge tax is always added on top, never extracted
        if config.inclusive {
            return Err(TaxError::InvalidInput(
                "Service charge tax configuration must be exclusive".to_string(),
            ));
        }

        calculate_line(&service_charge_amount, 1, config)?.tax_amount
    } else {
        zero.clone()
    };

    let total_tax = round_currency(&(&item_tax + &gst_on_service_charge));

    // Balanced re-split from the aggregate, so CGST + SGST equals the
    // total tax exactly regardless of per-line rounding
    let (total_cgst, total_sgst) = split_tax(&total_tax, SplitType::HalfSplit);

    let total_amount = round_currency(&(&subtotal + &service_charge_amount + &total_tax));

    Ok(BillSummary {
        subtotal,
        service_charge_amount,
        total_tax,
        total_cgst,
        total_sgst,
        total_amount,
    })
}
