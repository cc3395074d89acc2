//! Line item tax breakdown examples

use bigdecimal::BigDecimal;
use billing_core::{calculate_line, SplitType, TaxConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Billing Core - Line Item Tax Breakdowns\n");

    // 1. Exclusive pricing: tax is added on top of the base price
    println!("📦 Exclusive Pricing (₹100.00 × 2 at 18% GST):");
    let gst_18 = TaxConfig::new(
        "GST 18%".to_string(),
        BigDecimal::from(18),
        SplitType::HalfSplit,
        false,
    );
    let unit_price: BigDecimal = "100.00".parse()?;
    let line = calculate_line(&unit_price, 2, &gst_18)?;

    println!("  Taxable Value: ₹{}", line.taxable_value);
    println!("  CGST:          ₹{}", line.cgst_amount);
    println!("  SGST:          ₹{}", line.sgst_amount);
    println!("  Total Tax:     ₹{}", line.tax_amount);
    println!("  Line Total:    ₹{}", line.line_total);
    println!();

    // 2. Inclusive pricing: the shelf price already contains tax
    println!("🏷️ Inclusive Pricing (₹118.00 shelf price at 18% GST):");
    let gst_18_inclusive = TaxConfig::new(
        "GST 18% (MRP)".to_string(),
        BigDecimal::from(18),
        SplitType::HalfSplit,
        true,
    );
    let shelf_price: BigDecimal = "118.00".parse()?;
    let inclusive_line = calculate_line(&shelf_price, 1, &gst_18_inclusive)?;

    println!("  Extracted Base: ₹{}", inclusive_line.taxable_value);
    println!("  Total Tax:      ₹{}", inclusive_line.tax_amount);
    println!("  Line Total:     ₹{}", inclusive_line.line_total);
    println!();

    // 3. Zero-rated items pass through untouched
    println!("🌾 Zero-rated Item (₹45.00 × 3):");
    let exempt = TaxConfig::new(
        "Exempt".to_string(),
        BigDecimal::from(0),
        SplitType::NoSplit,
        false,
    );
    let exempt_price: BigDecimal = "45.00".parse()?;
    let exempt_line = calculate_line(&exempt_price, 3, &exempt)?;

    println!("  Taxable Value: ₹{}", exempt_line.taxable_value);
    println!("  Total Tax:     ₹{}", exempt_line.tax_amount);
    println!("  Line Total:    ₹{}", exempt_line.line_total);
    println!();

    // 4. Odd minor units still split exactly
    println!("🪙 Odd-cent Split (₹0.28 at 18% GST):");
    let small_price: BigDecimal = "0.28".parse()?;
    let small_line = calculate_line(&small_price, 1, &gst_18)?;

    println!("  Total Tax: ₹{}", small_line.tax_amount);
    println!("  CGST:      ₹{}", small_line.cgst_amount);
    println!("  SGST:      ₹{}", small_line.sgst_amount);
    println!(
        "  CGST + SGST = ₹{} (always equals the total)",
        &small_line.cgst_amount + &small_line.sgst_amount
    );

    Ok(())
}
