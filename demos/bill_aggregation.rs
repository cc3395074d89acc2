//! Bill aggregation example with a taxed service charge

use bigdecimal::BigDecimal;
use billing_core::{
    aggregate_bill, calculate_line, BillItemSnapshot, BillSnapshot, PaymentMethod, SplitType,
    TaxConfig,
};
use uuid::Uuid;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Billing Core - Bill Aggregation\n");

    let gst_18 = TaxConfig::new(
        "GST 18%".to_string(),
        BigDecimal::from(18),
        SplitType::HalfSplit,
        false,
    );
    let gst_5 = TaxConfig::new(
        "GST 5%".to_string(),
        BigDecimal::from(5),
        SplitType::HalfSplit,
        false,
    );

    // Calculate each sale line
    let prices: [(&str, i64, &TaxConfig, &str); 3] = [
        ("250.00", 2, &gst_18, "Paneer Tikka"),
        ("80.00", 1, &gst_5, "Filter Coffee"),
        ("120.00", 1, &gst_18, "Veg Biryani"),
    ];

    let mut lines = Vec::new();
    let mut items = Vec::new();
    println!("📋 Line Items:");
    for (price, quantity, config, name) in prices {
        let unit_price: BigDecimal = price.parse()?;
        let line = calculate_line(&unit_price, quantity, config)?;
        println!(
            "  {} × {}: taxable ₹{}, tax ₹{}, total ₹{}",
            name, quantity, line.taxable_value, line.tax_amount, line.line_total
        );
        items.push(BillItemSnapshot::from_line(
            Uuid::new_v4(),
            name.to_string(),
            quantity,
            unit_price,
            &line,
        ));
        lines.push(line);
    }
    println!();

    // Aggregate with a 10% service charge, itself taxed at 18%
    println!("💰 Bill Summary (10% service charge, taxed at 18%):");
    let summary = aggregate_bill(&lines, true, &BigDecimal::from(10), Some(&gst_18))?;

    println!("  Subtotal:       ₹{}", summary.subtotal);
    println!("  Service Charge: ₹{}", summary.service_charge_amount);
    println!("  CGST:           ₹{}", summary.total_cgst);
    println!("  SGST:           ₹{}", summary.total_sgst);
    println!("  Total Tax:      ₹{}", summary.total_tax);
    println!("  Grand Total:    ₹{}", summary.total_amount);
    println!();

    // Assemble the audit record a point-of-sale would persist
    let snapshot = BillSnapshot::assemble(
        Uuid::new_v4(),
        "BILL-2024-0042".to_string(),
        PaymentMethod::Upi,
        items,
        &summary,
        chrono::Utc::now().naive_utc(),
    );

    println!("🗄️ Persisted Snapshot:");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
