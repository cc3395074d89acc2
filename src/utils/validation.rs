//! Validation utilities

use bigdecimal::BigDecimal;

use crate::types::{TaxError, TaxResult};

/// Validate that a line quantity is positive
pub fn validate_quantity(quantity: i64) -> TaxResult<()> {
    if quantity <= 0 {
        return Err(TaxError::InvalidInput(
            "Quantity must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a tax rate is not negative
pub fn validate_rate(rate: &BigDecimal) -> TaxResult<()> {
    if *rate < BigDecimal::from(0) {
        return Err(TaxError::InvalidInput(
            "Tax rate cannot be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(&BigDecimal::from(0)).is_ok());
        assert!(validate_rate(&BigDecimal::from(18)).is_ok());
        assert!(validate_rate(&BigDecimal::from(-1)).is_err());
    }
}
