//! Coercion of raw form fields into typed payload values.
//!
//! Screens carry every input as a string until submit. These helpers are the
//! single place that turns those strings into typed values; a bad parse
//! becomes a `ValidationError` naming the field, before any request is made.

use crate::error::ValidationError;

/// Required text field: trimmed, must be non-empty.
pub fn require_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(trimmed.to_string())
}

/// Optional text field: trimmed, empty becomes `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Optional decimal field (prices, costs): empty becomes `None`.
pub fn optional_decimal(field: &str, value: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ValidationError::new(field, "must be a number"))
}

/// Optional whole-number field (stock levels, capacities): empty becomes
/// `None`, negatives are rejected.
pub fn optional_count(field: &str, value: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_count(field, trimmed).map(Some)
}

/// Whole-number field with a default for the empty case.
pub fn count_or(field: &str, value: &str, default: i64) -> Result<i64, ValidationError> {
    Ok(optional_count(field, value)?.unwrap_or(default))
}

/// Required whole-number field that must be strictly positive (quantities).
pub fn require_positive_count(field: &str, value: &str) -> Result<i64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    let count = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::new(field, "must be a whole number"))?;
    if count <= 0 {
        return Err(ValidationError::new(field, "must be greater than zero"));
    }
    Ok(count)
}

fn parse_count(field: &str, trimmed: &str) -> Result<i64, ValidationError> {
    let count = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::new(field, "must be a whole number"))?;
    if count < 0 {
        return Err(ValidationError::new(field, "cannot be negative"));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_trims_and_rejects_empty() {
        assert_eq!(require_text("name", "  Widget ").unwrap(), "Widget");
        let err = require_text("name", "   ").unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn optional_decimal_empty_is_none_and_junk_is_rejected() {
        assert_eq!(optional_decimal("cost_price", "").unwrap(), None);
        assert_eq!(optional_decimal("cost_price", "12.50").unwrap(), Some(12.5));
        let err = optional_decimal("cost_price", "abc").unwrap_err();
        assert_eq!(err.field, "cost_price");
    }

    #[test]
    fn counts_reject_negatives_and_fractions() {
        assert_eq!(count_or("minimum_stock_level", "", 0).unwrap(), 0);
        assert_eq!(count_or("minimum_stock_level", "7", 0).unwrap(), 7);
        assert!(optional_count("capacity", "-1").is_err());
        assert!(optional_count("capacity", "2.5").is_err());
    }

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(require_positive_count("quantity", "3").unwrap(), 3);
        assert!(require_positive_count("quantity", "0").is_err());
        assert!(require_positive_count("quantity", "").is_err());
        assert!(require_positive_count("quantity", "-2").is_err());
    }
}
