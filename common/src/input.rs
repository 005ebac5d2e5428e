//! Numeric input policies
//!
//! Confirming a purchase is strict: bad numbers are rejected. Editing the
//! numbers of an item that is already bought is lenient: anything unusable
//! becomes 0 so typing is never blocked. The two are kept separate on purpose.

use crate::error::ValidationError;

/// Parses a decimal typed by a user, accepting `,` or `.` as separator
///
/// When both appear, the last one is the decimal separator and the other
/// groups thousands.
///
/// # Examples
/// ```
/// use shopping_list_common::input::parse_decimal;
///
/// assert_eq!(parse_decimal("2,50"), Some(2.5));
/// assert_eq!(parse_decimal(" 10.00 "), Some(10.0));
/// assert_eq!(parse_decimal("1.234,50"), Some(1234.5));
/// assert_eq!(parse_decimal("dez"), None);
/// ```
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = match (trimmed.rfind(','), trimmed.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (Some(_), None) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };
    normalized.parse::<f64>().ok()
}

/// Quantity and unit price accepted for marking an item bought
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseInput {
    pub quantity: f64,
    pub price_per_unit: f64,
}

impl PurchaseInput {
    /// Quantity must be finite and positive, price finite and non-negative
    pub fn validate(quantity: f64, price_per_unit: f64) -> Result<Self, ValidationError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ValidationError::InvalidQuantity);
        }
        if !price_per_unit.is_finite() || price_per_unit < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self {
            quantity,
            price_per_unit,
        })
    }

    /// Same rules, from form text
    pub fn parse(quantity: &str, price_per_unit: &str) -> Result<Self, ValidationError> {
        let quantity = parse_decimal(quantity).ok_or(ValidationError::InvalidQuantity)?;
        let price_per_unit = parse_decimal(price_per_unit).ok_or(ValidationError::InvalidPrice)?;
        Self::validate(quantity, price_per_unit)
    }
}

/// Live-edit value: non-finite or negative becomes 0
pub fn coerce_live_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Live-edit text: unparsable becomes 0
pub fn coerce_live_text(raw: &str) -> f64 {
    parse_decimal(raw).map(coerce_live_value).unwrap_or(0.0)
}
