use rust_decimal::Decimal;

use crate::errors::ModelError;

/// Longest value a `VARCHAR(255)` column accepts.
pub const MAX_TEXT_LEN: usize = 255;

/// Non-blank string that fits a `VARCHAR(255)` column.
pub fn required_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ModelError::Validation(format!("{field} longer than {MAX_TEXT_LEN} characters")));
    }
    Ok(())
}

/// Non-negative amount that a `DECIMAL(10, 2)` column stores without rounding.
pub fn amount(field: &str, value: Decimal) -> Result<(), ModelError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ModelError::Validation(format!("{field} must not be negative")));
    }
    if value.round_dp(2) != value {
        return Err(ModelError::Validation(format!("{field} has more than 2 decimal places")));
    }
    if value >= Decimal::from(100_000_000) {
        return Err(ModelError::Validation(format!("{field} exceeds 8 integer digits")));
    }
    Ok(())
}
