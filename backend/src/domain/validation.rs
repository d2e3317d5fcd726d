//! Input validation for the add forms.
//!
//! Failures are returned as values but never shown: the UI drops them and
//! leaves the form as it was. That silence is the intended behavior.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("text must not be empty")]
    EmptyText,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("amount must be greater than zero")]
    AmountNotPositive,
}

/// Trimmed text, rejecting blank input
pub fn validate_text(raw: &str) -> Result<String, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(text.to_string())
}

/// Trimmed ledger description, rejecting blank input
pub fn validate_description(raw: &str) -> Result<String, ValidationError> {
    validate_text(raw).map_err(|_| ValidationError::EmptyDescription)
}

/// Parse a ledger amount; must be a finite number strictly above zero
pub fn validate_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let amount = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(trimmed.to_string()));
    }
    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }
    Ok(amount)
}

/// Optional reminder time: blank means "no time"
pub fn normalize_time(raw: &str) -> Option<String> {
    let time = raw.trim();
    if time.is_empty() {
        None
    } else {
        Some(time.to_string())
    }
}
