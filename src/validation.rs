use validator::{ValidationError, ValidationErrors};

/// Validates that an amount is a finite number greater than 0
///
/// NaN and infinities are rejected along with zero and negatives.
pub fn validate_positive_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() || amount <= 0.0 {
        let mut error = ValidationError::new("invalid_amount");
        error.message = Some("Amount must be a finite number greater than 0".into());
        return Err(error);
    }
    Ok(())
}

/// Flattens field errors into a single "field: message; field: message" line
pub fn describe_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
