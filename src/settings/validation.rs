//! Numeric field validation

/// Validate the text of a height or weight field
///
/// Empty (or whitespace-only) text is accepted as "". Anything else must be
/// a finite, non-negative number and is returned trimmed but otherwise as
/// typed, so partial input like "72." survives while the user is typing.
/// Rejected input logs a warning and returns `None`.
pub fn validate_numeric_string(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(String::new());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.is_sign_positive() => Some(trimmed.to_string()),
        Ok(value) => {
            tracing::warn!("Invalid number: {} is not a finite non-negative value", value);
            None
        }
        Err(e) => {
            tracing::warn!("Invalid number {:?}: {}", text, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_accepted() {
        assert_eq!(validate_numeric_string(""), Some(String::new()));
        assert_eq!(validate_numeric_string("   "), Some(String::new()));
    }

    #[test]
    fn test_numbers_are_accepted_as_typed() {
        assert_eq!(validate_numeric_string("70"), Some("70".to_string()));
        assert_eq!(validate_numeric_string(" 72.5 "), Some("72.5".to_string()));
        assert_eq!(validate_numeric_string("72."), Some("72.".to_string()));
        assert_eq!(validate_numeric_string("0"), Some("0".to_string()));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert_eq!(validate_numeric_string("abc"), None);
        assert_eq!(validate_numeric_string("70kg"), None);
        assert_eq!(validate_numeric_string("-5"), None);
        assert_eq!(validate_numeric_string("-0"), None);
        assert_eq!(validate_numeric_string("inf"), None);
        assert_eq!(validate_numeric_string("NaN"), None);
        assert_eq!(validate_numeric_string("1.2.3"), None);
    }
}
