//! Custom field validators shared by request DTOs.

use validator::ValidationError;

/// Reject strings that are empty once surrounding whitespace is trimmed.
///
/// Used as `#[validate(custom(function = "spms_core::validation::not_blank"))]`.
/// On `Option<String>` fields only a present value is checked.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_blank() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t\n").is_err());
    }

    #[test]
    fn text_with_padding_is_accepted() {
        assert!(not_blank("  Alpha  ").is_ok());
    }
}
