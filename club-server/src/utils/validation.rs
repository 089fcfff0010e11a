//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Limits are
//! reasonable UX bounds; the embedded store has no built-in length
//! enforcement.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: table, game type, player, club, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and notes
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers, locations, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum allowed rate per game type (currency units)
pub const MAX_RATE: i64 = 1_000_000;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a rate is positive and within bounds.
pub fn validate_rate(rate: i64) -> Result<(), AppError> {
    if rate <= 0 {
        return Err(AppError::validation(format!(
            "rate must be positive, got {rate}"
        )));
    }
    if rate > MAX_RATE {
        return Err(AppError::validation(format!(
            "rate exceeds maximum allowed ({MAX_RATE}), got {rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Ahmed", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_rate_bounds() {
        assert!(validate_rate(200).is_ok());
        assert!(validate_rate(0).is_err());
        assert!(validate_rate(-5).is_err());
        assert!(validate_rate(MAX_RATE + 1).is_err());
    }
}
