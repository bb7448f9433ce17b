//! Common validation utilities.

use validator::ValidationError;

/// Normalizes an email address: trims surrounding whitespace and lowercases.
///
/// Invite and profile rows store emails in this form, and every lookup that
/// matches invites to profiles goes through it first.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates that an email is non-empty and contains an `@` after trimming.
pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    let normalized = normalize_email(email);
    if normalized.is_empty() || !normalized.contains('@') {
        let mut err = ValidationError::new("email_shape");
        err.message = Some("Enter a valid email address".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a display name is non-empty after trimming.
pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("display_name_empty");
        err.message = Some("Name must not be empty".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases() {
        assert_eq!(normalize_email("Jane@Example.com"), "jane@example.com");
        assert_eq!(normalize_email("JANE@X.COM"), "jane@x.com");
    }

    #[test]
    fn test_normalize_email_trims() {
        assert_eq!(normalize_email("  jane@x.com  "), "jane@x.com");
        assert_eq!(normalize_email("\tjane@x.com\n"), "jane@x.com");
    }

    #[test]
    fn test_normalize_email_idempotent() {
        let once = normalize_email("Jane@X.com ");
        assert_eq!(normalize_email(&once), once);
    }

    #[test]
    fn test_validate_email_shape() {
        assert!(validate_email_shape("jane@x.com").is_ok());
        assert!(validate_email_shape(" Jane@X.com ").is_ok());
        assert!(validate_email_shape("").is_err());
        assert!(validate_email_shape("   ").is_err());
        assert!(validate_email_shape("not-an-email").is_err());
    }

    #[test]
    fn test_validate_email_shape_error_message() {
        let err = validate_email_shape("nope").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Enter a valid email address"
        );
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Jane Doe").is_ok());
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
    }
}
