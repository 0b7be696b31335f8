//! Form input validators.
//!
//! Pure checks applied per keystroke by the login form; no side effects.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest address accepted, per RFC 5321's practical limit.
const MAX_EMAIL_LEN: usize = 254;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // ---
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Checks that the input has `local@domain.tld` shape after trimming and is
/// no longer than 254 characters.
pub fn validate_email(email: &str) -> bool {
    // ---
    email.len() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(email.trim())
}

/// Outcome of a password strength check.
///
/// Invariant: `is_valid` holds exactly when `errors` is empty. The first
/// error is the one surfaced to the user; the rest are kept so the form can
/// show them all if it chooses to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    // ---
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Checks password strength against the fixed rules. All failing rules are
/// collected; this does not short-circuit on the first failure.
pub fn validate_password(password: &str) -> ValidationResult {
    // ---
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long".to_string());
    }

    if password.chars().count() > 128 {
        errors.push("Password must be less than 128 characters".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number".to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        // ---
        assert!(validate_email("teacher@school.edu"));
        assert!(validate_email("first.last+tag@sub.example.co"));
        assert!(validate_email("  padded@school.edu  "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        // ---
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.example.com"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email("short@tld.x"));
        assert!(!validate_email("spaces in@local.edu"));
    }

    #[test]
    fn rejects_overlong_addresses() {
        // ---
        let local = "a".repeat(250);
        let email = format!("{local}@ex.com");
        assert!(email.len() > 254);
        assert!(!validate_email(&email));
    }

    #[test]
    fn strong_password_passes() {
        // ---
        let result = validate_password("Secure123");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn weak_password_collects_all_failures() {
        // ---
        // Too short, no uppercase, no digit: three rules fail at once.
        let result = validate_password("abc");
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors[0].contains("at least 8 characters"));
    }

    #[test]
    fn length_bounds_enforced() {
        // ---
        assert!(validate_password(&format!("Aa1{}", "x".repeat(5))).is_valid);
        assert!(!validate_password("Aa1x").is_valid);

        let long = format!("Aa1{}", "x".repeat(126));
        assert!(long.chars().count() > 128);
        assert!(!validate_password(&long).is_valid);
    }

    #[test]
    fn each_character_class_required() {
        // ---
        assert!(!validate_password("alllowercase1").is_valid);
        assert!(!validate_password("ALLUPPERCASE1").is_valid);
        assert!(!validate_password("NoDigitsHere").is_valid);
    }
}
