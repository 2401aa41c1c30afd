//! Pure per-field validators for the registration form.
//!
//! Each validator maps the field's current text to a [`Verdict`]. Invalid is
//! a normal outcome carried as a value, never an error: the caller decides
//! how to present it. Display concerns (marks, messages) live in the UI.

use once_cell::sync::Lazy;
use regex::Regex;

/// Outcome of running one field validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(&'static str),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Human-readable message; empty when valid.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Valid => "",
            Verdict::Invalid(msg) => msg,
        }
    }
}

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z\s]+$").expect("name pattern")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").expect("email pattern")
});

/// Name: at least 2 characters after trimming, letters and whitespace only.
pub fn validate_name(value: &str) -> Verdict {
    let name = value.trim();
    if name.is_empty() {
        Verdict::Invalid("Name is required")
    } else if name.chars().count() < 2 {
        Verdict::Invalid("Name must be at least 2 characters")
    } else if !NAME_RE.is_match(name) {
        Verdict::Invalid("Name can only contain letters and spaces")
    } else {
        Verdict::Valid
    }
}

/// Email: `local@domain.tld` shape, no whitespace, no `@` before the dot.
pub fn validate_email(value: &str) -> Verdict {
    let email = value.trim();
    if email.is_empty() {
        Verdict::Invalid("Email is required")
    } else if !EMAIL_RE.is_match(email) {
        Verdict::Invalid("Please enter a valid email address")
    } else {
        Verdict::Valid
    }
}

/// Password: length >= 8 with at least one lowercase, one uppercase and one
/// digit. Not trimmed; whitespace is password material.
pub fn validate_password(value: &str) -> Verdict {
    if value.is_empty() {
        Verdict::Invalid("Password is required")
    } else if value.chars().count() < 8 {
        Verdict::Invalid("Password must be at least 8 characters")
    } else if !(value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit()))
    {
        Verdict::Invalid(
            "Password must contain at least one lowercase letter, one uppercase letter, and one number",
        )
    } else {
        Verdict::Valid
    }
}

/// Confirm-password: byte-identical to the current password.
pub fn validate_confirm(confirm: &str, password: &str) -> Verdict {
    if confirm.is_empty() {
        Verdict::Invalid("Please confirm your password")
    } else if confirm != password {
        Verdict::Invalid("Passwords do not match")
    } else {
        Verdict::Valid
    }
}

/// Age: explicit integer parse, then 13..=120 inclusive. Anything that does
/// not parse (negatives, decimals, text) is out of range by definition.
pub fn validate_age(value: &str) -> Verdict {
    let age = value.trim();
    if age.is_empty() {
        return Verdict::Invalid("Age is required");
    }
    match age.parse::<u32>() {
        Ok(n) if n < 13 => Verdict::Invalid("You must be at least 13 years old"),
        Ok(n) if n > 120 => Verdict::Invalid("Please enter a valid age"),
        Ok(_) => Verdict::Valid,
        Err(_) => Verdict::Invalid("Please enter a valid age"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert!(!validate_name("").is_valid());
        assert!(!validate_name("   ").is_valid());
        assert!(!validate_name("A").is_valid());
        assert!(!validate_name(" A ").is_valid());
        assert!(!validate_name("Jo3").is_valid());
        assert!(!validate_name("Jo!").is_valid());
        assert!(validate_name("Jo").is_valid());
        assert!(validate_name("Ada Lovelace").is_valid());
        // surrounding whitespace is trimmed before the rules apply
        assert!(validate_name("  Ada  ").is_valid());
    }

    #[test]
    fn test_name_messages() {
        assert_eq!(validate_name("").message(), "Name is required");
        assert_eq!(
            validate_name("A").message(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            validate_name("R2D2").message(),
            "Name can only contain letters and spaces"
        );
        assert_eq!(validate_name("Ada").message(), "");
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("a@b.c").is_valid());
        assert!(validate_email("user.name@example.org").is_valid());
        assert!(!validate_email("").is_valid());
        assert!(!validate_email("a@b").is_valid());
        assert!(!validate_email("a b@c.d").is_valid());
        assert!(!validate_email("@b.c").is_valid());
        assert!(!validate_email("a@.").is_valid());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("Abcdefg1").is_valid());
        assert!(!validate_password("").is_valid());
        assert!(!validate_password("Short1").is_valid());
        assert!(!validate_password("abcdefgh").is_valid());
        assert!(!validate_password("ABCDEFGH").is_valid());
        assert!(!validate_password("Abcdefgh").is_valid());
        assert!(!validate_password("abcdefg1").is_valid());
        // order of the classes does not matter
        assert!(validate_password("1gfedcbA").is_valid());
    }

    #[test]
    fn test_confirm_rules() {
        assert!(validate_confirm("Abcdefg1", "Abcdefg1").is_valid());
        assert!(!validate_confirm("", "Abcdefg1").is_valid());
        assert!(!validate_confirm("Abcdefg2", "Abcdefg1").is_valid());
        // trailing whitespace is a mismatch, values are compared untrimmed
        assert!(!validate_confirm("Abcdefg1 ", "Abcdefg1").is_valid());
    }

    #[test]
    fn test_age_boundaries() {
        assert!(validate_age("13").is_valid());
        assert!(validate_age("120").is_valid());
        assert!(!validate_age("12").is_valid());
        assert!(!validate_age("121").is_valid());
        assert_eq!(
            validate_age("12").message(),
            "You must be at least 13 years old"
        );
        assert_eq!(validate_age("121").message(), "Please enter a valid age");
    }

    #[test]
    fn test_age_malformed() {
        assert_eq!(validate_age("").message(), "Age is required");
        assert_eq!(validate_age("abc").message(), "Please enter a valid age");
        assert_eq!(validate_age("12.5").message(), "Please enter a valid age");
        assert_eq!(validate_age("-5").message(), "Please enter a valid age");
        // trimmed before parsing
        assert!(validate_age(" 42 ").is_valid());
    }
}
