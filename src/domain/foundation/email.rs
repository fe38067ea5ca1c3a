//! EmailAddress value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A validated email address.
///
/// # Invariants
///
/// - Non-empty
/// - Contains exactly one `@` with a non-empty local part and domain
/// - Stored lowercased, surrounding whitespace trimmed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates an EmailAddress, returning error if empty or malformed.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }

        let mut parts = trimmed.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next();

        match domain {
            None => Err(ValidationError::invalid_format("email", "missing '@'")),
            Some(_) if local.is_empty() => {
                Err(ValidationError::invalid_format("email", "empty local part"))
            }
            Some(domain) if domain.is_empty() => {
                Err(ValidationError::invalid_format("email", "empty domain"))
            }
            Some(domain) if domain.contains('@') || domain.contains(char::is_whitespace) => {
                Err(ValidationError::invalid_format("email", "invalid domain"))
            }
            Some(_) => Ok(Self(trimmed.to_ascii_lowercase())),
        }
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_address() {
        let email = EmailAddress::new("a@x.com").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn lowercases_and_trims() {
        let email = EmailAddress::new("  Alice@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            EmailAddress::new(""),
            Err(ValidationError::empty_field("email"))
        );
        assert_eq!(
            EmailAddress::new("   "),
            Err(ValidationError::empty_field("email"))
        );
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(EmailAddress::new("alice.example.com").is_err());
    }

    #[test]
    fn rejects_empty_local_part_or_domain() {
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("alice@").is_err());
    }

    #[test]
    fn rejects_double_at_sign() {
        assert!(EmailAddress::new("alice@foo@bar.com").is_err());
    }
}
