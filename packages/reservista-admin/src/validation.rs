//! Field-level validation for create and update payloads.
//!
//! Runs before a payload reaches a collection manager. Every failing field
//! is reported, not just the first one.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX is a valid regex literal")
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(?:[/?#]\S*)?$")
        .expect("URL_REGEX is a valid regex literal")
});

/// A single failed field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as shown on the form
    pub field: &'static str,
    /// User-facing message
    pub message: String,
}

/// All failed field rules of one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Returns the failed rules in check order.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns the first message reported for `field`.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Returns `true` if no rule failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Payloads that check their own field rules.
pub trait Validate {
    /// Returns every failed rule, or `Ok(())` if the payload is acceptable.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Accumulates rule failures for one payload.
#[derive(Debug, Default)]
pub struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    /// Creates an empty checker.
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &'static str, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }

    /// Requires at least `min` characters.
    pub fn min_chars(&mut self, field: &'static str, value: &str, min: usize, message: &str) -> &mut Self {
        if value.chars().count() < min {
            self.fail(field, message);
        }
        self
    }

    /// Like [`Checker::min_chars`], but skips absent values.
    pub fn min_chars_opt(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        min: usize,
        message: &str,
    ) -> &mut Self {
        if let Some(value) = value {
            self.min_chars(field, value, min, message);
        }
        self
    }

    /// Requires at least `min` characters unless the value is absent or empty.
    pub fn min_chars_or_empty(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        min: usize,
        message: &str,
    ) -> &mut Self {
        match value {
            Some(value) if !value.is_empty() => self.min_chars(field, value, min, message),
            _ => self,
        }
    }

    /// Requires a well-formed e-mail address.
    pub fn email(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        if !EMAIL_REGEX.is_match(value) {
            self.fail(field, message);
        }
        self
    }

    /// Requires a well-formed e-mail address unless the value is absent or empty.
    pub fn email_or_empty(&mut self, field: &'static str, value: Option<&str>, message: &str) -> &mut Self {
        match value {
            Some(value) if !value.is_empty() => self.email(field, value, message),
            _ => self,
        }
    }

    /// Requires an absolute http(s) URL.
    pub fn url(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        if !URL_REGEX.is_match(value) {
            self.fail(field, message);
        }
        self
    }

    /// Requires an absolute http(s) URL unless the value is absent or empty.
    pub fn url_or_empty(&mut self, field: &'static str, value: Option<&str>, message: &str) -> &mut Self {
        match value {
            Some(value) if !value.is_empty() => self.url(field, value, message),
            _ => self,
        }
    }

    /// Requires `value >= min`.
    pub fn at_least<N: PartialOrd>(&mut self, field: &'static str, value: N, min: N, message: &str) -> &mut Self {
        if !matches!(value.partial_cmp(&min), Some(Ordering::Greater | Ordering::Equal)) {
            self.fail(field, message);
        }
        self
    }

    /// Like [`Checker::at_least`], but skips absent values.
    pub fn at_least_opt<N: PartialOrd>(
        &mut self,
        field: &'static str,
        value: Option<N>,
        min: N,
        message: &str,
    ) -> &mut Self {
        if let Some(value) = value {
            self.at_least(field, value, min, message);
        }
        self
    }

    /// Finishes the check.
    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(std::mem::take(&mut self.errors)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_failure() {
        let result = Checker::new()
            .min_chars("name", "A", 2, "Name must be at least 2 characters.")
            .email("email", "not-an-email", "Invalid email address.")
            .at_least("guests", 0u32, 1, "Number of guests must be at least 1.")
            .finish();

        let errors = result.unwrap_err();
        assert_eq!(errors.errors().len(), 3);
        assert_eq!(errors.message_for("email"), Some("Invalid email address."));
        assert_eq!(
            errors.to_string(),
            "name: Name must be at least 2 characters.; email: Invalid email address.; guests: Number of guests must be at least 1."
        );
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        assert!(Checker::new().min_chars("name", "éé", 2, "short").finish().is_ok());
    }

    #[test]
    fn test_email_rule() {
        assert!(Checker::new().email("e", "alice@example.com", "bad").finish().is_ok());
        assert!(Checker::new().email("e", "alice@example", "bad").finish().is_err());
        assert!(Checker::new().email("e", "alice example@x.com", "bad").finish().is_err());
        assert!(Checker::new().email_or_empty("e", Some(""), "bad").finish().is_ok());
        assert!(Checker::new().email_or_empty("e", None, "bad").finish().is_ok());
    }

    #[test]
    fn test_url_rule() {
        assert!(Checker::new().url("u", "https://placehold.co/100x100.png", "bad").finish().is_ok());
        assert!(Checker::new().url("u", "http://example.com", "bad").finish().is_ok());
        assert!(Checker::new().url("u", "placehold.co/100x100.png", "bad").finish().is_err());
        assert!(Checker::new().url("u", "ftp://example.com", "bad").finish().is_err());
        assert!(Checker::new().url_or_empty("u", Some(""), "bad").finish().is_ok());
    }

    #[test]
    fn test_at_least_rejects_nan() {
        assert!(Checker::new().at_least("price", f64::NAN, 0.01, "bad").finish().is_err());
        assert!(Checker::new().at_least("price", 0.01, 0.01, "bad").finish().is_ok());
        assert!(Checker::new().at_least("price", 0.0, 0.01, "bad").finish().is_err());
    }
}
