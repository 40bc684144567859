use std::fmt;

use crate::html::escape_attr;
use crate::{Tainted, Verified};

/// Error returned when sanitization fails.
///
/// The error never echoes the rejected input back, so it cannot leak a
/// submitted value into logs.
///
/// # Examples
///
/// ```
/// use content_gate::{SanitizationError, SanitizationErrorKind};
///
/// let error = SanitizationError::new(SanitizationErrorKind::TooLong, "value too long");
/// assert_eq!(error.kind(), SanitizationErrorKind::TooLong);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationError {
    kind: SanitizationErrorKind,
    message: String,
}

impl SanitizationError {
    /// Creates a new sanitization error.
    pub fn new(kind: SanitizationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SanitizationErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SanitizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sanitization failed ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for SanitizationError {}

/// Kind of sanitization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizationErrorKind {
    /// Input failed a host-specific validation rule.
    InvalidInput,
    /// Input exceeds the maximum allowed length.
    TooLong,
    /// Input contains control or non-printable characters.
    ContainsControlChars,
}

impl fmt::Display for SanitizationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::TooLong => write!(f, "input too long"),
            Self::ContainsControlChars => write!(f, "contains control characters"),
        }
    }
}

/// Trait for sanitizing tainted form values into verified values.
///
/// Implementations MUST validate the input according to their rules, only
/// call `Verified::new_unchecked` after validation succeeds, and never leak
/// the rejected input in errors. Hosts with stricter field rules can plug
/// their own implementation into the save path.
pub trait Sanitizer<T> {
    /// Sanitizes a tainted value, returning a verified value on success.
    ///
    /// # Errors
    ///
    /// Returns `SanitizationError` if the input fails validation.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<T>, SanitizationError>;
}

/// Sanitizer for values headed into persisted metadata and HTML attributes.
///
/// Mirrors the host platform's attribute-escaping on save:
/// - trims leading and trailing whitespace,
/// - rejects control and non-printable characters,
/// - enforces a maximum pre-escape length,
/// - entity-escapes `&`, `<`, `>`, `"`, `'`.
///
/// Empty input is valid: an unticked checkbox or an unselected role submits
/// nothing, and the save path persists the field's fail-open default.
///
/// # Examples
///
/// ```
/// use content_gate::{AttributeSanitizer, Sanitizer, Tainted};
///
/// let sanitizer = AttributeSanitizer::default_limits();
///
/// let verified = sanitizer
///     .sanitize(Tainted::new("  editor  ".to_string()))
///     .expect("plain slug passes");
/// assert_eq!(verified.as_ref(), "editor");
///
/// // Markup is escaped, not rejected
/// let verified = sanitizer
///     .sanitize(Tainted::new("a<b".to_string()))
///     .expect("escaped");
/// assert_eq!(verified.as_ref(), "a&lt;b");
///
/// // Control characters are rejected
/// assert!(sanitizer.sanitize(Tainted::new("a\nb".to_string())).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AttributeSanitizer {
    max_len: usize,
}

impl AttributeSanitizer {
    /// Creates a sanitizer with the given maximum pre-escape length.
    ///
    /// # Panics
    ///
    /// Panics if `max_len` is 0.
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be greater than 0");
        Self { max_len }
    }

    /// Creates a sanitizer with the default maximum length of 256 bytes.
    pub fn default_limits() -> Self {
        Self::new(256)
    }

    fn is_control_char(c: char) -> bool {
        c.is_control() || c == '\u{007F}'
    }
}

impl Sanitizer<String> for AttributeSanitizer {
    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, SanitizationError> {
        let raw = input.into_inner();
        let trimmed = raw.trim();

        if trimmed.chars().any(Self::is_control_char) {
            return Err(SanitizationError::new(
                SanitizationErrorKind::ContainsControlChars,
                "input contains control or non-printable characters",
            ));
        }

        if trimmed.len() > self.max_len {
            return Err(SanitizationError::new(
                SanitizationErrorKind::TooLong,
                format!("input exceeds maximum length of {}", self.max_len),
            ));
        }

        Ok(Verified::new_unchecked(escape_attr(trimmed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_slug() {
        let sanitizer = AttributeSanitizer::default_limits();
        let verified = sanitizer
            .sanitize(Tainted::new("editor".to_string()))
            .expect("should succeed");

        assert_eq!(verified.as_ref(), "editor");
    }

    #[test]
    fn trims_whitespace() {
        let sanitizer = AttributeSanitizer::default_limits();
        let verified = sanitizer
            .sanitize(Tainted::new("  1  ".to_string()))
            .expect("should succeed");

        assert_eq!(verified.as_ref(), "1");
    }

    #[test]
    fn accepts_empty_input() {
        let sanitizer = AttributeSanitizer::default_limits();
        let verified = sanitizer
            .sanitize(Tainted::new("   ".to_string()))
            .expect("empty is valid");

        assert_eq!(verified.as_ref(), "");
    }

    #[test]
    fn escapes_markup_instead_of_rejecting() {
        let sanitizer = AttributeSanitizer::default_limits();
        let verified = sanitizer
            .sanitize(Tainted::new(r#""><script>"#.to_string()))
            .expect("should escape");

        assert_eq!(verified.as_ref(), "&quot;&gt;&lt;script&gt;");
    }

    #[test]
    fn rejects_newline() {
        let sanitizer = AttributeSanitizer::default_limits();
        let result = sanitizer.sanitize(Tainted::new("a\nb".to_string()));

        assert_eq!(
            result.unwrap_err().kind(),
            SanitizationErrorKind::ContainsControlChars
        );
    }

    #[test]
    fn rejects_null_byte() {
        let sanitizer = AttributeSanitizer::default_limits();
        let result = sanitizer.sanitize(Tainted::new("a\0b".to_string()));

        assert_eq!(
            result.unwrap_err().kind(),
            SanitizationErrorKind::ContainsControlChars
        );
    }

    #[test]
    fn rejects_too_long() {
        let sanitizer = AttributeSanitizer::new(8);
        let result = sanitizer.sanitize(Tainted::new("way too long for this".to_string()));

        let error = result.unwrap_err();
        assert_eq!(error.kind(), SanitizationErrorKind::TooLong);
        assert!(error.message().contains('8'));
    }

    #[test]
    fn length_cap_applies_before_escaping() {
        // Five quote characters escape to 30 bytes but the raw input is
        // within the cap, so it passes.
        let sanitizer = AttributeSanitizer::new(8);
        let verified = sanitizer
            .sanitize(Tainted::new("\"\"\"\"\"".to_string()))
            .expect("raw length is under the cap");

        assert_eq!(verified.as_ref().len(), 30);
    }

    #[test]
    fn error_does_not_leak_input() {
        let sanitizer = AttributeSanitizer::new(4);
        let secret_input = "SECRET_VALUE_123";
        let result = sanitizer.sanitize(Tainted::new(secret_input.to_string()));

        let message = format!("{}", result.unwrap_err());
        assert!(!message.contains(secret_input));
    }

    #[test]
    fn accepts_unicode() {
        let sanitizer = AttributeSanitizer::default_limits();
        let verified = sanitizer
            .sanitize(Tainted::new("编辑".to_string()))
            .expect("should succeed");

        assert_eq!(verified.as_ref(), "编辑");
    }

    #[test]
    #[should_panic(expected = "max_len must be greater than 0")]
    fn panics_on_zero_max_len() {
        let _sanitizer = AttributeSanitizer::new(0);
    }
}
