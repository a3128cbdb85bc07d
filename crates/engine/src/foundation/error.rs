//! Structured failure payloads for rule evaluation
//!
//! Rule failures are not exceptions: the engine reduces them to violation
//! signals, and tests assert on their codes. All string fields use
//! `Cow<'static, str>` for zero allocation in the common case of static
//! error codes and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured description of why a rule rejected a field value.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard_engine::foundation::ValidationError;
///
/// let error = ValidationError::new("too_long", "Value exceeds the declared length")
///     .with_field("comment")
///     .with_param("max", "140")
///     .with_param("actual", "212");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "too_long", "step_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// The id of the field the error belongs to.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the message, as ordered key-value pairs
    /// (typically 0-3 entries, e.g. `[("max", "7"), ("actual", "8")]`).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new error with a code and message.
    ///
    /// Static strings do not allocate; dynamic strings allocate only when
    /// needed.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the owning field id.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", "This field is required").with_field(field)
    }

    /// Creates a "too_long" error.
    pub fn too_long(field: impl Into<Cow<'static, str>>, max: usize, actual: usize) -> Self {
        Self::new("too_long", format!("Must be at most {max} characters"))
            .with_field(field)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "pattern_mismatch" error.
    pub fn pattern_mismatch(
        field: impl Into<Cow<'static, str>>,
        pattern: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("pattern_mismatch", "Value does not match the declared pattern")
            .with_field(field)
            .with_param("pattern", pattern)
    }

    /// Creates an "invalid_email" error.
    pub fn invalid_email(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_email", "Not a valid email address").with_field(field)
    }

    /// Creates a "not_an_integer" error.
    pub fn not_an_integer(
        field: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("not_an_integer", "Value must consist of digits only")
            .with_field(field)
            .with_param("actual", actual)
    }

    /// Creates a "below_min" error.
    pub fn below_min(field: impl Into<Cow<'static, str>>, min: f64, actual: f64) -> Self {
        Self::new("below_min", format!("Value must be at least {min}"))
            .with_field(field)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "above_max" error.
    pub fn above_max(field: impl Into<Cow<'static, str>>, max: f64, actual: f64) -> Self {
        Self::new("above_max", format!("Value must be at most {max}"))
            .with_field(field)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "step_mismatch" error.
    pub fn step_mismatch(field: impl Into<Cow<'static, str>>, step: f64, actual: f64) -> Self {
        Self::new("step_mismatch", format!("Value must land on a step of {step}"))
            .with_field(field)
            .with_param("step", step.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "malformed_bound" error for a declared numeric attribute
    /// that does not parse.
    pub fn malformed_bound(
        field: impl Into<Cow<'static, str>>,
        attribute: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("malformed_bound", "Declared numeric constraint is not numeric")
            .with_field(field)
            .with_param("attribute", attribute)
    }

    /// Creates a "mismatched_fields" error for same-as references.
    pub fn mismatched_fields(
        field: impl Into<Cow<'static, str>>,
        other: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("mismatched_fields", "Value must match the referenced field")
            .with_field(field)
            .with_param("other", other)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn error_with_field() {
        let error = ValidationError::required("email");
        assert_eq!(error.field.as_deref(), Some("email"));
        assert_eq!(error.code, "required");
    }

    #[test]
    fn error_with_params() {
        let error = ValidationError::too_long("comment", 5, 9);
        assert_eq!(error.param("max"), Some("5"));
        assert_eq!(error.param("actual"), Some("9"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn display_includes_field_and_params() {
        let error = ValidationError::new("above_max", "too big")
            .with_field("age")
            .with_param("max", "7");
        assert_eq!(error.to_string(), "[age] above_max: too big (max=7)");
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        // Both should be borrowed (no allocation)
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn dynamic_strings() {
        let code = format!("error_{}", 42);
        let error = ValidationError::new(code, "Dynamic error");
        assert!(matches!(error.code, Cow::Owned(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
