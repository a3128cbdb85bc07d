//! Field descriptors
//!
//! Two representations of a form field:
//!
//! - [`FieldSpec`] — the declarative descriptor callers construct (or
//!   deserialize from JSON). Plain data, no invariants.
//! - [`Field`] — the compiled descriptor a [`FormModel`](super::FormModel)
//!   holds: pattern compiled and anchored, group resolved to a [`GroupId`].
//!   Immutable for the duration of a validation pass.
//!
//! The `min` / `max` / `step` attributes stay raw strings on both: malformed
//! values must degrade at check time (the field always fails its numeric
//! check), never at construction.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::form::FormError;

// ============================================================================
// CONTROL TYPE
// ============================================================================

/// The closed set of field control types the engine recognizes.
///
/// Unknown types (color, date, file, month, range, time, url, week, …)
/// deserialize to [`ControlType::Unimplemented`] and always pass the type
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Text,
    Email,
    Number,
    Tel,
    Search,
    Checkbox,
    Radio,
    Submit,
    Image,
    Hidden,
    Reset,
    Select,
    TextArea,
    /// Any type without a dedicated value check; always passes.
    #[serde(other)]
    Unimplemented,
}

impl ControlType {
    /// Whether fields of this type take part in validation at all.
    ///
    /// Buttons and hidden inputs never do, matching the submit-time skip
    /// list.
    #[must_use]
    pub fn participates(self) -> bool {
        !matches!(
            self,
            Self::Submit | Self::Image | Self::Hidden | Self::Reset
        )
    }

    /// The lowercase tag for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Submit => "submit",
            Self::Image => "image",
            Self::Hidden => "hidden",
            Self::Reset => "reset",
            Self::Select => "select",
            Self::TextArea => "textarea",
            Self::Unimplemented => "unimplemented",
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// GROUP ID
// ============================================================================

/// The error-reporting group a field belongs to: the unit of violation
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(String);

impl GroupId {
    /// Creates a group id from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The group name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// ============================================================================
// FIELD SPEC
// ============================================================================

/// The declarative descriptor of one field: identity, type, current value,
/// and declared constraints.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard_engine::model::{ControlType, FieldSpec};
///
/// let spec = FieldSpec::new("age", ControlType::Number)
///     .with_group("profile")
///     .with_required()
///     .with_min("2")
///     .with_max("7")
///     .with_step("2")
///     .with_value("4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Unique field id.
    pub id: String,
    /// Shared name, linking radio buttons into one choice group.
    #[serde(default)]
    pub name: Option<String>,
    /// Control type.
    #[serde(rename = "type")]
    pub control: ControlType,
    /// Current value.
    #[serde(default)]
    pub value: String,
    /// Checked state (checkbox / radio).
    #[serde(default)]
    pub checked: bool,
    /// Whether the field is declared required.
    #[serde(default)]
    pub required: bool,
    /// Disabled fields never participate in validation.
    #[serde(default)]
    pub disabled: bool,
    /// Raw regex source; compiled and anchored to the whole value at build
    /// time.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Maximum value length in characters.
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Raw numeric lower bound.
    #[serde(default)]
    pub min: Option<String>,
    /// Raw numeric upper bound.
    #[serde(default)]
    pub max: Option<String>,
    /// Raw numeric step.
    #[serde(default)]
    pub step: Option<String>,
    /// Error-reporting group. Fields without one are excluded from
    /// validation.
    #[serde(default)]
    pub group: Option<String>,
    /// Id of the field this one must be string-equal to.
    #[serde(default)]
    pub same_as: Option<String>,
}

impl FieldSpec {
    /// Creates a spec with the given id and control type; everything else
    /// defaults to absent.
    pub fn new(id: impl Into<String>, control: ControlType) -> Self {
        Self {
            id: id.into(),
            name: None,
            control,
            value: String::new(),
            checked: false,
            required: false,
            disabled: false,
            pattern: None,
            max_length: None,
            min: None,
            max: None,
            step: None,
            group: None,
            same_as: None,
        }
    }

    /// Sets the shared name (radio choice group).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the current value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Marks the field checked.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Marks the field required.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field disabled.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Sets the pattern source.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the raw numeric lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Sets the raw numeric upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Sets the raw numeric step.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }

    /// Assigns the field to an error-reporting group.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Requires the value to equal the value of the field with the given id.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_same_as(mut self, other: impl Into<String>) -> Self {
        self.same_as = Some(other.into());
        self
    }
}

// ============================================================================
// COMPILED FIELD
// ============================================================================

/// A compiled field descriptor, as held by a `FormModel`.
#[derive(Debug, Clone)]
pub struct Field {
    id: String,
    name: Option<String>,
    control: ControlType,
    value: String,
    checked: bool,
    required: bool,
    disabled: bool,
    pattern: Option<Regex>,
    max_length: Option<usize>,
    min: Option<String>,
    max: Option<String>,
    step: Option<String>,
    group: Option<GroupId>,
    same_as: Option<String>,
}

impl Field {
    /// Compiles a spec: the pattern source is wrapped to match the whole
    /// value (`^(?:…)$`, case-sensitive) and compiled eagerly so an invalid
    /// source surfaces at construction, never mid-pass.
    pub(crate) fn compile(spec: FieldSpec) -> Result<Self, FormError> {
        let pattern = match &spec.pattern {
            Some(source) => {
                let anchored = format!("^(?:{source})$");
                Some(
                    Regex::new(&anchored).map_err(|source| FormError::InvalidPattern {
                        field: spec.id.clone(),
                        source,
                    })?,
                )
            }
            None => None,
        };

        Ok(Self {
            id: spec.id,
            name: spec.name,
            control: spec.control,
            value: spec.value,
            checked: spec.checked,
            required: spec.required,
            disabled: spec.disabled,
            pattern,
            max_length: spec.max_length,
            min: spec.min,
            max: spec.max,
            step: spec.step,
            group: spec.group.map(GroupId::new),
            same_as: spec.same_as,
        })
    }

    /// Unique field id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Shared name (radio choice group), if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Control type.
    #[must_use]
    pub fn control(&self) -> ControlType {
        self.control
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Checked state (checkbox / radio).
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether the field is declared required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the field is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Compiled whole-value pattern, if one was declared.
    #[must_use]
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// Declared maximum length in characters.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Raw declared lower bound.
    #[must_use]
    pub fn min_raw(&self) -> Option<&str> {
        self.min.as_deref()
    }

    /// Raw declared upper bound.
    #[must_use]
    pub fn max_raw(&self) -> Option<&str> {
        self.max.as_deref()
    }

    /// Raw declared step.
    #[must_use]
    pub fn step_raw(&self) -> Option<&str> {
        self.step.as_deref()
    }

    /// Error-reporting group, or `None` for a detached field.
    #[must_use]
    pub fn group(&self) -> Option<&GroupId> {
        self.group.as_ref()
    }

    /// Id of the field this one must be string-equal to.
    #[must_use]
    pub fn same_as(&self) -> Option<&str> {
        self.same_as.as_deref()
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
    fn control_type_tags_round_trip() {
        let json = serde_json::to_string(&ControlType::TextArea).unwrap();
        assert_eq!(json, "\"textarea\"");
        let back: ControlType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ControlType::TextArea);
    }

    #[test]
    fn unknown_control_type_is_unimplemented() {
        let parsed: ControlType = serde_json::from_str("\"datetime-local\"").unwrap();
        assert_eq!(parsed, ControlType::Unimplemented);
    }

    #[test]
    fn buttons_do_not_participate() {
        assert!(!ControlType::Submit.participates());
        assert!(!ControlType::Image.participates());
        assert!(!ControlType::Hidden.participates());
        assert!(!ControlType::Reset.participates());
        assert!(ControlType::Text.participates());
        assert!(ControlType::Unimplemented.participates());
    }

    #[test]
    fn compile_anchors_the_pattern() {
        let spec = FieldSpec::new("zip", ControlType::Text).with_pattern("[0-9]{4}");
        let field = Field::compile(spec).unwrap();
        let pattern = field.pattern().unwrap();
        assert!(pattern.is_match("1234"));
        // A substring hit is not a whole-value match.
        assert!(!pattern.is_match("x1234y"));
        assert!(!pattern.is_match("12345"));
    }

    #[test]
    fn compile_rejects_invalid_pattern() {
        let spec = FieldSpec::new("broken", ControlType::Text).with_pattern("([");
        assert!(Field::compile(spec).is_err());
    }

    #[test]
    fn spec_defaults_are_absent() {
        let spec = FieldSpec::new("f", ControlType::Text);
        assert_eq!(spec.value, "");
        assert!(!spec.required);
        assert!(!spec.disabled);
        assert!(spec.group.is_none());
        assert!(spec.same_as.is_none());
    }

    #[test]
    fn spec_deserializes_with_defaults() {
        let spec: FieldSpec =
            serde_json::from_str(r#"{"id": "email", "type": "email"}"#).unwrap();
        assert_eq!(spec.id, "email");
        assert_eq!(spec.control, ControlType::Email);
        assert!(!spec.required);
        assert!(spec.pattern.is_none());
    }
}
