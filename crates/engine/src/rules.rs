//! Per-field validation rules
//!
//! Pure predicate functions over compiled fields. None of them touch engine
//! state; the engine decides what a failure means for the pass.
//!
//! Two result shapes are used:
//!
//! - binary rules return [`RuleResult`] (`Ok` = pass);
//! - rules that can abstain ([`check_length`], [`check_special`]) return
//!   `Option<ValidationError>`, where `None` means "does not object" — an
//!   abstention never forces validity and never overrides another rule's
//!   pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{RuleResult, ValidationError};
use crate::model::{ControlType, Field, FormModel};

/// Built-in address pattern: `local@domain(.sub)*`, lowercase only.
/// Case-sensitive on purpose; uppercase addresses do not match.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9!#$%&'*+/=?^_`{|}~.-]+@[a-z0-9-]+(\.[a-z0-9-]+)*$").unwrap()
});

/// Digits-only raw values; decimal values are rejected by design.
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*$").unwrap());

// ============================================================================
// EMPTINESS AND REQUIRED-NESS
// ============================================================================

/// Decides whether a field counts as empty.
///
/// - `Radio`: empty iff no field sharing this field's name is checked.
/// - `Checkbox`: returns the checked state directly. This inverts the
///   emptiness convention of every other type; it is the long-standing
///   behavior of the rule set and is preserved as-is.
/// - everything else: empty iff the value is the zero-length string.
#[must_use]
pub fn is_empty(field: &Field, form: &FormModel) -> bool {
    match field.control() {
        ControlType::Radio => match field.name() {
            Some(name) => !form.named(name).any(Field::is_checked),
            // No shared name: nothing in the choice group can be checked.
            None => true,
        },
        ControlType::Checkbox => field.is_checked(),
        _ => field.value().is_empty(),
    }
}

/// Whether the field declares the `required` attribute.
#[must_use]
pub fn is_required(field: &Field) -> bool {
    field.is_required()
}

// ============================================================================
// PATTERN AND TYPE CHECKS
// ============================================================================

/// Checks the value against the field's declared pattern.
///
/// The pattern is compiled anchored at construction, so a match here is a
/// whole-value, case-sensitive match. Fields without a pattern pass
/// vacuously.
pub fn check_pattern(field: &Field) -> RuleResult {
    match field.pattern() {
        Some(pattern) if !pattern.is_match(field.value()) => {
            Err(ValidationError::pattern_mismatch(
                field.id().to_owned(),
                pattern.as_str().to_owned(),
            ))
        }
        _ => Ok(()),
    }
}

/// Type-specific value check, dispatched on the control type.
///
/// - `Email`: a declared pattern takes precedence; otherwise the built-in
///   lowercase address pattern applies.
/// - `Number`: delegates to [`check_number`].
/// - `Tel` / `Text` / `Search`: a declared pattern applies; otherwise
///   always valid.
/// - every other type, [`ControlType::Unimplemented`] included: always
///   valid.
pub fn check_type(field: &Field) -> RuleResult {
    match field.control() {
        ControlType::Email => {
            if field.pattern().is_some() {
                check_pattern(field)
            } else if EMAIL.is_match(field.value()) {
                Ok(())
            } else {
                Err(ValidationError::invalid_email(field.id().to_owned()))
            }
        }
        ControlType::Number => check_number(field),
        ControlType::Tel | ControlType::Text | ControlType::Search => check_pattern(field),
        _ => Ok(()),
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Objects when the value's character count exceeds the declared maximum
/// length; abstains otherwise.
#[must_use]
pub fn check_length(field: &Field) -> Option<ValidationError> {
    let max = field.max_length()?;
    let actual = field.value().chars().count();
    (actual > max).then(|| ValidationError::too_long(field.id().to_owned(), max, actual))
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Validates a numeric field against its raw value and declared bounds.
///
/// Passes iff all of:
///
/// 1. the raw value is digits-only (decimals are rejected by design);
/// 2. the parsed value is within the declared `min`..`max` bounds
///    (defaulting to the infinities);
/// 3. `(origin + value) % step == 0`, where `step` defaults to 1 and
///    `origin` is the declared minimum, or zero when none is declared.
///
/// A declared bound or step that is not numeric can never be satisfied, so
/// the field is flagged unconditionally — a deterministic reject, never a
/// panic.
pub fn check_number(field: &Field) -> RuleResult {
    let raw = field.value();
    if !DIGITS.is_match(raw) {
        return Err(ValidationError::not_an_integer(
            field.id().to_owned(),
            raw.to_owned(),
        ));
    }
    let value: f64 = raw.parse().unwrap_or(0.0);

    let Some(min) = declared(field.min_raw(), f64::NEG_INFINITY) else {
        return Err(ValidationError::malformed_bound(field.id().to_owned(), "min"));
    };
    let Some(max) = declared(field.max_raw(), f64::INFINITY) else {
        return Err(ValidationError::malformed_bound(field.id().to_owned(), "max"));
    };
    let Some(step) = declared(field.step_raw(), 1.0) else {
        return Err(ValidationError::malformed_bound(field.id().to_owned(), "step"));
    };

    if value > max {
        return Err(ValidationError::above_max(field.id().to_owned(), max, value));
    }
    if value < min {
        return Err(ValidationError::below_min(field.id().to_owned(), min, value));
    }

    // Steps count from the declared minimum, or from zero when none is
    // declared.
    let origin = if field.min_raw().is_none() { 0.0 } else { min };
    if (origin + value) % step != 0.0 {
        return Err(ValidationError::step_mismatch(
            field.id().to_owned(),
            step,
            value,
        ));
    }

    Ok(())
}

/// Parses a declared numeric attribute; `None` means the attribute is
/// present but malformed. An absent attribute yields the default.
fn declared(raw: Option<&str>, default: f64) -> Option<f64> {
    match raw {
        None => Some(default),
        Some(text) => text.parse().ok(),
    }
}

// ============================================================================
// CROSS-FIELD
// ============================================================================

/// Objects when the field declares a same-as reference and its value is not
/// exactly string-equal to the referenced field's value; abstains otherwise.
///
/// `FormModel` construction guarantees the target exists; an unresolvable
/// reference is still treated as a mismatch so the rule stays total.
#[must_use]
pub fn check_special(field: &Field, form: &FormModel) -> Option<ValidationError> {
    let target = field.same_as()?;
    let matches = form
        .field(target)
        .is_some_and(|other| other.value() == field.value());
    if matches {
        None
    } else {
        Some(ValidationError::mismatched_fields(
            field.id().to_owned(),
            target.to_owned(),
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================
