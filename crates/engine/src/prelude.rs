//! Prelude module for convenient imports.
//!
//! Provides a single `use formguard_engine::prelude::*;` import that brings
//! in the descriptors, the engine, the presenter seam, and the rule
//! functions.

// ============================================================================
// FOUNDATION: errors and result aliases
// ============================================================================

pub use crate::foundation::{RuleResult, ValidationError};

// ============================================================================
// MODEL: descriptors and the compiled form
// ============================================================================

pub use crate::model::{ControlType, Field, FieldSpec, FormError, FormModel, GroupId};

// ============================================================================
// ENGINE AND PRESENTER
// ============================================================================

pub use crate::engine::{CustomValidation, ValidationEngine};
pub use crate::presenter::{ErrorPresenter, RecordingPresenter, ViolationKind};

// ============================================================================
// RULES: the per-field predicates
// ============================================================================

pub use crate::rules::{
    check_length, check_number, check_pattern, check_special, check_type, is_empty, is_required,
};
