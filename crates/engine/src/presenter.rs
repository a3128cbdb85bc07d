//! The violation-display seam
//!
//! The engine never renders anything itself: it signals an
//! [`ErrorPresenter`] which groups are in error and which violation kinds to
//! show. DOM-bound presenters toggle indicator visibility; headless callers
//! and tests use [`RecordingPresenter`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::GroupId;

// ============================================================================
// VIOLATION KIND
// ============================================================================

/// Why a field failed. Several kinds may co-occur for one field in a single
/// pass: the required and same-as checks are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// A required field is empty.
    Required,
    /// The value failed its type or length check.
    Value,
    /// The value failed a cross-field (same-as) check.
    Special,
}

impl ViolationKind {
    /// The lowercase tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Value => "value",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PRESENTER TRAIT
// ============================================================================

/// Receives violation signals from the engine.
///
/// Implementors must provide a display slot per group for every violation
/// kind that group's fields can raise; the engine emits signals without
/// checking for one.
pub trait ErrorPresenter {
    /// Removes every group error mark. Called at the start of a pass.
    fn clear_all(&mut self);

    /// Marks a group as containing at least one violation. Emitted once per
    /// violation, without duplicate suppression.
    fn mark_group_error(&mut self, group: &GroupId);

    /// Shows one violation indicator for a group.
    fn show_violation(&mut self, group: &GroupId, kind: ViolationKind);

    /// Hides every violation indicator. Called at the start of a pass,
    /// before [`clear_all`](Self::clear_all).
    fn hide_all_violations(&mut self);
}

// ============================================================================
// RECORDING PRESENTER
// ============================================================================

/// An in-memory presenter that records every signal in order, duplicates
/// included.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard_engine::prelude::*;
///
/// let mut engine = ValidationEngine::new(RecordingPresenter::new());
/// engine.run_pass(&form);
/// assert!(engine.presenter().has_violation("contact", ViolationKind::Required));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    marked: Vec<GroupId>,
    shown: Vec<(GroupId, ViolationKind)>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every group mark, in emission order.
    #[must_use]
    pub fn marked_groups(&self) -> &[GroupId] {
        &self.marked
    }

    /// Every shown violation, in emission order.
    #[must_use]
    pub fn violations(&self) -> &[(GroupId, ViolationKind)] {
        &self.shown
    }

    /// The violation kinds shown for one group, in emission order.
    pub fn violations_for<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = ViolationKind> + 'a {
        self.shown
            .iter()
            .filter(move |(g, _)| g.as_str() == group)
            .map(|&(_, kind)| kind)
    }

    /// Whether a specific violation was shown for a group.
    #[must_use]
    pub fn has_violation(&self, group: &str, kind: ViolationKind) -> bool {
        self.violations_for(group).any(|shown| shown == kind)
    }

    /// Whether nothing is marked or shown.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.marked.is_empty() && self.shown.is_empty()
    }
}

impl ErrorPresenter for RecordingPresenter {
    fn clear_all(&mut self) {
        self.marked.clear();
    }

    fn mark_group_error(&mut self, group: &GroupId) {
        self.marked.push(group.clone());
    }

    fn show_violation(&mut self, group: &GroupId, kind: ViolationKind) {
        self.shown.push((group.clone(), kind));
    }

    fn hide_all_violations(&mut self) {
        self.shown.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
