//! Pass orchestration and the aggregate verdict
//!
//! A [`ValidationEngine`] owns the single `valid` flag, the registry of
//! custom validations, and the presenter it signals. Construct one per form
//! and keep it for the form's lifetime: the registry persists across passes,
//! the flag is reset at every pass start.

use crate::foundation::ValidationError;
use crate::model::{Field, FormModel, GroupId};
use crate::presenter::{ErrorPresenter, ViolationKind};
use crate::rules;

/// A registered custom validation: a zero-argument predicate evaluated on
/// every pass, independent of any specific field.
pub type CustomValidation = Box<dyn Fn() -> bool>;

/// The validation engine.
///
/// Fully synchronous: one pass runs to completion before control returns,
/// and a pass re-run against an unchanged form and registry produces the
/// identical verdict and violation sequence.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard_engine::prelude::*;
///
/// let mut engine = ValidationEngine::new(RecordingPresenter::new());
/// engine.add_validation(|| terms_accepted());
///
/// if engine.run_pass(&form) {
///     // submit
/// } else {
///     // block, indicators are already showing
/// }
/// ```
pub struct ValidationEngine<P> {
    valid: bool,
    custom: Vec<CustomValidation>,
    presenter: P,
}

impl<P: ErrorPresenter> ValidationEngine<P> {
    /// Creates an engine signaling the given presenter.
    pub fn new(presenter: P) -> Self {
        Self {
            valid: true,
            custom: Vec::new(),
            presenter,
        }
    }

    /// Registers a custom validation.
    ///
    /// The registry only grows: there is no deduplication and no removal.
    /// Predicates run on every pass in reverse registration order, after all
    /// field checks, with no short-circuit.
    pub fn add_validation(&mut self, validation: impl Fn() -> bool + 'static) {
        self.custom.push(Box::new(validation));
    }

    /// The verdict of the most recent evaluation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The presenter this engine signals.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Evaluates a single field, recording violations on its group.
    ///
    /// Fields without a group, button-like fields (submit / image / hidden /
    /// reset) and disabled fields are skipped entirely: no violation, no
    /// effect on the verdict. Intended for manual use; [`run_pass`] is the
    /// primary entry point.
    ///
    /// [`run_pass`]: Self::run_pass
    pub fn check_valid(&mut self, form: &FormModel, field: &Field) {
        let Some(group) = field.group() else {
            return;
        };
        if !field.control().participates() || field.is_disabled() {
            return;
        }

        if rules::is_empty(field, form) {
            if rules::is_required(field) {
                let error = ValidationError::required(field.id().to_owned());
                self.flag(group, ViolationKind::Required, field, &error);
            }
        } else if let Some(error) = rules::check_length(field) {
            self.flag(group, ViolationKind::Value, field, &error);
        } else if let Err(error) = rules::check_type(field) {
            self.flag(group, ViolationKind::Value, field, &error);
        }

        // Independent of the emptiness branch: a field can raise both a
        // required and a special violation in one pass.
        if let Some(error) = rules::check_special(field, form) {
            self.flag(group, ViolationKind::Special, field, &error);
        }
    }

    /// Runs a full validation pass.
    ///
    /// Resets the verdict and the presenter, evaluates every candidate field
    /// in document order, then every custom validation in reverse
    /// registration order. All custom validations run regardless of earlier
    /// failures. Returns the final verdict.
    pub fn run_pass(&mut self, form: &FormModel) -> bool {
        self.valid = true;
        self.presenter.hide_all_violations();
        self.presenter.clear_all();

        for field in form.candidates() {
            self.check_valid(form, field);
        }

        // Reverse registration order, folding with AND: every predicate
        // runs, no short-circuit.
        for validation in self.custom.iter().rev() {
            let passed = validation();
            if !passed {
                tracing::debug!("custom validation rejected the pass");
            }
            self.valid = self.valid && passed;
        }

        tracing::debug!(valid = self.valid, "validation pass finished");
        self.valid
    }

    fn flag(&mut self, group: &GroupId, kind: ViolationKind, field: &Field, error: &ValidationError) {
        tracing::debug!(
            field = field.id(),
            group = %group,
            kind = %kind,
            code = %error.code,
            "violation"
        );
        self.presenter.mark_group_error(group);
        self.presenter.show_violation(group, kind);
        self.valid = false;
    }
}

// ============================================================================
// TESTS
// ============================================================================
