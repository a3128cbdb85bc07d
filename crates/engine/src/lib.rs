//! # formguard-engine
//!
//! A synchronous field-validation engine for form submission.
//!
//! Given a form's fields and their declared constraints, the engine decides
//! per-field validity, reports violations to a presenter, and returns a
//! single boolean verdict the caller uses to allow or block the submission.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formguard_engine::prelude::*;
//!
//! let form = FormModel::build([
//!     FieldSpec::new("email", ControlType::Email)
//!         .with_group("contact")
//!         .with_required()
//!         .with_value("user@example.com"),
//! ])?;
//!
//! let mut engine = ValidationEngine::new(RecordingPresenter::new());
//! assert!(engine.run_pass(&form));
//! ```
//!
//! ## Architecture
//!
//! - [`model`] — field descriptors ([`FieldSpec`](model::FieldSpec)), the
//!   compiled [`FormModel`](model::FormModel), and its construction checks
//! - [`rules`] — pure per-field predicates (emptiness, required-ness,
//!   patterns, type dispatch, length, numeric range/step, same-as)
//! - [`engine`] — orchestration, the aggregate verdict, and the
//!   custom-validation registry
//! - [`presenter`] — the violation-display seam and an in-memory recorder
//!
//! The engine is fully synchronous and single-threaded: one pass runs to
//! completion before control returns, and re-running a pass against an
//! unchanged form is idempotent.

// ValidationError is the payload of every rule failure — boxing it would add
// indirection to every check for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod engine;
pub mod foundation;
pub mod model;
pub mod prelude;
pub mod presenter;
pub mod rules;
