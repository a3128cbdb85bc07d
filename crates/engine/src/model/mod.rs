//! Field and form descriptors
//!
//! - [`FieldSpec`] / [`ControlType`] — declarative field descriptors,
//!   serde-(de)serializable
//! - [`Field`] / [`GroupId`] — compiled descriptors with resolved groups
//!   and anchored patterns
//! - [`FormModel`] — the ordered, indexed field set a validation pass runs
//!   over, with its construction-time checks ([`FormError`])

pub mod field;
pub mod form;

pub use field::{ControlType, Field, FieldSpec, GroupId};
pub use form::{FormError, FormModel};
