//! Foundational validation types
//!
//! The building blocks every rule and the engine share:
//!
//! - [`ValidationError`] — structured failure payload (code, message, field,
//!   parameters)
//! - [`RuleResult`] — the result type of a binary rule
//!
//! Rules that can abstain ("no verdict") return `Option<ValidationError>`
//! instead, where `None` means the rule does not object.

pub mod error;

pub use error::ValidationError;

/// The outcome of a binary rule: pass, or fail with a structured payload.
pub type RuleResult = Result<(), ValidationError>;
