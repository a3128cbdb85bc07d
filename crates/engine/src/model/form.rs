//! The compiled form: ordered fields, id index, construction checks
//!
//! A [`FormModel`] is built once per validation pass from a list of
//! [`FieldSpec`]s in document order. Construction is where structural
//! preconditions are enforced: duplicate ids, dangling same-as references
//! and invalid pattern sources are errors, and fields without an
//! error-reporting group are set aside instead of silently surprising a
//! later pass.

use std::collections::HashMap;

use thiserror::Error;

use super::field::{Field, FieldSpec};

// ============================================================================
// FORM ERROR
// ============================================================================

/// Errors raised while building a [`FormModel`].
#[derive(Debug, Error)]
pub enum FormError {
    /// Two fields share an id.
    #[error("duplicate field id `{id}`")]
    DuplicateFieldId {
        /// The repeated id.
        id: String,
    },

    /// A same-as reference names a field that does not exist.
    #[error("field `{field}` references `{target}` as same-as target, but no such field exists")]
    UnknownSameAsTarget {
        /// The referencing field.
        field: String,
        /// The missing target id.
        target: String,
    },

    /// A declared pattern is not a valid regular expression.
    #[error("field `{field}` declares an invalid pattern")]
    InvalidPattern {
        /// The declaring field.
        field: String,
        /// The regex compile failure.
        #[source]
        source: regex::Error,
    },

    /// The field-spec JSON could not be parsed.
    #[error("invalid field spec document")]
    InvalidSpec(#[from] serde_json::Error),
}

// ============================================================================
// FORM MODEL
// ============================================================================

/// An immutable, document-ordered set of compiled fields.
///
/// Fields with a group are validation candidates; fields without one are
/// detached and never evaluated, but stay resolvable by id (a same-as
/// reference may point at them) and by shared name (radio scans cover them).
///
/// # Examples
///
/// ```rust,ignore
/// use formguard_engine::model::{ControlType, FieldSpec, FormModel};
///
/// let form = FormModel::build([
///     FieldSpec::new("email", ControlType::Email).with_group("contact"),
///     FieldSpec::new("send", ControlType::Submit),
/// ])?;
/// assert_eq!(form.candidates().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl FormModel {
    /// Compiles specs in document order into a form.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] on duplicate ids, unknown same-as targets, or
    /// invalid pattern sources.
    pub fn build(specs: impl IntoIterator<Item = FieldSpec>) -> Result<Self, FormError> {
        let mut fields = Vec::new();
        let mut index = HashMap::new();

        for spec in specs {
            let field = Field::compile(spec)?;
            if index.insert(field.id().to_owned(), fields.len()).is_some() {
                return Err(FormError::DuplicateFieldId {
                    id: field.id().to_owned(),
                });
            }
            fields.push(field);
        }

        for field in &fields {
            if let Some(target) = field.same_as() {
                if !index.contains_key(target) {
                    return Err(FormError::UnknownSameAsTarget {
                        field: field.id().to_owned(),
                        target: target.to_owned(),
                    });
                }
            }
            if field.group().is_none() && field.control().participates() && !field.is_disabled() {
                tracing::warn!(
                    field = field.id(),
                    control = %field.control(),
                    "field has no error-reporting group and will not be validated"
                );
            }
        }

        Ok(Self { fields, index })
    }

    /// Builds a form from a JSON array of field specs.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] if the document does not parse or a spec
    /// fails a construction check.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let specs: Vec<FieldSpec> = serde_json::from_str(json)?;
        Self::build(specs)
    }

    /// Validation candidates: grouped fields, in document order.
    pub fn candidates(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.group().is_some())
    }

    /// Fields excluded from validation because they have no group.
    pub fn detached(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.group().is_none())
    }

    /// Looks up any field by id.
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.index.get(id).map(|&at| &self.fields[at])
    }

    /// All fields sharing the given name (a radio choice group).
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Field> {
        self.fields
            .iter()
            .filter(move |field| field.name() == Some(name))
    }

    /// Total number of fields, detached ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
