//! Violations and the composite validation error.
//!
//! Every failure found while validating one record becomes a [`Violation`].
//! They are collected in field order, then spec order, then element order,
//! and returned together as [`ValidationErrors`].
//!
//! Rendering is one line per violation. Syntax and visibility problems are
//! about the rule itself and print unadorned; everything else is prefixed
//! with the field name:
//!
//! ```text
//! validation for unexported field is not allowed
//! [Name]: field invalidated
//! ```

use std::fmt;
use std::num::ParseIntError;

use serde::Serialize;

/// Why a field failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Reason {
    /// The rule string is malformed.
    #[error("invalid validator syntax")]
    InvalidSyntax,
    /// A rule is attached to a private field.
    #[serde(rename = "unexported-field-validated")]
    #[error("validation for unexported field is not allowed")]
    UnexportedField,
    /// A constraint is not satisfied by the value.
    #[error("field invalidated")]
    FailedConstraint,
    /// The field's type is not text, integer, or a sequence of either.
    #[error("type not supported")]
    UnsupportedType,
    /// An `in` list checked against an integer has a non-integer entry.
    #[error("invalid integer {entry:?} in membership list")]
    InvalidListEntry {
        entry: String,
        #[source]
        #[serde(skip)]
        source: ParseIntError,
    },
}

impl Reason {
    /// Reasons rendered without the `[field]: ` prefix.
    pub fn is_unadorned(&self) -> bool {
        matches!(self, Reason::InvalidSyntax | Reason::UnexportedField)
    }
}

/// One failure tied to the field it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub reason: Reason,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: Reason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_unadorned() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "[{}]: {}", self.field, self.reason)
        }
    }
}

/// All violations found in one record, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.0 {
            writeln!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Turn collected violations into a result: no violations is success.
pub fn aggregate(violations: Vec<Violation>) -> Result<(), ValidationErrors> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

/// What validating a value can fail with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value is not a record. No field was examined.
    #[error("wrong argument given, should be a struct")]
    NotAStruct { type_name: &'static str },
    /// The record has one or more violations.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// The violations, empty for [`Error::NotAStruct`].
    pub fn violations(&self) -> &[Violation] {
        match self {
            Error::NotAStruct { .. } => &[],
            Error::Invalid(errors) => errors.violations(),
        }
    }

    pub fn is_not_a_struct(&self) -> bool {
        matches!(self, Error::NotAStruct { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_entry_error(entry: &str) -> Reason {
        let source = entry.parse::<i64>().expect_err("not an integer");
        Reason::InvalidListEntry {
            entry: entry.to_string(),
            source,
        }
    }

    #[test]
    fn empty_is_success() {
        assert_eq!(aggregate(Vec::new()), Ok(()));
    }

    #[test]
    fn reason_messages() {
        assert_eq!(Reason::InvalidSyntax.to_string(), "invalid validator syntax");
        assert_eq!(
            Reason::UnexportedField.to_string(),
            "validation for unexported field is not allowed"
        );
        assert_eq!(Reason::FailedConstraint.to_string(), "field invalidated");
        assert_eq!(Reason::UnsupportedType.to_string(), "type not supported");
        assert_eq!(
            list_entry_error("x").to_string(),
            r#"invalid integer "x" in membership list"#
        );
    }

    #[test]
    fn renders_in_order_with_prefixes() {
        let errors = aggregate(vec![
            Violation::new("secret", Reason::UnexportedField),
            Violation::new("Name", Reason::FailedConstraint),
            Violation::new("Tags", Reason::InvalidSyntax),
            Violation::new("Ratio", Reason::UnsupportedType),
        ])
        .expect_err("violations");

        assert_eq!(
            errors.to_string(),
            "validation for unexported field is not allowed\n\
             [Name]: field invalidated\n\
             invalid validator syntax\n\
             [Ratio]: type not supported\n"
        );
    }

    #[test]
    fn list_entry_error_keeps_source() {
        use std::error::Error as _;
        let reason = list_entry_error("x");
        assert!(reason.source().is_some());
        assert_eq!(
            Violation::new("Code", reason).to_string(),
            r#"[Code]: invalid integer "x" in membership list"#
        );
    }

    #[test]
    fn structured_access() {
        let errors = aggregate(vec![
            Violation::new("a", Reason::FailedConstraint),
            Violation::new("b", Reason::UnsupportedType),
        ])
        .expect_err("violations");

        assert_eq!(errors.len(), 2);
        let fields: Vec<&str> = errors.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["a", "b"]);

        let err = Error::from(errors.clone());
        assert_eq!(err.violations(), errors.violations());
        assert_eq!(err.to_string(), errors.to_string());
        assert_eq!(errors.into_vec().len(), 2);
    }

    #[test]
    fn not_a_struct_has_no_violations() {
        let err = Error::NotAStruct { type_name: "i32" };
        assert!(err.violations().is_empty());
        assert!(err.is_not_a_struct());
        assert_eq!(err.to_string(), "wrong argument given, should be a struct");
    }
}
