//! Field dispatch.
//!
//! Walks a record's fields in declaration order and turns each rule into
//! violations. Per field:
//!
//! 1. no rule: skipped
//! 2. private: `unexported-field-validated`, nothing else
//! 3. malformed rule: `invalid-syntax`, nothing else
//! 4. text or integer: every spec is checked, one violation per failing spec
//! 5. sequence: every spec against every element, one violation per failing pair
//! 6. unsupported type: `type not supported`, no spec is checked
//!
//! A failing field never stops the walk.

use crate::config::Options;
use crate::constraint;
use crate::error::{Reason, Violation};
use crate::grammar::{self, Rule};
use crate::record::{FieldDescriptor, FieldValue, Scalar};

/// Collect the violations of every field, in order.
pub fn dispatch(fields: &[FieldDescriptor<'_>], options: Options) -> Vec<Violation> {
    let mut violations = Vec::new();
    for field in fields {
        check_field(field, options, &mut violations);
    }
    violations
}

fn check_field(field: &FieldDescriptor<'_>, options: Options, out: &mut Vec<Violation>) {
    let Some(rule) = field.rule.filter(|rule| !rule.is_empty()) else {
        return;
    };

    let mut report = |reason: Reason| {
        tracing::debug!(
            field = field.name,
            value = field.value.describe(),
            reason = %reason,
            "violation"
        );
        out.push(Violation::new(field.name, reason));
    };

    if !field.accessible {
        report(Reason::UnexportedField);
        return;
    }

    let rule = match grammar::parse(rule, options.colon_split) {
        Ok(rule) => rule,
        Err(err) => {
            tracing::debug!(field = field.name, rule, error = %err, "malformed rule");
            report(Reason::InvalidSyntax);
            return;
        }
    };

    match &field.value {
        FieldValue::Scalar(value) => check_all(&rule, std::slice::from_ref(value), &mut report),
        FieldValue::Seq { items, .. } => check_all(&rule, items, &mut report),
        FieldValue::Unsupported { type_name } => {
            tracing::debug!(field = field.name, type_name = *type_name, "unsupported field type");
            report(Reason::UnsupportedType);
        }
    }
}

/// Spec-major order: all elements against the first spec, then the second.
fn check_all(rule: &Rule<'_>, values: &[Scalar<'_>], report: &mut impl FnMut(Reason)) {
    for constraint in rule {
        for value in values {
            if let Err(reason) = constraint::check(value, constraint) {
                report(reason);
            }
        }
    }
}
