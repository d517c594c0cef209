//! Constraint evaluators.
//!
//! Pure functions from a value and one parsed [`Constraint`] to pass/fail.
//! Text length is measured in bytes, like `str::len`.

use crate::error::Reason;
use crate::grammar::Constraint;
use crate::record::Scalar;

/// Check one scalar against one constraint.
pub fn check(value: &Scalar<'_>, constraint: &Constraint<'_>) -> Result<(), Reason> {
    match *value {
        Scalar::Text(text) => check_text(text, constraint),
        Scalar::Int(n) => check_int(n, constraint),
    }
}

/// Text: `len` is exact, `min`/`max` bound the length, `in` is exact match.
pub fn check_text(value: &str, constraint: &Constraint<'_>) -> Result<(), Reason> {
    let len = value.len() as i128;
    match constraint {
        Constraint::Len(n) => satisfied(len == i128::from(*n)),
        Constraint::Min(n) => satisfied(len >= i128::from(*n)),
        Constraint::Max(n) => satisfied(len <= i128::from(*n)),
        Constraint::In(allowed) => satisfied(allowed.contains(&value)),
        Constraint::Unknown { kind, .. } => {
            tracing::trace!(kind = *kind, "ignoring unknown constraint kind");
            Ok(())
        }
    }
}

/// Integers: `min`/`max` are inclusive bounds, `in` parses its entries.
///
/// Entries of an `in` list are parsed in order and the first equal one wins,
/// so an unparseable entry only fails the check if it comes before a match.
/// `len` does not apply to integers and always passes.
pub fn check_int(value: i128, constraint: &Constraint<'_>) -> Result<(), Reason> {
    match constraint {
        Constraint::Min(n) => satisfied(value >= i128::from(*n)),
        Constraint::Max(n) => satisfied(value <= i128::from(*n)),
        Constraint::In(allowed) => {
            for entry in allowed {
                let parsed = entry
                    .parse::<i64>()
                    .map_err(|source| Reason::InvalidListEntry {
                        entry: entry.to_string(),
                        source,
                    })?;
                if i128::from(parsed) == value {
                    return Ok(());
                }
            }
            Err(Reason::FailedConstraint)
        }
        Constraint::Len(_) => Ok(()),
        Constraint::Unknown { kind, .. } => {
            tracing::trace!(kind = *kind, "ignoring unknown constraint kind");
            Ok(())
        }
    }
}

fn satisfied(ok: bool) -> Result<(), Reason> {
    if ok {
        Ok(())
    } else {
        Err(Reason::FailedConstraint)
    }
}
