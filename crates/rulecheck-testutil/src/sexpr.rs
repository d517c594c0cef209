//! S-expression rendering of parsed rules, for fixture comparison.
//!
//! `min:3;in:a,b;note:x` renders as `(min 3) (in "a" "b") (unknown note "x")`.

use rulecheck::{Constraint, Rule, SyntaxError};

pub fn format_rule(rule: &Rule<'_>) -> String {
    rule.iter()
        .map(format_constraint)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_constraint(constraint: &Constraint<'_>) -> String {
    match constraint {
        Constraint::Len(n) => format!("(len {})", n),
        Constraint::Min(n) => format!("(min {})", n),
        Constraint::Max(n) => format!("(max {})", n),
        Constraint::In(entries) => {
            let entries: Vec<String> = entries.iter().map(|e| format!("{:?}", e)).collect();
            format!("(in {})", entries.join(" "))
        }
        Constraint::Unknown { kind, argument } => format!("(unknown {} {:?})", kind, argument),
    }
}

/// `(error <spec index> <kind>)`.
pub fn format_error(err: &SyntaxError) -> String {
    format!("(error {} {})", err.index, err.kind.as_str())
}
