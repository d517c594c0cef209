//! Rule string grammar.
//!
//! A rule string is one or more constraint specs joined by `;`, each of the
//! form `kind:argument`:
//!
//! ```text
//! min:3;max:10
//! in:draft,published
//! len:36
//! ```
//!
//! Only `len`, `min`, `max` and `in` carry meaning. Any other kind is
//! accepted here and ignored when values are checked.
//!
//! The grammar is purely syntactic. `in:1,x` parses fine even though `x`
//! will never compare equal to an integer; that surfaces as a value-level
//! violation when the rule meets an integer field.

use std::fmt;

use crate::config::ColonSplit;

/// One parsed `kind:argument` spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint<'a> {
    /// `len:N`: exact text length. No-op for integers.
    Len(i64),
    /// `min:N`: inclusive lower bound on text length or integer value.
    Min(i64),
    /// `max:N`: inclusive upper bound on text length or integer value.
    Max(i64),
    /// `in:a,b,c`: the value must equal one of the entries.
    ///
    /// Entries stay raw text; integer fields parse them on use.
    In(Vec<&'a str>),
    /// Any other kind. Always satisfied.
    Unknown { kind: &'a str, argument: &'a str },
}

impl Constraint<'_> {
    /// The kind as written.
    pub fn kind(&self) -> &str {
        match self {
            Constraint::Len(_) => "len",
            Constraint::Min(_) => "min",
            Constraint::Max(_) => "max",
            Constraint::In(_) => "in",
            Constraint::Unknown { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for Constraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Len(n) => write!(f, "len:{}", n),
            Constraint::Min(n) => write!(f, "min:{}", n),
            Constraint::Max(n) => write!(f, "max:{}", n),
            Constraint::In(entries) => write!(f, "in:{}", entries.join(",")),
            Constraint::Unknown { kind, argument } => write!(f, "{}:{}", kind, argument),
        }
    }
}

/// A well-formed rule: its constraints in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    constraints: Vec<Constraint<'a>>,
}

impl<'a> Rule<'a> {
    pub fn constraints(&self) -> &[Constraint<'a>] {
        &self.constraints
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint<'a>> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<'r, 'a> IntoIterator for &'r Rule<'a> {
    type Item = &'r Constraint<'a>;
    type IntoIter = std::slice::Iter<'r, Constraint<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

/// Why a spec was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("missing `:` between kind and argument")]
    MissingColon,
    #[error("more than one `:` in a numeric spec")]
    ExtraColon,
    #[error("empty argument")]
    EmptyArgument,
    #[error("argument is not an integer")]
    NotAnInteger,
}

impl SyntaxErrorKind {
    /// Short kebab-case name, stable for test fixtures and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxErrorKind::MissingColon => "missing-colon",
            SyntaxErrorKind::ExtraColon => "extra-colon",
            SyntaxErrorKind::EmptyArgument => "empty-argument",
            SyntaxErrorKind::NotAnInteger => "not-an-integer",
        }
    }
}

/// The first malformed spec in a rule string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("spec #{index} `{spec}`: {kind}")]
pub struct SyntaxError {
    /// Zero-based position of the offending constraint in the rule string.
    pub index: usize,
    /// The offending spec text.
    pub spec: String,
    pub kind: SyntaxErrorKind,
}

/// Parse a rule string into its constraints.
///
/// Stops at the first malformed spec. An empty spec (`"min:3;"` has one
/// after the trailing `;`) is malformed, as is an entirely blank rule; callers
/// that treat an empty rule as "no rule" must check before parsing.
pub fn parse(rule: &str, split: ColonSplit) -> Result<Rule<'_>, SyntaxError> {
    let constraints = rule
        .split(';')
        .enumerate()
        .map(|(index, spec)| {
            parse_spec(spec, split).map_err(|kind| SyntaxError {
                index,
                spec: spec.to_string(),
                kind,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Rule { constraints })
}

/// True if the rule parses with the default split.
pub fn is_well_formed(rule: &str) -> bool {
    parse(rule, ColonSplit::default()).is_ok()
}

fn parse_spec(spec: &str, split: ColonSplit) -> Result<Constraint<'_>, SyntaxErrorKind> {
    let (kind, rest) = spec.split_once(':').ok_or(SyntaxErrorKind::MissingColon)?;

    // Under Strict the argument ends at the next colon, if there is one.
    let (argument, extra_colon) = match split {
        ColonSplit::FirstColon => (rest, false),
        ColonSplit::Strict => match rest.split_once(':') {
            Some((argument, _)) => (argument, true),
            None => (rest, false),
        },
    };

    match kind {
        "len" | "min" | "max" => {
            if extra_colon {
                return Err(SyntaxErrorKind::ExtraColon);
            }
            let bound = parse_bound(argument)?;
            Ok(match kind {
                "len" => Constraint::Len(bound),
                "min" => Constraint::Min(bound),
                _ => Constraint::Max(bound),
            })
        }
        "in" => {
            if argument.is_empty() {
                return Err(SyntaxErrorKind::EmptyArgument);
            }
            Ok(Constraint::In(argument.split(',').collect()))
        }
        _ => Ok(Constraint::Unknown {
            kind,
            argument: rest,
        }),
    }
}

fn parse_bound(argument: &str) -> Result<i64, SyntaxErrorKind> {
    if argument.is_empty() {
        return Err(SyntaxErrorKind::EmptyArgument);
    }
    argument
        .parse::<i64>()
        .map_err(|_| SyntaxErrorKind::NotAnInteger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(rule: &str) -> Result<Rule<'_>, SyntaxError> {
        parse(rule, ColonSplit::FirstColon)
    }

    #[test]
    fn parse_single_min() {
        let rule = parse_default("min:3").expect("ok");
        assert_eq!(rule.constraints(), &[Constraint::Min(3)]);
    }

    #[test]
    fn parse_keeps_spec_order() {
        let rule = parse_default("max:10;min:3;len:5").expect("ok");
        assert_eq!(
            rule.constraints(),
            &[Constraint::Max(10), Constraint::Min(3), Constraint::Len(5)]
        );
    }

    #[test]
    fn parse_in_list() {
        let rule = parse_default("in:a,b,c").expect("ok");
        assert_eq!(rule.constraints(), &[Constraint::In(vec!["a", "b", "c"])]);
    }

    #[test]
    fn parse_in_keeps_empty_entries() {
        let rule = parse_default("in:a,,b").expect("ok");
        assert_eq!(rule.constraints(), &[Constraint::In(vec!["a", "", "b"])]);
    }

    #[test]
    fn parse_signed_bounds() {
        let rule = parse_default("min:-5;max:+5").expect("ok");
        assert_eq!(rule.constraints(), &[Constraint::Min(-5), Constraint::Max(5)]);
    }

    #[test]
    fn unknown_kind_is_accepted() {
        let rule = parse_default("regex:^a+$").expect("ok");
        assert_eq!(
            rule.constraints(),
            &[Constraint::Unknown {
                kind: "regex",
                argument: "^a+$"
            }]
        );
    }

    #[test]
    fn unknown_kind_with_empty_argument_is_accepted() {
        assert!(is_well_formed("foo:"));
    }

    #[test]
    fn non_integer_bound_is_malformed() {
        let err = parse_default("min:abc").expect_err("malformed");
        assert_eq!(err.kind, SyntaxErrorKind::NotAnInteger);
        assert_eq!(err.index, 0);
        assert_eq!(err.spec, "min:abc");
    }

    #[test]
    fn empty_bound_is_malformed() {
        let err = parse_default("min:").expect_err("malformed");
        assert_eq!(err.kind, SyntaxErrorKind::EmptyArgument);
    }

    #[test]
    fn empty_in_is_malformed() {
        let err = parse_default("in:").expect_err("malformed");
        assert_eq!(err.kind, SyntaxErrorKind::EmptyArgument);
    }

    #[test]
    fn missing_colon_is_malformed() {
        let err = parse_default("min").expect_err("malformed");
        assert_eq!(err.kind, SyntaxErrorKind::MissingColon);
    }

    #[test]
    fn trailing_separator_is_malformed() {
        let err = parse_default("min:3;").expect_err("malformed");
        assert_eq!(err.index, 1);
        assert_eq!(err.kind, SyntaxErrorKind::MissingColon);
    }

    #[test]
    fn blank_rule_is_malformed() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed(" "));
    }

    #[test]
    fn reports_first_bad_spec() {
        let err = parse_default("min:1;max:x;len:").expect_err("malformed");
        assert_eq!(err.index, 1);
        assert_eq!(err.kind, SyntaxErrorKind::NotAnInteger);
    }

    #[test]
    fn bound_out_of_range_is_malformed() {
        let err = parse_default("max:99999999999999999999").expect_err("malformed");
        assert_eq!(err.kind, SyntaxErrorKind::NotAnInteger);
    }

    #[test]
    fn first_colon_keeps_colons_in_membership() {
        let rule = parse_default("in:a:b,c").expect("ok");
        assert_eq!(rule.constraints(), &[Constraint::In(vec!["a:b", "c"])]);
    }

    #[test]
    fn first_colon_rejects_colon_in_bound() {
        let err = parse_default("min:3:4").expect_err("malformed");
        assert_eq!(err.kind, SyntaxErrorKind::NotAnInteger);
    }

    #[test]
    fn strict_truncates_membership_at_second_colon() {
        let rule = parse("in:a:b,c", ColonSplit::Strict).expect("ok");
        assert_eq!(rule.constraints(), &[Constraint::In(vec!["a"])]);
    }

    #[test]
    fn strict_rejects_extra_colon_in_bound() {
        let err = parse("min:3:4", ColonSplit::Strict).expect_err("malformed");
        assert_eq!(err.kind, SyntaxErrorKind::ExtraColon);
    }

    #[test]
    fn strict_rejects_membership_with_empty_first_part() {
        let err = parse("in::a", ColonSplit::Strict).expect_err("malformed");
        assert_eq!(err.kind, SyntaxErrorKind::EmptyArgument);
        assert!(parse("in::a", ColonSplit::FirstColon).is_ok());
    }

    #[test]
    fn display_round_trips_written_form() {
        let rule = parse_default("len:4;in:x,y;note:hi").expect("ok");
        let rendered: Vec<String> = rule.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["len:4", "in:x,y", "note:hi"]);
    }

    #[test]
    fn syntax_error_display() {
        let err = parse_default("min:3;max:ten").expect_err("malformed");
        assert_eq!(
            err.to_string(),
            "spec #1 `max:ten`: argument is not an integer"
        );
    }
}
