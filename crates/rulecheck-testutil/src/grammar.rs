//! Grammar fixture parser and runner.
//!
//! Parses the `tests/grammar/*.test` format:
//!
//! ```text
//! # test: min_and_max
//! # expect: ok
//! # split: strict
//! ---
//! min:3;max:10
//! ---
//! (min 3) (max 10)
//! ===
//! ```
//!
//! `# expect:` is `ok` or `malformed` (default `ok`); `# split:` is
//! `first-colon` or `strict` (default `first-colon`). The input is taken
//! verbatim, so leading and trailing spaces in a rule are significant.

use rulecheck::grammar::parse;
use rulecheck::ColonSplit;

use crate::sexpr::{format_error, format_rule};
use crate::{CaseResult, RunSummary};

/// One grammar fixture case.
#[derive(Debug, Clone)]
pub struct GrammarCase {
    /// From the `# test: name` line.
    pub name: String,
    /// Line of the `# test:` header (1-indexed).
    pub line_number: usize,
    pub rule: String,
    pub split: Option<ColonSplit>,
    pub expected: GrammarExpectation,
    /// Unrecognized header values, reported when the case runs.
    pub header_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GrammarExpectation {
    /// Expected constraints as an S-expression.
    Ok(String),
    /// Expected `(error <index> <kind>)`.
    Malformed(String),
}

/// Parse a fixture file into cases.
pub fn parse_grammar_tests(content: &str) -> Vec<GrammarCase> {
    let mut cases = Vec::new();
    let lines: Vec<&str> = content.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let Some(name) = lines[i].trim().strip_prefix("# test:") else {
            i += 1;
            continue;
        };
        let name = name.trim().to_string();
        let line_number = i + 1;
        i += 1;

        let mut malformed = false;
        let mut split = None;
        let mut header_error = None;
        while i < lines.len() && lines[i].trim() != "---" {
            let line = lines[i].trim();
            if let Some(expect) = line.strip_prefix("# expect:") {
                match expect.trim() {
                    "ok" => malformed = false,
                    "malformed" => malformed = true,
                    other => header_error = Some(format!("unknown expectation `{}`", other)),
                }
            } else if let Some(mode) = line.strip_prefix("# split:") {
                match mode.trim() {
                    "first-colon" => split = Some(ColonSplit::FirstColon),
                    "strict" => split = Some(ColonSplit::Strict),
                    other => header_error = Some(format!("unknown split `{}`", other)),
                }
            }
            i += 1;
        }
        i += 1; // ---

        let mut input_lines = Vec::new();
        while i < lines.len() && lines[i].trim() != "---" {
            input_lines.push(lines[i]);
            i += 1;
        }
        i += 1; // ---

        let mut expected_lines = Vec::new();
        while i < lines.len() && lines[i].trim() != "===" {
            expected_lines.push(lines[i]);
            i += 1;
        }
        i += 1; // ===

        let expected = expected_lines.join("\n").trim().to_string();
        cases.push(GrammarCase {
            name,
            line_number,
            rule: input_lines.join("\n"),
            split,
            expected: if malformed {
                GrammarExpectation::Malformed(expected)
            } else {
                GrammarExpectation::Ok(expected)
            },
            header_error,
        });
    }

    cases
}

impl GrammarCase {
    pub fn run(&self) -> CaseResult {
        if let Some(message) = &self.header_error {
            return CaseResult::Error {
                message: message.clone(),
            };
        }

        let (actual, malformed) = match parse(&self.rule, self.split.unwrap_or_default()) {
            Ok(rule) => (format_rule(&rule), false),
            Err(err) => (format_error(&err), true),
        };
        let (expected, expect_malformed) = match &self.expected {
            GrammarExpectation::Ok(expected) => (expected, false),
            GrammarExpectation::Malformed(expected) => (expected, true),
        };

        if malformed == expect_malformed && normalize(&actual) == normalize(expected) {
            CaseResult::Pass
        } else {
            CaseResult::Fail {
                expected: expected.clone(),
                actual,
            }
        }
    }
}

/// Collapse whitespace so fixtures may wrap long expectations.
fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn run_grammar_tests(cases: &[GrammarCase]) -> RunSummary {
    let mut summary = RunSummary::new();
    for case in cases {
        summary.record(&case.name, case.line_number, case.run());
    }
    summary
}
