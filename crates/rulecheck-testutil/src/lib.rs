//! Test utilities for rulecheck.
//!
//! Provides the parser and runner for the grammar fixture format:
//! `tests/grammar/*.test` holds rule strings with their expected parse.

pub mod grammar;
pub mod sexpr;

use std::fmt;

/// Outcome of one fixture case.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseResult {
    Pass,
    /// The parse disagreed with the fixture.
    Fail { expected: String, actual: String },
    /// The fixture itself is unusable.
    Error { message: String },
}

impl CaseResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseResult::Pass)
    }
}

/// A failing case with its location in the fixture file.
#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub name: String,
    pub line: usize,
    pub result: CaseResult,
}

/// Tally of a fixture run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub failures: Vec<CaseFailure>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, line: usize, result: CaseResult) {
        match result {
            CaseResult::Pass => {
                self.passed += 1;
                return;
            }
            CaseResult::Fail { .. } => self.failed += 1,
            CaseResult::Error { .. } => self.errors += 1,
        }
        self.failures.push(CaseFailure {
            name: name.into(),
            line,
            result,
        });
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "─".repeat(60))?;
        writeln!(
            f,
            "{} cases: {} passed, {} failed, {} errors",
            self.total(),
            self.passed,
            self.failed,
            self.errors
        )?;

        for failure in &self.failures {
            writeln!(f, "  {} (line {})", failure.name, failure.line)?;
            match &failure.result {
                CaseResult::Fail { expected, actual } => {
                    writeln!(f, "    expected: {}", expected)?;
                    writeln!(f, "    actual:   {}", actual)?;
                }
                CaseResult::Error { message } => writeln!(f, "    error: {}", message)?,
                CaseResult::Pass => {}
            }
        }
        write!(f, "{}", "─".repeat(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts() {
        let mut summary = RunSummary::new();
        summary.record("a", 1, CaseResult::Pass);
        summary.record(
            "b",
            7,
            CaseResult::Fail {
                expected: "(min 3)".into(),
                actual: "(min 4)".into(),
            },
        );
        summary.record(
            "c",
            12,
            CaseResult::Error {
                message: "bad split".into(),
            },
        );

        assert_eq!(summary.total(), 3);
        assert!(!summary.all_passed());
        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].line, 7);
        assert!(summary.to_string().contains("expected: (min 3)"));
    }
}
