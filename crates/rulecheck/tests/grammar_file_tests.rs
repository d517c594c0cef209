//! Integration tests for the rule grammar using the fixture file format.

use rulecheck_testutil::grammar::{parse_grammar_tests, run_grammar_tests};

const RULES_TEST: &str = include_str!("../../../tests/grammar/rules.test");

#[test]
fn run_grammar_fixture_file() {
    let cases = parse_grammar_tests(RULES_TEST);
    assert!(!cases.is_empty(), "fixture file has no cases");

    let summary = run_grammar_tests(&cases);
    println!("{}", summary);

    assert!(
        summary.all_passed(),
        "grammar fixtures had {} failures and {} errors",
        summary.failed,
        summary.errors
    );
}
