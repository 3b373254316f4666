//! Filters raw feature-file lines down to step lines.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Prefixes of lines that are structure, not steps
const SKIPPED_PREFIXES: &[&str] = &["#", "Feature:", "Scenario:", "Background:", "Examples:", "|"];

static STEP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Given|When|Then|And|But)\s+").unwrap());

/// Keep the step lines of `lines`, in order and without duplicates.
///
/// Leading `And`/`But` are rewritten to `Given` before deduplication, so
/// `And I log in` and `Given I log in` collapse into one entry. Running the
/// result through again returns it unchanged.
pub fn classify_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut steps = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();
        let Some(step) = classify_line(line) else {
            continue;
        };
        if seen.insert(step.clone()) {
            steps.push(step);
        } else {
            debug!("Dropping duplicate step line: {}", step);
        }
    }

    debug!("Classified {} step lines", steps.len());
    steps
}

/// Classify a single trimmed line, returning its normalized form
fn classify_line(line: &str) -> Option<String> {
    if line.is_empty() || SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return None;
    }

    let caps = STEP_LINE.captures(line)?;
    let keyword = caps.get(1)?;
    match keyword.as_str() {
        "And" | "But" => Some(format!("Given{}", &line[keyword.end()..])),
        _ => Some(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_structure_lines() {
        let lines = [
            "Feature: Login",
            "  # a comment",
            "Background:",
            "Scenario: happy path",
            "Examples:",
            "  | user | pass |",
            "",
            "   ",
        ];
        assert!(classify_lines(lines).is_empty());
    }

    #[test]
    fn test_accepts_and_trims_steps() {
        let steps = classify_lines(["  Given I am on the login page  ", "When I log in", "Then I see the dashboard"]);
        assert_eq!(
            steps,
            vec!["Given I am on the login page", "When I log in", "Then I see the dashboard"]
        );
    }

    #[test]
    fn test_rewrites_conjunctions_to_given() {
        let steps = classify_lines(["And I click submit", "But I see error"]);
        assert_eq!(steps, vec!["Given I click submit", "Given I see error"]);
    }

    #[test]
    fn test_deduplicates_after_normalization() {
        let steps = classify_lines(["Given I log in", "And I log in", "When I log in", "Given I log in"]);
        assert_eq!(steps, vec!["Given I log in", "When I log in"]);
    }

    #[test]
    fn test_requires_whitespace_after_keyword() {
        let steps = classify_lines(["Givenness is a virtue", "Then", "When\tI tab"]);
        assert_eq!(steps, vec!["When\tI tab"]);
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert!(classify_lines(["given lower case", "WHEN shouting"]).is_empty());
    }

    #[test]
    fn test_scenario_outline_is_rejected() {
        assert!(classify_lines(["Scenario Outline: many users"]).is_empty());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let first = classify_lines([
            "Feature: Cart",
            "Given I have 3 items",
            "And I open the cart",
            "But I open the cart",
            "Then the total contains \"$30\"",
        ]);
        let second = classify_lines(&first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(classify_lines(empty).is_empty());
    }
}
