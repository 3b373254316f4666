//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A feature file exercising every parameter kind and keyword
pub const CHECKOUT_FEATURE: &str = r#"# Checkout flow
Feature: Checkout

  Background:
    Given I am logged in as "shopper"

  Scenario: Pay for a cart
    Given I open the "cart" page
    And I have 3 items in the cart
    When I enter <card number> and <expiry>
    And I click the pay button
    Then I should see the confirmation
    And the receipt text contains "Thank you"
    But I click the pay button

  Scenario Outline: Coupons
    When I apply coupon <code>
    Then the total is 10 percent lower

    Examples:
      | code   |
      | SAVE10 |
"#;

/// Create a project directory, optionally with a stepgen.toml
pub fn create_test_project(config: Option<&str>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let project_root = temp_dir.path().to_path_buf();

    if let Some(contents) = config {
        fs::write(project_root.join("stepgen.toml"), contents).expect("Failed to write config");
    }

    (temp_dir, project_root)
}

/// Write a feature file under the project root
pub fn create_feature_file(project_root: &PathBuf, name: &str, content: &str) -> PathBuf {
    let path = project_root.join("features").join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create features dir");
    }
    fs::write(&path, content).expect("Failed to write feature file");
    path
}

/// Method signatures in generated output, in order
pub fn method_signatures(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("public void "))
        .map(str::to_string)
        .collect()
}

/// Step annotations in generated output, in order
pub fn annotations(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("@Given(") || line.starts_with("@When(") || line.starts_with("@Then("))
        .map(str::to_string)
        .collect()
}
