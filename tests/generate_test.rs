//! Integration tests for end-to-end generation

use regex::Regex;
use stepgen::core::{classify_lines, parse_step, parse_steps, NameRegistry};
use stepgen::models::{ConfigOverrides, ParamType, StepKeyword};
use stepgen::{generate, generate_report, Config};

mod common;

use common::{annotations, method_signatures, CHECKOUT_FEATURE};

#[test]
fn test_checkout_feature_signatures() {
    let output = generate(CHECKOUT_FEATURE.lines(), &Config::default());

    assert_eq!(
        method_signatures(&output),
        vec![
            "public void iAmLoggedInAsShopper(String param1) {",
            "public void iOpenTheCartPage(String param1) {",
            "public void iHave3ItemsInTheCart(int number1) {",
            "public void iEnterCardNumberAndExpiry(String card_number, String expiry) {",
            "public void iClickThePayButton() {",
            "public void iShouldSeeTheConfirmation() {",
            "public void theReceiptTextContainsThankYou(String param1) {",
            "public void iApplyCouponCode(String code) {",
            "public void theTotalIs10PercentLower(int number1) {",
        ]
    );
}

#[test]
fn test_checkout_feature_annotations() {
    let output = generate(CHECKOUT_FEATURE.lines(), &Config::default());
    let annotations = annotations(&output);

    assert_eq!(annotations.len(), 9);
    assert_eq!(annotations[0], r#"@Given("^I am logged in as "(.*?)"$")"#);
    assert_eq!(annotations[2], r#"@Given("^I have (\d+) items in the cart$")"#);
    assert_eq!(annotations[3], r#"@When("^I enter (.*) and (.*)$")"#);
    assert_eq!(annotations[4], r#"@Given("^I click the pay button$")"#);
    assert_eq!(annotations[8], r#"@Then("^the total is (\d+) percent lower$")"#);
}

#[test]
fn test_conjunction_steps_become_given() {
    let steps = classify_lines(["And I click submit", "But I see error"]);
    assert_eq!(steps, vec!["Given I click submit", "Given I see error"]);

    for line in &steps {
        assert_eq!(parse_step(line).unwrap().keyword, StepKeyword::Given);
    }
}

#[test]
fn test_example_quoted_parameter() {
    let step = parse_step("Given I am on the \"home\" page").unwrap();
    assert_eq!(step.parameters.len(), 1);
    assert_eq!(step.parameters[0].type_name, ParamType::String);
    assert_eq!(step.parameters[0].name, "param1");
    assert_eq!(step.match_pattern, r#"I am on the "(.*?)" page"#);

    let output = generate(["Given I am on the \"home\" page"], &Config::default());
    assert!(output.contains(r#"@Given("^I am on the "(.*?)" page$")"#));
}

#[test]
fn test_example_angle_and_integer() {
    let step = parse_step("When I enter <username> and 5 retries").unwrap();
    assert_eq!(step.argument_list(), "String username, int number1");
    let angle = step.match_pattern.find("(.*)").unwrap();
    let int = step.match_pattern.find(r"(\d+)").unwrap();
    assert!(angle < int);
}

#[test]
fn test_example_colliding_identifiers() {
    let mut registry = NameRegistry::new();
    assert_eq!(registry.claim("clickButton"), "clickButton");
    assert_eq!(registry.claim("clickButton"), "clickButton1");
}

#[test]
fn test_example_empty_input() {
    let empty: Vec<String> = Vec::new();
    assert!(classify_lines(&empty).is_empty());

    let report = generate_report(&empty, &Config::default());
    assert_eq!(report.step_count, 0);
    assert!(method_signatures(&report.output).is_empty());
    assert!(report.output.contains("public class StepDefinitions {"));
    assert!(report.output.contains("private boolean isElementDisplayed(By locator) {"));
}

#[test]
fn test_capture_groups_equal_parameters_for_feature() {
    let (steps, skipped) = parse_steps(CHECKOUT_FEATURE.lines());
    assert_eq!(skipped, 0);
    assert_eq!(steps.len(), 9);

    for step in steps {
        let re = Regex::new(&step.anchored_pattern()).unwrap();
        assert_eq!(re.captures_len() - 1, step.parameters.len(), "{}", step.original_step);
    }
}

#[test]
fn test_patterns_match_their_own_steps() {
    let (steps, _) = parse_steps(CHECKOUT_FEATURE.lines());

    for step in steps {
        let re = Regex::new(&step.anchored_pattern()).unwrap();
        let caps = re
            .captures(&step.step_text)
            .unwrap_or_else(|| panic!("pattern does not match: {}", step.step_text));
        assert_eq!(caps.len() - 1, step.parameters.len());
    }
}

#[test]
fn test_classification_is_idempotent_on_feature() {
    let once = classify_lines(CHECKOUT_FEATURE.lines());
    let twice = classify_lines(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_output_is_deterministic() {
    let config = Config::default().with_overrides(ConfigOverrides {
        package_name: Some("org.shop.steps".to_string()),
        base_test_class: Some("BaseTest".to_string()),
        imports: vec!["org.shop.pages.CartPage".to_string(), "org.openqa.selenium.By".to_string()],
        ..ConfigOverrides::default()
    });

    let first = generate(CHECKOUT_FEATURE.lines(), &config);
    let second = generate(CHECKOUT_FEATURE.lines(), &config);
    assert_eq!(first, second);
    assert_eq!(first.matches("import org.openqa.selenium.By;").count(), 1);
    assert!(first.contains("public class StepDefinitions extends BaseTest {"));
}

#[test]
fn test_output_indentation() {
    let output = generate(["When I click submit"], &Config::default());

    assert!(output.contains("\n    /**\n     * When I click submit\n     * Parameters: 0\n     */\n"));
    assert!(output.contains("\n    public void iClickSubmit() {\n        try {\n"));
    assert!(output.contains("\n        } catch (Exception e) {\n            throw new RuntimeException("));
    assert!(output.ends_with("    }\n}\n"));
    assert!(output.lines().all(|line| !line.ends_with(' ')));
}
