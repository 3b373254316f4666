//! Integration tests for commands running against a terminal host

use std::fs;

use stepgen::commands::{generate_steps, init_project, load_config};
use stepgen::host::{Host, LineRange, TerminalHost};
use stepgen::models::{Config, ConfigOverrides, Framework};
use stepgen::StepgenError;

mod common;

use common::{create_feature_file, create_test_project, method_signatures, CHECKOUT_FEATURE};

#[test]
fn test_generate_feature_file_to_disk() {
    let (_temp_dir, project_root) = create_test_project(Some(
        r#"
[generator]
package_name = "org.shop.steps"
class_name = "CheckoutSteps"
imports = ["org.shop.pages.CartPage"]
"#,
    ));
    let feature = create_feature_file(&project_root, "checkout.feature", CHECKOUT_FEATURE);
    let output = project_root.join("src/test/java/org/shop/steps/CheckoutSteps.java");

    let config = load_config(&project_root, ConfigOverrides::default()).unwrap();
    let mut host = TerminalHost::new(Some(feature), None).non_interactive();
    let report = generate_steps(&mut host, &config, Some(&output)).unwrap();

    assert_eq!(report.step_count, 9);
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, report.output);
    assert!(written.starts_with("package org.shop.steps;\n\n"));
    assert!(written.contains("import org.shop.pages.CartPage;\n"));
    assert!(written.contains("public class CheckoutSteps {"));
    assert!(written.contains("    public CheckoutSteps() {"));
}

#[test]
fn test_generate_selected_lines() {
    let (_temp_dir, project_root) = create_test_project(None);
    let feature = create_feature_file(&project_root, "checkout.feature", CHECKOUT_FEATURE);
    let output = project_root.join("Steps.java");

    // Lines 8-10: the first three steps of "Pay for a cart"
    let range: LineRange = "8:10".parse().unwrap();
    let mut host = TerminalHost::new(Some(feature), Some(range)).non_interactive();
    let report = generate_steps(&mut host, &Config::default(), Some(&output)).unwrap();

    assert_eq!(report.step_count, 3);
    assert_eq!(
        method_signatures(&report.output),
        vec![
            "public void iOpenTheCartPage(String param1) {",
            "public void iHave3ItemsInTheCart(int number1) {",
            "public void iEnterCardNumberAndExpiry(String card_number, String expiry) {",
        ]
    );
}

#[test]
fn test_selection_outside_document() {
    let (_temp_dir, project_root) = create_test_project(None);
    let feature = create_feature_file(&project_root, "short.feature", "Given one\n");

    let mut host = TerminalHost::new(Some(feature), Some(LineRange { start: 1, end: 5 }));
    assert!(matches!(
        host.get_selection(),
        Err(StepgenError::LineRangeOutOfBounds { lines: 1, .. })
    ));
}

#[test]
fn test_no_steps_leaves_output_unwritten() {
    let (_temp_dir, project_root) = create_test_project(None);
    let feature = create_feature_file(&project_root, "empty.feature", "Feature: Empty\n");
    let output = project_root.join("Steps.java");

    let mut host = TerminalHost::new(Some(feature), None).non_interactive();
    let report = generate_steps(&mut host, &Config::default(), Some(&output)).unwrap();

    assert!(report.is_empty());
    assert!(!output.exists());
}

#[test]
fn test_init_then_generate_uses_written_config() {
    let (_temp_dir, project_root) = create_test_project(None);

    let mut host = TerminalHost::new(None, None).non_interactive();
    let config_path = init_project(&mut host, &project_root).unwrap();
    assert!(config_path.exists());

    let config = load_config(
        &project_root,
        ConfigOverrides {
            framework: Some(Framework::Appium),
            ..ConfigOverrides::default()
        },
    )
    .unwrap();
    assert_eq!(config.generator.package_name, "com.example.steps");
    assert_eq!(config.generator.framework, Framework::Appium);

    let second = init_project(&mut host, &project_root);
    assert!(matches!(second, Err(StepgenError::ConfigExists(_))));
}
