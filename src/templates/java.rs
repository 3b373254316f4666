//! Java / Cucumber-JVM / WebDriver boilerplate
//!
//! Snippets are written flush-left; the formatter indents them afterwards.

use super::{HintTemplates, Templates};

/// Get the Java step-definition templates
pub fn templates() -> Templates {
    Templates {
        default_imports: DEFAULT_IMPORTS,
        fields: FIELDS,
        constructor_body: CONSTRUCTOR_BODY,
        helper_methods: HELPER_METHODS,
        hints: HintTemplates {
            click: CLICK_HINT,
            navigation: NAVIGATION_HINT,
            input: INPUT_HINT,
            visibility: VISIBILITY_HINT,
            text: TEXT_HINT,
            setup: SETUP_HINT,
            action: ACTION_HINT,
            assertion: ASSERTION_HINT,
        },
    }
}

pub const DEFAULT_IMPORTS: &[&str] = &[
    "io.cucumber.java.en.Given",
    "io.cucumber.java.en.When",
    "io.cucumber.java.en.Then",
    "org.openqa.selenium.By",
    "org.openqa.selenium.WebDriver",
    "org.openqa.selenium.WebElement",
    "org.openqa.selenium.support.ui.ExpectedConditions",
    "org.openqa.selenium.support.ui.WebDriverWait",
    "java.time.Duration",
    "static org.junit.Assert.*",
];

pub const FIELDS: &str = "private WebDriver driver;
private WebDriverWait wait;";

pub const CONSTRUCTOR_BODY: &str = "// TODO: obtain the driver from your test context
// driver = DriverManager.getDriver();
// wait = new WebDriverWait(driver, Duration.ofSeconds(10));";

pub const HELPER_METHODS: &str = "/**
 * Wait for an element to become visible and return it.
 */
private WebElement findElement(By locator) {
return wait.until(ExpectedConditions.visibilityOfElementLocated(locator));
}

/**
 * Check whether an element is displayed without failing the step.
 */
private boolean isElementDisplayed(By locator) {
try {
return driver.findElement(locator).isDisplayed();
} catch (Exception e) {
return false;
}
}";

pub const CLICK_HINT: &str = "// TODO: locate the element and click it
// WebElement element = findElement(By.id(\"element-id\"));
// element.click();";

pub const NAVIGATION_HINT: &str = "// TODO: navigate to the target page
// driver.get(\"https://example.com/path\");
// wait.until(ExpectedConditions.urlContains(\"path\"));";

pub const INPUT_HINT: &str = "// TODO: type into the input field
// WebElement field = findElement(By.name(\"field-name\"));
// field.clear();
// field.sendKeys(value);";

pub const VISIBILITY_HINT: &str = "// TODO: assert the element is visible
// assertTrue(isElementDisplayed(By.id(\"element-id\")));";

pub const TEXT_HINT: &str = "// TODO: assert on the element text
// String actual = findElement(By.id(\"element-id\")).getText();
// assertTrue(actual.contains(expected));";

pub const SETUP_HINT: &str = "// TODO: put the application into the state this step describes";

pub const ACTION_HINT: &str = "// TODO: perform the action this step describes";

pub const ASSERTION_HINT: &str = "// TODO: verify the expected outcome
// assertEquals(expected, actual);";
