//! Target framework tag for generated step definitions

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Automation framework the generated class is written against.
///
/// The tag is recorded in configuration and in the class header, but every
/// variant currently renders the same Cucumber + WebDriver style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Cucumber-JVM driving Selenium WebDriver
    Selenium,
    /// Cucumber-JVM driving Appium
    Appium,
}

impl Framework {
    /// Returns the display name for the framework
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Selenium => "Selenium WebDriver",
            Framework::Appium => "Appium",
        }
    }

    /// Returns the config/CLI identifier for the framework
    pub fn tag(&self) -> &'static str {
        match self {
            Framework::Selenium => "selenium",
            Framework::Appium => "appium",
        }
    }

    /// Returns all available frameworks
    pub fn all() -> &'static [Framework] {
        &[Framework::Selenium, Framework::Appium]
    }
}

impl Default for Framework {
    fn default() -> Self {
        Framework::Selenium
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
