//! Boilerplate for generated step-definition classes
//!
//! This module provides the bundled snippets the renderer and assembler
//! stitch together: imports, fields, constructor, helper methods and the
//! commented hint blocks placed in each step body.

pub mod java;

use crate::models::Framework;

/// Commented hint blocks, one per [`Hint`](crate::core::Hint) variant
pub struct HintTemplates {
    pub click: &'static str,
    pub navigation: &'static str,
    pub input: &'static str,
    pub visibility: &'static str,
    pub text: &'static str,
    pub setup: &'static str,
    pub action: &'static str,
    pub assertion: &'static str,
}

/// Template content for a generated class
pub struct Templates {
    /// Imports every generated class starts with, in order
    pub default_imports: &'static [&'static str],
    /// Field declarations placed after the class declaration
    pub fields: &'static str,
    /// Body of the constructor stub
    pub constructor_body: &'static str,
    /// Helper methods placed after the step methods
    pub helper_methods: &'static str,
    pub hints: HintTemplates,
}

/// Get templates for the specified framework.
///
/// Every framework tag currently shares the Java WebDriver templates.
pub fn get_templates(framework: Framework) -> Templates {
    match framework {
        Framework::Selenium | Framework::Appium => java::templates(),
    }
}
