//! Step records produced by the parser and consumed by the renderer

use serde::Serialize;
use std::fmt;

/// Keyword category of a step after `And`/`But` have been folded away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StepKeyword {
    /// Setup preconditions
    Given,
    /// Actions under test
    When,
    /// Expected outcomes
    Then,
}

impl StepKeyword {
    /// Map a raw Gherkin keyword onto its category.
    ///
    /// `And` and `But` always become `Given`; the preceding step is not
    /// consulted.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Given" | "And" | "But" => Some(StepKeyword::Given),
            "When" => Some(StepKeyword::When),
            "Then" => Some(StepKeyword::Then),
            _ => None,
        }
    }

    /// Keyword text, also used as the annotation name
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKeyword::Given => "Given",
            StepKeyword::When => "When",
            StepKeyword::Then => "Then",
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Java type of a generated method parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Int,
}

impl ParamType {
    pub fn java_name(&self) -> &'static str {
        match self {
            ParamType::String => "String",
            ParamType::Int => "int",
        }
    }
}

/// One declared parameter of a step method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub type_name: ParamType,
    pub name: String,
}

impl Parameter {
    pub fn new(type_name: ParamType, name: impl Into<String>) -> Self {
        Self {
            type_name,
            name: name.into(),
        }
    }

    /// Declaration as it appears in a Java argument list
    pub fn declaration(&self) -> String {
        format!("{} {}", self.type_name.java_name(), self.name)
    }
}

/// A step line broken into the pieces the renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedStep {
    /// The classified line, keyword included
    pub original_step: String,
    pub keyword: StepKeyword,
    /// Body with the keyword stripped, before substitution
    pub step_text: String,
    /// Declarations in capture-group order
    pub parameters: Vec<Parameter>,
    /// Base identifier; the batch may suffix it to keep it unique
    pub method_name: String,
    /// Unanchored regex with one capture group per parameter
    pub match_pattern: String,
}

impl ParsedStep {
    /// Pattern wrapped in `^` and `$`
    pub fn anchored_pattern(&self) -> String {
        format!("^{}$", self.match_pattern)
    }

    /// Comma-separated Java argument list
    pub fn argument_list(&self) -> String {
        self.parameters
            .iter()
            .map(Parameter::declaration)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Text of one finished step method; never re-parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMethod(String);

impl RenderedMethod {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
