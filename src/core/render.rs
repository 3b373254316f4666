//! Turns parsed steps into annotated, documented method stubs.

use tracing::debug;

use crate::core::naming::assign_unique_names;
use crate::models::{ParsedStep, RenderedMethod, StepKeyword};
use crate::templates::{HintTemplates, Templates};

/// Which commented hint block goes into a step body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Click,
    Navigation,
    Input,
    Visibility,
    TextAssertion,
    Setup,
    Action,
    Assertion,
}

impl Hint {
    /// Pick a hint by spotting keywords in the step text (case-insensitive).
    ///
    /// Then-steps look for assertion words first, Given/When-steps for
    /// interaction words first; with no match the category's generic hint
    /// is used.
    pub fn select(keyword: StepKeyword, step_text: &str) -> Self {
        let text = step_text.to_lowercase();
        let spotted = match keyword {
            StepKeyword::Then => {
                Self::spot_assertion(&text).or_else(|| Self::spot_interaction(&text))
            }
            StepKeyword::Given | StepKeyword::When => {
                Self::spot_interaction(&text).or_else(|| Self::spot_assertion(&text))
            }
        };
        spotted.unwrap_or(match keyword {
            StepKeyword::Given => Hint::Setup,
            StepKeyword::When => Hint::Action,
            StepKeyword::Then => Hint::Assertion,
        })
    }

    fn spot_interaction(text: &str) -> Option<Self> {
        if text.contains("click") {
            Some(Hint::Click)
        } else if text.contains("navigate") || text.contains("open") {
            Some(Hint::Navigation)
        } else if text.contains("enter") || text.contains("type") {
            Some(Hint::Input)
        } else {
            None
        }
    }

    fn spot_assertion(text: &str) -> Option<Self> {
        if text.contains("should see") || text.contains("displayed") {
            Some(Hint::Visibility)
        } else if text.contains("text") || text.contains("contains") {
            Some(Hint::TextAssertion)
        } else {
            None
        }
    }

    /// The comment block for this hint
    pub fn block<'a>(&self, hints: &'a HintTemplates) -> &'a str {
        match self {
            Hint::Click => hints.click,
            Hint::Navigation => hints.navigation,
            Hint::Input => hints.input,
            Hint::Visibility => hints.visibility,
            Hint::TextAssertion => hints.text,
            Hint::Setup => hints.setup,
            Hint::Action => hints.action,
            Hint::Assertion => hints.assertion,
        }
    }
}

/// Render every step, giving each a method name unique within the batch
pub fn render_methods(steps: Vec<ParsedStep>, templates: &Templates) -> Vec<RenderedMethod> {
    assign_unique_names(steps)
        .iter()
        .map(|step| render_method(step, templates))
        .collect()
}

/// Render one step as a method, using `step.method_name` as-is
pub fn render_method(step: &ParsedStep, templates: &Templates) -> RenderedMethod {
    let hint = Hint::select(step.keyword, &step.step_text);
    debug!("Rendering {} with {:?} hint", step.method_name, hint);

    let mut out = String::new();

    out.push_str("/**\n");
    out.push_str(&format!(" * {}\n", step.original_step));
    out.push_str(&format!(" * Parameters: {}\n", step.parameters.len()));
    out.push_str(" */\n");

    out.push_str(&format!(
        "@{}(\"{}\")\n",
        step.keyword.as_str(),
        step.anchored_pattern()
    ));
    out.push_str(&format!(
        "public void {}({}) {{\n",
        step.method_name,
        step.argument_list()
    ));

    out.push_str("try {\n");
    if step.parameters.is_empty() {
        out.push_str("// No parameters\n");
    } else {
        out.push_str("// Parameters:\n");
        for param in &step.parameters {
            out.push_str(&format!("// {} ({})\n", param.name, param.type_name.java_name()));
        }
    }
    out.push('\n');
    out.push_str(hint.block(&templates.hints));
    out.push('\n');
    out.push_str("} catch (Exception e) {\n");
    out.push_str(&format!(
        "throw new RuntimeException(\"Step failed: {}\", e);\n",
        escape_java_string(&step.original_step)
    ));
    out.push_str("}\n");
    out.push('}');

    RenderedMethod::new(out)
}

/// Escape string for inclusion in a Java string literal
pub fn escape_java_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
