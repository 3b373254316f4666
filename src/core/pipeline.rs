//! End-to-end generation: lines in, formatted class text out.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::assemble::assemble_class;
use crate::core::classifier::classify_lines;
use crate::core::format::format_code;
use crate::core::naming::assign_unique_names;
use crate::core::parser::parse_step;
use crate::core::render::render_methods;
use crate::models::{Config, ParsedStep};
use crate::templates::get_templates;

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Formatted class text
    pub output: String,
    /// Number of step methods in `output`
    pub step_count: usize,
    /// Classified lines the parser could not read
    pub skipped: usize,
}

impl Generation {
    /// True when the input held no step lines at all
    pub fn is_empty(&self) -> bool {
        self.step_count == 0
    }
}

/// Classify and parse `lines`, dropping anything unparseable
pub fn parse_steps<I, S>(lines: I) -> (Vec<ParsedStep>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classified = classify_lines(lines);
    let mut skipped = 0;
    let mut steps = Vec::with_capacity(classified.len());

    for line in &classified {
        match parse_step(line) {
            Some(step) => steps.push(step),
            None => {
                warn!("Skipping unparseable step line: {}", line);
                skipped += 1;
            }
        }
    }

    (steps, skipped)
}

/// Generate a step-definition class and report how many steps it holds.
///
/// Never fails: input without step lines yields the class skeleton with
/// zero methods.
pub fn generate_report<I, S>(lines: I, config: &Config) -> Generation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (steps, skipped) = parse_steps(lines);
    let step_count = steps.len();

    debug!(
        "Generating {} for framework tag '{}'",
        config.generator.class_name,
        config.generator.framework.tag()
    );
    let templates = get_templates(config.generator.framework);
    let methods = render_methods(steps, &templates);
    let assembled = assemble_class(&config.generator, &templates, &methods);
    let output = format_code(&assembled, config.format.indent_size);

    info!("Generated {} step definitions", step_count);

    Generation {
        output,
        step_count,
        skipped,
    }
}

/// Generate a step-definition class from `lines`
pub fn generate<I, S>(lines: I, config: &Config) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    generate_report(lines, config).output
}

/// Parsed step as shown by `stepgen preview`
#[derive(Debug, Clone, Serialize)]
pub struct StepPreview {
    #[serde(flatten)]
    pub step: ParsedStep,
    pub annotation: String,
}

/// Parse `lines` and assign batch-unique method names without rendering
pub fn preview_steps<I, S>(lines: I) -> Vec<StepPreview>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (steps, _) = parse_steps(lines);
    assign_unique_names(steps)
        .into_iter()
        .map(|step| {
            let annotation = format!("@{}(\"{}\")", step.keyword, step.anchored_pattern());
            StepPreview { step, annotation }
        })
        .collect()
}
