//! Method identifiers derived from step text.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::models::ParsedStep;

/// Used when a step has no letters or digits to build a name from
pub const DEFAULT_METHOD_NAME: &str = "stepDefinition";

/// Build a lowerCamelCase identifier from a step body.
///
/// Only letters, ASCII digits and whitespace survive. Leading digits are
/// stripped so the result is a legal identifier, and the first remaining
/// letter is lowercased.
pub fn method_name(step_text: &str) -> String {
    let cleaned: String = step_text
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    let mut name = String::new();
    for (i, word) in cleaned.split_whitespace().enumerate() {
        if i == 0 {
            name.push_str(&word.to_lowercase());
        } else {
            name.push_str(&capitalize(word));
        }
    }

    let mut chars = name.trim_start_matches(char::is_numeric).chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => DEFAULT_METHOD_NAME.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Hands out method names that are unique within one batch
#[derive(Debug, Default)]
pub struct NameRegistry {
    /// Every name handed out so far
    used: HashSet<String>,
    /// Last suffix tried per base name
    counters: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base`, or `base1`, `base2`, ... if it is taken
    pub fn claim(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }

        let counter = self.counters.entry(base.to_string()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{}{}", base, counter);
            if self.used.insert(candidate.clone()) {
                debug!("Method name '{}' taken, using '{}'", base, candidate);
                return candidate;
            }
        }
    }

    /// Number of names handed out
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

/// Replace each step's method name with one unique within the batch.
///
/// Earlier steps keep their base name; later collisions get a numeric suffix.
pub fn assign_unique_names(steps: Vec<ParsedStep>) -> Vec<ParsedStep> {
    let mut registry = NameRegistry::new();
    steps
        .into_iter()
        .map(|mut step| {
            step.method_name = registry.claim(&step.method_name);
            step
        })
        .collect()
}
