//! Step line parsing: keyword split, parameter extraction, match pattern.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

use crate::core::naming::method_name;
use crate::models::{ParamType, Parameter, ParsedStep, StepKeyword};

static STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Given|When|Then|And|But)\s+(.+)$").unwrap());
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*""#).unwrap());
static ANGLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([^<>]+)>").unwrap());
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());

const QUOTED_PLACEHOLDER: &str = r#""(.*?)""#;
const ANGLE_PLACEHOLDER: &str = "(.*)";
const INTEGER_PLACEHOLDER: &str = r"(\d+)";

/// Characters escaped in the literal parts of a match pattern
const REGEX_META: &[char] = &['\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$'];

/// A placeholder already written into the body
#[derive(Debug)]
struct Slot {
    start: usize,
    len: usize,
    param: Parameter,
}

impl Slot {
    fn end(&self) -> usize {
        self.start + self.len
    }

    fn overlaps(&self, start: usize, end: usize) -> bool {
        start < self.end() && self.start < end
    }
}

/// Parse one step line into a [`ParsedStep`].
///
/// Returns `None` when the line does not start with a step keyword. The
/// method name on the result is the base name; batch uniqueness is applied
/// by the caller.
pub fn parse_step(line: &str) -> Option<ParsedStep> {
    let line = line.trim();
    let caps = STEP.captures(line)?;
    let keyword = StepKeyword::from_keyword(caps.get(1)?.as_str())?;
    let step_text = caps.get(2)?.as_str().trim().to_string();

    let (parameters, match_pattern) = extract_parameters(&step_text);
    debug!(
        "Parsed {} step with {} parameters: {}",
        keyword,
        parameters.len(),
        match_pattern
    );

    Some(ParsedStep {
        original_step: line.to_string(),
        keyword,
        method_name: method_name(&step_text),
        step_text,
        parameters,
        match_pattern,
    })
}

/// Replace literal values in `body` with capture groups.
///
/// Quoted strings go first, then `<placeholders>`, then bare integers; each
/// pass only sees what the earlier passes left behind. The returned
/// declarations are ordered by where their capture group sits in the pattern.
pub fn extract_parameters(body: &str) -> (Vec<Parameter>, String) {
    let mut slots = Vec::new();

    let mut quoted = 0;
    let body = substitute(body, &mut slots, &QUOTED, QUOTED_PLACEHOLDER, |_| {
        quoted += 1;
        Parameter::new(ParamType::String, format!("param{}", quoted))
    });

    let mut angles = 0;
    let body = substitute(&body, &mut slots, &ANGLE, ANGLE_PLACEHOLDER, |caps| {
        angles += 1;
        let raw = caps.get(1).map_or("", |m| m.as_str());
        Parameter::new(ParamType::String, angle_parameter_name(raw, angles))
    });

    let mut numbers = 0;
    let body = substitute(&body, &mut slots, &INTEGER, INTEGER_PLACEHOLDER, |_| {
        numbers += 1;
        Parameter::new(ParamType::Int, format!("number{}", numbers))
    });

    slots.sort_by_key(|slot| slot.start);

    let mut pattern = String::with_capacity(body.len());
    let mut last = 0;
    for slot in &slots {
        pattern.push_str(&escape_literal(&body[last..slot.start]));
        pattern.push_str(&body[slot.start..slot.end()]);
        last = slot.end();
    }
    pattern.push_str(&escape_literal(&body[last..]));

    let parameters = slots.into_iter().map(|slot| slot.param).collect();
    (parameters, pattern)
}

/// One substitution pass. Matches that overlap an earlier placeholder are
/// left alone; earlier slots are shifted to their new offsets.
fn substitute<F>(
    body: &str,
    slots: &mut Vec<Slot>,
    re: &Regex,
    placeholder: &str,
    mut declare: F,
) -> String
where
    F: FnMut(&Captures) -> Parameter,
{
    let matches: Vec<(usize, usize, Parameter)> = re
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if slots.iter().any(|s| s.overlaps(whole.start(), whole.end())) {
                return None;
            }
            Some((whole.start(), whole.end(), declare(&caps)))
        })
        .collect();

    if matches.is_empty() {
        return body.to_string();
    }

    for slot in slots.iter_mut() {
        let (added, removed) = matches
            .iter()
            .filter(|(_, end, _)| *end <= slot.start)
            .fold((0, 0), |(added, removed), (start, end, _)| {
                (added + placeholder.len(), removed + (end - start))
            });
        slot.start = slot.start + added - removed;
    }

    let mut out = String::with_capacity(body.len() + matches.len() * placeholder.len());
    let mut last = 0;
    for (start, end, param) in matches {
        out.push_str(&body[last..start]);
        slots.push(Slot {
            start: out.len(),
            len: placeholder.len(),
            param,
        });
        out.push_str(placeholder);
        last = end;
    }
    out.push_str(&body[last..]);
    out
}

/// `<First Name>` becomes `first_name`; a blank placeholder becomes `argN`
fn angle_parameter_name(raw: &str, position: usize) -> String {
    let name = raw.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_");
    if name.is_empty() {
        format!("arg{}", position)
    } else {
        name
    }
}

fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if REGEX_META.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
