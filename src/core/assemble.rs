//! Wraps rendered methods in a class header and footer.

use std::collections::HashSet;

use crate::models::{GeneratorConfig, RenderedMethod};
use crate::templates::Templates;

/// Build the full class text (unformatted).
///
/// Header, each method and the footer are separated by one blank line. With
/// no methods the result is header and footer only.
pub fn assemble_class(
    config: &GeneratorConfig,
    templates: &Templates,
    methods: &[RenderedMethod],
) -> String {
    let mut sections = Vec::with_capacity(methods.len() + 2);
    sections.push(class_header(config, templates));
    sections.extend(methods.iter().map(|m| m.as_str().to_string()));
    sections.push(class_footer(templates));
    sections.join("\n\n")
}

/// Defaults first in their fixed order, then configured imports in the order
/// given, with exact duplicates removed.
///
/// Configured entries may be written as bare names or as full
/// `import ...;` statements.
pub fn collect_imports(defaults: &[&str], configured: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    defaults
        .iter()
        .map(|s| s.to_string())
        .chain(configured.iter().map(|s| normalize_import(s)))
        .filter(|import| !import.is_empty())
        .filter(|import| seen.insert(import.clone()))
        .collect()
}

fn normalize_import(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("import ").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

fn class_header(config: &GeneratorConfig, templates: &Templates) -> String {
    let mut out = String::new();

    let package = config.package_name.trim();
    if !package.is_empty() {
        out.push_str(&format!("package {};\n\n", package));
    }

    for import in collect_imports(templates.default_imports, &config.imports) {
        out.push_str(&format!("import {};\n", import));
    }
    out.push('\n');

    out.push_str("/**\n");
    out.push_str(" * Cucumber step definitions generated by stepgen.\n");
    out.push_str(&format!(" * Framework: {}\n", config.framework.display_name()));
    out.push_str(" */\n");

    match config.base_test_class.as_deref().map(str::trim) {
        Some(base) if !base.is_empty() => out.push_str(&format!(
            "public class {} extends {} {{\n",
            config.class_name, base
        )),
        _ => out.push_str(&format!("public class {} {{\n", config.class_name)),
    }
    out.push('\n');

    out.push_str(templates.fields);
    out.push_str("\n\n");

    out.push_str(&format!("public {}() {{\n", config.class_name));
    out.push_str(templates.constructor_body);
    out.push_str("\n}");

    out
}

fn class_footer(templates: &Templates) -> String {
    format!("{}\n}}", templates.helper_methods)
}
