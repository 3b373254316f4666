//! Brace-driven re-indentation of generated code.
//!
//! This is a line heuristic, not a lexer: braces inside strings or comments
//! are counted like any other brace.

/// Re-indent `code` by counting braces.
///
/// Each line is trimmed. A line starting with `}` dedents before it is
/// written; a line ending with `{` indents the lines after it. Blank lines
/// come out empty, and Javadoc continuation lines (`* ...`) keep their
/// one-space offset under the `/**`.
pub fn format_code(code: &str, indent_size: usize) -> String {
    let mut level: usize = 0;
    let mut out = String::with_capacity(code.len() + code.len() / 4);

    for raw in code.lines() {
        let line = raw.trim();
        if line.is_empty() {
            out.push('\n');
            continue;
        }

        if line.starts_with('}') {
            level = level.saturating_sub(1);
        }

        out.push_str(&" ".repeat(level * indent_size));
        if line.starts_with('*') {
            out.push(' ');
        }
        out.push_str(line);
        out.push('\n');

        if line.ends_with('{') {
            level += 1;
        }
    }

    out
}
