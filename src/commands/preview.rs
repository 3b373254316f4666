use crate::commands::generate::source_text;
use crate::core::{preview_steps, StepPreview};
use crate::error::StepgenError;
use crate::host::Host;

/// Show how each step line would be parsed, without rendering a class
pub fn preview(host: &mut dyn Host, json: bool) -> Result<Vec<StepPreview>, StepgenError> {
    let text = source_text(host)?;
    let previews = preview_steps(text.lines());

    if previews.is_empty() {
        host.notify("No Given/When/Then steps found in the input.", &[])?;
        return Ok(previews);
    }

    let rendered = if json {
        let mut out = serde_json::to_string_pretty(&previews)?;
        out.push('\n');
        out
    } else {
        format_previews(&previews)
    };
    host.write_clipboard(&rendered)?;

    Ok(previews)
}

fn format_previews(previews: &[StepPreview]) -> String {
    let mut out = String::new();
    for (i, preview) in previews.iter().enumerate() {
        let step = &preview.step;
        out.push_str(&format!("=== STEP {}: {} ===\n", i + 1, step.original_step));
        out.push_str(&format!("Keyword:    {}\n", step.keyword));
        out.push_str(&format!("Method:     {}\n", step.method_name));
        out.push_str(&format!("Annotation: {}\n", preview.annotation));
        if step.parameters.is_empty() {
            out.push_str("Parameters: (none)\n");
        } else {
            out.push_str(&format!("Parameters: {}\n", step.argument_list()));
        }
        out.push('\n');
    }
    out.push_str(&format!("Total: {} steps\n", previews.len()));
    out
}
