use std::path::Path;
use tracing::{info, warn};

use crate::core::{generate_report, Generation};
use crate::error::StepgenError;
use crate::host::Host;
use crate::models::Config;

/// Text the command works on: the selection if there is one, else the
/// whole document
pub fn source_text(host: &mut dyn Host) -> Result<String, StepgenError> {
    match host.get_selection()? {
        Some(selection) => Ok(selection),
        None => host.get_active_text(),
    }
}

/// Generate step definitions from the host's text and deliver them.
///
/// Output goes to `output` when given, otherwise to the host clipboard.
/// When the text holds no step lines nothing is written and the host is
/// told so.
pub fn generate_steps(
    host: &mut dyn Host,
    config: &Config,
    output: Option<&Path>,
) -> Result<Generation, StepgenError> {
    let text = source_text(host)?;
    let report = generate_report(text.lines(), config);

    if report.is_empty() {
        info!("No step lines found, nothing written");
        host.notify(
            "No Given/When/Then steps found in the input. Nothing was generated.",
            &[],
        )?;
        return Ok(report);
    }

    if report.skipped > 0 {
        warn!("{} step lines could not be parsed", report.skipped);
    }

    match output {
        Some(path) => {
            host.write_file(path, &report.output)?;
            host.notify(
                &format!(
                    "Generated {} step definitions in {}",
                    report.step_count,
                    path.display()
                ),
                &[],
            )?;
        }
        None => host.write_clipboard(&report.output)?,
    }

    Ok(report)
}
