//! Host backed by the terminal: files or stdin in, stdout out.

use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{Host, InputPrompt, LineRange};
use crate::error::{Result, StepgenError};

/// Terminal host.
///
/// The active document is `source` (stdin when absent) and the selection is
/// an optional line range of it. A terminal has no clipboard, so
/// clipboard writes go to stdout; messages go to stderr so piped output
/// stays clean.
pub struct TerminalHost {
    source: Option<PathBuf>,
    selection: Option<LineRange>,
    interactive: bool,
    /// Stdin can only be read once
    cached: Option<String>,
}

impl TerminalHost {
    pub fn new(source: Option<PathBuf>, selection: Option<LineRange>) -> Self {
        Self {
            source,
            selection,
            interactive: true,
            cached: None,
        }
    }

    /// Never prompt; every question takes its default
    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }
}

impl Host for TerminalHost {
    fn get_active_text(&mut self) -> Result<String> {
        if let Some(text) = &self.cached {
            return Ok(text.clone());
        }

        let text = match &self.source {
            Some(path) => {
                if !path.is_file() {
                    return Err(StepgenError::SourceNotFound(path.clone()));
                }
                debug!("Reading feature text from {}", path.display());
                fs::read_to_string(path)?
            }
            None => {
                debug!("Reading feature text from stdin");
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        self.cached = Some(text.clone());
        Ok(text)
    }

    fn get_selection(&mut self) -> Result<Option<String>> {
        match self.selection {
            Some(range) => {
                let text = self.get_active_text()?;
                range.slice(&text).map(Some)
            }
            None => Ok(None),
        }
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn write_file(&mut self, path: &Path, text: &str) -> Result<()> {
        let write_failed = |source| StepgenError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        fs::write(path, text).map_err(write_failed)?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    fn prompt_input(&mut self, prompt: &InputPrompt) -> Result<Option<String>> {
        if !self.interactive {
            return Ok(prompt.default.clone());
        }

        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(&prompt.prompt)
            .allow_empty(true);
        if let Some(default) = &prompt.default {
            input = input.default(default.clone());
        }

        let answer = input
            .interact_text()
            .map_err(|e| StepgenError::Prompt(format!("Failed to get user input: {}", e)))?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn notify(&mut self, message: &str, options: &[&str]) -> Result<Option<usize>> {
        if options.is_empty() || !self.interactive {
            eprintln!("{}", message);
            return Ok(None);
        }

        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|e| StepgenError::Prompt(format!("Failed to get user input: {}", e)))
    }
}
