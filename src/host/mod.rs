//! Capabilities the surrounding environment provides to commands.
//!
//! Commands read input and deliver output only through [`Host`]; the
//! generation pipeline in [`crate::core`] never sees it and works on plain
//! strings.

pub mod mock;
pub mod terminal;

pub use mock::MockHost;
pub use terminal::TerminalHost;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, StepgenError};

/// A free-text question for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPrompt {
    pub prompt: String,
    /// Pre-filled answer, also used when the host cannot ask
    pub default: Option<String>,
}

impl InputPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

pub trait Host {
    /// Entire text of the current document
    fn get_active_text(&mut self) -> Result<String>;

    /// Selected part of the document, if anything is selected
    fn get_selection(&mut self) -> Result<Option<String>>;

    fn write_clipboard(&mut self, text: &str) -> Result<()>;

    fn write_file(&mut self, path: &Path, text: &str) -> Result<()>;

    /// Ask for a value; `None` means the user gave no answer
    fn prompt_input(&mut self, prompt: &InputPrompt) -> Result<Option<String>>;

    /// Show a message. With `options`, returns the index the user picked.
    fn notify(&mut self, message: &str, options: &[&str]) -> Result<Option<usize>>;
}

/// 1-based inclusive line range, written `START:END`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Cut this range out of `text`
    pub fn slice(&self, text: &str) -> Result<String> {
        if self.start == 0 || self.start > self.end {
            return Err(StepgenError::InvalidLineRange(self.to_string()));
        }
        let lines: Vec<&str> = text.lines().collect();
        if self.end > lines.len() {
            return Err(StepgenError::LineRangeOutOfBounds {
                start: self.start,
                end: self.end,
                lines: lines.len(),
            });
        }
        Ok(lines[self.start - 1..self.end].join("\n"))
    }
}

impl FromStr for LineRange {
    type Err = StepgenError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StepgenError::InvalidLineRange(s.to_string());
        let (start, end) = s.split_once(':').ok_or_else(invalid)?;
        let start: usize = start.trim().parse().map_err(|_| invalid())?;
        let end: usize = end.trim().parse().map_err(|_| invalid())?;
        if start == 0 || start > end {
            return Err(invalid());
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}
