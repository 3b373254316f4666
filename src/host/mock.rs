//! In-memory host for tests and embedding

use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};

use super::{Host, InputPrompt};
use crate::error::Result;

/// Host that serves canned text and answers and records everything written
#[derive(Debug, Default)]
pub struct MockHost {
    text: String,
    selection: Option<String>,
    answers: VecDeque<Option<String>>,
    choices: VecDeque<Option<usize>>,
    clipboard: Option<String>,
    files: BTreeMap<PathBuf, String>,
    messages: Vec<String>,
}

impl MockHost {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// Queue an answer for the next `prompt_input`; `None` means no answer
    pub fn with_answer(mut self, answer: Option<&str>) -> Self {
        self.answers.push_back(answer.map(str::to_string));
        self
    }

    /// Queue a pick for the next `notify` that offers options
    pub fn with_choice(mut self, choice: Option<usize>) -> Self {
        self.choices.push_back(choice);
        self
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn file(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Host for MockHost {
    fn get_active_text(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn get_selection(&mut self) -> Result<Option<String>> {
        Ok(self.selection.clone())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn write_file(&mut self, path: &Path, text: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), text.to_string());
        Ok(())
    }

    /// Unqueued prompts fall back to the prompt's default
    fn prompt_input(&mut self, prompt: &InputPrompt) -> Result<Option<String>> {
        Ok(self
            .answers
            .pop_front()
            .unwrap_or_else(|| prompt.default.clone()))
    }

    fn notify(&mut self, message: &str, options: &[&str]) -> Result<Option<usize>> {
        self.messages.push(message.to_string());
        if options.is_empty() {
            return Ok(None);
        }
        Ok(self.choices.pop_front().flatten())
    }
}
