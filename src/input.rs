use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::BufRead;

/// Source of user-entered lines for the shell.
///
/// `Ok(None)` means the user is done: end of input or an interrupt. Returned
/// lines carry no trailing newline.
pub trait LineSource {
    /// Show `prompt` (if the source has somewhere to show it) and read one line.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Interactive input backed by a `rustyline` editor with in-memory history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                tracing::debug!("input interrupted");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                tracing::debug!("end of input");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Line input read from any buffered reader, e.g. a script or a test buffer.
///
/// Prompts are not displayed; they are recorded so callers can inspect what
/// the shell asked for.
pub struct ReaderInput<R> {
    reader: R,
    prompts: Vec<String>,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prompts: Vec::new(),
        }
    }

    /// Prompts requested so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl<R: BufRead> LineSource for ReaderInput<R> {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
