use crate::catalog::Catalog;
use crate::input::LineSource;
use crate::loader;
use crate::printer;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub const BANNER: &str = "Welcome to the Course Planner.";
pub const MENU: &str = "\n1. Load Data Structure.\n2. Print Course List.\n3. Print Course.\n9. Exit.\n\n";
pub const CHOICE_PROMPT: &str = "What would you like to do? ";
pub const FILE_PROMPT: &str = "Enter the file name to load: ";
pub const COURSE_PROMPT: &str = "What course do you want to know about? ";
const NO_DATA: &str = "No data loaded. Please load the data first.";
const FAREWELL: &str = "Thank you for using the course planner!";

/// One menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Load,
    List,
    Detail,
    Exit,
    /// Anything else, kept verbatim so it can be echoed back.
    Invalid(String),
}

impl From<&str> for Choice {
    /// Numeric input selects a menu entry. Non-numeric input is an invalid
    /// choice rather than an error.
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(1) => Choice::Load,
            Ok(2) => Choice::List,
            Ok(3) => Choice::Detail,
            Ok(9) => Choice::Exit,
            Ok(other) => Choice::Invalid(other.to_string()),
            Err(_) => Choice::Invalid(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShellState {
    #[default]
    AwaitingChoice,
    Terminated,
}

/// Menu-driven session over a [`Catalog`].
///
/// The shell owns the catalog for the lifetime of the session. Each load
/// replaces it wholesale.
///
/// Example
/// ```
/// use course_planner::{ReaderInput, Shell};
/// let mut input = ReaderInput::new(std::io::Cursor::new("2\n9\n"));
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// Shell::default().run(&mut input, &mut out, &mut err).unwrap();
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("No data loaded."));
/// ```
#[derive(Debug, Default)]
pub struct Shell {
    catalog: Catalog,
    state: ShellState,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Replace the catalog with the contents of `path`, as menu option 1 does.
    pub fn load(&mut self, path: &Path, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
        tracing::info!(path = %path.display(), "loading catalog");
        self.catalog = loader::load_catalog(path, stderr);
        if !self.catalog.is_empty() {
            writeln!(stdout, "Data loaded successfully.")?;
        }
        Ok(())
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(
        &mut self,
        input: &mut dyn LineSource,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<()> {
        writeln!(stdout, "{}", BANNER)?;
        while self.state == ShellState::AwaitingChoice {
            write!(stdout, "{}", MENU)?;
            stdout.flush()?;

            let Some(line) = input.read_line(CHOICE_PROMPT)? else {
                self.state = ShellState::Terminated;
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            self.state = self.dispatch(Choice::from(line.as_str()), input, stdout, stderr)?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Perform one menu action and return the state to continue in.
    pub fn dispatch(
        &mut self,
        choice: Choice,
        input: &mut dyn LineSource,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ShellState> {
        tracing::debug!(?choice, "menu choice");
        match choice {
            Choice::Load => {
                let Some(path) = input.read_line(FILE_PROMPT)? else {
                    return Ok(ShellState::Terminated);
                };
                self.load(Path::new(path.trim()), stdout, stderr)?;
            }
            Choice::List => {
                if self.catalog.is_empty() {
                    writeln!(stdout, "{}", NO_DATA)?;
                } else {
                    printer::write_course_list(&self.catalog, stdout)?;
                }
            }
            Choice::Detail => {
                if self.catalog.is_empty() {
                    writeln!(stdout, "{}", NO_DATA)?;
                } else {
                    let Some(id) = input.read_line(COURSE_PROMPT)? else {
                        return Ok(ShellState::Terminated);
                    };
                    printer::write_course_details(&self.catalog, id.trim(), stdout)?;
                }
            }
            Choice::Exit => {
                writeln!(stdout, "{}", FAREWELL)?;
                return Ok(ShellState::Terminated);
            }
            Choice::Invalid(value) => {
                writeln!(stdout, "{} is not a valid option.", value)?;
            }
        }
        Ok(ShellState::AwaitingChoice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ReaderInput;
    use std::io::Cursor;

    struct Session {
        out: String,
        err: String,
        shell: Shell,
    }

    fn run_session(script: &str) -> Session {
        let mut shell = Shell::new();
        let mut input = ReaderInput::new(Cursor::new(script.to_string()));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        shell.run(&mut input, &mut out, &mut err).unwrap();
        Session {
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
            shell,
        }
    }

    fn write_temp_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!(Choice::from("1"), Choice::Load);
        assert_eq!(Choice::from(" 2 "), Choice::List);
        assert_eq!(Choice::from("3"), Choice::Detail);
        assert_eq!(Choice::from("9"), Choice::Exit);
        assert_eq!(Choice::from("+9"), Choice::Exit);
        assert_eq!(Choice::from("4"), Choice::Invalid("4".into()));
        assert_eq!(Choice::from("007"), Choice::Invalid("7".into()));
        assert_eq!(Choice::from("abc"), Choice::Invalid("abc".into()));
    }

    #[test]
    fn test_exit_prints_farewell() {
        let session = run_session("9\n");

        assert!(session.out.starts_with(BANNER));
        assert!(session.out.ends_with("Thank you for using the course planner!\n"));
        assert_eq!(session.shell.state(), ShellState::Terminated);
    }

    #[test]
    fn test_invalid_choices_are_echoed() {
        let session = run_session("5\nhello\n\n9\n");

        assert!(session.out.contains("5 is not a valid option.\n"));
        assert!(session.out.contains("hello is not a valid option.\n"));
        // the blank line re-prompts without a message
        assert_eq!(session.out.matches("is not a valid option").count(), 2);
    }

    #[test]
    fn test_list_and_detail_without_data() {
        let session = run_session("2\n3\n9\n");

        assert_eq!(session.out.matches(NO_DATA).count(), 2);
        assert!(!session.out.contains("Course List:"));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let session = run_session("2\n");

        assert_eq!(session.shell.state(), ShellState::Terminated);
        assert!(!session.out.contains(FAREWELL));
    }

    #[test]
    fn test_end_of_input_at_file_prompt_terminates() {
        let session = run_session("1\n");

        assert_eq!(session.shell.state(), ShellState::Terminated);
        assert!(session.shell.catalog().is_empty());
        assert!(session.err.is_empty());
        assert!(!session.out.contains("Data loaded successfully."));
    }

    #[test]
    fn test_end_of_input_at_course_prompt_terminates() {
        let file = write_temp_catalog("CSCI100,Intro\n");
        let script = format!("1\n{}\n3\n", file.path().display());
        let session = run_session(&script);

        assert_eq!(session.shell.state(), ShellState::Terminated);
        assert_eq!(session.shell.catalog().len(), 1);
        assert!(!session.out.contains("Course Number:"));
        assert!(!session.out.contains("Error: Course not found."));
        assert!(!session.out.contains(FAREWELL));
    }

    #[test]
    fn test_load_list_and_detail() {
        let file = write_temp_catalog("CSCI200,Advanced,MATH150\nCSCI100,Intro\n");
        let script = format!("1\n{}\n2\n3\nCSCI200\n3\nCSCI999\n9\n", file.path().display());
        let session = run_session(&script);

        assert!(session.err.is_empty());
        assert!(session.out.contains("Data loaded successfully.\n"));
        assert!(session.out.contains("Course List:\nCSCI100, Intro\nCSCI200, Advanced\nMATH150, \n"));
        assert!(session.out.contains("Course Number: CSCI200\nCourse Name: Advanced\nPrerequisites:\n - MATH150\n"));
        assert!(session.out.contains("Error: Course not found.\n"));
        assert_eq!(session.shell.catalog().len(), 3);
    }

    #[test]
    fn test_load_missing_file_leaves_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let script = format!("1\n{}\n2\n9\n", missing.display());
        let session = run_session(&script);

        assert!(session.err.contains("Cannot open file"));
        assert!(!session.out.contains("Data loaded successfully."));
        assert!(session.out.contains(NO_DATA));
        assert!(session.shell.catalog().is_empty());
    }

    #[test]
    fn test_reload_replaces_catalog() {
        let first = write_temp_catalog("CSCI100,Intro\nCSCI101,Data Structures\n");
        let second = write_temp_catalog("MATH150,Calculus\n");

        let mut shell = Shell::new();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        shell.load(first.path(), &mut out, &mut err).unwrap();
        assert_eq!(shell.catalog().len(), 2);

        shell.load(second.path(), &mut out, &mut err).unwrap();
        assert_eq!(shell.catalog().sorted_ids(), vec!["MATH150"]);
    }

    #[test]
    fn test_prompts_follow_choices() {
        let file = write_temp_catalog("CSCI100,Intro\n");
        let script = format!("1\n{}\n3\nCSCI100\n9\n", file.path().display());
        let mut input = ReaderInput::new(Cursor::new(script));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        Shell::new().run(&mut input, &mut out, &mut err).unwrap();

        assert_eq!(
            input.prompts(),
            [CHOICE_PROMPT, FILE_PROMPT, CHOICE_PROMPT, COURSE_PROMPT, CHOICE_PROMPT]
        );
    }
}
