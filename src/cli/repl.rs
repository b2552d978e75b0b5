//! Interactive REPL (Read-Eval-Print Loop).

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Console-level commands recognized before statement dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Show usage, optionally only for commands tagged with a keyword
    Help(Option<String>),
    /// Exit the REPL
    Quit,
    /// Statement for the command matcher
    Statement(String),
    /// Empty input
    Empty,
}

impl ReplCommand {
    /// Parse one complete input (terminating `;` optional).
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim();

        if trimmed.is_empty() {
            return ReplCommand::Empty;
        }

        let mut words = trimmed.split_whitespace();
        let first = words.next().unwrap_or_default();

        if first.eq_ignore_ascii_case("help") || first == "?" {
            let keyword: Vec<&str> = words.collect();
            return match keyword.as_slice() {
                [] => ReplCommand::Help(None),
                [keyword] => ReplCommand::Help(Some(keyword.to_string())),
                _ => ReplCommand::Statement(trimmed.to_string()),
            };
        }

        if words.next().is_none()
            && ["quit", "exit", "q"]
                .iter()
                .any(|w| first.eq_ignore_ascii_case(w))
        {
            return ReplCommand::Quit;
        }

        ReplCommand::Statement(trimmed.to_string())
    }

    /// Check if this is a quit command.
    pub fn is_quit(&self) -> bool {
        matches!(self, ReplCommand::Quit)
    }
}

/// Input from the REPL - either a command or a request to quit.
#[derive(Debug)]
pub enum ReplInput {
    /// User provided input
    Command(ReplCommand),
    /// User pressed Ctrl-D or Ctrl-C
    Exit,
}

/// Interactive console using rustyline for line editing and history.
pub struct Repl {
    editor: DefaultEditor,
    history_file: Option<String>,
    prompt: String,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new() -> RlResult<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Self {
            editor,
            history_file: None,
            prompt: "odps> ".to_string(),
        })
    }

    /// Set the history file path.
    pub fn with_history(mut self, path: &str) -> Self {
        self.history_file = Some(path.to_string());
        if let Err(e) = self.editor.load_history(path) {
            tracing::debug!("Could not load history: {}", e);
        }
        self
    }

    /// Show the session project in the prompt.
    pub fn with_project(mut self, project: Option<&str>) -> Self {
        self.prompt = match project {
            Some(project) => format!("odps@{project}> "),
            None => "odps> ".to_string(),
        };
        self
    }

    /// Read a complete input from the user.
    ///
    /// Statements may span lines and end with `;`. `help` and `quit` are
    /// accepted on a single line without one.
    pub fn read_input(&mut self) -> RlResult<ReplInput> {
        let mut buffer = String::new();
        let mut first_line = true;

        loop {
            let continuation = " ".repeat(self.prompt.len().saturating_sub(5)) + "...> ";
            let prompt = if first_line {
                self.prompt.as_str()
            } else {
                continuation.as_str()
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if !trimmed.is_empty() {
                        let _ = self.editor.add_history_entry(&line);
                    }

                    if first_line {
                        if trimmed.is_empty() {
                            return Ok(ReplInput::Command(ReplCommand::Empty));
                        }
                        let command = ReplCommand::parse(trimmed);
                        if matches!(command, ReplCommand::Help(_) | ReplCommand::Quit) {
                            return Ok(ReplInput::Command(command));
                        }
                    }

                    buffer.push_str(&line);
                    buffer.push('\n');

                    if trimmed.ends_with(';') {
                        return Ok(ReplInput::Command(ReplCommand::parse(&buffer)));
                    }

                    first_line = false;
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                    return Ok(ReplInput::Exit);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Save history to file.
    pub fn save_history(&mut self) {
        if let Some(ref path) = self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                tracing::debug!("Could not save history: {}", e);
            }
        }
    }
}

impl Drop for Repl {
    fn drop(&mut self) {
        self.save_history();
    }
}
