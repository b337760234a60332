//! Interactive single-step shell for `pw700 debug`.
//!
//! Enter steps one cycle, `si N` steps N cycles, `c` runs the rest of the
//! configured budget, `q` (or Ctrl-C / Ctrl-D) quits.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// A parsed shell command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step N cycles.
    Step(u64),
    /// Run the remaining cycle budget.
    Continue,
    /// Leave the shell.
    Quit,
}

/// Parses one input line.
///
/// # Returns
///
/// The command, or a message explaining why the line was rejected.
pub fn parse(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Step(1));
    }
    if let Some(rest) = trimmed.strip_prefix("si") {
        let num = rest.trim();
        if num.is_empty() {
            return Err("'si' requires a number, e.g. 'si 100'".to_string());
        }
        return match num.parse::<u64>() {
            Ok(0) => Err("step count must be greater than 0".to_string()),
            Ok(n) => Ok(Command::Step(n)),
            Err(e) => Err(format!("invalid number '{num}': {e}")),
        };
    }
    match trimmed {
        "q" => Ok(Command::Quit),
        "c" => Ok(Command::Continue),
        _ => Err(format!(
            "unknown command '{trimmed}'. Enter steps, 'si N' steps N cycles, 'c' continues, 'q' quits"
        )),
    }
}

/// Line editor with history.
pub struct Shell {
    editor: DefaultEditor,
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell").finish_non_exhaustive()
    }
}

impl Shell {
    /// Creates the editor.
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Reads lines until one parses.
    pub fn read_command(&mut self) -> rustyline::Result<Command> {
        loop {
            match self.editor.readline("(pw700) ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        let _ = self.editor.add_history_entry(trimmed);
                    }
                    match parse(trimmed) {
                        Ok(cmd) => return Ok(cmd),
                        Err(msg) => eprintln!("Error: {msg}"),
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(Command::Quit),
                Err(e) => return Err(e),
            }
        }
    }
}
