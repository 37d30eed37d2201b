//! Command handlers and dispatch.

mod admin;
mod public;

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::cli::Command;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Where a command reads prompts from and writes its views to.
pub struct Terminal<'a> {
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
    /// Emit JSON view models instead of text.
    pub json: bool,
}

impl Terminal<'_> {
    fn print(&mut self, text: &str) -> AppResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn println(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn print_json<T: Serialize>(&mut self, value: &T) -> AppResult<()> {
        let json =
            serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))?;
        self.println(&json)
    }

    /// Show `prompt` and read one trimmed line. End of input reads as empty.
    fn prompt(&mut self, prompt: &str) -> AppResult<String> {
        self.print(prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Run one command against the application state.
pub async fn run(command: Command, state: &AppState, term: &mut Terminal<'_>) -> AppResult<()> {
    match command {
        Command::List { search, page } => public::list(state, term, &search, page),
        Command::Show { id } => public::show(state, term, &id),
        Command::Browse { search } => public::browse(state, term, search),
        Command::Login { password } => admin::login(state, term, password),
        Command::Logout => admin::logout(state, term),
        Command::Admin(command) => admin::run(command, state, term).await,
    }
}
