//! Terminal input handling for the game REPL.
//!
//! Wraps rustyline behind a small [`Console`] trait so the game loop and the
//! mini-games read lines the same way, and so automated playthroughs can feed
//! a scripted session instead of a live terminal.

use std::collections::VecDeque;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Outcome of reading a line from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// End of input (Ctrl-D or an exhausted script).
    Eof,
    /// Ctrl-C.
    Interrupted,
}

/// A source of player input lines. The REPL and every mini-game read through
/// this, never from stdin directly.
pub trait Console {
    /// Display `prompt` and block until the player supplies a line.
    ///
    /// # Errors
    /// Only on an unrecoverable I/O failure of the underlying reader.
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent>;
}

/// Live console backed by a rustyline editor.
pub struct TerminalConsole {
    editor: DefaultEditor,
}

impl TerminalConsole {
    /// # Errors
    /// If the line editor cannot be initialized for this terminal.
    pub fn new() -> Result<Self> {
        Ok(Self { editor: DefaultEditor::new()? })
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(InputEvent::Line(line)),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(e) => Err(e.into()),
        }
    }
}

/// Console that replays a fixed script of lines, then reports EOF. Used by
/// automated playthroughs in the test suite.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed by the session.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> Result<InputEvent> {
        Ok(self
            .lines
            .pop_front()
            .map_or(InputEvent::Eof, InputEvent::Line))
    }
}
