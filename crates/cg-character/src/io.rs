//! Input and output collaborators for interactive building.
//!
//! The builder never touches stdin or stdout directly. It asks a [`Prompt`]
//! for answers and hands messages to a [`Notify`], so a terminal, a script,
//! or a test can sit on the other side.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::error::{CharError, CharResult};

/// Source of answers to textual prompts.
pub trait Prompt {
    /// Show `prompt` and return the user's answer without its line ending.
    ///
    /// Returns [`CharError::InputClosed`] once no more answers can arrive.
    fn ask(&mut self, prompt: &str) -> CharResult<String>;
}

/// Sink for human-readable messages.
pub trait Notify {
    /// Display one message.
    fn show(&mut self, message: &str);
}

/// Answers prompts from a fixed list, in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Create a prompt that will give `answers` one at a time.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Every prompt shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, prompt: &str) -> CharResult<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or(CharError::InputClosed)
    }
}

/// Keeps every message it is shown.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotify {
    /// Messages in the order they were shown.
    pub messages: Vec<String>,
}

impl RecordingNotify {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times exactly `message` was shown.
    pub fn count(&self, message: &str) -> usize {
        self.messages.iter().filter(|m| *m == message).count()
    }
}

impl Notify for RecordingNotify {
    fn show(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Notify for Silent {
    fn show(&mut self, _message: &str) {}
}

/// Line-oriented prompt over any reader/writer pair.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Read answers from `reader`, writing prompts to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> CharResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CharError::InputClosed);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

/// Writes each message on its own line.
pub struct LineNotify<W> {
    writer: W,
}

impl<W: Write> LineNotify<W> {
    /// Write messages to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Notify for LineNotify<W> {
    fn show(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{message}") {
            tracing::warn!(error = %e, "failed to write message");
        }
    }
}
