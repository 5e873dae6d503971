//! The alert/confirm boundary.
//!
//! The store and form never talk to a terminal; anything that blocks on
//! the user goes through [`Screen`]. The console implementation reads
//! stdin; the scripted one replays canned answers for tests.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// A surface capable of showing a blocking message and asking a yes/no
/// question.
pub trait Screen {
    /// Shows a single blocking message.
    fn alert(&mut self, message: &str);

    /// Asks a yes/no question and returns the answer.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Interactive screen over stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleScreen;

impl ConsoleScreen {
    /// Creates a console screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for ConsoleScreen {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&mut self, question: &str) -> bool {
        print!("{question} [y/N] ");
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Scripted screen for tests: replays queued confirm answers and records
/// everything it was asked to show.
#[derive(Debug, Default)]
pub struct ScriptedScreen {
    answers: VecDeque<bool>,
    /// Alert messages shown, in order.
    pub alerts: Vec<String>,
    /// Confirm questions asked, in order.
    pub questions: Vec<String>,
}

impl ScriptedScreen {
    /// Creates a screen that answers every confirm with `no`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a screen with a queue of confirm answers. Once the queue is
    /// exhausted, further confirms answer `no`.
    pub fn with_answers<I: IntoIterator<Item = bool>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Screen for ScriptedScreen {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
