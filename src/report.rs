//! Human-readable breakdown of a key sequence.
//!
//! The report lists every key-press run with the character it selects. It is an
//! inspection aid and accepts any input, terminated or not.

use crate::decoder::{KeyPress, Token, Tokenizer};
use crate::keypad::TERMINATOR;
use std::fmt;

/// One key-press run found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub position: usize,
    /// Literal run text, e.g. `"222"`
    pub text: String,
    pub digit: char,
    pub presses: usize,
    /// `None` when the run does not select a character
    pub resolved: Option<char>,
}

impl From<KeyPress> for RunReport {
    fn from(run: KeyPress) -> Self {
        Self {
            position: run.position,
            text: run.text(),
            digit: run.digit,
            presses: run.presses,
            resolved: run.resolve(),
        }
    }
}

/// Analysis of a whole key sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub input: String,
    pub runs: Vec<RunReport>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}

/// Build a [`Report`] for `input`. A single trailing `#` is ignored.
pub fn analyze(input: &str) -> Report {
    let body = input.strip_suffix(TERMINATOR).unwrap_or(input);
    let runs = Tokenizer::new(body)
        .filter_map(|token| match token {
            Token::Press(run) => Some(RunReport::from(run)),
            Token::Backspace | Token::Pause => None,
        })
        .collect();

    Report {
        input: input.to_string(),
        runs,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty input");
        }

        write!(f, "Input: {:?}", self.input)?;
        if self.runs.is_empty() {
            return write!(f, "\n  (no key presses)");
        }

        for run in &self.runs {
            write!(f, "\n{run}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  [{}] {:?} digit={} presses={} -> ",
            self.position, self.text, self.digit, self.presses
        )?;
        match self.resolved {
            Some(c) => write!(f, "{c:?}"),
            None => write!(f, "<no character>"),
        }
    }
}
