//! Segmentation of a key sequence into key-press runs and control tokens.
//!
//! A run is a maximal stretch of one repeated digit. It ends at the first
//! character that differs from it: a space, `*`, another digit or the end of input.

use crate::keypad::{Keypad, BACKSPACE, PAUSE};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

/// A run of consecutive presses on one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// Character offset where the run starts
    pub position: usize,
    pub digit: char,
    /// Run length
    pub presses: usize,
}

impl KeyPress {
    /// Character this run selects on the keypad
    pub fn resolve(&self) -> Option<char> {
        Keypad::resolve(self.digit, self.presses)
    }

    /// The literal run as it appeared in the input
    pub fn text(&self) -> String {
        std::iter::repeat(self.digit).take(self.presses).collect()
    }
}

/// One unit of decoder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Press(KeyPress),
    Backspace,
    /// Separator between runs; produces nothing
    Pause,
}

/// Linear scanner yielding [`Token`]s from a key sequence body.
///
/// Characters outside the keypad alphabet are skipped. Validated input never
/// contains them.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    chars: Peekable<Enumerate<Chars<'a>>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(body: &'a str) -> Self {
        Self {
            chars: body.chars().enumerate().peekable(),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let (position, ch) = self.chars.next()?;
            match ch {
                BACKSPACE => return Some(Token::Backspace),
                PAUSE => return Some(Token::Pause),
                digit if digit.is_ascii_digit() => {
                    let mut presses = 1;
                    while self.chars.next_if(|&(_, next)| next == digit).is_some() {
                        presses += 1;
                    }
                    return Some(Token::Press(KeyPress {
                        position,
                        digit,
                        presses,
                    }));
                }
                _ => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(position: usize, digit: char, presses: usize) -> Token {
        Token::Press(KeyPress {
            position,
            digit,
            presses,
        })
    }

    #[test]
    fn test_runs_are_greedy_and_digit_exact() {
        let tokens: Vec<Token> = Tokenizer::new("2223**").collect();
        assert_eq!(
            tokens,
            vec![
                press(0, '2', 3),
                press(3, '3', 1),
                Token::Backspace,
                Token::Backspace,
            ]
        );
    }

    #[test]
    fn test_pause_splits_runs_of_same_digit() {
        let tokens: Vec<Token> = Tokenizer::new("2  22").collect();
        assert_eq!(
            tokens,
            vec![press(0, '2', 1), Token::Pause, Token::Pause, press(3, '2', 2)]
        );
    }

    #[test]
    fn test_empty_and_unknown_characters() {
        assert_eq!(Tokenizer::new("").count(), 0);

        let tokens: Vec<Token> = Tokenizer::new("x22y").collect();
        assert_eq!(tokens, vec![press(1, '2', 2)]);
    }

    #[test]
    fn test_key_press_helpers() {
        let run = KeyPress {
            position: 4,
            digit: '7',
            presses: 4,
        };
        assert_eq!(run.text(), "7777");
        assert_eq!(run.resolve(), Some('S'));
    }
}
