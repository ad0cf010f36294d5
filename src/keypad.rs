//! Fixed keypad layout of an old mobile phone.
//!
//! Each digit key produces one of an ordered set of characters depending on how
//! many times it is pressed in a row. The layout is constant data shared by every
//! decode call.

/// Marks the end of a message.
pub const TERMINATOR: char = '#';
/// Removes the most recently entered character.
pub const BACKSPACE: char = '*';
/// Separates two runs of the same key.
pub const PAUSE: char = ' ';

/// Character sequences indexed by digit value.
pub const KEYMAP: [&str; 10] = [
    " ",    // 0
    "&'(",  // 1
    "ABC",  // 2
    "DEF",  // 3
    "GHI",  // 4
    "JKL",  // 5
    "MNO",  // 6
    "PQRS", // 7
    "TUV",  // 8
    "WXYZ", // 9
];

/// Lookup helpers over [`KEYMAP`].
pub struct Keypad;

impl Keypad {
    /// Character sequence produced by `digit`, or `None` for non-digits
    pub fn letters(digit: char) -> Option<&'static str> {
        let index = digit.to_digit(10)? as usize;
        Some(KEYMAP[index])
    }

    /// Resolve a run of `presses` on `digit` to a character.
    ///
    /// Press counts are 1-based. Pressing past the end of a key's sequence keeps
    /// selecting its last character; the selection never wraps around.
    /// Returns `None` for zero presses or a non-digit key.
    pub fn resolve(digit: char, presses: usize) -> Option<char> {
        if presses == 0 {
            return None;
        }
        let letters = Self::letters(digit)?;
        let count = letters.chars().count();
        letters.chars().nth(presses.min(count) - 1)
    }
}
