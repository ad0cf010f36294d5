//! Error types and handling infrastructure for oldphone.
//!
//! The library reports failures through [`DecodeError`], built with `thiserror`.
//! The binary wraps these with `anyhow` context at the application boundary.
//!
//! ## Error kinds
//!
//! - **Missing input**: no key sequence was supplied at all
//! - **Missing terminator**: the sequence is empty or does not end with `#`
//! - **Malformed input**: a character outside `0-9`, space and `*`, or a `#`
//!   before the end of the sequence

use thiserror::Error;

/// The main error type for decoding operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No input was supplied. This is a caller error rather than bad content.
    #[error("No input supplied")]
    MissingInput,

    /// Input is empty or does not end with the `#` terminator
    #[error("Input must end with '#': {input:?}")]
    MissingTerminator { input: String },

    /// Input contains a character that is not a digit, space, `*` or final `#`
    #[error("Malformed input {input:?}: unexpected {found:?} at position {position}")]
    MalformedInput {
        input: String,
        /// Character offset of the first offending character
        position: usize,
        found: char,
    },
}

/// Standard Result type for oldphone operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

impl DecodeError {
    /// Create a MissingTerminator error for the given input
    pub fn missing_terminator(input: impl Into<String>) -> Self {
        Self::MissingTerminator {
            input: input.into(),
        }
    }

    /// Create a MalformedInput error pointing at the offending character
    pub fn malformed(input: impl Into<String>, position: usize, found: char) -> Self {
        Self::MalformedInput {
            input: input.into(),
            position,
            found,
        }
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput)
    }

    pub fn is_missing_terminator(&self) -> bool {
        matches!(self, Self::MissingTerminator { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}
