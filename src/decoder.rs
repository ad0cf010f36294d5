//! Keypad sequence decoding.
//!
//! Decoding validates the raw sequence, splits it into key-press runs and
//! control tokens, and applies each token to an [`EditBuffer`]. The buffer's
//! contents at the terminator are the decoded message.

pub mod buffer;
pub mod token;
pub mod validation;

pub use buffer::EditBuffer;
pub use token::{KeyPress, Token, Tokenizer};
pub use validation::validate;

use crate::error::{DecodeError, Result};

/// Stateless decoder over the fixed keypad layout.
pub struct Decoder;

impl Decoder {
    /// Decode a key sequence terminated by `#`.
    ///
    /// # Errors
    /// * [`DecodeError::MissingTerminator`] when the input is empty or does not end with `#`
    /// * [`DecodeError::MalformedInput`] when it contains anything other than
    ///   digits, spaces, `*` and the final `#`
    pub fn decode(input: &str) -> Result<String> {
        let body = validate(input)?;
        let message = Self::decode_tokens(Tokenizer::new(body), body.len());
        log::debug!(
            "decoded {} input characters to {} output characters",
            input.chars().count(),
            message.chars().count()
        );
        Ok(message)
    }

    /// Decode an input that may not have been supplied at all.
    pub fn try_decode(input: Option<&str>) -> Result<String> {
        match input {
            Some(input) => Self::decode(input),
            None => Err(DecodeError::MissingInput),
        }
    }

    /// Apply a token stream to a fresh edit buffer and render the result.
    pub fn decode_tokens(tokens: impl IntoIterator<Item = Token>, capacity: usize) -> String {
        let mut buffer = EditBuffer::with_capacity(capacity);
        for token in tokens {
            log::trace!("applying {token:?}");
            match token {
                Token::Press(run) => {
                    if let Some(c) = run.resolve() {
                        buffer.push(c);
                    }
                }
                Token::Backspace => {
                    buffer.pop();
                }
                Token::Pause => {}
            }
        }
        buffer.into_string()
    }
}

/// Decode a key sequence terminated by `#`. See [`Decoder::decode`].
pub fn decode(input: &str) -> Result<String> {
    Decoder::decode(input)
}

/// Decode an optional key sequence, failing with
/// [`DecodeError::MissingInput`] when it is absent.
pub fn try_decode(input: Option<&str>) -> Result<String> {
    Decoder::try_decode(input)
}
