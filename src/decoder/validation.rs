//! Input validation run before any decoding takes place.
//!
//! Checks are applied in a fixed order so each failure mode is reported
//! consistently: the terminator check comes first, then the character check.

use crate::error::{DecodeError, Result};
use crate::keypad::{BACKSPACE, PAUSE, TERMINATOR};

/// Validate a raw key sequence and return its body with the terminator removed.
///
/// # Validations Performed
/// - Input is non-empty and its last character is `#`
/// - Every character before the final `#` is a digit, a space or `*`
///
/// # Error Cases
/// - Empty input or any other final character: [`DecodeError::MissingTerminator`]
/// - A letter, punctuation or an early `#`: [`DecodeError::MalformedInput`]
pub fn validate(input: &str) -> Result<&str> {
    let Some(body) = input.strip_suffix(TERMINATOR) else {
        log::debug!("rejecting input without terminator: {input:?}");
        return Err(DecodeError::missing_terminator(input));
    };

    if let Some((position, found)) = body.chars().enumerate().find(|&(_, c)| !is_body_char(c)) {
        log::debug!("rejecting malformed input {input:?}: {found:?} at {position}");
        return Err(DecodeError::malformed(input, position, found));
    }

    Ok(body)
}

/// Characters allowed before the terminator
pub fn is_body_char(c: char) -> bool {
    c.is_ascii_digit() || c == PAUSE || c == BACKSPACE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_strips_terminator() {
        assert_eq!(validate("4433555 555666#").unwrap(), "4433555 555666");
        assert_eq!(validate("#").unwrap(), "");
        assert_eq!(validate("  * #").unwrap(), "  * ");
    }

    #[test]
    fn test_validate_missing_terminator() {
        for input in ["", "222", "2 3 4", "2#2"] {
            match validate(input).unwrap_err() {
                DecodeError::MissingTerminator { input: reported } => {
                    assert_eq!(reported, input);
                }
                other => panic!("Expected MissingTerminator for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_reports_first_bad_character() {
        match validate("22x3y#").unwrap_err() {
            DecodeError::MalformedInput {
                position, found, ..
            } => {
                assert_eq!(position, 2);
                assert_eq!(found, 'x');
            }
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_early_terminator() {
        match validate("2#3#").unwrap_err() {
            DecodeError::MalformedInput {
                position, found, ..
            } => {
                assert_eq!(position, 1);
                assert_eq!(found, '#');
            }
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
        assert!(validate("##").unwrap_err().is_malformed());
    }

    #[test]
    fn test_missing_terminator_takes_precedence() {
        // Bad characters and no terminator: the terminator check runs first
        assert!(validate("abc").unwrap_err().is_missing_terminator());
        assert!(validate("2x").unwrap_err().is_missing_terminator());
    }
}
