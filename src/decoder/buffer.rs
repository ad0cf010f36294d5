//! Edit buffer holding the message decoded so far.

/// Ordered character buffer supporting append and delete-last.
///
/// Characters are kept in output order, so rendering is a plain copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
}

impl EditBuffer {
    /// Create with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Remove the last character. Does nothing on an empty buffer.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
