#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Progressive reveal of one line of text, one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Typewriter {
    text: String,
    // Byte offset of the reveal boundary; always on a char boundary.
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Typewriter {
            text: text.into(),
            shown: 0,
        }
    }

    /// Reveals the next character. Returns false once the whole line is out.
    pub fn tick(&mut self) -> bool {
        match self.text[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }

    /// Swaps in a new line and starts over.
    pub fn restart(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.shown = 0;
    }
}
