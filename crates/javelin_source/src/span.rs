//! Inclusive offset ranges as recorded by the Java parser.

use serde::{Deserialize, Serialize};

/// An offset range within a compilation unit's source buffer.
///
/// Both `start` and `end` are *inclusive*: a one-character token at offset 7
/// has `start == end == 7`. This is the convention used by every AST node the
/// reporter receives, so ranges are never converted back and forth.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the first character.
    pub start: u32,
    /// Offset of the last character.
    pub end: u32,
}

impl Span {
    /// Creates a span from inclusive `start` and `end` offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the number of characters covered, or 0 for an inverted span.
    pub fn len(&self) -> u32 {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Returns `true` if `end` precedes `start`.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}
