//! One-based display positions
//!
//! Users see and type positions starting at 1; the model works with
//! zero-based offsets. `Index` keeps both views of the same number and can
//! only be built from a valid, non-negative position.

use super::result::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub const MESSAGE_INVALID_INDEX: &'static str = "Index is not a non-zero unsigned integer.";

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Returns `None` for 0, which is not a valid display position
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    /// Parse a user-typed display position such as `"2"`
    ///
    /// Signs are rejected, so `"-1"` and `"+1"` both fail here and never
    /// reach a command.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::parse(Self::MESSAGE_INVALID_INDEX));
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(Self::from_one_based)
            .ok_or_else(|| Error::parse(Self::MESSAGE_INVALID_INDEX))
    }

    pub fn zero_based(self) -> usize {
        self.zero_based
    }

    pub fn one_based(self) -> usize {
        self.zero_based + 1
    }
}
