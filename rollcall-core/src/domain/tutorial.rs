//! Tutorial session identifier

use std::fmt;

use super::result::{Error, Result};

/// A tutorial session, numbered `1..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tutorial(u8);

impl Tutorial {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub const MESSAGE_CONSTRAINTS: &'static str = "Tutorial should be a number from 1 to 12";

    /// Parse a tutorial from its decimal string form (`"3"`)
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_value(Self::MESSAGE_CONSTRAINTS));
        }
        let number: u8 = trimmed
            .parse()
            .map_err(|_| Error::invalid_value(Self::MESSAGE_CONSTRAINTS))?;
        Self::new(number)
    }

    pub fn new(number: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&number) {
            return Err(Error::invalid_value(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Every valid tutorial in ascending order
    pub fn all() -> impl Iterator<Item = Tutorial> {
        (Self::MIN..=Self::MAX).map(Tutorial)
    }
}

impl fmt::Display for Tutorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
