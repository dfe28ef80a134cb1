//! Validated field value objects for a person record
//!
//! Every field is checked once at construction, so a `Person` assembled from
//! these types is always valid. Stored data goes through the same
//! constructors when it is loaded.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::result::{Error, Result};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern is valid"));

static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^A[0-9]{7}[A-Z]$").expect("student id pattern is valid"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern is valid"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*",
        r"@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*",
        r"[A-Za-z0-9]{2,}(-[A-Za-z0-9]+)*$",
    ))
    .expect("email pattern is valid")
});

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag pattern is valid"));

/// A person's display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if !Self::is_valid(trimmed) {
            return Err(Error::invalid_value(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        NAME_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whole words of the name, used by keyword search
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Matriculation number, e.g. `A0123456X`
///
/// Input is upper-cased before validation so `a0123456x` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Student ID should be of the format A0000000X, where 0 is a digit and X is an uppercase letter";

    pub fn new(value: &str) -> Result<Self> {
        let normalized = value.trim().to_uppercase();
        if !Self::is_valid(&normalized) {
            return Err(Error::invalid_value(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(normalized))
    }

    pub fn is_valid(value: &str) -> bool {
        STUDENT_ID_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if !Self::is_valid(trimmed) {
            return Err(Error::invalid_value(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        PHONE_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain. \
        The local-part should only contain alphanumeric characters and the special characters +_.- \
        and may not start or end with a special character. The domain is made of labels separated \
        by periods, and the last label must be at least 2 characters long";

    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if !Self::is_valid(trimmed) {
            return Err(Error::invalid_value(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A free-form label such as `friends` or `needsHelp`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if !Self::is_valid(trimmed) {
            return Err(Error::invalid_value(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        TAG_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tags render in brackets: `[friends]`
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
