//! Add command - put a new person on the roster

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use rollcall_core::commands::AddCommand;
use rollcall_core::{Email, Name, Person, Phone, StudentId, Tag};

use super::execute;

pub fn run(
    name: &str,
    student_id: &str,
    phone: &str,
    email: &str,
    tags: &[String],
    json: bool,
) -> Result<()> {
    let person = Person::new(
        Name::new(name)?,
        StudentId::new(student_id)?,
        Phone::new(phone)?,
        Email::new(email)?,
        parse_tags(tags)?,
        BTreeMap::new(),
    );

    execute(&AddCommand::new(person), json)
}

/// Validate every `--tag` value
pub fn parse_tags(tags: &[String]) -> Result<BTreeSet<Tag>> {
    let parsed = tags
        .iter()
        .map(|t| Tag::new(t))
        .collect::<rollcall_core::domain::result::Result<BTreeSet<_>>>()?;
    Ok(parsed)
}
