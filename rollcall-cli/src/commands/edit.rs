//! Edit command - change fields of a displayed person

use anyhow::Result;
use rollcall_core::commands::{EditCommand, EditPersonDescriptor};
use rollcall_core::{Email, Index, Name, Phone, StudentId};

use super::add::parse_tags;
use super::execute;

/// Raw `edit` flags as given on the command line
#[derive(Debug, Default)]
pub struct EditArgs {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tags: Vec<String>,
    pub clear_tags: bool,
}

impl EditArgs {
    fn into_descriptor(self) -> Result<EditPersonDescriptor> {
        let tags = if self.clear_tags || !self.tags.is_empty() {
            Some(parse_tags(&self.tags)?)
        } else {
            None
        };

        Ok(EditPersonDescriptor {
            name: self.name.as_deref().map(Name::new).transpose()?,
            student_id: self.student_id.as_deref().map(StudentId::new).transpose()?,
            phone: self.phone.as_deref().map(Phone::new).transpose()?,
            email: self.email.as_deref().map(Email::new).transpose()?,
            tags,
        })
    }
}

pub fn run(index: &str, args: EditArgs, json: bool) -> Result<()> {
    let index = Index::parse(index)?;
    let descriptor = args.into_descriptor()?;
    execute(&EditCommand::new(index, descriptor), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_empty_descriptor() {
        let descriptor = EditArgs::default().into_descriptor().unwrap();
        assert!(!descriptor.is_any_field_edited());
    }

    #[test]
    fn test_clear_tags_without_tags_gives_empty_set() {
        let args = EditArgs {
            clear_tags: true,
            ..EditArgs::default()
        };
        let descriptor = args.into_descriptor().unwrap();
        assert_eq!(descriptor.tags.map(|t| t.len()), Some(0));
    }

    #[test]
    fn test_invalid_phone_is_rejected() {
        let args = EditArgs {
            phone: Some("12a".to_string()),
            ..EditArgs::default()
        };
        assert!(args.into_descriptor().is_err());
    }
}
