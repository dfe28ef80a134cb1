//! Edit command - change identity fields of a displayed person

use std::collections::BTreeSet;

use log::info;

use crate::domain::{Email, Index, Name, Person, Phone, StudentId, Tag};
use crate::model::{Model, PersonFilter};

use super::{messages, target_person, Command, CommandError, CommandResult};

/// Replacement values for an edit; `None` keeps the current value
///
/// Attendance is not editable here, use mark/unmark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub student_id: Option<StudentId>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    /// `Some(empty)` clears all tags
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.student_id.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.tags.is_some()
    }

    /// New person with the descriptor's fields swapped in
    pub fn apply_to(&self, person: &Person) -> Person {
        let mut builder = person.to_builder();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(student_id) = &self.student_id {
            builder = builder.student_id(student_id.clone());
        }
        if let Some(phone) = &self.phone {
            builder = builder.phone(phone.clone());
        }
        if let Some(email) = &self.email {
            builder = builder.email(email.clone());
        }
        if let Some(tags) = &self.tags {
            builder = builder.tags(tags.clone());
        }
        builder.build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NotEdited);
        }

        let target = target_person(model, self.index)?;
        let edited = self.descriptor.apply_to(&target);

        if !target.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        model.set_person(&target, edited.clone())?;
        // the edit may move the person out of the current filter
        model.update_filtered_person_list(PersonFilter::All);

        info!(
            "event=person_edited module=commands index={}",
            self.index.one_based()
        );

        Ok(CommandResult::new(format!(
            "Edited Person: {}",
            messages::format(&edited)
        )))
    }
}
