//! Add command - put a new person on the roster

use log::info;

use crate::domain::Person;
use crate::model::Model;

use super::{messages, Command, CommandError, CommandResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Command for AddCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }

        model.add_person(self.person.clone())?;
        info!(
            "event=person_added module=commands roster_size={}",
            model.roster().len()
        );

        Ok(CommandResult::new(format!(
            "New person added: {}",
            messages::format(&self.person)
        )))
    }
}
