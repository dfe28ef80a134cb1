//! List command - show every person again

use crate::model::{Model, PersonFilter};

use super::{messages, Command, CommandError, CommandResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
}

impl Command for ListCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonFilter::All);
        Ok(CommandResult::with_list(messages::MESSAGE_LIST_SUCCESS))
    }
}
