//! Delete command - remove a displayed person from the roster

use log::info;

use crate::domain::Index;
use crate::model::Model;

use super::{messages, target_person, Command, CommandError, CommandResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = target_person(model, self.index)?;
        model.delete_person(&target)?;

        info!(
            "event=person_deleted module=commands index={} roster_size={}",
            self.index.one_based(),
            model.roster().len()
        );

        Ok(CommandResult::new(format!(
            "Deleted Person: {}",
            messages::format(&target)
        )))
    }
}
