//! Clear command - empty the roster

use log::warn;

use crate::model::{Model, Roster};

use super::{messages, Command, CommandError, CommandResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
}

impl Command for ClearCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        warn!(
            "event=roster_cleared module=commands removed={}",
            model.roster().len()
        );
        model.set_roster(Roster::new());
        Ok(CommandResult::new(messages::MESSAGE_CLEAR_SUCCESS))
    }
}
