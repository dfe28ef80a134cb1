//! Unmark command - record a person as absent for a tutorial

use log::info;

use crate::domain::{Index, Tutorial};
use crate::model::Model;

use super::{messages, target_person, Command, CommandError, CommandResult};

/// Sets a tutorial to absent. A tutorial with no record yet is inserted as
/// absent, so only repeating an unmark fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmarkCommand {
    index: Index,
    tutorial: Tutorial,
}

impl UnmarkCommand {
    pub const COMMAND_WORD: &'static str = "unmark";

    pub fn new(index: Index, tutorial: Tutorial) -> Self {
        Self { index, tutorial }
    }
}

impl Command for UnmarkCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = target_person(model, self.index)?;

        if target.attendance(self.tutorial) == Some(false) {
            return Err(CommandError::UnmarkUnnecessary {
                tutorial: self.tutorial,
                person: messages::format(&target),
            });
        }

        let unmarked = target.with_attendance(self.tutorial, false);
        model.set_person(&target, unmarked.clone())?;

        info!(
            "event=attendance_unmarked module=commands index={} tutorial={}",
            self.index.one_based(),
            self.tutorial
        );

        Ok(CommandResult::new(format!(
            "Unmarked tutorial {} for {}",
            self.tutorial,
            messages::format(&unmarked)
        )))
    }
}
