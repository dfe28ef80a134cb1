//! Mark command - record a person as present for a tutorial

use log::info;

use crate::domain::{Index, Tutorial};
use crate::model::Model;

use super::{messages, target_person, Command, CommandError, CommandResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkCommand {
    index: Index,
    tutorial: Tutorial,
}

impl MarkCommand {
    pub const COMMAND_WORD: &'static str = "mark";

    pub fn new(index: Index, tutorial: Tutorial) -> Self {
        Self { index, tutorial }
    }
}

impl Command for MarkCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = target_person(model, self.index)?;

        if target.attendance(self.tutorial) == Some(true) {
            return Err(CommandError::MarkUnnecessary {
                tutorial: self.tutorial,
                person: messages::format(&target),
            });
        }

        let marked = target.with_attendance(self.tutorial, true);
        model.set_person(&target, marked.clone())?;

        info!(
            "event=attendance_marked module=commands index={} tutorial={}",
            self.index.one_based(),
            self.tutorial
        );

        Ok(CommandResult::new(format!(
            "Marked tutorial {} for {}",
            self.tutorial,
            messages::format(&marked)
        )))
    }
}
