//! Commands - validated operations over the model
//!
//! Each command is built from already-parsed arguments, then run with
//! [`Command::execute`] against an explicitly passed [`Model`]. Commands
//! that address a person do so by display position in the filtered view.

mod add;
mod clear;
mod delete;
mod edit;
mod error;
mod find;
mod list;
mod mark;
pub mod messages;
#[cfg(test)]
mod test_support;
mod unmark;

use std::fmt::Debug;

use serde::Serialize;

use crate::domain::{Index, Person};
use crate::model::Model;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use error::CommandError;
pub use find::FindCommand;
pub use list::ListCommand;
pub use mark::MarkCommand;
pub use unmark::UnmarkCommand;

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Message shown to the user verbatim
    pub feedback_to_user: String,
    /// The shell should render the filtered list after the message
    pub show_list: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback.into(),
            show_list: false,
        }
    }

    pub fn with_list(feedback: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback.into(),
            show_list: true,
        }
    }
}

pub trait Command: Debug {
    /// Word the command is invoked with, used for logging
    fn command_word(&self) -> &'static str;

    /// Run against `model`. On error the model is left unchanged.
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}

/// Look up the person displayed at `index`, cloned so the model can be
/// mutated afterwards.
fn target_person(model: &dyn Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_person_list()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or(CommandError::InvalidDisplayedIndex)
}
