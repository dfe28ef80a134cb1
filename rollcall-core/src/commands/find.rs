//! Find command - narrow the displayed list by name keywords

use log::info;

use crate::model::{Model, PersonFilter};

use super::{messages, Command, CommandError, CommandResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    /// Each argument is split on whitespace; blank arguments contribute nothing
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .flat_map(|k| {
                    k.as_ref()
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect(),
        }
    }
}

impl Command for FindCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonFilter::name_keywords(self.keywords.clone()));
        let count = model.filtered_person_list().len();
        info!(
            "event=persons_found module=commands keywords={} matches={}",
            self.keywords.len(),
            count
        );
        Ok(CommandResult::with_list(messages::persons_listed(count)))
    }
}
