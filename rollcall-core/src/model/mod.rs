//! In-memory model: the canonical roster plus the displayed (filtered) view
//!
//! Commands only ever talk to the [`Model`] trait. The filtered view is a
//! projection computed from the roster on every read, so it can never drift
//! from the roster after a replace.

mod filter;
mod manager;
mod roster;

use thiserror::Error;

use crate::domain::Person;

pub use filter::PersonFilter;
pub use manager::ModelManager;
pub use roster::Roster;

/// Consistency failures raised by roster mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The person to replace or remove is not on the roster.
    /// Commands resolve targets from the roster itself, so this indicates a
    /// bug rather than bad input.
    #[error("The person to update could not be found in the roster")]
    PersonNotFound,

    #[error("This person already exists in the roster")]
    DuplicatePerson,
}

/// The API commands use to read and change roster state
pub trait Model {
    /// The canonical, unfiltered roster
    fn roster(&self) -> &Roster;

    /// Replace the whole roster (used by `clear`)
    fn set_roster(&mut self, roster: Roster);

    /// True if a person with the same identity is on the roster
    fn has_person(&self, person: &Person) -> bool;

    fn add_person(&mut self, person: Person) -> Result<(), ModelError>;

    fn delete_person(&mut self, target: &Person) -> Result<(), ModelError>;

    /// Swap `target` for `edited` at the same roster position
    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError>;

    /// Persons currently displayed, in roster order
    fn filtered_person_list(&self) -> Vec<&Person>;

    /// Replace the active filter; the view is recomputed on the next read
    fn update_filtered_person_list(&mut self, filter: PersonFilter);

    fn filter(&self) -> &PersonFilter;
}
