//! Default in-memory `Model` implementation

use log::debug;

use crate::domain::Person;

use super::{Model, ModelError, PersonFilter, Roster};

#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    roster: Roster,
    filter: PersonFilter,
}

impl ModelManager {
    pub fn new(roster: Roster) -> Self {
        Self::with_filter(roster, PersonFilter::All)
    }

    pub fn with_filter(roster: Roster, filter: PersonFilter) -> Self {
        debug!(
            "event=model_init module=model persons={} filtered={}",
            roster.len(),
            filter != PersonFilter::All
        );
        Self { roster, filter }
    }
}

impl Model for ModelManager {
    fn roster(&self) -> &Roster {
        &self.roster
    }

    fn set_roster(&mut self, roster: Roster) {
        self.roster = roster;
    }

    fn has_person(&self, person: &Person) -> bool {
        self.roster.has_person(person)
    }

    fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        self.roster.add_person(person)?;
        // a freshly added person should be visible
        self.filter = PersonFilter::All;
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> Result<(), ModelError> {
        self.roster.remove_person(target).map(|_| ())
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        self.roster.set_person(target, edited)
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.roster
            .persons()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        debug!(
            "event=filter_updated module=model filtered={}",
            filter != PersonFilter::All
        );
        self.filter = filter;
    }

    fn filter(&self) -> &PersonFilter {
        &self.filter
    }
}
