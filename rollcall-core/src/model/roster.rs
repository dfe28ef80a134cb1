//! Canonical roster - the authoritative ordered list of persons

use crate::domain::Person;

use super::ModelError;

/// Ordered collection of every person, independent of any filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    persons: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_persons(persons: Vec<Person>) -> Self {
        Self { persons }
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// True if a person with the same student ID is already on the roster
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position
    ///
    /// `target` is located by value. `edited` may keep the target's
    /// student ID but must not collide with any other entry.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        let position = self.position_of(target)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != position && p.is_same_person(&edited));
        if collides {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, ModelError> {
        let position = self.position_of(target)?;
        Ok(self.persons.remove(position))
    }

    fn position_of(&self, target: &Person) -> Result<usize, ModelError> {
        self.persons
            .iter()
            .position(|p| p == target)
            .ok_or(ModelError::PersonNotFound)
    }
}
