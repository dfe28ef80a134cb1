//! Person domain model

use std::collections::{BTreeMap, BTreeSet};

use super::fields::{Email, Name, Phone, StudentId, Tag};
use super::tutorial::Tutorial;

/// A student on the roster together with their tutorial attendance
///
/// Persons are never mutated in place. Every change produces a new value
/// (see [`Person::with_attendance`] and [`PersonBuilder`]) and the roster
/// swaps the old value for the new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: Name,
    student_id: StudentId,
    phone: Phone,
    email: Email,
    tags: BTreeSet<Tag>,
    /// `true` = present, `false` = absent; missing = never recorded
    tutorials: BTreeMap<Tutorial, bool>,
}

impl Person {
    pub fn new(
        name: Name,
        student_id: StudentId,
        phone: Phone,
        email: Email,
        tags: BTreeSet<Tag>,
        tutorials: BTreeMap<Tutorial, bool>,
    ) -> Self {
        Self {
            name,
            student_id,
            phone,
            email,
            tags,
            tutorials,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn tutorials(&self) -> &BTreeMap<Tutorial, bool> {
        &self.tutorials
    }

    /// Recorded attendance for a tutorial, if any
    pub fn attendance(&self, tutorial: Tutorial) -> Option<bool> {
        self.tutorials.get(&tutorial).copied()
    }

    /// Copy of this person with one tutorial set to `present`
    pub fn with_attendance(&self, tutorial: Tutorial, present: bool) -> Self {
        let mut tutorials = self.tutorials.clone();
        tutorials.insert(tutorial, present);
        Self {
            tutorials,
            ..self.clone()
        }
    }

    /// Two records describe the same student when their student IDs match
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.student_id == other.student_id
    }

    pub fn to_builder(&self) -> PersonBuilder {
        PersonBuilder {
            person: self.clone(),
        }
    }
}

/// Builds a modified copy of an existing person
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn name(mut self, name: Name) -> Self {
        self.person.name = name;
        self
    }

    pub fn student_id(mut self, student_id: StudentId) -> Self {
        self.person.student_id = student_id;
        self
    }

    pub fn phone(mut self, phone: Phone) -> Self {
        self.person.phone = phone;
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.person.email = email;
        self
    }

    pub fn tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.person.tags = tags;
        self
    }

    pub fn tutorials(mut self, tutorials: BTreeMap<Tutorial, bool>) -> Self {
        self.person.tutorials = tutorials;
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}
