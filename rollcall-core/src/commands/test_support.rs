//! Shared fixtures for command unit tests

use std::collections::BTreeMap;

use crate::domain::{Email, Index, Name, Person, Phone, StudentId, Tag, Tutorial};
use crate::model::{ModelManager, Roster};

pub fn first() -> Index {
    Index::from_one_based(1).unwrap()
}

pub fn second() -> Index {
    Index::from_one_based(2).unwrap()
}

pub fn tutorial(number: u8) -> Tutorial {
    Tutorial::new(number).unwrap()
}

pub fn person(name: &str, id: &str, phone: &str, email: &str, tags: &[&str]) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        StudentId::new(id).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
        BTreeMap::new(),
    )
}

/// Three students; the first has no attendance recorded
pub fn typical_roster() -> Roster {
    let benson = person(
        "Benson Meier",
        "A0000002B",
        "98765432",
        "johnd@example.com",
        &["owesMoney", "friends"],
    )
    .with_attendance(tutorial(1), true);

    Roster::from_persons(vec![
        person(
            "Alice Pauline",
            "A0000001A",
            "94351253",
            "alice@example.com",
            &["friends"],
        ),
        benson,
        person("Carl Kurz", "A0000003C", "95352563", "heinz@example.com", &[]),
    ])
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_roster())
}
