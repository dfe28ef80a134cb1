//! Attendance state machine tests against the public command API
//!
//! Run with: cargo test --test attendance_tests

use std::collections::{BTreeMap, BTreeSet};

use rollcall_core::commands::{
    messages, Command, CommandError, EditCommand, EditPersonDescriptor, FindCommand, MarkCommand,
    UnmarkCommand,
};
use rollcall_core::model::{Model, ModelManager, Roster};
use rollcall_core::{Email, Index, Name, Person, Phone, StudentId, Tutorial};

fn tutorial(number: u8) -> Tutorial {
    Tutorial::new(number).unwrap()
}

fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

fn student(name: &str, id: &str, attendance: &[(u8, bool)]) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        StudentId::new(id).unwrap(),
        Phone::new("94351253").unwrap(),
        Email::new("student@example.com").unwrap(),
        BTreeSet::new(),
        attendance
            .iter()
            .map(|(t, present)| (tutorial(*t), *present))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn class() -> ModelManager {
    ModelManager::new(Roster::from_persons(vec![
        student("Fiona Kunz", "A0000006F", &[(1, true), (2, false)]),
        student("George Best", "A0000007G", &[]),
        student("Hoon Meier", "A0000008H", &[(2, true)]),
    ]))
}

#[test]
fn test_each_transition_from_every_state() {
    let mut model = class();

    // unrecorded -> present
    MarkCommand::new(index(2), tutorial(4))
        .execute(&mut model)
        .unwrap();
    assert_eq!(model.roster().persons()[1].attendance(tutorial(4)), Some(true));

    // present -> absent
    UnmarkCommand::new(index(2), tutorial(4))
        .execute(&mut model)
        .unwrap();
    assert_eq!(model.roster().persons()[1].attendance(tutorial(4)), Some(false));

    // absent -> present
    MarkCommand::new(index(2), tutorial(4))
        .execute(&mut model)
        .unwrap();
    assert_eq!(model.roster().persons()[1].attendance(tutorial(4)), Some(true));

    // unrecorded -> absent
    UnmarkCommand::new(index(2), tutorial(9))
        .execute(&mut model)
        .unwrap();
    assert_eq!(model.roster().persons()[1].attendance(tutorial(9)), Some(false));
}

#[test]
fn test_redundant_transitions_fail_without_change() {
    let mut model = class();
    let before = model.roster().clone();
    let fiona = messages::format(&before.persons()[0]);

    let err = MarkCommand::new(index(1), tutorial(1))
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(
        err,
        CommandError::MarkUnnecessary {
            tutorial: tutorial(1),
            person: fiona.clone(),
        }
    );
    assert_eq!(
        err.to_string(),
        format!("This person has already attended tutorial 1. {}", fiona)
    );

    let err = UnmarkCommand::new(index(1), tutorial(2))
        .execute(&mut model)
        .unwrap_err();
    assert!(matches!(err, CommandError::UnmarkUnnecessary { .. }));

    assert_eq!(model.roster(), &before);
}

#[test]
fn test_other_records_are_untouched() {
    let mut model = class();
    let before = model.roster().clone();

    UnmarkCommand::new(index(1), tutorial(1))
        .execute(&mut model)
        .unwrap();

    let persons = model.roster().persons();
    assert_eq!(persons[0].attendance(tutorial(2)), Some(false));
    assert_eq!(persons[0].name(), before.persons()[0].name());
    assert_eq!(&persons[1], &before.persons()[1]);
    assert_eq!(&persons[2], &before.persons()[2]);
}

#[test]
fn test_filtered_index_addresses_view_not_roster() {
    let mut model = class();
    FindCommand::new(["hoon"]).execute(&mut model).unwrap();

    UnmarkCommand::new(index(1), tutorial(2))
        .execute(&mut model)
        .unwrap();
    assert_eq!(model.roster().persons()[2].attendance(tutorial(2)), Some(false));
    assert_eq!(model.roster().persons()[0].attendance(tutorial(2)), Some(false));

    let err = MarkCommand::new(index(2), tutorial(2))
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidDisplayedIndex);
}

#[test]
fn test_edit_keeps_attendance_and_shows_everyone() {
    let mut model = class();
    FindCommand::new(["fiona"]).execute(&mut model).unwrap();

    let descriptor = EditPersonDescriptor {
        phone: Some(Phone::new("81112222").unwrap()),
        ..EditPersonDescriptor::default()
    };
    EditCommand::new(index(1), descriptor)
        .execute(&mut model)
        .unwrap();

    let fiona = &model.roster().persons()[0];
    assert_eq!(fiona.phone().as_str(), "81112222");
    assert_eq!(fiona.attendance(tutorial(1)), Some(true));
    assert_eq!(model.filtered_person_list().len(), 3);
}
