//! User-facing message templates shared by commands

use crate::domain::Person;

pub const MESSAGE_LIST_SUCCESS: &str = "Listed all persons";
pub const MESSAGE_CLEAR_SUCCESS: &str = "Roster has been cleared!";

/// `"3 persons listed!"`
pub fn persons_listed(count: usize) -> String {
    format!("{} persons listed!", count)
}

/// Single-line rendering of a person used inside feedback messages
///
/// `Alex Yeoh; Student ID: A0123456X; Phone: 87438807; Email: alexyeoh@example.com; Tags: [friends]`
pub fn format(person: &Person) -> String {
    let tags: String = person.tags().iter().map(ToString::to_string).collect();
    format!(
        "{}; Student ID: {}; Phone: {}; Email: {}; Tags: {}",
        person.name(),
        person.student_id(),
        person.phone(),
        person.email(),
        tags
    )
}
