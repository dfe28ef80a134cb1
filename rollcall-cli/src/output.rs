//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use rollcall_core::Person;
use serde::Serialize;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// One displayed person, as printed by `--json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
    pub index: usize,
    pub name: String,
    pub student_id: String,
    pub phone: String,
    pub email: String,
    pub tags: Vec<String>,
    /// tutorial number -> present
    pub tutorials: Vec<(u8, bool)>,
}

impl PersonView {
    pub fn new(index: usize, person: &Person) -> Self {
        Self {
            index,
            name: person.name().to_string(),
            student_id: person.student_id().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            tags: person.tags().iter().map(|t| t.as_str().to_string()).collect(),
            tutorials: person
                .tutorials()
                .iter()
                .map(|(t, present)| (t.number(), *present))
                .collect(),
        }
    }
}

/// Attendance cell, e.g. `T1 ✓  T2 ✗`
fn attendance_summary(view: &PersonView) -> String {
    view.tutorials
        .iter()
        .map(|(t, present)| format!("T{} {}", t, if *present { "✓" } else { "✗" }))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the displayed list with 1-based positions
pub fn person_table(persons: &[PersonView]) -> Table {
    let mut table = create_table();
    table.set_header(vec![
        "#",
        "Name",
        "Student ID",
        "Phone",
        "Email",
        "Tags",
        "Attendance",
    ]);

    for view in persons {
        table.add_row(vec![
            Cell::new(view.index),
            Cell::new(&view.name),
            Cell::new(&view.student_id),
            Cell::new(&view.phone),
            Cell::new(&view.email),
            Cell::new(view.tags.join(", ")),
            Cell::new(attendance_summary(view)),
        ]);
    }
    table
}
