//! Status command - show roster and attendance summary

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rollcall_core::{logging, OperationResult};

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx.status();

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(status))?);
        return Ok(());
    }

    println!("{}", "Roster Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Persons", &status.total_persons.to_string()]);
    table.add_row(vec!["Displayed", &status.visible_persons.to_string()]);
    table.add_row(vec!["Filter", &status.filter]);
    if let Some(logs) = log_location(logging::logging_status()) {
        table.add_row(vec!["Logs", &logs]);
    }
    println!("{}", table);
    println!();

    if status.tutorials.is_empty() {
        println!("{}", "No attendance recorded yet".dimmed());
        return Ok(());
    }

    println!("{}", "Attendance".bold());
    let mut attendance = output::create_table();
    attendance.set_header(vec!["Tutorial", "Present", "Absent", "Unrecorded"]);
    for t in &status.tutorials {
        attendance.add_row(vec![
            format!("T{}", t.tutorial),
            t.present.to_string(),
            t.absent.to_string(),
            t.unrecorded.to_string(),
        ]);
    }
    println!("{}", attendance);

    Ok(())
}

fn log_location(active: Option<(&'static str, PathBuf)>) -> Option<String> {
    active.map(|(level, dir)| format!("{} ({})", dir.display(), level))
}
