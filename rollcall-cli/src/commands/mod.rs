//! CLI command implementations

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod export;
pub mod find;
pub mod list;
pub mod mark;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rollcall_core::commands::{Command, CommandResult};
use rollcall_core::config::Config;
use rollcall_core::model::Model;
use rollcall_core::{logging, OperationResult, RollcallContext, LOG_DIR};
use serde::Serialize;

use crate::output::{self, PersonView};

/// Get the rollcall directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ROLLCALL_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".rollcall"))
        .context("Could not find home directory; set ROLLCALL_DIR")
}

/// Start file logging; failures never block the command
pub fn init_logging() {
    let Ok(data_dir) = get_data_dir() else {
        return;
    };
    let configured = Config::load(&data_dir)
        .map(|c| c.log_level)
        .unwrap_or_else(|_| logging::default_log_level().to_string());
    let (level, rejected) = effective_log_level(&configured);

    if let Err(e) = logging::init_logging(level, &data_dir.join(LOG_DIR)) {
        output::error(&format!("Logging disabled: {}", e));
        return;
    }
    if rejected {
        log::warn!(
            "event=log_level_ignored module=cli configured={} using={}",
            configured,
            level
        );
    }
}

/// Configured level if valid, else the default; the flag reports a fallback
fn effective_log_level(configured: &str) -> (&'static str, bool) {
    match logging::normalize_level(configured) {
        Ok(level) => (level, false),
        Err(_) => (logging::default_log_level(), true),
    }
}

/// Open the roster context
pub fn get_context() -> Result<RollcallContext> {
    let data_dir = get_data_dir()?;
    RollcallContext::new(&data_dir)
}

/// What a command prints under `--json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommandOutput {
    feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    persons: Option<Vec<PersonView>>,
}

/// Run a core command, persist, and render its result
pub fn execute(command: &dyn Command, json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    let result = ctx.execute(command)?;
    let persons = displayed_persons(&ctx);
    render(&result, persons, json)
}

fn displayed_persons(ctx: &RollcallContext) -> Vec<PersonView> {
    ctx.model()
        .filtered_person_list()
        .into_iter()
        .enumerate()
        .map(|(i, person)| PersonView::new(i + 1, person))
        .collect()
}

fn render(result: &CommandResult, persons: Vec<PersonView>, json: bool) -> Result<()> {
    if json {
        let out = CommandOutput {
            feedback: result.feedback_to_user.clone(),
            persons: result.show_list.then_some(persons),
        };
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(out))?);
        return Ok(());
    }

    output::success(&result.feedback_to_user);
    if result.show_list && !persons.is_empty() {
        println!("{}", output::person_table(&persons));
    }
    Ok(())
}
