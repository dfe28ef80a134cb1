//! Find command - filter the displayed list by name keywords

use anyhow::{bail, Result};
use rollcall_core::commands::FindCommand;

use super::execute;

pub fn run(keywords: &[String], json: bool) -> Result<()> {
    let keywords = split_keywords(keywords)?;
    execute(&FindCommand::new(keywords), json)
}

/// One keyword per word, so `find "alice pauline"` means `find alice pauline`
fn split_keywords(args: &[String]) -> Result<Vec<String>> {
    let keywords: Vec<String> = args
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::to_string)
        .collect();
    if keywords.is_empty() {
        bail!("Find requires at least one non-blank keyword");
    }
    Ok(keywords)
}
