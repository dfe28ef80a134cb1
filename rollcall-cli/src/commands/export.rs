//! Export command - write the full roster to CSV

use std::path::Path;

use anyhow::{Context, Result};
use rollcall_core::OperationResult;

use super::get_context;
use crate::output;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = ctx
        .export_csv(file)
        .with_context(|| format!("Failed to export to {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(result))?);
        return Ok(());
    }

    output::success(&format!(
        "Exported {} persons to {}",
        result.rows,
        result.path.display()
    ));
    Ok(())
}
