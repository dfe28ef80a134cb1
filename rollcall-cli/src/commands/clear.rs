//! Clear command - empty the roster

use anyhow::{bail, Result};
use dialoguer::Confirm;
use rollcall_core::commands::ClearCommand;

use super::execute;
use crate::output;

pub fn run(force: bool, json: bool) -> Result<()> {
    if !force {
        let interactive = !json && atty::is(atty::Stream::Stdin);
        if !interactive {
            bail!("Refusing to clear the roster without --force");
        }

        output::warning("This will delete every person and all attendance records.");
        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            output::info("Cancelled");
            return Ok(());
        }
    }

    execute(&ClearCommand, json)
}
