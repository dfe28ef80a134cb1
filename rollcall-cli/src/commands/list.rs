use anyhow::Result;
use rollcall_core::commands::ListCommand;

use super::execute;

pub fn run(json: bool) -> Result<()> {
    execute(&ListCommand, json)
}
