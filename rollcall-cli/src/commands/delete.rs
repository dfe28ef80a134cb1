//! Delete command - remove a displayed person

use anyhow::Result;
use rollcall_core::commands::DeleteCommand;
use rollcall_core::Index;

use super::execute;

pub fn run(index: &str, json: bool) -> Result<()> {
    let index = Index::parse(index)?;
    execute(&DeleteCommand::new(index), json)
}
