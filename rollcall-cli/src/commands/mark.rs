//! Mark and unmark commands - record tutorial attendance

use anyhow::Result;
use rollcall_core::commands::{MarkCommand, UnmarkCommand};
use rollcall_core::{Index, Tutorial};

use super::execute;

fn parse_args(index: &str, tutorial: &str) -> Result<(Index, Tutorial)> {
    Ok((Index::parse(index)?, Tutorial::parse(tutorial)?))
}

pub fn run_mark(index: &str, tutorial: &str, json: bool) -> Result<()> {
    let (index, tutorial) = parse_args(index, tutorial)?;
    execute(&MarkCommand::new(index, tutorial), json)
}

pub fn run_unmark(index: &str, tutorial: &str, json: bool) -> Result<()> {
    let (index, tutorial) = parse_args(index, tutorial)?;
    execute(&UnmarkCommand::new(index, tutorial), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let (index, tutorial) = parse_args("2", "12").unwrap();
        assert_eq!(index.one_based(), 2);
        assert_eq!(tutorial.number(), 12);
    }

    #[test]
    fn test_parse_args_reports_first_bad_value() {
        let err = parse_args("0", "1").unwrap_err();
        assert_eq!(err.to_string(), "Index is not a non-zero unsigned integer.");

        let err = parse_args("1", "13").unwrap_err();
        assert_eq!(err.to_string(), Tutorial::MESSAGE_CONSTRAINTS);
    }
}
