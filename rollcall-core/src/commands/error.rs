//! Command failure type

use thiserror::Error;

use crate::domain::Tutorial;
use crate::model::ModelError;

/// Why a command refused to run
///
/// The `Display` output is the user-facing message. Any failure leaves the
/// model exactly as it was before `execute` was called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The person index provided is invalid")]
    InvalidDisplayedIndex,

    #[error("This person has already attended tutorial {tutorial}. {person}")]
    MarkUnnecessary { tutorial: Tutorial, person: String },

    #[error("This person is already marked absent for tutorial {tutorial}. {person}")]
    UnmarkUnnecessary { tutorial: Tutorial, person: String },

    #[error("This person already exists in the roster")]
    DuplicatePerson,

    #[error("At least one field to edit must be provided.")]
    NotEdited,

    #[error(transparent)]
    Model(#[from] ModelError),
}
