//! Storage port - roster and session persistence abstraction

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::model::{PersonFilter, Roster};

/// View state carried between invocations
///
/// Display positions printed by one command (`find`) are only meaningful to
/// the next one (`mark 2 3`) if the same filter is active again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub filter: PersonFilter,
}

/// Roster storage abstraction
///
/// Implementations must validate everything they load: a `Roster` coming out
/// of `read_roster` is as trustworthy as one built in memory.
pub trait RosterStorage {
    fn roster_file_path(&self) -> &Path;

    /// Load the roster; `Ok(None)` when nothing has been saved yet
    fn read_roster(&self) -> Result<Option<Roster>>;

    fn save_roster(&self, roster: &Roster) -> Result<()>;

    /// Load the session, falling back to the default when absent
    fn read_session(&self) -> Result<SessionState>;

    fn save_session(&self, session: &SessionState) -> Result<()>;
}
