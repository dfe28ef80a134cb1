//! Rollcall Core - roster and tutorial attendance tracking
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: Validated value types and the `Person` record
//! - **model**: The roster plus the filtered view commands address
//! - **commands**: Add, edit, delete, find, list, clear, mark and unmark
//! - **ports**: Trait definitions for external dependencies (RosterStorage)
//! - **adapters**: Concrete implementations (JSON files, file lock, sample data)
//! - **services**: Read-side use cases (status, CSV export)

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod logging;
pub mod model;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use adapters::json::JsonRosterStorage;
use adapters::lock::RosterLock;
use adapters::sample::sample_roster;
use commands::{Command, CommandResult};
use config::Config;
use model::{Model, ModelManager, Roster};
use ports::{RosterStorage, SessionState};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{Email, Index, Name, Person, Phone, StudentId, Tag, Tutorial};

pub const SESSION_FILE: &str = "session.json";
pub const LOCK_FILE: &str = "rollcall.lock";
pub const LOG_DIR: &str = "logs";

/// Main context for Rollcall operations
///
/// Owns the loaded roster for the lifetime of one invocation and holds the
/// data directory lock until dropped. Every successful command is written
/// back before [`RollcallContext::execute`] returns.
pub struct RollcallContext {
    pub config: Config,
    pub status_service: StatusService,
    pub export_service: ExportService,
    data_dir: PathBuf,
    storage: JsonRosterStorage,
    model: ModelManager,
    // roster only exists in memory (first run seeded from sample data)
    unsaved: bool,
    _lock: RosterLock,
}

impl RollcallContext {
    /// Open the data directory: lock it, then load roster and session
    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;
        let config = Config::load(data_dir)?;
        let lock = RosterLock::acquire(&data_dir.join(LOCK_FILE))?;

        let storage = JsonRosterStorage::new(
            config.roster_path(data_dir),
            data_dir.join(SESSION_FILE),
        );

        let (roster, unsaved) = match storage.read_roster()? {
            Some(roster) => (roster, false),
            None if config.seed_sample_data => {
                info!("event=roster_seeded module=core source=sample");
                (sample_roster()?, true)
            }
            None => (Roster::new(), true),
        };

        let session = storage.read_session()?;
        let model = ModelManager::with_filter(roster, session.filter);

        Ok(Self {
            config,
            status_service: StatusService::new(),
            export_service: ExportService::new(),
            data_dir: data_dir.to_path_buf(),
            storage,
            model,
            unsaved,
            _lock: lock,
        })
    }

    /// Run `command` and persist the result
    ///
    /// The roster file is only rewritten when the roster changed (or has
    /// never been written); the session is always saved so the next
    /// invocation sees the same filtered view.
    pub fn execute(&mut self, command: &dyn Command) -> domain::result::Result<CommandResult> {
        let before = self.model.roster().clone();

        let result = match command.execute(&mut self.model) {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    "event=command_failed module=core command={} error={}",
                    command.command_word(),
                    e
                );
                return Err(e.into());
            }
        };

        if self.unsaved || *self.model.roster() != before {
            self.storage.save_roster(self.model.roster())?;
            self.unsaved = false;
        }
        self.storage.save_session(&SessionState {
            filter: self.model.filter().clone(),
        })?;

        info!(
            "event=command_executed module=core command={} visible={}",
            command.command_word(),
            self.model.filtered_person_list().len()
        );
        Ok(result)
    }

    pub fn model(&self) -> &dyn Model {
        &self.model
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn roster_path(&self) -> &Path {
        self.storage.roster_file_path()
    }

    pub fn status(&self) -> StatusSummary {
        self.status_service.get_status(&self.model)
    }

    pub fn export_csv(&self, path: &Path) -> domain::result::Result<ExportResult> {
        self.export_service.export_csv(self.model.roster(), path)
    }
}
