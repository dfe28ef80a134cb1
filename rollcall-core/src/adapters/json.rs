//! JSON file storage for the roster and session state
//!
//! Persons are written through `JsonAdaptedPerson`, a plain-string mirror of
//! the domain type. Loading converts back through the validating
//! constructors, so a hand-edited file cannot smuggle in an invalid value.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::domain::{Email, Name, Person, Phone, StudentId, Tag, Tutorial};
use crate::model::Roster;
use crate::ports::{RosterStorage, SessionState};

const MESSAGE_DUPLICATE_PERSON: &str = "Persons list contains duplicate person(s).";

/// On-disk shape of the roster file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonSerializableRoster {
    #[serde(default)]
    persons: Vec<JsonAdaptedPerson>,
}

impl JsonSerializableRoster {
    fn from_model(roster: &Roster) -> Self {
        Self {
            persons: roster.persons().iter().map(JsonAdaptedPerson::from_model).collect(),
        }
    }

    fn to_model(&self) -> Result<Roster> {
        let mut roster = Roster::new();
        for adapted in &self.persons {
            let person = adapted.to_model()?;
            roster
                .add_person(person)
                .map_err(|_| Error::data_format(MESSAGE_DUPLICATE_PERSON))?;
        }
        Ok(roster)
    }
}

/// JSON-friendly version of [`Person`]
///
/// Every field is optional here so a missing field can be reported by name
/// instead of as a generic deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPerson {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Keyed by tutorial number as a string, e.g. `"3": true`
    #[serde(default)]
    pub tutorials: BTreeMap<String, bool>,
}

impl JsonAdaptedPerson {
    pub fn from_model(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            student_id: Some(person.student_id().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            tags: person.tags().iter().map(|t| t.as_str().to_string()).collect(),
            tutorials: person
                .tutorials()
                .iter()
                .map(|(tutorial, present)| (tutorial.to_string(), *present))
                .collect(),
        }
    }

    /// Rebuild and validate the domain person
    pub fn to_model(&self) -> Result<Person> {
        let name = Name::new(required(&self.name, "Name")?).map_err(into_data_format)?;
        let student_id =
            StudentId::new(required(&self.student_id, "StudentId")?).map_err(into_data_format)?;
        let phone = Phone::new(required(&self.phone, "Phone")?).map_err(into_data_format)?;
        let email = Email::new(required(&self.email, "Email")?).map_err(into_data_format)?;

        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<BTreeSet<_>>>()
            .map_err(into_data_format)?;

        // "01" and "1" name the same tutorial; neither may overwrite the other
        let mut tutorials = BTreeMap::new();
        for (key, present) in &self.tutorials {
            let tutorial = Tutorial::parse(key).map_err(into_data_format)?;
            if tutorials.insert(tutorial, *present).is_some() {
                return Err(Error::data_format(format!(
                    "Person's attendance lists tutorial {} more than once!",
                    tutorial
                )));
            }
        }

        Ok(Person::new(name, student_id, phone, email, tags, tutorials))
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| Error::data_format(format!("Person's {} field is missing!", field)))
}

fn into_data_format(err: Error) -> Error {
    match err {
        Error::InvalidValue(msg) => Error::DataFormat(msg),
        other => other,
    }
}

/// Write `contents` to `path` by renaming a fully written temp file over it
fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// [`RosterStorage`] backed by two JSON files
pub struct JsonRosterStorage {
    roster_path: PathBuf,
    session_path: PathBuf,
}

impl JsonRosterStorage {
    pub fn new(roster_path: impl Into<PathBuf>, session_path: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: roster_path.into(),
            session_path: session_path.into(),
        }
    }
}

impl RosterStorage for JsonRosterStorage {
    fn roster_file_path(&self) -> &Path {
        &self.roster_path
    }

    fn read_roster(&self) -> Result<Option<Roster>> {
        if !self.roster_path.exists() {
            info!(
                "event=roster_missing module=storage path={}",
                self.roster_path.display()
            );
            return Ok(None);
        }

        let content = fs::read_to_string(&self.roster_path)?;
        let serializable: JsonSerializableRoster = serde_json::from_str(&content)?;
        let roster = serializable.to_model()?;
        debug!(
            "event=roster_loaded module=storage persons={}",
            roster.len()
        );
        Ok(Some(roster))
    }

    fn save_roster(&self, roster: &Roster) -> Result<()> {
        let content = serde_json::to_string_pretty(&JsonSerializableRoster::from_model(roster))?;
        write_atomically(&self.roster_path, &content)?;
        debug!("event=roster_saved module=storage persons={}", roster.len());
        Ok(())
    }

    fn read_session(&self) -> Result<SessionState> {
        if !self.session_path.exists() {
            return Ok(SessionState::default());
        }

        let content = fs::read_to_string(&self.session_path)?;
        match serde_json::from_str(&content) {
            Ok(session) => Ok(session),
            Err(e) => {
                // session state is disposable, the roster is not
                warn!("event=session_discarded module=storage error={}", e);
                Ok(SessionState::default())
            }
        }
    }

    fn save_session(&self, session: &SessionState) -> Result<()> {
        let content = serde_json::to_string_pretty(session)?;
        write_atomically(&self.session_path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonFilter;
    use tempfile::tempdir;

    fn valid_adapted() -> JsonAdaptedPerson {
        JsonAdaptedPerson {
            name: Some("Benson Meier".to_string()),
            student_id: Some("A0000002B".to_string()),
            phone: Some("98765432".to_string()),
            email: Some("johnd@example.com".to_string()),
            tags: vec!["owesMoney".to_string(), "friends".to_string()],
            tutorials: [("1".to_string(), true), ("3".to_string(), false)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_valid_person_converts() {
        let person = valid_adapted().to_model().unwrap();
        assert_eq!(person.tags().len(), 2);
        assert_eq!(person.attendance(Tutorial::new(1).unwrap()), Some(true));
        assert_eq!(person.attendance(Tutorial::new(3).unwrap()), Some(false));
        assert_eq!(JsonAdaptedPerson::from_model(&person).to_model().unwrap(), person);
    }

    #[test]
    fn test_missing_field_is_named() {
        let adapted = JsonAdaptedPerson {
            phone: None,
            ..valid_adapted()
        };
        let err = adapted.to_model().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Data file is corrupt: Person's Phone field is missing!"
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_email = JsonAdaptedPerson {
            email: Some("not-an-email".to_string()),
            ..valid_adapted()
        };
        assert!(matches!(bad_email.to_model(), Err(Error::DataFormat(_))));

        let bad_tutorial = JsonAdaptedPerson {
            tutorials: [("13".to_string(), true)].into_iter().collect(),
            ..valid_adapted()
        };
        let err = bad_tutorial.to_model().unwrap_err();
        assert!(err.to_string().contains(Tutorial::MESSAGE_CONSTRAINTS));

        let bad_tag = JsonAdaptedPerson {
            tags: vec!["has space".to_string()],
            ..valid_adapted()
        };
        assert!(matches!(bad_tag.to_model(), Err(Error::DataFormat(_))));
    }

    #[test]
    fn test_same_tutorial_spelled_twice_is_rejected() {
        let adapted = JsonAdaptedPerson {
            tutorials: [("01".to_string(), true), ("1".to_string(), false)]
                .into_iter()
                .collect(),
            ..valid_adapted()
        };
        let err = adapted.to_model().unwrap_err();
        assert!(matches!(err, Error::DataFormat(_)));
        assert_eq!(
            err.to_string(),
            "Data file is corrupt: Person's attendance lists tutorial 1 more than once!"
        );
    }

    #[test]
    fn test_duplicate_persons_in_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let file = JsonSerializableRoster {
            persons: vec![valid_adapted(), valid_adapted()],
        };
        fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

        let storage = JsonRosterStorage::new(&path, dir.path().join("session.json"));
        let err = storage.read_roster().unwrap_err();
        assert!(err.to_string().contains(MESSAGE_DUPLICATE_PERSON));
    }

    #[test]
    fn test_missing_files() {
        let dir = tempdir().unwrap();
        let storage = JsonRosterStorage::new(
            dir.path().join("roster.json"),
            dir.path().join("session.json"),
        );
        assert!(storage.read_roster().unwrap().is_none());
        assert_eq!(storage.read_session().unwrap(), SessionState::default());
    }

    #[test]
    fn test_corrupt_session_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let session_path = dir.path().join("session.json");
        fs::write(&session_path, "{ not json").unwrap();
        let storage = JsonRosterStorage::new(dir.path().join("roster.json"), &session_path);

        assert_eq!(storage.read_session().unwrap(), SessionState::default());
    }

    #[test]
    fn test_session_round_trip() {
        let dir = tempdir().unwrap();
        let storage = JsonRosterStorage::new(
            dir.path().join("roster.json"),
            dir.path().join("nested").join("session.json"),
        );
        let session = SessionState {
            filter: PersonFilter::name_keywords(["alice"]),
        };

        storage.save_session(&session).unwrap();

        assert_eq!(storage.read_session().unwrap(), session);
    }
}
