//! Status service - roster and attendance summaries

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Tutorial;
use crate::model::Model;

/// Status service for roster summaries
#[derive(Debug, Clone, Default)]
pub struct StatusService;

impl StatusService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize the roster and per-tutorial attendance
    ///
    /// Only tutorials that appear in at least one record are listed.
    pub fn get_status(&self, model: &dyn Model) -> StatusSummary {
        let persons = model.roster().persons();

        let mut counts: BTreeMap<Tutorial, (usize, usize)> = BTreeMap::new();
        for person in persons {
            for (tutorial, present) in person.tutorials() {
                let entry = counts.entry(*tutorial).or_default();
                if *present {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }

        let tutorials = counts
            .into_iter()
            .map(|(tutorial, (present, absent))| TutorialAttendance {
                tutorial: tutorial.number(),
                present,
                absent,
                unrecorded: persons.len() - present - absent,
            })
            .collect();

        StatusSummary {
            total_persons: persons.len(),
            visible_persons: model.filtered_person_list().len(),
            filter: model.filter().to_string(),
            tutorials,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total_persons: usize,
    pub visible_persons: usize,
    pub filter: String,
    pub tutorials: Vec<TutorialAttendance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TutorialAttendance {
    pub tutorial: u8,
    pub present: usize,
    pub absent: usize,
    pub unrecorded: usize,
}
