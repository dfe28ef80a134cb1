//! Export service - attendance sheet as CSV

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::Tutorial;
use crate::model::Roster;

/// Writes the full roster (ignoring any filter) as one CSV row per person
#[derive(Debug, Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Export to a file, replacing it if it exists
    pub fn export_csv(&self, roster: &Roster, path: &Path) -> Result<ExportResult> {
        let file = File::create(path)?;
        let rows = self.write_csv(roster, file)?;
        info!("event=roster_exported module=export rows={}", rows);
        Ok(ExportResult {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// Write CSV to any writer, returning the number of data rows
    ///
    /// Columns: name, student_id, phone, email, tags (`;`-joined), then one
    /// column per tutorial holding `present`, `absent` or nothing.
    pub fn write_csv<W: Write>(&self, roster: &Roster, writer: W) -> Result<usize> {
        let mut csv = csv::Writer::from_writer(writer);

        let mut header: Vec<String> = ["name", "student_id", "phone", "email", "tags"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        header.extend(Tutorial::all().map(|t| format!("T{}", t)));
        csv.write_record(&header)?;

        for person in roster.persons() {
            let tags: Vec<&str> = person.tags().iter().map(|t| t.as_str()).collect();
            let mut record = vec![
                person.name().to_string(),
                person.student_id().to_string(),
                person.phone().to_string(),
                person.email().to_string(),
                tags.join(";"),
            ];
            record.extend(Tutorial::all().map(|t| match person.attendance(t) {
                Some(true) => "present".to_string(),
                Some(false) => "absent".to_string(),
                None => String::new(),
            }));
            csv.write_record(&record)?;
        }

        csv.flush()?;
        Ok(roster.len())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    pub path: PathBuf,
    pub rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sample::sample_roster;

    #[test]
    fn test_write_csv_rows_and_attendance_cells() {
        let roster = sample_roster().unwrap();
        let mut buffer = Vec::new();

        let rows = ExportService::new().write_csv(&roster, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(rows, 6);
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("name,student_id,phone,email,tags,T1,T2,"));
        assert!(lines[0].ends_with(",T12"));
        assert_eq!(
            lines[2],
            "Bernice Yu,A0234567Y,99272758,berniceyu@example.com,colleagues;friends,\
             present,absent,,,,,,,,,,"
        );
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.csv");

        let result = ExportService::new()
            .export_csv(&Roster::new(), &path)
            .unwrap();

        assert_eq!(result.rows, 0);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
