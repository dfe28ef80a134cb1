//! Service layer - read-side use cases over the roster
//!
//! Services coordinate domain logic for features that are not commands:
//! they report on or export roster state but never change it.

mod export;
mod status;

pub use export::{ExportResult, ExportService};
pub use status::{StatusService, StatusSummary, TutorialAttendance};
