//! End-to-end tests for RollcallContext
//!
//! Each test gets its own data directory and drives the context the way the
//! CLI does: open, execute one command, drop, open again.
//!
//! Run with: cargo test --test context_tests -- --nocapture

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use rollcall_core::commands::{
    ClearCommand, DeleteCommand, FindCommand, ListCommand, MarkCommand, UnmarkCommand,
};
use rollcall_core::config::Config;
use rollcall_core::model::{Model, PersonFilter};
use rollcall_core::{Error, Index, RollcallContext, Tutorial, SESSION_FILE};

// ============================================================================
// Test Helpers
// ============================================================================

fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

fn tutorial(number: u8) -> Tutorial {
    Tutorial::new(number).unwrap()
}

fn open(dir: &Path) -> RollcallContext {
    RollcallContext::new(dir).expect("Failed to open context")
}

fn visible_names(ctx: &RollcallContext) -> Vec<String> {
    ctx.model()
        .filtered_person_list()
        .iter()
        .map(|p| p.name().to_string())
        .collect()
}

// ============================================================================
// First run
// ============================================================================

#[test]
fn test_first_run_seeds_sample_roster_and_saves_it() {
    let temp_dir = TempDir::new().unwrap();

    let mut ctx = open(temp_dir.path());
    assert_eq!(ctx.model().roster().len(), 6);
    assert!(!ctx.roster_path().exists());

    ctx.execute(&ListCommand).unwrap();
    assert!(ctx.roster_path().exists());
    drop(ctx);

    let ctx = open(temp_dir.path());
    assert_eq!(ctx.model().roster().len(), 6);
}

#[test]
fn test_first_run_without_sample_data_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::load(temp_dir.path()).unwrap();
    config.seed_sample_data = false;
    config.save(temp_dir.path()).unwrap();

    let ctx = open(temp_dir.path());
    assert!(ctx.model().roster().is_empty());
}

// ============================================================================
// Filtered view across invocations
// ============================================================================

#[test]
fn test_find_then_mark_targets_filtered_person() {
    let temp_dir = TempDir::new().unwrap();

    let mut ctx = open(temp_dir.path());
    let found = ctx.execute(&FindCommand::new(["david"])).unwrap();
    assert_eq!(found.feedback_to_user, "1 persons listed!");
    drop(ctx);

    let mut ctx = open(temp_dir.path());
    assert_eq!(visible_names(&ctx), vec!["David Li"]);
    assert_eq!(
        ctx.model().filter(),
        &PersonFilter::name_keywords(["david"])
    );

    // David was absent for tutorial 1
    let result = ctx
        .execute(&MarkCommand::new(index(1), tutorial(1)))
        .unwrap();
    assert!(result.feedback_to_user.starts_with("Marked tutorial 1 for David Li"));
    drop(ctx);

    let ctx = open(temp_dir.path());
    let david = ctx
        .model()
        .roster()
        .persons()
        .iter()
        .find(|p| p.student_id().as_str() == "A0456789W")
        .unwrap();
    assert_eq!(david.attendance(tutorial(1)), Some(true));
    // marking keeps the filter
    assert_eq!(visible_names(&ctx), vec!["David Li"]);
}

#[test]
fn test_index_beyond_filtered_view_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let mut ctx = open(temp_dir.path());
    ctx.execute(&FindCommand::new(["bernice"])).unwrap();
    let before = ctx.model().roster().clone();

    // position 2 exists in the roster but not in the view
    let err = ctx
        .execute(&DeleteCommand::new(index(2)))
        .unwrap_err();
    assert_eq!(err.to_string(), "The person index provided is invalid");
    assert_eq!(ctx.model().roster(), &before);
}

#[test]
fn test_list_resets_persisted_filter() {
    let temp_dir = TempDir::new().unwrap();

    let mut ctx = open(temp_dir.path());
    ctx.execute(&FindCommand::new(["roy"])).unwrap();
    ctx.execute(&ListCommand).unwrap();
    drop(ctx);

    let ctx = open(temp_dir.path());
    assert_eq!(ctx.model().filter(), &PersonFilter::All);
    assert_eq!(ctx.model().filtered_person_list().len(), 6);
}

// ============================================================================
// Attendance state machine through the context
// ============================================================================

#[test]
fn test_failed_unmark_leaves_files_untouched() {
    let temp_dir = TempDir::new().unwrap();

    let mut ctx = open(temp_dir.path());
    // Bernice (2) is already absent for tutorial 2
    ctx.execute(&ListCommand).unwrap();
    let saved = fs::read_to_string(ctx.roster_path()).unwrap();

    let err = ctx
        .execute(&UnmarkCommand::new(index(2), tutorial(2)))
        .unwrap_err();
    assert!(err
        .to_string()
        .starts_with("This person is already marked absent for tutorial 2. Bernice Yu"));
    assert_eq!(fs::read_to_string(ctx.roster_path()).unwrap(), saved);
}

#[test]
fn test_unmark_unrecorded_tutorial_records_absence() {
    let temp_dir = TempDir::new().unwrap();

    let mut ctx = open(temp_dir.path());
    // Charlotte (3) has no attendance records
    ctx.execute(&UnmarkCommand::new(index(3), tutorial(5)))
        .unwrap();

    let status = ctx.status();
    let t5 = status
        .tutorials
        .iter()
        .find(|t| t.tutorial == 5)
        .unwrap();
    assert_eq!((t5.present, t5.absent, t5.unrecorded), (0, 1, 5));
}

// ============================================================================
// Storage failures
// ============================================================================

#[test]
fn test_corrupt_roster_is_an_error_not_a_reset() {
    let temp_dir = TempDir::new().unwrap();
    let roster_path = temp_dir.path().join("roster.json");
    fs::write(
        &roster_path,
        r#"{"persons": [{"name": "Bad", "studentId": "A0000001A", "phone": "1", "email": "x@example.com"}]}"#,
    )
    .unwrap();

    let err = RollcallContext::new(temp_dir.path()).err().unwrap();
    assert!(err.to_string().starts_with("Data file is corrupt"));
    // the bad file is left for the user to fix
    assert!(fs::read_to_string(&roster_path).unwrap().contains("\"Bad\""));
}

#[test]
fn test_second_context_is_locked_out() {
    let temp_dir = TempDir::new().unwrap();

    let first = open(temp_dir.path());
    let err = RollcallContext::new(temp_dir.path()).err().unwrap();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Locked(_))));

    drop(first);
    assert!(RollcallContext::new(temp_dir.path()).is_ok());
}

#[test]
fn test_clear_then_export_writes_header_only() {
    let temp_dir = TempDir::new().unwrap();

    let mut ctx = open(temp_dir.path());
    ctx.execute(&ClearCommand).unwrap();
    assert!(temp_dir.path().join(SESSION_FILE).exists());

    let out = temp_dir.path().join("out.csv");
    let export = ctx.export_csv(&out).unwrap();
    assert_eq!(export.rows, 0);
    assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 1);
}
