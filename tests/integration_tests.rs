use chrono::{Datelike, Local, TimeZone};
/// Integration tests for dirsort
///
/// These tests exercise the complete end-to-end behavior of the three
/// organization operations on real temporary directories.
///
/// Test categories:
/// 1. Date organization
/// 2. Extension organization
/// 3. Recursive summary
/// 4. Configuration and filtering
/// 5. Edge cases and error scenarios
use dirsort::{
    DateOrganizer, ExtensionOrganizer, FilterConfig, NO_EXTENSION, OrganizeError,
    SummaryAnalyzer,
};
use std::fs::{self, File};
use std::path::Path;
use std::time::SystemTime;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// A test fixture that sets up a temporary directory with configurable
/// file structure for testing.
struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    /// Create a new test fixture with a temporary directory.
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TestFixture { temp_dir }
    }

    /// Get the path to the test directory.
    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file with content in the test directory.
    fn create_file(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).expect("Failed to create file");
    }

    /// Create a file and set its modification time.
    fn create_file_with_mtime(&self, name: &str, content: &str, mtime: SystemTime) {
        self.create_file(name, content);
        File::options()
            .write(true)
            .open(self.path().join(name))
            .expect("Failed to open file")
            .set_modified(mtime)
            .expect("Failed to set modification time");
    }

    /// Create a subdirectory in the test directory.
    fn create_subdir(&self, name: &str) {
        fs::create_dir_all(self.path().join(name)).expect("Failed to create subdirectory");
    }

    /// Assert that a file exists at the given relative path.
    fn assert_file_exists(&self, rel_path: &str) {
        let path = self.path().join(rel_path);
        assert!(
            path.exists() && path.is_file(),
            "File should exist: {}",
            path.display()
        );
    }

    /// Assert that a file does NOT exist at the given relative path.
    fn assert_file_not_exists(&self, rel_path: &str) {
        let path = self.path().join(rel_path);
        assert!(!path.exists(), "File should not exist: {}", path.display());
    }

    /// Assert that a directory exists at the given relative path.
    fn assert_dir_exists(&self, rel_path: &str) {
        let path = self.path().join(rel_path);
        assert!(
            path.exists() && path.is_dir(),
            "Directory should exist: {}",
            path.display()
        );
    }
}

/// Builds a SystemTime for a fixed local calendar date.
fn mtime_for(year: i32, month: u32, day: u32) -> SystemTime {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid local datetime")
        .into()
}

// ============================================================================
// Test Suite 1: Date Organization
// ============================================================================

#[test]
fn test_date_organize_empty_directory() {
    let fixture = TestFixture::new();

    let report = DateOrganizer::organize(fixture.path()).expect("Organize failed");

    assert_eq!(report.total, 0);
    assert_eq!(report.organized, 0);
    assert!(report.is_clean());
}

#[test]
fn test_date_organize_creates_year_month_folders() {
    let fixture = TestFixture::new();
    fixture.create_file_with_mtime("old_document.txt", "old", mtime_for(2023, 1, 15));
    fixture.create_file_with_mtime("summer_photo.jpg", "photo", mtime_for(2023, 7, 4));

    let report = DateOrganizer::organize(fixture.path()).expect("Organize failed");

    assert_eq!(report.organized, 2);
    assert_eq!(report.errored, 0);
    fixture.assert_file_exists("2023/01 - January/old_document.txt");
    fixture.assert_file_exists("2023/07 - July/summer_photo.jpg");
    fixture.assert_file_not_exists("old_document.txt");
    fixture.assert_file_not_exists("summer_photo.jpg");
}

#[test]
fn test_date_organize_groups_same_month() {
    let fixture = TestFixture::new();
    fixture.create_file_with_mtime("a.txt", "a", mtime_for(2024, 3, 1));
    fixture.create_file_with_mtime("b.txt", "b", mtime_for(2024, 3, 28));

    let report = DateOrganizer::organize(fixture.path()).expect("Organize failed");

    assert_eq!(report.organized, 2);
    fixture.assert_file_exists("2024/03 - March/a.txt");
    fixture.assert_file_exists("2024/03 - March/b.txt");
}

#[test]
fn test_date_organize_counter_sum_property() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "a");
    fixture.create_file("b.pdf", "b");
    fixture.create_file("c", "c");
    fixture.create_subdir("sub_one");
    fixture.create_subdir("sub_two");

    let report = DateOrganizer::organize(fixture.path()).expect("Organize failed");

    assert_eq!(report.total, 5);
    assert_eq!(
        report.organized + report.skipped + report.errored,
        report.total
    );
    // Subdirectories are never moved: skipped matches their count exactly.
    assert_eq!(report.skipped, 2);
    fixture.assert_dir_exists("sub_one");
    fixture.assert_dir_exists("sub_two");
}

#[test]
fn test_date_organize_missing_source() {
    let result = DateOrganizer::organize(Path::new("/definitely/not/here"));
    assert!(result.is_err());
}

#[test]
fn test_date_organize_is_rerunnable() {
    // Destination folders created by a first run are skipped as
    // directories by a second run; ensure-exists never fails on them.
    let fixture = TestFixture::new();
    fixture.create_file_with_mtime("a.txt", "a", mtime_for(2023, 1, 15));

    DateOrganizer::organize(fixture.path()).expect("First run failed");
    fixture.create_file_with_mtime("b.txt", "b", mtime_for(2023, 1, 20));
    let report = DateOrganizer::organize(fixture.path()).expect("Second run failed");

    assert_eq!(report.organized, 1);
    assert_eq!(report.skipped, 1); // the "2023" folder
    fixture.assert_file_exists("2023/01 - January/a.txt");
    fixture.assert_file_exists("2023/01 - January/b.txt");
}

// ============================================================================
// Test Suite 2: Extension Organization
// ============================================================================

#[test]
fn test_extension_organize_mixed_directory_with_subdir() {
    // a.txt, b.TXT, c (no extension), sub/ :
    // txt/ gets both text files, no_extension/ gets c, sub is skipped.
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "a");
    fixture.create_file("b.TXT", "b");
    fixture.create_file("c", "c");
    fixture.create_subdir("sub");

    let report = ExtensionOrganizer::organize(fixture.path(), None).expect("Organize failed");

    assert_eq!(report.organized, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errored, 0);
    fixture.assert_file_exists("txt/a.txt");
    fixture.assert_file_exists("txt/b.TXT");
    fixture.assert_file_exists(&format!("{}/c", NO_EXTENSION));
    fixture.assert_dir_exists("sub");
}

#[test]
fn test_extension_organize_case_insensitive_grouping() {
    let fixture = TestFixture::new();
    fixture.create_file("a.JPG", "a");
    fixture.create_file("b.jpg", "b");

    let report = ExtensionOrganizer::organize(fixture.path(), None).expect("Organize failed");

    assert_eq!(report.organized, 2);
    fixture.assert_file_exists("jpg/a.JPG");
    fixture.assert_file_exists("jpg/b.jpg");
    fixture.assert_file_not_exists("JPG");
}

#[test]
fn test_extension_organize_readme_goes_to_no_extension() {
    let fixture = TestFixture::new();
    fixture.create_file("README", "readme");

    let report = ExtensionOrganizer::organize(fixture.path(), None).expect("Organize failed");

    assert_eq!(report.organized, 1);
    fixture.assert_file_exists(&format!("{}/README", NO_EXTENSION));
}

#[test]
fn test_extension_organize_into_separate_destination() {
    let fixture = TestFixture::new();
    fixture.create_subdir("source");
    fs::write(fixture.path().join("source").join("song.mp3"), "mp3")
        .expect("Failed to write file");
    let dest = fixture.path().join("by_type");

    let report = ExtensionOrganizer::organize(&fixture.path().join("source"), Some(&dest))
        .expect("Organize failed");

    assert_eq!(report.organized, 1);
    fixture.assert_file_exists("by_type/mp3/song.mp3");
    fixture.assert_file_not_exists("source/mp3");
}

#[test]
fn test_extension_organize_uncreatable_destination_aborts() {
    // A destination base occupied by a regular file cannot be created:
    // the whole run aborts before any entry is touched.
    let fixture = TestFixture::new();
    fixture.create_subdir("source");
    fixture.create_file("source/a.txt", "a");
    fixture.create_file("occupied", "not a directory");

    let dest = fixture.path().join("occupied");
    let result = ExtensionOrganizer::organize(&fixture.path().join("source"), Some(&dest));

    assert!(matches!(
        result,
        Err(OrganizeError::DirectoryCreationFailed { .. })
    ));
    // No entry was processed: the source file stayed put.
    fixture.assert_file_exists("source/a.txt");
    fixture.assert_file_not_exists("source/txt");
}

#[test]
fn test_extension_organize_collision_is_per_entry_error() {
    let fixture = TestFixture::new();
    fixture.create_subdir("txt");
    fixture.create_file("txt/a.txt", "occupant");
    fixture.create_file("a.txt", "newcomer");
    fixture.create_file("b.txt", "fine");

    let report = ExtensionOrganizer::organize(fixture.path(), None).expect("Organize failed");

    // The collision errors a.txt but b.txt is still organized.
    assert_eq!(report.errored, 1);
    assert_eq!(report.organized, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "a.txt");
    fixture.assert_file_exists("a.txt");
    fixture.assert_file_exists("txt/b.txt");

    let occupant = fs::read_to_string(fixture.path().join("txt").join("a.txt"))
        .expect("Failed to read occupant");
    assert_eq!(occupant, "occupant");
}

#[test]
fn test_extension_organize_missing_source() {
    let result = ExtensionOrganizer::organize(Path::new("/definitely/not/here"), None);
    assert!(result.is_err());
}

// ============================================================================
// Test Suite 3: Recursive Summary
// ============================================================================

#[test]
fn test_summary_counts_across_subdirectories() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "a");
    fixture.create_subdir("sub");
    fixture.create_file("sub/b.txt", "b");

    let tally = SummaryAnalyzer::summarize(fixture.path());

    assert_eq!(tally.get(".txt"), Some(&2));
    assert_eq!(tally.len(), 1);
}

#[test]
fn test_summary_mixed_tree() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "a");
    fixture.create_file("photo.JPG", "p");
    fixture.create_file("Makefile", "m");
    fixture.create_subdir("deep/nested");
    fixture.create_file("deep/nested/b.jpg", "b");

    let tally = SummaryAnalyzer::summarize(fixture.path());

    assert_eq!(tally.get(".txt"), Some(&1));
    assert_eq!(tally.get(".jpg"), Some(&2));
    assert_eq!(tally.get(""), Some(&1));
}

#[test]
fn test_summary_absent_directory_returns_empty_tally() {
    let tally = SummaryAnalyzer::summarize(Path::new("/definitely/not/here"));
    assert!(tally.is_empty());
}

#[test]
fn test_summary_leaves_tree_untouched() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "a");
    fixture.create_subdir("sub");
    fixture.create_file("sub/b.txt", "b");

    SummaryAnalyzer::summarize(fixture.path());

    fixture.assert_file_exists("a.txt");
    fixture.assert_file_exists("sub/b.txt");
}

// ============================================================================
// Test Suite 4: Configuration and Filtering
// ============================================================================

#[test]
fn test_filtered_files_count_as_skipped() {
    let fixture = TestFixture::new();
    fixture.create_file("keep.txt", "keep");
    fixture.create_file("drop.tmp", "drop");

    let config_path = fixture.path().join("rules.toml");
    fs::write(
        &config_path,
        r#"
[filters.exclude]
extensions = ["tmp"]
"#,
    )
    .expect("Failed to write config");

    let filters = FilterConfig::load(Some(&config_path))
        .expect("Failed to load config")
        .compile()
        .expect("Failed to compile filters");

    let report = ExtensionOrganizer::organize_with_filters(fixture.path(), None, &filters)
        .expect("Organize failed");

    // keep.txt + rules.toml organized; drop.tmp skipped by the filter.
    assert_eq!(report.organized, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(
        report.organized + report.skipped + report.errored,
        report.total
    );
    fixture.assert_file_exists("txt/keep.txt");
    fixture.assert_file_exists("drop.tmp");
}

#[test]
fn test_hidden_files_organized_by_default() {
    let fixture = TestFixture::new();
    fixture.create_file(".env", "secret");

    let report = ExtensionOrganizer::organize(fixture.path(), None).expect("Organize failed");

    assert_eq!(report.organized, 1);
    assert_eq!(report.skipped, 0);
    fixture.assert_file_exists(&format!("{}/.env", NO_EXTENSION));
}

// ============================================================================
// Test Suite 5: Edge Cases
// ============================================================================

#[test]
fn test_directory_with_dot_in_name_is_still_skipped() {
    let fixture = TestFixture::new();
    fixture.create_subdir("backup.old");
    fixture.create_file("a.txt", "a");

    let report = ExtensionOrganizer::organize(fixture.path(), None).expect("Organize failed");

    assert_eq!(report.skipped, 1);
    assert_eq!(report.organized, 1);
    fixture.assert_dir_exists("backup.old");
}

#[test]
fn test_date_organize_current_files_use_local_calendar() {
    let fixture = TestFixture::new();
    fixture.create_file("fresh.txt", "fresh");

    let report = DateOrganizer::organize(fixture.path()).expect("Organize failed");
    assert_eq!(report.organized, 1);

    let now = Local::now();
    let expected = fixture
        .path()
        .join(format!("{:04}", now.year()))
        .join(now.format("%m - %B").to_string())
        .join("fresh.txt");
    assert!(expected.exists(), "Expected {}", expected.display());
}

#[test]
fn test_organizers_do_not_recurse() {
    let fixture = TestFixture::new();
    fixture.create_subdir("sub");
    fixture.create_file("sub/inner.txt", "inner");

    let report = ExtensionOrganizer::organize(fixture.path(), None).expect("Organize failed");

    assert_eq!(report.organized, 0);
    assert_eq!(report.skipped, 1);
    fixture.assert_file_exists("sub/inner.txt");
    fixture.assert_file_not_exists("txt/inner.txt");
}
