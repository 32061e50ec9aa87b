//! Integration tests for the file-backed settings lifecycle.
//!
//! These tests exercise `SettingsStore` end-to-end through the public API:
//! bootstrap, load, case-insensitive writes, persistence across reopen, and
//! the "last file" convenience accessors.  Each test uses its own scratch
//! directory and never changes the process working directory.

use std::path::{Path, PathBuf};

use settings_core::domain::schema::{
    OPTION_LAST_FILE, OPTION_REMEMBER_FILE, OPTION_SHOW_TOOLTIPS, SECTION_GENERAL,
    SECTION_INTERFACE,
};
use settings_core::format::ini;
use settings_store::application::recent_file;
use settings_store::{ensure_directory, SettingsAccess, SettingsStore};
use tempfile::TempDir;

fn scratch_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.ini");
    (dir, path)
}

// ── Bootstrap ─────────────────────────────────────────────────────────────────

#[test]
fn test_bootstrap_creates_file_with_exactly_the_default_schema() {
    // Arrange
    let (_dir, path) = scratch_file();
    assert!(!path.exists());

    // Act
    let _settings = SettingsStore::open(&path);

    // Assert
    let on_disk = ini::parse(&std::fs::read_to_string(&path).expect("file created")).expect("valid");
    let layout: Vec<(String, Vec<String>)> = on_disk
        .sections()
        .map(|s| {
            (
                s.name().to_string(),
                s.options().map(|(o, _)| o.to_string()).collect(),
            )
        })
        .collect();
    assert_eq!(
        layout,
        vec![
            (
                SECTION_GENERAL.to_string(),
                vec![OPTION_LAST_FILE.to_string(), OPTION_REMEMBER_FILE.to_string()]
            ),
            (
                SECTION_INTERFACE.to_string(),
                vec![OPTION_SHOW_TOOLTIPS.to_string()]
            ),
        ]
    );
}

#[test]
fn test_malformed_file_is_replaced_with_defaults_without_panicking() {
    // Arrange
    let (_dir, path) = scratch_file();
    std::fs::write(&path, "[Algemeen\nLaatsteBestand = x\n").expect("write");

    // Act
    let settings = SettingsStore::open(&path);

    // Assert
    assert_eq!(settings.get(SECTION_GENERAL, OPTION_LAST_FILE).as_deref(), Some(""));
    let rewritten = std::fs::read_to_string(&path).expect("read");
    assert!(ini::parse(&rewritten).is_ok(), "rewritten file must be valid");
    assert!(rewritten.starts_with("[Algemeen]\n"));
}

// ── Case-insensitive access ───────────────────────────────────────────────────

#[test]
fn test_set_then_get_returns_string_form_for_various_types() {
    let (_dir, path) = scratch_file();
    let mut settings = SettingsStore::open(&path);

    settings.set("Window", "Width", 1280u32);
    settings.set("Window", "Scale", 1.5f64);
    settings.set("Window", "Title", "Excelladin");
    settings.set("Window", "Visible", true);

    assert_eq!(settings.get("Window", "Width").as_deref(), Some("1280"));
    assert_eq!(settings.get("Window", "Scale").as_deref(), Some("1.5"));
    assert_eq!(settings.get("Window", "Title").as_deref(), Some("Excelladin"));
    assert_eq!(settings.get("Window", "Visible").as_deref(), Some("True"));
}

#[test]
fn test_case_insensitive_write_does_not_add_a_section() {
    // Arrange
    let (_dir, path) = scratch_file();
    let mut settings = SettingsStore::open(&path);
    settings.set("General", "Flag", "x");
    let sections_before = settings.store().len();

    // Act
    settings.set("GENERAL", "flag", "y");

    // Assert
    assert_eq!(settings.store().len(), sections_before);
    assert_eq!(settings.get("general", "FLAG").as_deref(), Some("y"));
}

#[test]
fn test_first_write_casing_survives_reopen() {
    // Arrange
    let (_dir, path) = scratch_file();
    let mut settings = SettingsStore::open(&path);

    // Act
    settings.set("general", "a", "1");
    settings.set("GENERAL", "b", "2");
    drop(settings);
    let reopened = SettingsStore::open(&path);

    // Assert
    let section = reopened.store().section("General").expect("section exists");
    assert_eq!(section.name(), "general");
    assert_eq!(
        section.options().collect::<Vec<_>>(),
        vec![("a", "1"), ("b", "2")]
    );
}

#[test]
fn test_get_missing_returns_none_or_supplied_default() {
    let (_dir, path) = scratch_file();
    let settings = SettingsStore::open(&path);

    assert_eq!(settings.get("Missing", "Option"), None);
    assert_eq!(settings.get(SECTION_GENERAL, "Missing"), None);
    assert_eq!(settings.get_or("Missing", "Option", "dflt"), "dflt");
}

// ── Last file ─────────────────────────────────────────────────────────────────

#[test]
fn test_last_file_empty_while_remember_is_false() {
    // Arrange
    let (dir, path) = scratch_file();
    let mut settings = SettingsStore::open(&path);
    settings.set_last_file(dir.path().join("sheet.xlsx"));

    // Act / Assert
    assert!(!settings.get(SECTION_GENERAL, OPTION_LAST_FILE).unwrap_or_default().is_empty());
    assert_eq!(settings.get_last_file(), "");
}

#[test]
fn test_last_file_empty_when_remember_option_absent() {
    let (_dir, path) = scratch_file();
    std::fs::write(&path, "[Algemeen]\nLaatsteBestand = data/sheet.xlsx\n").expect("write");

    let settings = SettingsStore::open(&path);

    assert_eq!(settings.get_last_file(), "");
}

#[test]
fn test_last_file_round_trips_through_relative_storage() {
    // Arrange
    let (dir, path) = scratch_file();
    let original = dir.path().join("reports").join("q3.xlsx");
    let mut settings = SettingsStore::open(&path);

    // Act
    settings.set_remember_file(true);
    settings.set_last_file(&original);

    // Assert
    let stored = settings.get_last_file();
    assert!(Path::new(&stored).is_relative(), "stored form must be relative: {stored}");
    assert_eq!(
        settings.get_absolute_path(SECTION_GENERAL, OPTION_LAST_FILE),
        Some(original)
    );
}

#[test]
fn test_remember_flag_is_written_as_literal() {
    let (_dir, path) = scratch_file();
    let mut settings = SettingsStore::open(&path);

    settings.set_remember_file(true);

    let text = std::fs::read_to_string(&path).expect("read");
    assert!(text.contains("OnthoudBestand = True\n"));
}

#[test]
fn test_rejected_option_name_leaves_existing_settings_intact_after_reopen() {
    // Arrange
    let (dir, path) = scratch_file();
    let mut settings = SettingsStore::open(&path);
    settings.set_remember_file(true);
    settings.set_last_file(dir.path().join("a.xlsx"));

    // Act
    settings.set("Window", "[Pos", "1");
    drop(settings);
    let reopened = SettingsStore::open(&path);

    // Assert
    assert!(reopened.remember_file());
    assert_eq!(reopened.last_file_absolute(), Some(dir.path().join("a.xlsx")));
    assert_eq!(reopened.get("Window", "[Pos"), None);
}

// ── Dependency injection ──────────────────────────────────────────────────────

/// A consumer that only knows about the `SettingsAccess` port.
fn remember_and_report(settings: &mut dyn SettingsAccess) -> bool {
    recent_file::set_remember_file(settings, true);
    recent_file::remember_file(&*settings)
}

#[test]
fn test_store_can_be_passed_as_trait_object() {
    let (_dir, path) = scratch_file();
    let mut settings = SettingsStore::open(&path);

    assert!(remember_and_report(&mut settings));
    assert!(settings.remember_file());
}

// ── ensure_directory ──────────────────────────────────────────────────────────

#[test]
fn test_ensure_directory_nested_then_existing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("x").join("y").join("z");

    assert!(ensure_directory(&nested), "nested path must be created");
    assert!(nested.is_dir());
    assert!(ensure_directory(&nested), "existing directory must succeed");
}
