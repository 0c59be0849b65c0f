//! On-disk round-trip tests: load → mutate → save → reload must preserve
//! both what this process wrote and everything it never touched.

use std::fs;

use osd_settings::{SettingsError, SettingsStore};
use tempfile::TempDir;

fn write_settings(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("Settings.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn save_then_reload_preserves_written_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "[settings]\nlanguage = \"German\"\n");

    let mut store = SettingsStore::load_from(path.clone()).unwrap();
    store.set_notify_icon_enabled(true);
    store.set_sound_effects_enabled(false);
    store.set_text("audio_device_id", "usb-dac");
    store.save().unwrap();

    let reloaded = SettingsStore::load_from(path).unwrap();
    assert!(reloaded.notify_icon_enabled());
    assert!(!reloaded.sound_effects_enabled());
    assert_eq!(reloaded.audio_device_id(), "usb-dac");
    assert_eq!(reloaded.language_name(), "German");
}

#[test]
fn save_preserves_untouched_content_verbatim() {
    let dir = TempDir::new().unwrap();
    let original = "\
# hand-edited by the user
[settings]
language = \"German\" # keep me
some_future_field = [1, 2, 3]

[settings.unrelated]
nested = true
";
    let path = write_settings(&dir, original);

    let mut store = SettingsStore::load_from(path.clone()).unwrap();
    store.set_sound_effects_enabled(true);
    store.save().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("# hand-edited by the user"));
    assert!(written.contains("language = \"German\" # keep me"));
    assert!(written.contains("some_future_field = [1, 2, 3]"));
    assert!(written.contains("[settings.unrelated]"));
    assert!(written.contains("sound_effects = true"));
}

#[test]
fn reload_picks_up_external_edits() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "[settings]\nosd_x = 1\n");

    let mut store = SettingsStore::load_from(path.clone()).unwrap();
    assert_eq!(store.osd_x(), 1);

    fs::write(&path, "[settings]\nosd_x = 2\ntheme = \"Midnight\"\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.osd_x(), 2);
    assert_eq!(store.current_theme().name(), "Midnight");
}

#[test]
fn missing_file_is_a_fatal_load_error() {
    let dir = TempDir::new().unwrap();
    let result = SettingsStore::load_from(dir.path().join("Settings.toml"));
    assert!(matches!(result, Err(SettingsError::Read { .. })));
}

#[test]
fn document_without_root_table_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "language = \"German\"\n");
    let result = SettingsStore::load_from(path);
    assert!(matches!(result, Err(SettingsError::MissingRoot { .. })));
}

#[test]
fn save_error_distinguishes_unopenable_destination() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "[settings]\n");
    let store = SettingsStore::load_from(path.clone()).unwrap();

    // Replace the file with a directory so the destination cannot be opened
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();
    assert!(matches!(store.save(), Err(SettingsError::SaveOpen { .. })));
}

#[test]
fn hotkey_table_survives_persistence() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(
        &dir,
        "[settings]\n\
         [[settings.hotkey]]\naction = 5\ncombination = 10\n\
         [[settings.hotkey]]\ncombination = 20\n\
         [[settings.hotkey]]\naction = 7\ncombination = 30\n",
    );

    let mut store = SettingsStore::load_from(path.clone()).unwrap();
    let before = store.hotkeys();
    assert_eq!(before.len(), 2);

    store.set_notify_icon_enabled(true);
    store.save().unwrap();

    let reloaded = SettingsStore::load_from(path).unwrap();
    assert_eq!(reloaded.hotkeys(), before);
}
