//! Application-directory resolution and derived paths
//!
//! Everything the overlay reads or writes lives next to the executable
//! (portable-install layout). The executable directory is resolved once per
//! process and memoized; every other path is a pure join off that root, with
//! no I/O or existence checks. A consumer discovers a missing file by trying
//! to open it.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::constants::files;

static APP_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Directory containing the running executable, resolved once per process.
///
/// The first call wins; moving the executable afterwards does not change the
/// result for the rest of the process lifetime. Falls back to `"."` if the
/// platform cannot report the executable path.
pub fn app_dir() -> &'static Path {
    APP_DIR.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

/// Location of the settings document
pub fn settings_file() -> PathBuf {
    app_dir().join(files::SETTINGS_FILE)
}

/// Companion settings-editor executable, shipped next to the main binary
pub fn settings_app() -> PathBuf {
    app_dir().join(files::SETTINGS_APP)
}

/// Directory of per-language resource files
pub fn languages_dir() -> PathBuf {
    app_dir().join(files::LANGUAGES_DIR)
}

/// Manifest path for a theme by name: `Themes/<name>/theme.toml`
pub fn theme_manifest(theme_name: &str) -> PathBuf {
    app_dir()
        .join(files::THEMES_DIR)
        .join(theme_name)
        .join(files::THEME_MANIFEST)
}
