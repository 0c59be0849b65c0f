//! Active-theme handle
//!
//! The store resolves only the theme's identity: its name and where its
//! manifest lives. Opening the manifest and loading assets belongs to the
//! theme subsystem. The handle is built once per store (re)load, so reading
//! the theme-name field repeatedly never re-resolves paths.

use std::path::{Path, PathBuf};

use crate::paths;

/// Resolved reference to the currently selected visual theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeHandle {
    name: String,
    manifest: PathBuf,
}

impl ThemeHandle {
    /// Resolve a theme by name. Pure path composition; whether the manifest
    /// exists is discovered by whoever opens it.
    pub fn resolve(name: &str) -> Self {
        Self {
            name: name.to_string(),
            manifest: paths::theme_manifest(name),
        }
    }

    /// Theme name as configured (or defaulted)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the theme's manifest file
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }
}
