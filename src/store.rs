//! The settings store
//!
//! `SettingsStore` is the single authoritative access point for every
//! user-tunable value: it owns the loaded document, resolves per-field
//! defaults through the registry, and holds the handle to the active theme.
//!
//! Construct exactly one store during single-threaded startup and hand it to
//! consumers by reference. There is no internal locking; a setter's effect
//! is visible to the next getter immediately, and nothing reaches disk until
//! `save()` is called.
//!
//! Load failures are fatal and propagate. Reads are total: an absent or
//! malformed field always resolves to its documented default.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::constants::defaults;
use crate::document::SettingsDocument;
use crate::error::SettingsError;
use crate::fields::{self, FieldDefault, OsdPosition};
use crate::hotkeys;
use crate::paths;
use crate::theme::ThemeHandle;

/// Authoritative store for the overlay's persisted settings
#[derive(Debug)]
pub struct SettingsStore {
    document: SettingsDocument,
    theme: ThemeHandle,
}

impl SettingsStore {
    /// Load the settings document from its standard location next to the
    /// executable. Fatal if the file is unreadable, unparsable, or lacks
    /// the `[settings]` root table.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(paths::settings_file())
    }

    /// Load the settings document from an explicit path
    pub fn load_from(path: PathBuf) -> Result<Self, SettingsError> {
        info!(path = %path.display(), "loading settings file");
        let document = SettingsDocument::load(path)?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: SettingsDocument) -> Self {
        let theme = ThemeHandle::resolve(&resolve_text(&document, fields::THEME));
        Self { document, theme }
    }

    /// Discard in-memory state and re-read the document from disk,
    /// re-resolving the active theme
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        *self = Self::load_from(self.document.path().to_path_buf())?;
        Ok(())
    }

    /// Persist the in-memory document back to the path it was loaded from.
    /// Fields this process never touched are written back unchanged.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.document.save()
    }

    // ---- generic typed accessors -------------------------------------

    /// String field; absent or empty resolves to the registry default
    /// (empty for fields without a domain default)
    pub fn text(&self, key: &str) -> String {
        resolve_text(&self.document, key)
    }

    /// Write a string field, creating it if absent
    pub fn set_text(&mut self, key: &str, text: &str) {
        self.document.set_text(key, text);
    }

    /// Integer field; absent resolves to the registry default, or zero
    pub fn integer(&self, key: &str) -> i32 {
        match self.document.integer(key) {
            Some(val) => val,
            None => match fields::spec(key).map(|field| field.default) {
                Some(FieldDefault::Integer(default)) => default,
                _ => 0,
            },
        }
    }

    /// Write an integer field, creating it if absent
    pub fn set_integer(&mut self, key: &str, val: i32) {
        self.document.set_integer(key, val);
    }

    /// Boolean field; absence resolves to false and is the one case
    /// considered worth a diagnostic
    pub fn boolean(&self, key: &str) -> bool {
        match self.document.boolean(key) {
            Some(enabled) => enabled,
            None => {
                if fields::spec(key).is_none_or(|field| field.warn_on_absence) {
                    warn!(key = %key, "settings key not found");
                }
                false
            }
        }
    }

    /// Write a boolean field, creating it if absent
    pub fn set_boolean(&mut self, key: &str, enabled: bool) {
        self.document.set_boolean(key, enabled);
    }

    // ---- named accessors ---------------------------------------------

    /// Identifier of the configured audio playback device; empty means
    /// "use the system default device"
    pub fn audio_device_id(&self) -> String {
        self.text(fields::AUDIO_DEVICE_ID)
    }

    /// Display-language name
    pub fn language_name(&self) -> String {
        self.text(fields::LANGUAGE)
    }

    /// Pixel offset between the OSD and the screen edge it anchors to
    pub fn osd_edge_offset(&self) -> i32 {
        self.integer(fields::OSD_EDGE_OFFSET)
    }

    /// Screen edge the OSD anchors to. Absent, empty, and unrecognized
    /// values all resolve silently to the built-in default.
    pub fn osd_position(&self) -> OsdPosition {
        let name = self.document.text(fields::OSD_POSITION).unwrap_or("");
        OsdPosition::from_name(name).unwrap_or(defaults::OSD_POSITION)
    }

    /// Horizontal coordinate used when the position is `Custom`
    pub fn osd_x(&self) -> i32 {
        self.integer(fields::OSD_X)
    }

    /// Vertical coordinate used when the position is `Custom`
    pub fn osd_y(&self) -> i32 {
        self.integer(fields::OSD_Y)
    }

    /// Name of the active theme
    pub fn theme_name(&self) -> String {
        self.text(fields::THEME)
    }

    /// Handle to the active theme, resolved once per (re)load
    pub fn current_theme(&self) -> &ThemeHandle {
        &self.theme
    }

    /// Decode the hotkey table from the live document. Never cached, never
    /// fails; malformed entries are skipped.
    pub fn hotkeys(&self) -> HashMap<i32, i32> {
        hotkeys::decode_bindings(&self.document)
    }

    /// Whether the notification-area icon is shown
    pub fn notify_icon_enabled(&self) -> bool {
        self.boolean(fields::NOTIFY_ICON)
    }

    /// Enable or disable the notification-area icon
    pub fn set_notify_icon_enabled(&mut self, enabled: bool) {
        self.set_boolean(fields::NOTIFY_ICON, enabled);
    }

    /// Whether UI sound effects play
    pub fn sound_effects_enabled(&self) -> bool {
        self.boolean(fields::SOUND_EFFECTS)
    }

    /// Enable or disable UI sound effects
    pub fn set_sound_effects_enabled(&mut self, enabled: bool) {
        self.set_boolean(fields::SOUND_EFFECTS, enabled);
    }
}

fn resolve_text(document: &SettingsDocument, key: &str) -> String {
    let text = document.text(key).unwrap_or("");
    if text.is_empty()
        && let Some(FieldDefault::Text(default)) = fields::spec(key).map(|field| field.default)
    {
        return default.to_string();
    }
    text.to_string()
}
