//! Application-wide constants
//!
//! Built-in defaults and on-disk layout names used throughout the settings
//! store, providing a single source of truth for constant values.

/// Built-in defaults applied when a field is absent from the document
pub mod defaults {
    use crate::fields::OsdPosition;

    /// Language used when the document does not name one
    pub const LANGUAGE: &str = "English";

    /// Theme used when the document does not name one
    pub const THEME: &str = "Default";

    /// Distance in pixels between the OSD and its anchoring screen edge
    pub const OSD_EDGE_OFFSET: i32 = 140;

    /// Screen edge the OSD anchors to
    pub const OSD_POSITION: OsdPosition = OsdPosition::Top;
}

/// On-disk layout relative to the application directory
pub mod files {
    /// Settings document file name
    pub const SETTINGS_FILE: &str = "Settings.toml";

    /// Companion settings-editor executable name
    pub const SETTINGS_APP: &str = "osd-settings-app";

    /// Directory of per-language resource files
    pub const LANGUAGES_DIR: &str = "Languages";

    /// Directory containing one subdirectory per installed theme
    pub const THEMES_DIR: &str = "Themes";

    /// Manifest file name inside each theme directory
    pub const THEME_MANIFEST: &str = "theme.toml";
}

/// Document structure names
pub mod doc {
    /// Root table all settings live under
    pub const ROOT_TABLE: &str = "settings";

    /// Array of tables holding the hotkey bindings
    pub const HOTKEY_ARRAY: &str = "hotkey";

    /// Hotkey entry key naming the action to invoke
    pub const HOTKEY_ACTION: &str = "action";

    /// Hotkey entry key naming the triggering key combination
    pub const HOTKEY_COMBINATION: &str = "combination";
}
