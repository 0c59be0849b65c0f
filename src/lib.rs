//! Persistent settings store for the on-screen display overlay
//!
//! The single source of truth for user-tunable behavior: audio device
//! selection, OSD position and offsets, the active theme, hotkey bindings,
//! and feature toggles, all backed by a human-editable `Settings.toml` next
//! to the executable.
//!
//! The document is semi-trusted: any field may be missing or malformed, and
//! every read still returns a usable value through the per-field default
//! policy in [`fields`]. Only an unparsable document and a missing
//! `[settings]` root table are fatal; startup is expected to abort on those.
//!
//! Typical startup:
//!
//! ```no_run
//! use osd_settings::SettingsStore;
//!
//! let mut settings = SettingsStore::load().expect("settings file is required");
//! let theme = settings.current_theme();
//! let bindings = settings.hotkeys();
//! settings.set_notify_icon_enabled(true);
//! settings.save()?;
//! # Ok::<(), osd_settings::SettingsError>(())
//! ```

pub mod constants;
pub mod document;
pub mod error;
pub mod fields;
pub mod hotkeys;
pub mod paths;
pub mod store;
pub mod theme;

pub use document::SettingsDocument;
pub use error::SettingsError;
pub use fields::OsdPosition;
pub use hotkeys::HotkeyBinding;
pub use store::SettingsStore;
pub use theme::ThemeHandle;
