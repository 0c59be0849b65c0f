//! Declarative settings-field registry
//!
//! Every scalar field under the document root is declared here once: its
//! key, its type, the value it resolves to when absent, and whether an
//! absent read is worth a diagnostic. Accessors consult this table instead
//! of hard-coding per-field policy, so the default behavior can be audited
//! and tested in one place.
//!
//! Two string fields carry a domain default (language, theme) while the
//! audio device deliberately resolves to the empty string; the caller
//! substitutes its own notion of "default device". Absent booleans are the
//! one case that warns.

use crate::constants::defaults;

/// Screen edge (or free position) the OSD anchors to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsdPosition {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    /// Placed at the explicit `osd_x`/`osd_y` coordinates
    Custom,
}

impl OsdPosition {
    /// Case-insensitive lookup over the fixed vocabulary.
    /// Unrecognized text is `None`; the store maps it to the default.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "center" => Some(Self::Center),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Value a field resolves to when absent from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    Boolean(bool),
    Integer(i32),
    Position(OsdPosition),
}

/// One row of the registry
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key of the field under the root table
    pub key: &'static str,
    /// Resolution when the field is absent
    pub default: FieldDefault,
    /// Whether an absent read emits a `warn!` diagnostic
    pub warn_on_absence: bool,
}

/// Identifier of the active audio playback device
pub const AUDIO_DEVICE_ID: &str = "audio_device_id";
/// Display-language name
pub const LANGUAGE: &str = "language";
/// Whether the notification-area icon is shown
pub const NOTIFY_ICON: &str = "notify_icon";
/// Pixel offset between the OSD and its anchoring edge
pub const OSD_EDGE_OFFSET: &str = "osd_edge_offset";
/// Named screen edge the OSD anchors to
pub const OSD_POSITION: &str = "osd_position";
/// Horizontal coordinate for the custom position
pub const OSD_X: &str = "osd_x";
/// Vertical coordinate for the custom position
pub const OSD_Y: &str = "osd_y";
/// Whether UI sound effects play
pub const SOUND_EFFECTS: &str = "sound_effects";
/// Name of the active visual theme
pub const THEME: &str = "theme";

/// The full field registry, one row per scalar field under the root
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: AUDIO_DEVICE_ID,
        default: FieldDefault::Text(""),
        warn_on_absence: false,
    },
    FieldSpec {
        key: LANGUAGE,
        default: FieldDefault::Text(defaults::LANGUAGE),
        warn_on_absence: false,
    },
    FieldSpec {
        key: NOTIFY_ICON,
        default: FieldDefault::Boolean(false),
        warn_on_absence: true,
    },
    FieldSpec {
        key: OSD_EDGE_OFFSET,
        default: FieldDefault::Integer(defaults::OSD_EDGE_OFFSET),
        warn_on_absence: false,
    },
    FieldSpec {
        key: OSD_POSITION,
        default: FieldDefault::Position(defaults::OSD_POSITION),
        warn_on_absence: false,
    },
    FieldSpec {
        key: OSD_X,
        default: FieldDefault::Integer(0),
        warn_on_absence: false,
    },
    FieldSpec {
        key: OSD_Y,
        default: FieldDefault::Integer(0),
        warn_on_absence: false,
    },
    FieldSpec {
        key: SOUND_EFFECTS,
        default: FieldDefault::Boolean(false),
        warn_on_absence: true,
    },
    FieldSpec {
        key: THEME,
        default: FieldDefault::Text(defaults::THEME),
        warn_on_absence: false,
    },
];

/// Registry row for a key, if the key is a declared field
pub fn spec(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|field| field.key == key)
}
