//! Hotkey table decoding
//!
//! The `[[settings.hotkey]]` array maps key-combination identifiers to
//! action identifiers. The document is semi-trusted: entries may be missing
//! a key or carry the wrong type, and one bad entry must never take the rest
//! down. Decoding is therefore a per-entry success/skip step folded over the
//! array in document order, keeping only successes. A later entry with the
//! same combination overwrites the earlier one.
//!
//! Bindings are decoded fresh from the live in-memory document on every
//! call; nothing is cached.

use std::collections::HashMap;

use toml_edit::{Item, Table};
use tracing::{debug, warn};

use crate::constants::doc;
use crate::document::SettingsDocument;

/// One decoded hotkey entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    /// Integer encoding of the triggering key chord
    pub combination: i32,
    /// Identifier of the action the chord invokes
    pub action: i32,
}

/// Decode a single entry table. Both keys must be present and hold
/// non-negative integers; anything else skips the entry with a warning.
fn decode_entry(entry: &Table) -> Option<HotkeyBinding> {
    let Some(action) = read_id(entry, doc::HOTKEY_ACTION) else {
        warn!("hotkey entry has no usable action; skipping");
        return None;
    };
    let Some(combination) = read_id(entry, doc::HOTKEY_COMBINATION) else {
        warn!(action = action, "hotkey entry has no usable combination; skipping");
        return None;
    };
    Some(HotkeyBinding { combination, action })
}

fn read_id(entry: &Table, key: &str) -> Option<i32> {
    entry
        .get(key)
        .and_then(Item::as_integer)
        .and_then(|wide| i32::try_from(wide).ok())
        .filter(|id| *id >= 0)
}

/// Decode the hotkey subtree into a combination → action mapping.
///
/// Never fails: malformed entries are skipped, duplicates resolve
/// last-wins, and a document with no valid entries yields an empty map.
pub fn decode_bindings(document: &SettingsDocument) -> HashMap<i32, i32> {
    let mut mappings = HashMap::new();
    for binding in document.hotkey_entries().filter_map(decode_entry) {
        debug!(
            combination = binding.combination,
            action = binding.action,
            "adding hotkey mapping"
        );
        mappings.insert(binding.combination, binding.action);
    }
    mappings
}
