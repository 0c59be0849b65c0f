//! Settings document access
//!
//! `SettingsDocument` wraps a `toml_edit` document and exposes the scalar
//! and subtree primitives the store is built on. Editing through `toml_edit`
//! keeps comments, key order, and fields this process never touches intact
//! across a load → mutate → save cycle.
//!
//! All scalar access goes through the `[settings]` root table. Absence of a
//! key is reported as `None`; a present key of the wrong type coerces to the
//! type's empty value (`""` / `0` / `false`) rather than erroring. Setters
//! find-or-create, so they are total.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use toml_edit::{DocumentMut, Item, Table, TableLike, value};

use crate::constants::doc;
use crate::error::SettingsError;

/// The loaded settings document and the path it came from
#[derive(Debug)]
pub struct SettingsDocument {
    document: DocumentMut,
    path: PathBuf,
}

impl SettingsDocument {
    /// Load and parse the document at `path`.
    ///
    /// Unreadable or unparsable files and a missing `[settings]` root table
    /// are fatal; a well-formed document with an empty root is fine.
    pub fn load(path: PathBuf) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse already-read contents, recording `path` as the write-back target
    pub fn parse(contents: &str, path: PathBuf) -> Result<Self, SettingsError> {
        let document: DocumentMut =
            contents.parse().map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?;
        if document
            .get(doc::ROOT_TABLE)
            .and_then(Item::as_table_like)
            .is_none()
        {
            return Err(SettingsError::MissingRoot { path });
        }
        Ok(Self { document, path })
    }

    /// Serialize the in-memory document back to the path it was loaded from
    pub fn save(&self) -> Result<(), SettingsError> {
        let mut file = File::create(&self.path).map_err(|source| SettingsError::SaveOpen {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(self.document.to_string().as_bytes())
            .map_err(|source| SettingsError::SaveWrite {
                path: self.path.clone(),
                source,
            })
    }

    /// Path this document was loaded from and saves back to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn root(&self) -> Option<&dyn TableLike> {
        self.document.get(doc::ROOT_TABLE).and_then(Item::as_table_like)
    }

    /// Whether `key` exists under the root, regardless of its type
    pub fn has_field(&self, key: &str) -> bool {
        self.root().is_some_and(|root| root.get(key).is_some())
    }

    /// String content of `key`; `None` if absent, `""` if present non-string
    pub fn text(&self, key: &str) -> Option<&str> {
        self.root()
            .and_then(|root| root.get(key))
            .map(|item| item.as_str().unwrap_or(""))
    }

    /// Integer content of `key`; `None` if absent, `0` if present non-integer
    pub fn integer(&self, key: &str) -> Option<i32> {
        self.root()
            .and_then(|root| root.get(key))
            .map(|item| {
                item.as_integer()
                    .and_then(|wide| i32::try_from(wide).ok())
                    .unwrap_or(0)
            })
    }

    /// Boolean content of `key`; `None` if absent, `false` if present non-boolean
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.root()
            .and_then(|root| root.get(key))
            .map(|item| item.as_bool().unwrap_or(false))
    }

    fn set_item(&mut self, key: &str, item: Item) {
        // Root presence is a load invariant; the or_insert covers the
        // freshly-constructed-document path in tests.
        if let Some(root) = self
            .document
            .as_table_mut()
            .entry(doc::ROOT_TABLE)
            .or_insert(Item::Table(Table::new()))
            .as_table_like_mut()
        {
            root.insert(key, item);
        }
    }

    /// Write string content to `key`, creating the field if absent
    pub fn set_text(&mut self, key: &str, text: &str) {
        self.set_item(key, value(text));
    }

    /// Write integer content to `key`, creating the field if absent
    pub fn set_integer(&mut self, key: &str, val: i32) {
        self.set_item(key, value(i64::from(val)));
    }

    /// Write boolean content to `key`, creating the field if absent
    pub fn set_boolean(&mut self, key: &str, enabled: bool) {
        self.set_item(key, value(enabled));
    }

    /// Hotkey entry tables in document order; empty if the array is absent
    pub fn hotkey_entries(&self) -> impl Iterator<Item = &Table> {
        self.root()
            .and_then(|root| root.get(doc::HOTKEY_ARRAY))
            .and_then(Item::as_array_of_tables)
            .into_iter()
            .flat_map(|array| array.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(contents: &str) -> SettingsDocument {
        SettingsDocument::parse(contents, PathBuf::from("Settings.toml")).unwrap()
    }

    #[test]
    fn test_missing_root_table_is_fatal() {
        let result = SettingsDocument::parse("language = \"English\"\n", PathBuf::from("x"));
        assert!(matches!(result, Err(SettingsError::MissingRoot { .. })));
    }

    #[test]
    fn test_unparsable_document_is_fatal() {
        let result = SettingsDocument::parse("[settings\n", PathBuf::from("x"));
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_empty_root_is_valid() {
        let document = doc("[settings]\n");
        assert!(!document.has_field("language"));
        assert_eq!(document.text("language"), None);
    }

    #[test]
    fn test_scalar_reads() {
        let document = doc(
            "[settings]\nlanguage = \"German\"\nosd_x = 42\nnotify_icon = true\n",
        );
        assert_eq!(document.text("language"), Some("German"));
        assert_eq!(document.integer("osd_x"), Some(42));
        assert_eq!(document.boolean("notify_icon"), Some(true));
    }

    #[test]
    fn test_wrong_typed_values_coerce_to_empty() {
        let document = doc(
            "[settings]\nlanguage = 7\nosd_x = \"left a bit\"\nnotify_icon = \"yes\"\n",
        );
        assert_eq!(document.text("language"), Some(""));
        assert_eq!(document.integer("osd_x"), Some(0));
        assert_eq!(document.boolean("notify_icon"), Some(false));
    }

    #[test]
    fn test_setters_create_then_overwrite() {
        let mut document = doc("[settings]\n");
        document.set_text("language", "French");
        assert_eq!(document.text("language"), Some("French"));
        document.set_text("language", "Spanish");
        assert_eq!(document.text("language"), Some("Spanish"));

        document.set_integer("osd_y", -3);
        assert_eq!(document.integer("osd_y"), Some(-3));
        document.set_boolean("sound_effects", true);
        assert_eq!(document.boolean("sound_effects"), Some(true));
    }

    #[test]
    fn test_mutation_preserves_comments_and_unknown_keys() {
        let mut document = doc(
            "# user file\n[settings]\nfuture_knob = \"keep me\" # inline\nosd_x = 1\n",
        );
        document.set_integer("osd_x", 9);
        let rendered = document.document.to_string();
        assert!(rendered.contains("# user file"));
        assert!(rendered.contains("future_knob = \"keep me\" # inline"));
        assert!(rendered.contains("osd_x = 9"));
    }

    #[test]
    fn test_hotkey_entries_in_document_order() {
        let document = doc(
            "[settings]\n\
             [[settings.hotkey]]\ncombination = 10\naction = 5\n\
             [[settings.hotkey]]\ncombination = 20\naction = 6\n",
        );
        let combos: Vec<i64> = document
            .hotkey_entries()
            .filter_map(|entry| entry.get("combination").and_then(Item::as_integer))
            .collect();
        assert_eq!(combos, vec![10, 20]);
    }

    #[test]
    fn test_hotkey_entries_empty_when_array_absent() {
        let document = doc("[settings]\n");
        assert_eq!(document.hotkey_entries().count(), 0);
    }
}
