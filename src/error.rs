//! Settings store error types
//!
//! Load failures are fatal: the caller is expected to abort startup rather
//! than run against a defaulted document. Save failures keep "could not open
//! the destination" distinguishable from "writing the serialized document
//! failed" so the caller can pick a retry policy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors crossing the settings-store boundary
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("failed to read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Settings file is not valid TOML
    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    /// Settings file parsed but has no root `[settings]` table
    #[error("settings file {path} has no [settings] table")]
    MissingRoot { path: PathBuf },

    /// Destination could not be opened for writing
    #[error("could not open {path} for writing")]
    SaveOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialized document could not be written out
    #[error("failed to write settings to {path}")]
    SaveWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
