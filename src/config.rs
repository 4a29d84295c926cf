// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration.
//!
//! One knob: where the cast export lives. Resolution order is an explicit
//! path, then `DATA_FILE_PATH`, then the default file name in the working
//! directory.

use std::path::{Path, PathBuf};

/// Environment variable naming the export file.
pub const DATA_FILE_ENV: &str = "DATA_FILE_PATH";

/// Export file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "romero_compact_non_replies.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Read `DATA_FILE_PATH`, falling back to the default file. An empty
    /// value counts as unset.
    pub fn from_env() -> Self {
        Self::resolve(None, std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
    }

    /// Explicit path overrides whatever the environment says.
    pub fn with_data_path(path: impl AsRef<Path>) -> Self {
        Self {
            data_path: path.as_ref().to_path_buf(),
        }
    }

    /// Pick the first non-empty candidate: explicit, then environment.
    pub fn resolve(explicit: Option<PathBuf>, from_env: Option<PathBuf>) -> Self {
        explicit
            .into_iter()
            .chain(from_env)
            .find(|path| !path.as_os_str().is_empty())
            .map_or_else(Self::default, |data_path| Self { data_path })
    }
}
