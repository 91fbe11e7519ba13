// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locating the ISO 639-3 reference table
//!
//! The table ships inside the binary. `$ISO_LANG_FINDER_TABLE` names a file
//! that replaces it outright. Without the variable, candidates are tried in
//! order and the first one that exists wins:
//!
//! 1. `<exe dir>/iso-639-3.tab`
//! 2. `<exe dir>/data/iso-639-3.tab`
//! 3. the embedded copy
//!
//! The variable and [`TableConfig::with_path`] pin a single file with no
//! fallback, so a missing file there is a [`TableError::NotFound`].

use crate::error::TableError;
use std::env;
use std::path::{Path, PathBuf};

/// File name of the reference table.
pub const TABLE_FILE: &str = "iso-639-3.tab";

/// Environment variable overriding the table location.
pub const TABLE_ENV: &str = "ISO_LANG_FINDER_TABLE";

/// Where a table comes from once located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource<'a> {
    File(&'a Path),
    Embedded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    candidates: Vec<PathBuf>,
    embedded_fallback: bool,
}

impl TableConfig {
    pub fn from_env() -> Self {
        if let Ok(value) = env::var(TABLE_ENV) {
            if !value.trim().is_empty() {
                return Self::with_path(value.trim());
            }
        }

        let mut candidates = Vec::new();
        if let Some(dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(dir.join(TABLE_FILE));
            candidates.push(dir.join("data").join(TABLE_FILE));
        }

        Self::with_fallback(candidates)
    }

    /// Try `candidates`, then the embedded copy.
    pub fn with_fallback(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            embedded_fallback: true,
        }
    }

    /// Pin the table to one file; nothing else is searched.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
            embedded_fallback: false,
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn has_embedded_fallback(&self) -> bool {
        self.embedded_fallback
    }

    /// First candidate that exists on disk, else the embedded copy when
    /// allowed.
    pub fn locate(&self) -> Result<TableSource<'_>, TableError> {
        if let Some(path) = self.candidates.iter().find(|path| path.is_file()) {
            return Ok(TableSource::File(path));
        }
        if self.embedded_fallback {
            return Ok(TableSource::Embedded);
        }
        Err(TableError::NotFound {
            file: TABLE_FILE.to_string(),
            searched: self.candidates.clone(),
        })
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
