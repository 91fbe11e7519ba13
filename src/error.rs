// SPDX-License-Identifier: PMPL-1.0-or-later

//! Startup failures of the reference table
//!
//! A query that finds nothing is not an error; only a dataset that cannot be
//! located or read ends up here. Every message tells the operator where the
//! file can be downloaded.

use std::path::PathBuf;

/// Where operators can fetch the ISO 639-3 code table.
pub const TABLE_DOWNLOAD_URL: &str =
    "https://iso639-3.sil.org/sites/iso639-3/files/downloads/iso-639-3.tab";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error(
        "reference table {} not found (searched: {}); download it from {}",
        .file,
        display_paths(.searched),
        TABLE_DOWNLOAD_URL
    )]
    NotFound { file: String, searched: Vec<PathBuf> },

    #[error(
        "error reading the reference table {}: {}; if the file is missing you can download it from {}",
        .path.display(),
        .reason,
        TABLE_DOWNLOAD_URL
    )]
    Unreadable { path: PathBuf, reason: String },

    #[error(
        "reference table {} is not valid UTF-8; download a fresh copy from {}",
        .path.display(),
        TABLE_DOWNLOAD_URL
    )]
    NotUtf8 { path: PathBuf },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nowhere".to_string();
    }
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
