// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-3 code table loader
//!
//! Reads the SIL tab-separated code table:
//!
//! ```text
//! Id  Part2B  Part2T  Part1  Scope  Language_Type  Ref_Name  Comment
//! ```
//!
//! Only living languages that carry all of Part1, Part2B and Part2T are
//! kept. Other rows (the header included) are dropped without complaint, and
//! repeated lines collapse to the first occurrence.

use crate::config::{TableConfig, TableSource};
use crate::error::TableError;
use crate::types::{LanguageRecord, LanguageType};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Copy of the code table compiled into the binary.
pub const EMBEDDED_TABLE: &str = include_str!("../../data/iso-639-3.tab");

const ID: usize = 0;
const PART2B: usize = 1;
const PART2T: usize = 2;
const PART1: usize = 3;
const SCOPE: usize = 4;
const TYPE: usize = 5;
const NAME: usize = 6;
const REQUIRED_FIELDS: usize = 7;

/// Row counts gathered while building a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Non-empty lines seen, header included
    pub total_lines: usize,
    pub kept: usize,
    /// Lines failing the inclusion policy
    pub dropped: usize,
    /// Qualifying lines identical to an earlier one
    pub duplicates: usize,
}

/// Read-only set of language records, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    records: Vec<LanguageRecord>,
    stats: LoadStats,
    source: Option<PathBuf>,
}

impl ReferenceTable {
    /// Locate the table through `config` and load it.
    pub fn load(config: &TableConfig) -> Result<Self, TableError> {
        match config.locate()? {
            TableSource::File(path) => Self::load_file(path),
            TableSource::Embedded => Ok(Self::embedded()),
        }
    }

    /// The table compiled into the binary.
    pub fn embedded() -> Self {
        let table = Self::parse(EMBEDDED_TABLE);
        tracing::info!(
            "loaded embedded ISO 639-3 table: {} languages kept ({} rows dropped, {} duplicates)",
            table.stats.kept,
            table.stats.dropped,
            table.stats.duplicates
        );
        table
    }

    pub fn load_file(path: &Path) -> Result<Self, TableError> {
        let bytes = fs::read(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => TableError::NotFound {
                file: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                searched: vec![path.to_path_buf()],
            },
            _ => TableError::Unreadable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
        })?;

        let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
        if had_errors {
            return Err(TableError::NotUtf8 {
                path: path.to_path_buf(),
            });
        }

        let mut table = Self::parse(&text);
        table.source = Some(path.to_path_buf());
        tracing::info!(
            "loaded ISO 639-3 table from {}: {} languages kept ({} rows dropped, {} duplicates)",
            path.display(),
            table.stats.kept,
            table.stats.dropped,
            table.stats.duplicates
        );
        Ok(table)
    }

    /// Build a table from the text of a code table.
    ///
    /// Lines may end in `\n`, `\r\n` or `\r`.
    pub fn parse(text: &str) -> Self {
        let mut stats = LoadStats::default();
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for line in text.split(['\r', '\n']).filter(|line| !line.is_empty()) {
            stats.total_lines += 1;
            let fields: Vec<&str> = line.split('\t').collect();
            if !is_complete_living_language(&fields) {
                stats.dropped += 1;
                continue;
            }
            if !seen.insert(line) {
                stats.duplicates += 1;
                continue;
            }
            records.push(record_from_fields(&fields));
        }

        stats.kept = records.len();
        Self {
            records,
            stats,
            source: None,
        }
    }

    /// Wrap records that were already filtered elsewhere.
    pub fn from_records(records: Vec<LanguageRecord>) -> Self {
        let stats = LoadStats {
            total_lines: records.len(),
            kept: records.len(),
            ..LoadStats::default()
        };
        Self {
            records,
            stats,
            source: None,
        }
    }

    pub fn records(&self) -> &[LanguageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// File the table was read from; `None` for embedded or parsed text.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn is_complete_living_language(fields: &[&str]) -> bool {
    fields.len() >= REQUIRED_FIELDS
        && is_not_blank(fields[PART2B])
        && is_not_blank(fields[PART2T])
        && is_not_blank(fields[PART1])
        && fields[TYPE] == LanguageType::Living.code()
}

fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn record_from_fields(fields: &[&str]) -> LanguageRecord {
    LanguageRecord {
        id: fields[ID].to_string(),
        part1: fields[PART1].to_string(),
        part2b: fields[PART2B].to_string(),
        part2t: fields[PART2T].to_string(),
        scope: fields[SCOPE].to_string(),
        language_type: fields[TYPE].to_string(),
        name: fields[NAME].to_string(),
    }
}
