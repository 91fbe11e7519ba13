// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639 language resolution.
//!
//! Identifiers may be any ISO 639 code (639-1 two-letter, 639-2
//! bibliographic or terminology three-letter) or an English reference name.
//! The reference data comes from the SIL ISO 639-3 code table
//! (<https://iso639-3.sil.org/code_tables/download_tables>).
//!
//! ## Shared table
//!
//! The process-wide table is loaded on first use, exactly once even under
//! concurrent first access, and is never torn down. A load failure is
//! remembered too: every later call sees the same [`TableError`] without the
//! file being read again. Programs should call [`shared_table`] at startup
//! so a missing dataset stops them before any lookup happens.
//!
//! Tables built with [`ReferenceTable::load`] are independent of the shared
//! one and can be used side by side.

mod resolver;
mod table;

pub use resolver::LookupField;
pub use table::{LoadStats, ReferenceTable};

use crate::config::TableConfig;
use crate::error::TableError;
use crate::types::LanguageRecord;
use std::sync::LazyLock;

static SHARED_TABLE: LazyLock<Result<ReferenceTable, TableError>> =
    LazyLock::new(|| ReferenceTable::load(&TableConfig::from_env()));

/// The process-wide reference table, located through [`TableConfig::from_env`].
pub fn shared_table() -> Result<&'static ReferenceTable, TableError> {
    SHARED_TABLE.as_ref().map_err(Clone::clone)
}

/// Resolve a language code or name against the shared table.
///
/// Unknown identifiers give `Ok(&UNDETERMINED)`; `Err` only reports that the
/// shared table itself could not be loaded.
///
/// [`UNDETERMINED`]: crate::types::UNDETERMINED
pub fn resolve_language(identifier: &str) -> Result<&'static LanguageRecord, TableError> {
    Ok(shared_table()?.resolve(identifier))
}
