// SPDX-License-Identifier: PMPL-1.0-or-later

//! iso-lang-finder — ISO 639 language lookup and BCP-47 tag normalisation.
//!
//! Two independent pieces, both read-only once built:
//! 1. **iso639**: resolves an ISO 639-1/639-2 code or an English language
//!    name to a [`LanguageRecord`] from the SIL ISO 639-3 code table,
//!    returning [`UNDETERMINED`] when nothing matches.
//! 2. **bcp47**: maps a tag onto a small fixed allow-list of canonical
//!    BCP-47 tags, returning `None` for anything else.

pub mod bcp47;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod iso639;
pub mod types;

#[cfg(test)]
mod test_support;

pub use bcp47::translate_tag;
pub use error::TableError;
pub use iso639::{resolve_language, shared_table, LookupField, ReferenceTable};
pub use types::{LanguageRecord, LanguageType, Scope, UNDETERMINED};
