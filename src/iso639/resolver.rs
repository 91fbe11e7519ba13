// SPDX-License-Identifier: PMPL-1.0-or-later

//! Multi-field language lookup
//!
//! Each code column gets its own exact-match primitive. [`ReferenceTable::resolve`]
//! walks them in [`LookupField::PRIORITY`] order and returns the first hit,
//! so an identifier that is both a code and a name resolves as a code.
//!
//! Code columns compare case-sensitively (codes are lowercase upstream);
//! reference names compare case-insensitively.

use super::table::ReferenceTable;
use crate::error::TABLE_DOWNLOAD_URL;
use crate::types::{LanguageRecord, UNDETERMINED};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

/// Column of the code table a lookup matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupField {
    Part1,
    Part2B,
    Part2T,
    Name,
}

impl LookupField {
    /// Order in which [`ReferenceTable::resolve`] tries the columns.
    pub const PRIORITY: [LookupField; 4] = [
        LookupField::Part1,
        LookupField::Part2B,
        LookupField::Part2T,
        LookupField::Name,
    ];

    pub fn matches(&self, record: &LanguageRecord, value: &str) -> bool {
        match self {
            LookupField::Part1 => record.part1 == value,
            LookupField::Part2B => record.part2b == value,
            LookupField::Part2T => record.part2t == value,
            LookupField::Name => eq_ignore_case(&record.name, value),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LookupField::Part1 => "ISO 639-1",
            LookupField::Part2B => "ISO 639-2/B",
            LookupField::Part2T => "ISO 639-2/T",
            LookupField::Name => "reference name",
        }
    }
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl ReferenceTable {
    /// First record (in table order) whose `field` matches `value`,
    /// or [`UNDETERMINED`].
    pub fn find_by(&self, field: LookupField, value: &str) -> &LanguageRecord {
        let matched: Vec<&LanguageRecord> = self
            .records()
            .par_iter()
            .filter(|record| field.matches(record, value))
            .collect();

        tracing::debug!(
            "finding ISO 639-3 codes by {} for '{}': {} found [{}]",
            field,
            value,
            matched.len(),
            matched
                .iter()
                .map(|record| record.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        matched.first().copied().unwrap_or(&*UNDETERMINED)
    }

    pub fn find_by_part1(&self, code: &str) -> &LanguageRecord {
        self.find_by(LookupField::Part1, code)
    }

    pub fn find_by_part2b(&self, code: &str) -> &LanguageRecord {
        self.find_by(LookupField::Part2B, code)
    }

    pub fn find_by_part2t(&self, code: &str) -> &LanguageRecord {
        self.find_by(LookupField::Part2T, code)
    }

    pub fn find_by_name(&self, name: &str) -> &LanguageRecord {
        self.find_by(LookupField::Name, name)
    }

    /// Like [`resolve`](Self::resolve), but also reports which column matched.
    ///
    /// A miss is logged as a warning here, so callers that fall back to
    /// [`UNDETERMINED`] themselves need not log it again.
    pub fn resolve_with_field(&self, identifier: &str) -> Option<(LookupField, &LanguageRecord)> {
        let found = LookupField::PRIORITY.iter().find_map(|field| {
            let record = self.find_by(*field, identifier);
            (!record.is_undetermined()).then_some((*field, record))
        });
        if found.is_none() {
            tracing::warn!(
                "language '{}' not found; if it has an ISO 639-3 code check the latest table at {}",
                identifier,
                TABLE_DOWNLOAD_URL
            );
        }
        found
    }

    /// Resolve a code or English name, trying part1, part2B, part2T and
    /// then the name. Unknown identifiers yield [`UNDETERMINED`].
    pub fn resolve(&self, identifier: &str) -> &LanguageRecord {
        self.resolve_with_field(identifier)
            .map(|(_, record)| record)
            .unwrap_or(&*UNDETERMINED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;

    fn record(id: &str, part2b: &str, part2t: &str, part1: &str, name: &str) -> LanguageRecord {
        LanguageRecord {
            id: id.to_string(),
            part1: part1.to_string(),
            part2b: part2b.to_string(),
            part2t: part2t.to_string(),
            scope: "I".to_string(),
            language_type: "L".to_string(),
            name: name.to_string(),
        }
    }

    fn sample() -> ReferenceTable {
        ReferenceTable::from_records(vec![
            record("fra", "fre", "fra", "fr", "French"),
            record("deu", "ger", "deu", "de", "German"),
            record("nob", "nob", "nob", "nb", "Norwegian Bokmål"),
        ])
    }

    #[test]
    fn each_primitive_matches_its_own_column() {
        let table = sample();
        assert_eq!(table.find_by_part1("fr").id, "fra");
        assert_eq!(table.find_by_part2b("fre").id, "fra");
        assert_eq!(table.find_by_part2t("fra").id, "fra");
        assert_eq!(table.find_by_name("French").id, "fra");

        assert!(table.find_by_part1("fre").is_undetermined());
        assert!(table.find_by_part2b("fr").is_undetermined());
        assert!(table.find_by_part2t("fre").is_undetermined());
    }

    #[test]
    fn codes_are_case_sensitive() {
        let table = sample();
        assert!(table.find_by_part1("FR").is_undetermined());
        assert!(table.find_by_part2b("FRE").is_undetermined());
        assert!(table.find_by_part2t("Fra").is_undetermined());
    }

    #[test]
    fn names_are_case_insensitive() {
        let table = sample();
        assert_eq!(table.find_by_name("frENcH").id, "fra");
        assert_eq!(table.find_by_name("NORWEGIAN BOKMÅL").id, "nob");
        assert!(table.find_by_name("Frenchy").is_undetermined());
    }

    #[test]
    fn first_match_in_table_order_wins() {
        let table = ReferenceTable::from_records(vec![
            record("aaa", "aaa", "aaa", "xx", "First"),
            record("bbb", "bbb", "bbb", "xx", "Second"),
        ]);
        assert_eq!(table.find_by_part1("xx").id, "aaa");
    }

    #[test]
    fn codes_win_over_names() {
        let table = ReferenceTable::from_records(vec![
            record("aaa", "aaa", "aaa", "aa", "fr"),
            record("fra", "fre", "fra", "fr", "French"),
        ]);
        assert_eq!(table.resolve("fr").id, "fra");
        assert_eq!(
            table.resolve_with_field("fr").map(|(field, _)| field),
            Some(LookupField::Part1)
        );
    }

    #[test]
    fn resolve_walks_priority_order() {
        let table = sample();
        let field = |id: &str| table.resolve_with_field(id).map(|(field, _)| field);
        assert_eq!(field("de"), Some(LookupField::Part1));
        assert_eq!(field("ger"), Some(LookupField::Part2B));
        assert_eq!(field("deu"), Some(LookupField::Part2T));
        assert_eq!(field("german"), Some(LookupField::Name));
        assert_eq!(field("nonexisting"), None);
    }

    #[test]
    fn unknown_identifier_is_undetermined() {
        let table = sample();
        assert_eq!(*table.resolve("nonexisting"), *UNDETERMINED);
        assert!(table.resolve("").is_undetermined());
    }

    #[test]
    fn miss_is_logged_once_with_download_hint() {
        let table = sample();
        let (record, logs) = capture_logs(|| table.resolve("nonexisting").clone());
        assert!(record.is_undetermined());
        assert!(logs.contains("WARN"), "{}", logs);
        assert!(logs.contains("'nonexisting' not found"), "{}", logs);
        assert!(logs.contains(TABLE_DOWNLOAD_URL), "{}", logs);
        assert_eq!(logs.matches("not found").count(), 1, "{}", logs);
    }

    #[test]
    fn hit_logs_no_warning() {
        let table = sample();
        let (record, logs) = capture_logs(|| table.resolve("German").clone());
        assert_eq!(record.id, "deu");
        assert!(!logs.contains("WARN"), "{}", logs);
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let table = ReferenceTable::from_records(Vec::new());
        assert!(table.resolve("fr").is_undetermined());
    }
}
