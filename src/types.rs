// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for iso-lang-finder
//!
//! A [`LanguageRecord`] is one row of the ISO 639-3 code table, kept exactly
//! as it was read. The single-letter scope and type columns stay as strings
//! on the record; [`Scope`] and [`LanguageType`] are typed views over them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Code used by every code column of the "undetermined" record.
pub const UNDETERMINED_CODE: &str = "und";

/// The not-found result of every language lookup.
///
/// Lookups never return an absent value; callers compare against this
/// record (or call [`LanguageRecord::is_undetermined`]) instead.
pub static UNDETERMINED: LazyLock<LanguageRecord> = LazyLock::new(|| LanguageRecord {
    id: UNDETERMINED_CODE.to_string(),
    part1: UNDETERMINED_CODE.to_string(),
    part2b: UNDETERMINED_CODE.to_string(),
    part2t: UNDETERMINED_CODE.to_string(),
    scope: Scope::Special.code().to_string(),
    language_type: LanguageType::Special.code().to_string(),
    name: "Undetermined".to_string(),
});

/// One language from the ISO 639-3 code table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// Three-letter ISO 639-3 identifier
    pub id: String,
    /// Two-letter ISO 639-1 code
    pub part1: String,
    /// ISO 639-2 bibliographic code (e.g. `fre`)
    pub part2b: String,
    /// ISO 639-2 terminology code (e.g. `fra`)
    pub part2t: String,
    /// `I`, `M` or `S`
    pub scope: String,
    /// `A`, `C`, `E`, `H`, `L` or `S`
    #[serde(rename = "type")]
    pub language_type: String,
    /// English reference name
    pub name: String,
}

impl LanguageRecord {
    pub fn is_undetermined(&self) -> bool {
        *self == *UNDETERMINED
    }

    /// Typed scope, `None` for letters outside the ISO 639-3 set.
    pub fn scope_kind(&self) -> Option<Scope> {
        Scope::from_code(&self.scope)
    }

    /// Typed language type, `None` for letters outside the ISO 639-3 set.
    pub fn type_kind(&self) -> Option<LanguageType> {
        LanguageType::from_code(&self.language_type)
    }
}

impl fmt::Display for LanguageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}/{}, {})",
            self.id, self.part1, self.part2b, self.part2t, self.name
        )
    }
}

/// ISO 639-3 scope column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Individual,
    Macrolanguage,
    Special,
}

impl Scope {
    pub fn code(&self) -> &'static str {
        match self {
            Scope::Individual => "I",
            Scope::Macrolanguage => "M",
            Scope::Special => "S",
        }
    }

    pub fn from_code(code: &str) -> Option<Scope> {
        match code {
            "I" => Some(Scope::Individual),
            "M" => Some(Scope::Macrolanguage),
            "S" => Some(Scope::Special),
            _ => None,
        }
    }
}

/// ISO 639-3 language type column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageType {
    Ancient,
    Constructed,
    Extinct,
    Historical,
    Living,
    Special,
}

impl LanguageType {
    pub fn code(&self) -> &'static str {
        match self {
            LanguageType::Ancient => "A",
            LanguageType::Constructed => "C",
            LanguageType::Extinct => "E",
            LanguageType::Historical => "H",
            LanguageType::Living => "L",
            LanguageType::Special => "S",
        }
    }

    pub fn from_code(code: &str) -> Option<LanguageType> {
        match code {
            "A" => Some(LanguageType::Ancient),
            "C" => Some(LanguageType::Constructed),
            "E" => Some(LanguageType::Extinct),
            "H" => Some(LanguageType::Historical),
            "L" => Some(LanguageType::Living),
            "S" => Some(LanguageType::Special),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undetermined_uses_und_everywhere() {
        let und = &*UNDETERMINED;
        assert_eq!(und.id, "und");
        assert_eq!(und.part1, "und");
        assert_eq!(und.part2b, "und");
        assert_eq!(und.part2t, "und");
        assert_eq!(und.scope_kind(), Some(Scope::Special));
        assert_eq!(und.type_kind(), Some(LanguageType::Special));
        assert_eq!(und.name, "Undetermined");
        assert!(und.is_undetermined());
    }

    #[test]
    fn equality_is_structural() {
        let copy = UNDETERMINED.clone();
        assert!(copy.is_undetermined());

        let renamed = LanguageRecord {
            name: "Unknown".to_string(),
            ..UNDETERMINED.clone()
        };
        assert!(!renamed.is_undetermined());
    }

    #[test]
    fn unknown_letters_have_no_typed_view() {
        let odd = LanguageRecord {
            scope: "X".to_string(),
            language_type: "".to_string(),
            ..UNDETERMINED.clone()
        };
        assert_eq!(odd.scope_kind(), None);
        assert_eq!(odd.type_kind(), None);
    }

    #[test]
    fn type_codes_roundtrip() {
        for ty in [
            LanguageType::Ancient,
            LanguageType::Constructed,
            LanguageType::Extinct,
            LanguageType::Historical,
            LanguageType::Living,
            LanguageType::Special,
        ] {
            assert_eq!(LanguageType::from_code(ty.code()), Some(ty));
        }
    }

    #[test]
    fn serializes_type_column_as_type() {
        let json = serde_json::to_value(&*UNDETERMINED).expect("serialize");
        assert_eq!(json["type"], "S");
        assert_eq!(json["part2b"], "und");
    }
}
