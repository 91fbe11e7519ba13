// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor` checks for the reference table resource

use crate::config::{TableConfig, TABLE_ENV};
use crate::error::TABLE_DOWNLOAD_URL;
use crate::iso639::ReferenceTable;
use anyhow::{bail, Result};
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(config: &TableConfig) -> Result<()> {
    println!("iso-lang-finder self-diagnostics");
    println!();

    let checks = collect_checks(config);
    for check in &checks {
        println!("  {}", check.line());
    }

    if checks.iter().any(Check::failed) {
        bail!(
            "self-diagnostics reported issues (the table can be downloaded from {})",
            TABLE_DOWNLOAD_URL
        );
    }
    Ok(())
}

/// Result of one check; only `Fail` makes `doctor` exit non-zero.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Pass(String),
    Note(String),
    Fail(String),
}

#[derive(Debug)]
struct Check {
    label: &'static str,
    outcome: Outcome,
}

impl Check {
    fn line(&self) -> String {
        let (mark, detail) = match &self.outcome {
            Outcome::Pass(detail) => ("ok", detail),
            Outcome::Note(detail) => ("--", detail),
            Outcome::Fail(detail) => ("!!", detail),
        };
        format!("[{}] {:10} {}", mark, self.label, detail)
    }

    fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Fail(_))
    }
}

fn check(label: &'static str, outcome: Outcome) -> Check {
    Check { label, outcome }
}

fn collect_checks(config: &TableConfig) -> Vec<Check> {
    let mut checks = vec![
        check(
            "version",
            Outcome::Pass(format!("iso-lang-finder {}", env!("CARGO_PKG_VERSION"))),
        ),
        check_override(),
    ];
    checks.extend(config.candidates().iter().map(|path| check_candidate(path)));

    match ReferenceTable::load(config) {
        Ok(table) => {
            let origin = match table.source() {
                Some(path) => path.display().to_string(),
                None => "the embedded copy".to_string(),
            };
            let stats = table.stats();
            checks.push(check(
                "table",
                Outcome::Pass(format!(
                    "{} languages from {} ({} rows dropped, {} duplicates)",
                    stats.kept, origin, stats.dropped, stats.duplicates
                )),
            ));
            checks.push(check_sample(&table));
        }
        Err(err) => checks.push(check("table", Outcome::Fail(err.to_string()))),
    }

    checks
}

fn check_override() -> Check {
    let detail = match env::var(TABLE_ENV) {
        Ok(value) if !value.trim().is_empty() => format!("{} = {}", TABLE_ENV, value.trim()),
        _ => format!("{} not set", TABLE_ENV),
    };
    check("override", Outcome::Pass(detail))
}

fn check_candidate(path: &Path) -> Check {
    let outcome = if path.is_file() {
        Outcome::Pass(format!("{} exists", path.display()))
    } else {
        Outcome::Note(format!("{} missing", path.display()))
    };
    check("candidate", outcome)
}

fn check_sample(table: &ReferenceTable) -> Check {
    let english = table.find_by_part1("en");
    let outcome = if table.is_empty() {
        Outcome::Fail("table holds no living languages with full ISO 639 coverage".to_string())
    } else if english.is_undetermined() {
        Outcome::Note("'en' does not resolve".to_string())
    } else {
        Outcome::Pass(format!("'en' resolves to {}", english))
    };
    check("sample", outcome)
}
