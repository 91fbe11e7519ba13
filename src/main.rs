// SPDX-License-Identifier: PMPL-1.0-or-later

//! iso-lang-finder: resolve ISO 639 codes and language names, and normalise
//! BCP-47 tags against the accepted allow-list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use iso_lang_finder::bcp47::{accepted_tags, translate_tag};
use iso_lang_finder::config::TableConfig;
use iso_lang_finder::diagnostics;
use iso_lang_finder::iso639::{shared_table, LookupField, ReferenceTable};
use iso_lang_finder::types::{LanguageRecord, UNDETERMINED};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iso-lang-finder")]
#[command(version)]
#[command(about = "ISO 639 language lookup and BCP-47 tag normalisation")]
#[command(long_about = None)]
struct Cli {
    /// ISO 639-3 code table to use instead of the embedded one
    #[arg(long, global = true, value_name = "FILE")]
    table: Option<PathBuf>,

    /// Log every lookup (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve language codes or English names
    Resolve {
        /// ISO 639-1, 639-2/B, 639-2/T code or reference name
        #[arg(value_name = "IDENTIFIER", required = true)]
        identifiers: Vec<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Normalise BCP-47 tags against the allow-list
    Translate {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// List the accepted BCP-47 spellings
    Tags,

    /// Check that the reference table can be found and loaded
    Doctor,
}

#[derive(Serialize)]
struct Resolution<'a> {
    query: &'a str,
    matched_by: Option<LookupField>,
    language: &'a LanguageRecord,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn table_config(table: Option<PathBuf>) -> TableConfig {
    match table {
        Some(path) => TableConfig::with_path(path),
        None => TableConfig::from_env(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve { identifiers, json } => {
            let pinned;
            let table: &ReferenceTable = if cli.table.is_some() {
                pinned = ReferenceTable::load(&table_config(cli.table))
                    .context("loading the table given with --table")?;
                &pinned
            } else {
                shared_table()?
            };

            let resolutions: Vec<Resolution> = identifiers
                .iter()
                .map(String::as_str)
                .map(|query| match table.resolve_with_field(query) {
                    Some((field, language)) => Resolution {
                        query,
                        matched_by: Some(field),
                        language,
                    },
                    None => Resolution {
                        query,
                        matched_by: None,
                        language: &*UNDETERMINED,
                    },
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&resolutions)?);
            } else {
                for resolution in &resolutions {
                    print_resolution(resolution);
                }
            }
        }

        Commands::Translate { tags } => {
            for tag in &tags {
                match translate_tag(Some(tag.as_str())) {
                    Some(canonical) => println!("{} -> {}", tag, canonical.green()),
                    None => println!("{} -> {}", tag, "rejected".red()),
                }
            }
        }

        Commands::Tags => {
            for tag in accepted_tags() {
                println!("{}", tag);
            }
        }

        Commands::Doctor => {
            diagnostics::run_self_diagnostics(&table_config(cli.table))?;
        }
    }

    Ok(())
}

fn print_resolution(resolution: &Resolution) {
    let language = resolution.language;
    match resolution.matched_by {
        Some(field) => {
            println!("{} -> {} (via {})", resolution.query, language.id.bold().green(), field);
            println!("  Name: {}", language.name);
            println!(
                "  ISO 639-1: {}  639-2/B: {}  639-2/T: {}",
                language.part1, language.part2b, language.part2t
            );
            println!(
                "  Scope: {:?}  Type: {:?}",
                language.scope_kind(),
                language.type_kind()
            );
        }
        None => println!(
            "{} -> {}",
            resolution.query,
            format!("{} (undetermined)", language.id).as_str().yellow()
        ),
    }
}
