// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! edgemax CLI
//!
//! Scans a record table and prints the record with the greatest non-sentinel
//! key as an `edge(f0, f1, f2, f3).` fact.
//!
//! # Usage
//! ```text
//! edgemax [--input table.json] [--key-field N | --identity] [--strict | --faithful]
//! ```
//!
//! Stored prefs (`scan.json` in the platform config directory) supply defaults;
//! flags override them. The CLI exits with code `0` on success and non-zero on
//! error.

use anyhow::{Context, Result};
use clap::Parser;
use edgemax_config::{
    ConfigError, ConfigService, ConfigStore, FsConfigStore, MemoryConfigStore, ScanPrefs,
    SCAN_PREFS_KEY,
};
use edgemax_core::render::write_edge;
use edgemax_core::table::{builtin_results, load_json_path};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "edgemax", author, version, about, long_about = None)]
struct Args {
    /// JSON table of records (array of arrays); defaults to the built-in table
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Index of the field to compare
    #[arg(short, long, value_name = "N", conflicts_with = "identity")]
    key_field: Option<usize>,

    /// Compare whole records instead of a single field
    #[arg(long)]
    identity: bool,

    /// Never seed the running maximum with a sentinel record
    #[arg(long)]
    strict: bool,

    /// Seed with the first record even when its key is the sentinel
    #[arg(long, conflicts_with = "strict")]
    faithful: bool,

    /// Directory holding stored prefs
    #[arg(long, value_name = "DIR", conflicts_with = "no_config")]
    config_dir: Option<PathBuf>,

    /// Ignore stored prefs
    #[arg(long)]
    no_config: bool,

    /// Persist the effective prefs after a successful scan
    #[arg(long, conflicts_with = "no_config")]
    save_prefs: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layer command-line flags over stored prefs.
    fn effective_prefs(&self, stored: ScanPrefs) -> ScanPrefs {
        let mut prefs = stored;
        if self.identity {
            prefs.key_field = None;
        } else if let Some(index) = self.key_field {
            prefs.key_field = Some(index);
        }
        if self.strict {
            prefs.strict = true;
        } else if self.faithful {
            prefs.strict = false;
        }
        prefs
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_directive = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match select_store(&args, FsConfigStore::new)? {
        Some(store) => {
            info!(dir = %store.base().display(), "using config directory");
            run(&args, &ConfigService::new(store), &mut out)
        }
        None => run(&args, &ConfigService::new(MemoryConfigStore::new()), &mut out),
    }
}

/// Pick the prefs store; `None` means run on defaults with nothing persisted.
///
/// A requested save with no resolvable config directory is an error rather
/// than a silent no-op.
fn select_store<F>(args: &Args, platform_store: F) -> Result<Option<FsConfigStore>>
where
    F: FnOnce() -> Result<FsConfigStore, ConfigError>,
{
    if args.no_config {
        return Ok(None);
    }
    if let Some(dir) = &args.config_dir {
        return Ok(Some(FsConfigStore::at(dir)));
    }
    match platform_store() {
        Ok(store) => Ok(Some(store)),
        Err(err) if args.save_prefs => {
            Err(err).context("cannot save prefs without a config directory")
        }
        Err(err) => {
            warn!(error = %err, "no config directory; using defaults");
            Ok(None)
        }
    }
}

fn run<S, W>(args: &Args, config: &ConfigService<S>, out: &mut W) -> Result<()>
where
    S: ConfigStore,
    W: Write,
{
    let prefs = args.effective_prefs(config.load_or_default(SCAN_PREFS_KEY));
    let scanner = prefs.scanner();
    info!(key = ?scanner.key, seed = ?scanner.seed, "scan options");

    let table = match &args.input {
        Some(path) => load_json_path(path)
            .with_context(|| format!("failed to load table {}", path.display()))?,
        None => builtin_results(),
    };

    let best = scanner.scan(&table).context("scan failed")?;
    write_edge(out, best).context("failed to write result")?;
    out.flush()?;

    if args.save_prefs {
        config
            .save(SCAN_PREFS_KEY, &prefs)
            .context("failed to save prefs")?;
        info!("saved prefs");
    }
    Ok(())
}
