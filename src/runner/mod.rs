//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! handles command execution. Output is rendered into a buffer and written in
//! one go so a closed pipe (for example `parlance list | head`) is not
//! reported as a failure.

mod error;

pub use error::RunnerError;

use crate::cli::{CheckArgs, Cli, Commands, ListArgs, TranslateArgs};
use crate::dictionary::DEFAULT_NAMESPACE;
use crate::parser::parse_dictionary;
use crate::source::{FileSystem, LocaleSource};
use crate::store::LocaleStore;
use anyhow::{Context, Result};
use camino::Utf8Path;
use std::io::{self, Write};
use tracing::{debug, info};

/// Execute the parsed [`Cli`] commands, writing results to standard output.
///
/// # Errors
///
/// Returns an error if configuration loading, locale file reading,
/// formatting, or writing to standard output fails.
pub fn run(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    run_with_writer(cli, &mut stdout)
}

/// Execute the parsed [`Cli`] commands, writing results to `out`.
///
/// # Errors
///
/// Returns an error if configuration loading, locale file reading,
/// formatting, or writing to `out` fails.
pub fn run_with_writer(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let (rendered, outcome) = match &cli.command {
        Commands::Translate(args) => (translate(&open_store(cli)?, args)?, Ok(())),
        Commands::List(args) => (list(&open_store(cli)?, args), Ok(())),
        Commands::Check(args) => check(args)?,
    };
    write_all_ignoring_broken_pipe(out, rendered.as_bytes()).context("write output")?;
    flush_ignoring_broken_pipe(out).context("flush output")?;
    outcome.map_err(Into::into)
}

fn open_store(cli: &Cli) -> Result<LocaleStore> {
    let config = cli.store_config().context("load configuration")?;
    info!(
        root = %config.locale_root,
        locale = %config.locale,
        default_locale = %config.default_locale,
        "opening locale store"
    );
    let store = LocaleStore::new(config);
    if store.locale() != store.config().locale {
        debug!(
            requested = %store.config().locale,
            effective = store.locale(),
            "requested locale unavailable"
        );
    }
    Ok(store)
}

fn translate(store: &LocaleStore, args: &TranslateArgs) -> Result<String> {
    let namespace = args.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE);
    let mut text = if args.args.is_empty() {
        store.translate_namespaced(namespace, &args.id)
    } else {
        store
            .translate_namespaced_args(namespace, &args.id, &args.args)
            .map_err(|source| RunnerError::Format {
                id: args.id.clone(),
                source,
            })?
    };
    text.push('\n');
    Ok(text)
}

fn list(store: &LocaleStore, args: &ListArgs) -> String {
    let mut out = format!(
        "# locale: {} (default: {})\n",
        store.locale(),
        store.default_locale()
    );
    for entry in store
        .entries()
        .into_iter()
        .filter(|entry| args.namespace.as_deref().is_none_or(|ns| ns == entry.namespace))
    {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            entry.namespace, entry.id, entry.template
        ));
    }
    out
}

fn check(args: &CheckArgs) -> Result<(String, Result<(), RunnerError>)> {
    let mut out = String::new();
    let mut lossy = 0;
    for path in &args.files {
        let text = read_locale_file(path)?;
        let outcome = parse_dictionary(&text);
        for skip in &outcome.diagnostics {
            out.push_str(&format!(
                "{path}:{}: {}: {}\n",
                skip.line, skip.reason, skip.text
            ));
        }
        let skipped = outcome
            .diagnostics
            .iter()
            .filter(|skip| skip.reason.is_lossy())
            .count();
        lossy += skipped;
        out.push_str(&format!(
            "{path}: {} message(s), {skipped} dropped line(s)\n",
            outcome.dictionary.len()
        ));
    }
    let outcome = if args.strict && lossy > 0 {
        Err(RunnerError::CheckFailed { count: lossy })
    } else {
        Ok(())
    };
    Ok((out, outcome))
}

fn read_locale_file(path: &Utf8Path) -> Result<String> {
    let file = path
        .file_name()
        .map(Utf8Path::new)
        .ok_or_else(|| RunnerError::NotAFile {
            path: path.to_path_buf(),
        })?;
    let root = path.parent().unwrap_or_else(|| Utf8Path::new(""));
    FileSystem
        .read_to_string(root, file)
        .with_context(|| format!("read locale file {path}"))
}

fn is_broken_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}

fn write_all_ignoring_broken_pipe(writer: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    match writer.write_all(bytes) {
        Ok(()) => Ok(()),
        Err(err) if is_broken_pipe(&err) => Ok(()),
        Err(err) => Err(err),
    }
}

fn flush_ignoring_broken_pipe(writer: &mut impl Write) -> io::Result<()> {
    match writer.flush() {
        Ok(()) => Ok(()),
        Err(err) if is_broken_pipe(&err) => Ok(()),
        Err(err) => Err(err),
    }
}
