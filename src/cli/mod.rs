//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands. Global
//! flags override values read from the optional `--config` TOML file, which
//! in turn override [`StoreConfig::default`].

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

use crate::config::{ConfigError, StoreConfig};
use crate::format::FormatArg;

mod parsing;

pub use parsing::parse_format_arg;
use parsing::parse_locale;

/// Look up translations in file-backed locale catalogues.
#[derive(Debug, Parser, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML file providing `locale_root`, `locale`, `default_locale` and
    /// `extension`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Directory containing locale files.
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub locale_root: Option<Utf8PathBuf>,

    /// Locale to translate into.
    #[arg(short, long, value_name = "LOCALE", value_parser = parse_locale)]
    pub locale: Option<String>,

    /// Locale used when a translation or locale file is missing.
    #[arg(long, value_name = "LOCALE", value_parser = parse_locale)]
    pub default_locale: Option<String>,

    /// Suffix appended to a locale name to form its file name.
    #[arg(long, value_name = "SUFFIX")]
    pub extension: Option<String>,

    /// Enable verbose diagnostic logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the store configuration from the config file and flags.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `--config` names a file that cannot be
    /// read or parsed.
    pub fn store_config(&self) -> Result<StoreConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::load(path)?,
            None => StoreConfig::default(),
        };
        if let Some(root) = &self.locale_root {
            config.locale_root.clone_from(root);
        }
        if let Some(locale) = &self.locale {
            config.locale.clone_from(locale);
        }
        if let Some(default_locale) = &self.default_locale {
            config.default_locale.clone_from(default_locale);
        }
        if let Some(extension) = &self.extension {
            config.extension.clone_from(extension);
        }
        Ok(config)
    }
}

/// Available top-level commands for Parlance.
#[derive(Debug, Subcommand, PartialEq, Clone)]
pub enum Commands {
    /// Print the translation for a message id.
    Translate(TranslateArgs),

    /// List the messages visible for the effective locale.
    List(ListArgs),

    /// Report lines a locale file parser would skip.
    Check(CheckArgs),
}

/// Arguments accepted by the `translate` command.
#[derive(Debug, Args, PartialEq, Clone)]
pub struct TranslateArgs {
    /// Namespace to look the message up in.
    #[arg(short, long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Message id to translate.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Positional arguments substituted into the template.
    ///
    /// Values that look like integers, floats or booleans are passed as
    /// such; everything else is passed as text. Supplying any argument
    /// enables formatting.
    #[arg(
        value_name = "ARG",
        value_parser = parse_format_arg,
        allow_negative_numbers = true
    )]
    pub args: Vec<FormatArg>,
}

/// Arguments accepted by the `list` command.
#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct ListArgs {
    /// Only list messages in this namespace.
    #[arg(short, long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,
}

/// Arguments accepted by the `check` command.
#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct CheckArgs {
    /// Locale files to check.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Fail when any line would be dropped.
    #[arg(long)]
    pub strict: bool,
}
