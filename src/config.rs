//! Locale store configuration.
//!
//! [`StoreConfig`] names the directory holding locale files, the file
//! extension, and the default and requested locales. Hosts usually build it
//! in code; the command-line tool can also read it from a TOML file:
//!
//! ```toml
//! locale_root = "locales"
//! locale = "es-ES"
//! default_locale = "en-US"
//! extension = ".locale"
//! ```
//!
//! Omitted keys take the values of [`StoreConfig::default`].

// Scoped suppression for version-dependent lint false positives from
// miette/thiserror derive macros.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use camino::{Utf8Path, Utf8PathBuf};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Directory searched for locale files when none is configured.
pub const DEFAULT_LOCALE_ROOT: &str = "locales";
/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-US";
/// Suffix appended to a locale name to form its file name.
pub const DEFAULT_EXTENSION: &str = ".locale";

/// Errors raised while loading a configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}'")]
    #[diagnostic(code(parlance::config::read))]
    Read {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid TOML for [`StoreConfig`].
    #[error("invalid configuration in '{origin}'")]
    #[diagnostic(
        code(parlance::config::parse),
        help("expected keys: locale_root, locale, default_locale, extension")
    )]
    Parse {
        /// File name or other label for the configuration text.
        origin: String,
        /// Underlying TOML failure.
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Settings for a [`LocaleStore`](crate::store::LocaleStore).
///
/// # Examples
///
/// ```rust
/// use parlance::config::StoreConfig;
///
/// let config = StoreConfig::new("i18n").with_locale("es-ES");
/// assert_eq!(config.locale_file("es-ES"), "es-ES.locale");
/// assert_eq!(config.default_locale, "en-US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory containing locale files.
    pub locale_root: Utf8PathBuf,
    /// Locale requested at start-up.
    pub locale: String,
    /// Locale used when a translation or locale file is missing.
    pub default_locale: String,
    /// Suffix appended to a locale name, including any leading separator.
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            locale_root: Utf8PathBuf::from(DEFAULT_LOCALE_ROOT),
            locale: DEFAULT_LOCALE.to_owned(),
            default_locale: DEFAULT_LOCALE.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Default settings rooted at `locale_root`.
    #[must_use]
    pub fn new(locale_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            locale_root: locale_root.into(),
            ..Self::default()
        }
    }

    /// Set the locale requested at start-up.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the fallback locale.
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Set the locale file suffix.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// File name, relative to [`StoreConfig::locale_root`], for `locale`.
    #[must_use]
    pub fn locale_file(&self, locale: &str) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{locale}{}", self.extension))
    }

    /// Full path of the file backing `locale`.
    #[must_use]
    pub fn locale_path(&self, locale: &str) -> Utf8PathBuf {
        self.locale_root.join(self.locale_file(locale))
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML or
    /// contains unknown keys.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            origin: origin.to_owned(),
            source: Box::new(source),
        })
    }

    /// Read settings from the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path.as_str())
    }
}
