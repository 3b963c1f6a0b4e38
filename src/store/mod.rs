//! Locale dictionary store and lookup resolver.
//!
//! [`LocaleStore`] holds two dictionaries: one for the default locale,
//! loaded once by [`LocaleStore::init`], and one for the current locale,
//! replaced by every [`LocaleStore::set_locale`] call. Lookups walk the
//! chain current dictionary, default dictionary, raw message id.
//!
//! The default locale may or may not have a backing file:
//!
//! - Without one, message ids are the default-language text. A missing
//!   translation resolves to the id itself.
//! - With one, every string is externalised. A missing translation resolves
//!   to the default file's entry, or to an empty string when that is missing
//!   too.
//!
//! Whether the default file exists is decided by `init` and kept for the
//! lifetime of the store; call `init` again to re-check.
//!
//! Missing files, missing ids and malformed lines never produce errors. The
//! only failure a caller can observe is a [`FormatError`] from the `_args`
//! lookups.
//!
//! The store performs no internal locking. Hosts that share one store across
//! threads wrap it in their own `RwLock` or confine it to one thread.

use camino::Utf8Path;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::dictionary::{DEFAULT_NAMESPACE, Dictionary, Entry};
use crate::format::{self, FormatArg, FormatError};
use crate::parser::{ParseOutcome, SkippedLine, parse_dictionary};
use crate::source::{FileSystem, LocaleSource};

/// A dictionary together with the diagnostics produced while parsing it.
#[derive(Debug, Clone, Default)]
struct LoadedDictionary {
    dictionary: Dictionary,
    diagnostics: Vec<SkippedLine>,
}

impl LoadedDictionary {
    fn clear(&mut self) {
        self.dictionary.clear();
        self.diagnostics.clear();
    }
}

impl From<ParseOutcome> for LoadedDictionary {
    fn from(outcome: ParseOutcome) -> Self {
        Self {
            dictionary: outcome.dictionary,
            diagnostics: outcome.diagnostics,
        }
    }
}

/// Translation store with a current and a default locale.
///
/// # Examples
///
/// ```rust
/// use parlance::config::StoreConfig;
/// use parlance::format::FormatArg;
/// use parlance::source::MemorySource;
/// use parlance::store::LocaleStore;
///
/// let source = MemorySource::new()
///     .with_file("locales/es-ES.locale", "msgid: Hello, {0}\nmsgstr: Hola, {0}\n");
/// let config = StoreConfig::new("locales").with_locale("es-ES");
/// let mut store = LocaleStore::with_source(config, source);
///
/// assert_eq!(store.locale(), "es-ES");
/// assert_eq!(
///     store.translate_args("Hello, {0}", &[FormatArg::from("Ana")])?,
///     "Hola, Ana"
/// );
/// // No file backs en-US, so ids are the English text.
/// assert_eq!(store.translate("Goodbye"), "Goodbye");
///
/// store.set_locale("fr-FR");
/// assert_eq!(store.locale(), "en-US");
/// # Ok::<(), parlance::format::FormatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LocaleStore<S = FileSystem> {
    source: S,
    config: StoreConfig,
    current_locale: String,
    default_file_exists: bool,
    default: LoadedDictionary,
    current: LoadedDictionary,
}

impl LocaleStore<FileSystem> {
    /// Build a store that reads locale files from disk and initialise it.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_source(config, FileSystem)
    }
}

impl<S: LocaleSource> LocaleStore<S> {
    /// Build a store over `source` and initialise it with `config`.
    #[must_use]
    pub fn with_source(config: StoreConfig, source: S) -> Self {
        let mut store = Self {
            source,
            current_locale: config.default_locale.clone(),
            config: StoreConfig::default(),
            default_file_exists: false,
            default: LoadedDictionary::default(),
            current: LoadedDictionary::default(),
        };
        store.init(config);
        store
    }

    /// Replace the configuration and reload everything.
    ///
    /// Loads the default locale's dictionary, records whether its file
    /// exists, then selects `config.locale` as [`LocaleStore::set_locale`]
    /// would. Calling `init` again with the same configuration yields the
    /// same state.
    pub fn init(&mut self, config: StoreConfig) {
        self.config = config;
        self.current.clear();
        self.current_locale.clone_from(&self.config.default_locale);

        let default_locale = self.config.default_locale.clone();
        match self.load(&default_locale) {
            Some(loaded) => {
                self.default_file_exists = true;
                self.default = loaded;
            }
            None => {
                self.default_file_exists = false;
                self.default.clear();
            }
        }

        let locale = self.config.locale.clone();
        self.set_locale(&locale);
    }

    /// Switch the current locale.
    ///
    /// Selecting the default locale clears the current dictionary. Selecting
    /// a locale without a file falls back to the default locale; inspect
    /// [`LocaleStore::locale`] to see which locale took effect.
    pub fn set_locale(&mut self, locale: &str) {
        self.current.clear();
        if locale == self.config.default_locale {
            self.current_locale = locale.to_owned();
            return;
        }
        let Some(loaded) = self.load(locale) else {
            debug!(
                requested = locale,
                fallback = %self.config.default_locale,
                "locale file missing; using default locale"
            );
            self.current_locale.clone_from(&self.config.default_locale);
            return;
        };
        self.current = loaded;
        self.current_locale = locale.to_owned();
    }

    /// The locale in effect after any fallback.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.current_locale
    }

    /// The configured default locale.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.config.default_locale
    }

    /// Whether a file backed the default locale when the store was
    /// initialised.
    #[must_use]
    pub const fn has_default_file(&self) -> bool {
        self.default_file_exists
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The source locale files are read from.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `id` in the default namespace.
    ///
    /// The template is returned verbatim; placeholders are not expanded.
    #[must_use]
    pub fn translate(&self, id: &str) -> String {
        self.resolve(DEFAULT_NAMESPACE, id).to_owned()
    }

    /// Resolve `id` in `namespace`.
    #[must_use]
    pub fn translate_namespaced(&self, namespace: &str, id: &str) -> String {
        self.resolve(namespace, id).to_owned()
    }

    /// Resolve `id` in the default namespace and substitute `args`.
    ///
    /// The formatter always runs, so an empty `args` slice still reports
    /// placeholders that have no argument.
    ///
    /// # Errors
    ///
    /// Returns the [`FormatError`] raised by [`format::format`] when the
    /// resolved template and `args` disagree.
    pub fn translate_args(&self, id: &str, args: &[FormatArg]) -> Result<String, FormatError> {
        format::format(self.resolve(DEFAULT_NAMESPACE, id), args)
    }

    /// Resolve `id` in `namespace` and substitute `args`.
    ///
    /// # Errors
    ///
    /// Returns the [`FormatError`] raised by [`format::format`] when the
    /// resolved template and `args` disagree.
    pub fn translate_namespaced_args(
        &self,
        namespace: &str,
        id: &str,
        args: &[FormatArg],
    ) -> Result<String, FormatError> {
        format::format(self.resolve(namespace, id), args)
    }

    /// Entries visible for the current locale, sorted by namespace and id.
    ///
    /// Current-locale entries override default-locale entries. When no file
    /// backs the default locale only current-locale entries are listed.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry<'_>> {
        let mut merged: BTreeMap<(&str, &str), &str> = BTreeMap::new();
        let layers = [&self.default.dictionary, &self.current.dictionary];
        for entry in layers.into_iter().flat_map(|dictionary| dictionary.entries()) {
            merged.insert((entry.namespace, entry.id), entry.template);
        }
        merged
            .into_iter()
            .map(|((namespace, id), template)| Entry {
                namespace,
                id,
                template,
            })
            .collect()
    }

    /// Lines skipped while loading the default and current dictionaries,
    /// each paired with the locale whose file produced it.
    pub fn diagnostics(&self) -> impl Iterator<Item = (&str, &SkippedLine)> {
        let default = self
            .default
            .diagnostics
            .iter()
            .map(|skip| (self.config.default_locale.as_str(), skip));
        let current = self
            .current
            .diagnostics
            .iter()
            .map(|skip| (self.current_locale.as_str(), skip));
        default.chain(current)
    }

    fn resolve<'a>(&'a self, namespace: &str, id: &'a str) -> &'a str {
        let on_default = self.current_locale == self.config.default_locale;
        let translated = if on_default {
            None
        } else {
            self.current.dictionary.get(namespace, id)
        };
        translated.unwrap_or_else(|| {
            if self.default_file_exists {
                self.default.dictionary.get(namespace, id).unwrap_or_default()
            } else {
                id
            }
        })
    }

    fn load(&self, locale: &str) -> Option<LoadedDictionary> {
        let root: &Utf8Path = &self.config.locale_root;
        let file = self.config.locale_file(locale);
        if !self.source.exists(root, &file) {
            return None;
        }
        let outcome = match self.source.read_to_string(root, &file) {
            Ok(text) => parse_dictionary(&text),
            Err(err) => {
                warn!(
                    path = %root.join(&file),
                    error = %err,
                    "failed to read locale file; treating it as empty"
                );
                ParseOutcome::default()
            }
        };
        debug!(
            locale,
            path = %root.join(&file),
            entries = outcome.dictionary.len(),
            skipped = outcome.diagnostics.len(),
            "loaded locale dictionary"
        );
        Some(outcome.into())
    }
}
