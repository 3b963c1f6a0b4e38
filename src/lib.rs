//! Parlance core library.
//!
//! Externalises user-facing text into per-locale files. A
//! [`LocaleStore`](store::LocaleStore) loads the default locale's dictionary
//! once, swaps the current locale's dictionary on demand, and resolves
//! message ids through the chain current locale, default locale, raw id.
//! Resolved templates can be expanded with positional arguments through
//! [`format::format`].
//!
//! The library also backs the `parlance` command-line tool defined in
//! [`cli`] and executed by [`runner`].

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod format;
pub mod parser;
pub mod runner;
pub mod source;
pub mod store;

pub use config::StoreConfig;
pub use format::{FormatArg, FormatError};
pub use store::LocaleStore;

/// Translate a message through a [`LocaleStore`].
///
/// Without arguments the macro returns the resolved template as a
/// [`String`]. With arguments it converts each into a [`FormatArg`] and
/// returns `Result<String, FormatError>`. Prefix the id with
/// `ns = <namespace>,` for namespaced lookups.
///
/// # Examples
///
/// ```rust
/// use parlance::source::MemorySource;
/// use parlance::{LocaleStore, StoreConfig, translate};
///
/// let source = MemorySource::new().with_file(
///     "locales/es-ES.locale",
///     "msgid: {0} files\nmsgstr: {0} archivos\nns: menu\nmsgid: Open\nmsgstr: Abrir\n",
/// );
/// let store = LocaleStore::with_source(StoreConfig::new("locales").with_locale("es-ES"), source);
///
/// assert_eq!(translate!(store, "{0} files", 3)?, "3 archivos");
/// assert_eq!(translate!(store, ns = "menu", "Open"), "Abrir");
/// assert_eq!(translate!(store, "Close"), "Close");
/// # Ok::<(), parlance::FormatError>(())
/// ```
#[macro_export]
macro_rules! translate {
    ($store:expr, ns = $namespace:expr, $id:expr $(,)?) => {
        $store.translate_namespaced($namespace, $id)
    };
    ($store:expr, ns = $namespace:expr, $id:expr, $($arg:expr),+ $(,)?) => {
        $store.translate_namespaced_args(
            $namespace,
            $id,
            &[$($crate::format::FormatArg::from($arg)),+],
        )
    };
    ($store:expr, $id:expr $(,)?) => {
        $store.translate($id)
    };
    ($store:expr, $id:expr, $($arg:expr),+ $(,)?) => {
        $store.translate_args($id, &[$($crate::format::FormatArg::from($arg)),+])
    };
}
