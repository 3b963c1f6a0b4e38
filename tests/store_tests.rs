//! Integration tests for [`LocaleStore`] over real locale directories.
//!
//! Each test builds a temporary locale root with `test_support::LocaleDir`
//! and exercises lookups through the public API and the `translate!` macro.

use anyhow::{Context, Result, ensure};
use parlance::config::ConfigError;
use parlance::parser::SkipReason;
use parlance::{FormatArg, FormatError, LocaleStore, StoreConfig, translate};
use rstest::{fixture, rstest};
use test_support::{LocaleDir, display_error_chain};

const EN_US: &str = "\
msgid: greet
msgstr: Hello, {0}!

msgid: bye
msgstr: Goodbye

ns: menu
msgid: open
msgstr: Open
msgid: count
msgstr: {0:>3} items
";

const ES_ES: &str = "\
msgid: greet
msgstr: ¡Hola, {0}!

ns: menu
msgid: open
msgstr: Abrir
";

#[fixture]
fn locales() -> Result<LocaleDir> {
    LocaleDir::new()?
        .with_locale("en-US", EN_US)?
        .with_locale("es-ES", ES_ES)
}

#[rstest]
fn translates_into_selected_locale(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    let store = LocaleStore::new(dir.config("es-ES"));
    ensure!(store.locale() == "es-ES", "locale {}", store.locale());
    ensure!(store.translate_namespaced("menu", "open") == "Abrir", "menu.open");
    ensure!(
        translate!(store, "greet", "Ana")? == "¡Hola, Ana!",
        "formatted greeting"
    );
    Ok(())
}

#[rstest]
fn missing_translation_falls_back_to_default_locale(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    let store = LocaleStore::new(dir.config("es-ES"));
    ensure!(store.translate("bye") == "Goodbye", "bye");
    ensure!(
        translate!(store, ns = "menu", "count", 7)? == "  7 items",
        "count"
    );
    ensure!(store.translate("unknown") == "", "unknown id");
    Ok(())
}

#[rstest]
fn missing_locale_file_selects_default_locale(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    let store = LocaleStore::new(dir.config("fr-FR"));
    ensure!(store.locale() == "en-US", "locale {}", store.locale());
    ensure!(store.translate("greet") == "Hello, {0}!", "greet");
    Ok(())
}

#[rstest]
fn ids_are_returned_without_a_default_file() -> Result<()> {
    let dir = LocaleDir::new()?.with_locale("es-ES", ES_ES)?;
    let store = LocaleStore::new(dir.config("es-ES"));
    ensure!(!store.has_default_file(), "default file should be absent");
    ensure!(store.translate("greet") == "¡Hola, {0}!", "translated id");
    ensure!(
        store.translate("Save {0}?") == "Save {0}?",
        "untranslated id is returned verbatim"
    );
    ensure!(
        translate!(store, "Save {0}?", "notes.txt")? == "Save notes.txt?",
        "id used as template"
    );
    Ok(())
}

#[rstest]
fn switching_locales_replaces_current_dictionary(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    let mut store = LocaleStore::new(dir.config("es-ES"));
    store.set_locale("en-US");
    ensure!(store.translate("greet") == "Hello, {0}!", "default greet");
    store.set_locale("es-ES");
    ensure!(store.translate("greet") == "¡Hola, {0}!", "spanish greet");
    store.set_locale("de-DE");
    ensure!(store.locale() == "en-US", "fallback locale {}", store.locale());
    ensure!(store.translate("greet") == "Hello, {0}!", "fallback greet");
    Ok(())
}

#[rstest]
fn reinit_picks_up_new_default_file() -> Result<()> {
    let dir = LocaleDir::new()?;
    let mut store = LocaleStore::new(dir.config("en-US"));
    ensure!(store.translate("bye") == "bye", "id before default exists");
    dir.write("en-US.locale", EN_US.as_bytes())?;
    ensure!(store.translate("bye") == "bye", "store is not reloaded lazily");
    store.init(dir.config("en-US"));
    ensure!(store.translate("bye") == "Goodbye", "default after init");
    Ok(())
}

#[rstest]
fn invalid_utf8_is_decoded_lossily() -> Result<()> {
    let dir = LocaleDir::new()?;
    dir.write("en-US.locale", b"msgid: bad\nmsgstr: caf\xe9\n")?;
    let store = LocaleStore::new(dir.config("en-US"));
    ensure!(
        store.translate("bad") == "caf\u{fffd}",
        "unexpected {:?}",
        store.translate("bad")
    );
    Ok(())
}

#[rstest]
fn formatting_errors_are_reported(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    let store = LocaleStore::new(dir.config("en-US"));
    let err = store
        .translate_args("greet", &[])
        .err()
        .context("expected a missing argument")?;
    ensure!(
        err == FormatError::MissingArgument {
            index: 0,
            supplied: 0
        },
        "unexpected error {err:?}"
    );
    ensure!(
        store.translate_args("bye", &[FormatArg::from("extra")])? == "Goodbye",
        "surplus arguments are ignored"
    );
    Ok(())
}

#[rstest]
fn diagnostics_are_kept_per_locale() -> Result<()> {
    let dir = LocaleDir::new()?
        .with_locale("en-US", "msgid: a\nmsgstr: b\nmsgstr: stray\n")?
        .with_locale("es-ES", "msgid: a\n# comment\nmsgstr: c\n")?;
    let store = LocaleStore::new(dir.config("es-ES"));
    let found: Vec<(String, usize, SkipReason)> = store
        .diagnostics()
        .map(|(locale, skip)| (locale.to_owned(), skip.line, skip.reason))
        .collect();
    ensure!(
        found
            == vec![
                ("en-US".to_owned(), 3, SkipReason::OrphanMsgStr),
                ("es-ES".to_owned(), 2, SkipReason::Unrecognized),
            ],
        "unexpected diagnostics {found:?}"
    );
    ensure!(store.translate("a") == "c", "msgstr after comment still pairs");
    Ok(())
}

#[rstest]
fn config_file_selects_locale_root() -> Result<()> {
    let dir = LocaleDir::new()?
        .with_locale("en-US", EN_US)?
        .with_locale("es-ES", ES_ES)?;
    dir.write(
        "parlance.toml",
        format!("locale_root = \"{}\"\nlocale = \"es-ES\"\n", dir.root()).as_bytes(),
    )?;
    let config = StoreConfig::load(&dir.path("parlance.toml"))?;
    ensure!(config == dir.config("es-ES"), "unexpected config {config:?}");
    let store = LocaleStore::new(config);
    ensure!(store.translate_namespaced("menu", "open") == "Abrir", "menu.open");
    Ok(())
}

#[rstest]
fn config_errors_name_the_file() -> Result<()> {
    let dir = LocaleDir::new()?;
    dir.write("parlance.toml", b"locale = 3\n")?;
    let path = dir.path("parlance.toml");
    let err = StoreConfig::load(&path)
        .err()
        .context("expected a parse error")?;
    ensure!(
        matches!(err, ConfigError::Parse { .. }),
        "unexpected error {err:?}"
    );
    let chain = display_error_chain(&err);
    ensure!(chain.contains(path.as_str()), "chain {chain} lacks path");
    Ok(())
}
