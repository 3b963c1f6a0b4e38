//! End-to-end tests for the `parlance` binary using `assert_cmd`.

use anyhow::{Context, Result};
use assert_cmd::Command;
use insta::{Settings, assert_snapshot};
use predicates::prelude::*;
use rstest::{fixture, rstest};
use test_support::LocaleDir;

#[fixture]
fn locales() -> Result<LocaleDir> {
    LocaleDir::new()?
        .with_locale(
            "en-US",
            "msgid: greet\nmsgstr: Hello, {0}!\nmsgid: range\nmsgstr: {0} to {1}\nmsgid: total\nmsgstr: {0:.2} EUR\nns: menu\nmsgid: open\nmsgstr: Open\nmsgid: quit\nmsgstr: Quit\n",
        )?
        .with_locale(
            "es-ES",
            "msgid: greet\nmsgstr: ¡Hola, {0}!\nns: menu\nmsgid: open\nmsgstr: Abrir\n",
        )
}

fn parlance(dir: &LocaleDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("parlance").context("locate parlance binary")?;
    cmd.arg("--root").arg(dir.root().as_str());
    Ok(cmd)
}

#[rstest]
fn translate_prints_formatted_message(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    parlance(&dir)?
        .args(["--locale", "es-ES", "translate", "greet", "Ana"])
        .assert()
        .success()
        .stdout("¡Hola, Ana!\n");
    parlance(&dir)?
        .args(["--locale", "es-ES", "translate", "total", "3.456"])
        .assert()
        .success()
        .stdout("3.46 EUR\n");
    Ok(())
}

#[rstest]
fn translate_reads_settings_from_config_file(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    dir.write(
        "parlance.toml",
        format!("locale_root = \"{}\"\nlocale = \"es-ES\"\n", dir.root()).as_bytes(),
    )?;
    Command::cargo_bin("parlance")
        .context("locate parlance binary")?
        .arg("--config")
        .arg(dir.path("parlance.toml").as_str())
        .args(["translate", "--namespace", "menu", "open"])
        .assert()
        .success()
        .stdout("Abrir\n");
    Ok(())
}

#[rstest]
fn translate_fails_on_missing_arguments(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    parlance(&dir)?
        .args(["translate", "range", "1"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to format message 'range'"));
    Ok(())
}

#[rstest]
fn verbose_logging_reports_locale_fallback(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    parlance(&dir)?
        .args(["--verbose", "--locale", "fr-FR", "translate", "greet", "Zoé"])
        .assert()
        .success()
        .stdout("Hello, Zoé!\n")
        .stderr(predicate::str::contains("requested locale unavailable"));
    Ok(())
}

#[rstest]
fn list_snapshot(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    let output = parlance(&dir)?
        .args(["--locale", "es-ES", "list"])
        .output()
        .context("run parlance list")?;
    anyhow::ensure!(output.status.success(), "list should succeed");
    let stdout = String::from_utf8(output.stdout).context("stdout is UTF-8")?;

    let mut settings = Settings::new();
    settings.set_snapshot_path(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/snapshots/cli"));
    settings.bind(|| {
        assert_snapshot!("list_es_es", stdout);
    });
    Ok(())
}

#[rstest]
fn check_lists_skipped_lines(locales: Result<LocaleDir>) -> Result<()> {
    let dir = locales?;
    dir.write("draft.locale", b"msgid: a\nmsgid: b\nmsgstr: B\nnotes\n")?;
    let file = dir.path("draft.locale");
    parlance(&dir)?
        .arg("check")
        .arg(file.as_str())
        .assert()
        .success()
        .stdout(format!(
            "{file}:1: msgid without msgstr: msgid: a\n{file}:4: unrecognized line: notes\n{file}: 1 message(s), 2 dropped line(s)\n"
        ));
    parlance(&dir)?
        .args(["check", "--strict"])
        .arg(file.as_str())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 locale line(s) would be dropped"));
    Ok(())
}

#[rstest]
#[case(&["translate"])]
#[case(&["--locale", "../secrets", "list"])]
#[case(&["check"])]
fn rejects_invalid_usage(#[case] args: &[&str]) -> Result<()> {
    Command::cargo_bin("parlance")
        .context("locate parlance binary")?
        .args(args)
        .assert()
        .failure()
        .code(2);
    Ok(())
}
