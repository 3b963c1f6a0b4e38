//! Test utilities for locale stores.
//!
//! Provides a temporary locale directory that integration tests populate
//! with locale files before opening a [`parlance::LocaleStore`] over it.

pub mod error;

pub use error::display_error_chain;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use parlance::StoreConfig;
use tempfile::TempDir;

/// Temporary directory holding locale files.
///
/// The directory is removed when the value is dropped.
#[derive(Debug)]
pub struct LocaleDir {
    _temp: TempDir,
    root: Utf8PathBuf,
    dir: Dir,
}

impl LocaleDir {
    /// Create an empty locale directory.
    ///
    /// # Errors
    ///
    /// Fails when the temporary directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp locale dir")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|p| anyhow::anyhow!("temp dir {} is not UTF-8", p.display()))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .with_context(|| format!("open {root}"))?;
        Ok(Self {
            _temp: temp,
            root,
            dir,
        })
    }

    /// Write `contents` to `<locale>.locale`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    pub fn with_locale(self, locale: &str, contents: &str) -> Result<Self> {
        self.write(&format!("{locale}.locale"), contents.as_bytes())?;
        Ok(self)
    }

    /// Write raw bytes to `file` relative to the locale root.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    pub fn write(&self, file: &str, bytes: &[u8]) -> Result<()> {
        self.dir
            .write(file, bytes)
            .with_context(|| format!("write {file} under {}", self.root))
    }

    /// Absolute path of the locale root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path of `file` inside the locale root.
    #[must_use]
    pub fn path(&self, file: &str) -> Utf8PathBuf {
        self.root.join(file)
    }

    /// Store configuration rooted at this directory selecting `locale`.
    #[must_use]
    pub fn config(&self, locale: &str) -> StoreConfig {
        StoreConfig::new(self.root.clone()).with_locale(locale)
    }
}
