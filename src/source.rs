//! File access used to load locale dictionaries.
//!
//! [`LocaleStore`](crate::store::LocaleStore) never touches the file system
//! directly. It asks a [`LocaleSource`] whether a locale file exists and for
//! its contents, which lets hosts serve catalogues from memory (for example
//! files embedded with `include_str!`) and lets tests avoid temporary
//! directories.

use std::collections::HashMap;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};

/// Read-only access to locale files.
///
/// Files are addressed by the locale root directory and a file name
/// relative to it.
pub trait LocaleSource {
    /// Whether a regular file named `file` exists under `root`.
    fn exists(&self, root: &Utf8Path, file: &Utf8Path) -> bool;

    /// Read the file named `file` under `root` as text.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the file cannot be opened or read.
    fn read_to_string(&self, root: &Utf8Path, file: &Utf8Path) -> io::Result<String>;
}

impl<S: LocaleSource + ?Sized> LocaleSource for &S {
    fn exists(&self, root: &Utf8Path, file: &Utf8Path) -> bool {
        (**self).exists(root, file)
    }

    fn read_to_string(&self, root: &Utf8Path, file: &Utf8Path) -> io::Result<String> {
        (**self).read_to_string(root, file)
    }
}

impl<S: LocaleSource + ?Sized> LocaleSource for Box<S> {
    fn exists(&self, root: &Utf8Path, file: &Utf8Path) -> bool {
        (**self).exists(root, file)
    }

    fn read_to_string(&self, root: &Utf8Path, file: &Utf8Path) -> io::Result<String> {
        (**self).read_to_string(root, file)
    }
}

/// Locale files on the local file system.
///
/// Each access opens the locale root as a capability directory and resolves
/// the file name inside it, so a locale name such as `../secret` cannot reach
/// outside the root. The same applies to symbolic links: a locale file that
/// links to a target outside the root is reported as missing, so the store
/// falls back to the default locale. Links that stay inside the root are
/// followed. Content that is not valid UTF-8 is decoded lossily.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystem;

fn normalise_root(root: &Utf8Path) -> &Utf8Path {
    if root.as_str().is_empty() {
        Utf8Path::new(".")
    } else {
        root
    }
}

fn open_root(root: &Utf8Path) -> io::Result<Dir> {
    Dir::open_ambient_dir(normalise_root(root), ambient_authority())
}

impl LocaleSource for FileSystem {
    fn exists(&self, root: &Utf8Path, file: &Utf8Path) -> bool {
        open_root(root)
            .and_then(|dir| dir.metadata(file))
            .is_ok_and(|metadata| metadata.is_file())
    }

    fn read_to_string(&self, root: &Utf8Path, file: &Utf8Path) -> io::Result<String> {
        let bytes = open_root(root)?.read(file)?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
    }
}

/// Locale files held in memory, keyed by their joined path.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8Path;
/// use parlance::source::{LocaleSource, MemorySource};
///
/// let source = MemorySource::new().with_file("locales/es-ES.locale", "msgid: hi\nmsgstr: hola\n");
/// let root = Utf8Path::new("locales");
/// assert!(source.exists(root, Utf8Path::new("es-ES.locale")));
/// assert!(!source.exists(root, Utf8Path::new("fr-FR.locale")));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: HashMap<Utf8PathBuf, String>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the file at `path`.
    pub fn insert(&mut self, path: impl Into<Utf8PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder form of [`MemorySource::insert`].
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Remove the file at `path`, returning its contents.
    pub fn remove(&mut self, path: &Utf8Path) -> Option<String> {
        self.files.remove(path)
    }
}

impl LocaleSource for MemorySource {
    fn exists(&self, root: &Utf8Path, file: &Utf8Path) -> bool {
        self.files.contains_key(&root.join(file))
    }

    fn read_to_string(&self, root: &Utf8Path, file: &Utf8Path) -> io::Result<String> {
        let path = root.join(file);
        self.files.get(&path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no locale file at '{path}'"))
        })
    }
}
