//! Two-level message dictionary keyed by namespace and message id.
//!
//! A [`Dictionary`] maps `namespace -> (message id -> template)`. Messages
//! declared without an explicit namespace live under [`DEFAULT_NAMESPACE`].
//! Values are stored exactly as parsed; callers only ever receive borrowed
//! views or owned copies of a template.

use itertools::Itertools;
use std::collections::HashMap;

/// Namespace used for messages declared without an `ns:` directive.
pub const DEFAULT_NAMESPACE: &str = "default";

/// A borrowed view of one dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry<'a> {
    /// Namespace the message belongs to.
    pub namespace: &'a str,
    /// Message identifier within the namespace.
    pub id: &'a str,
    /// Template text for the message.
    pub template: &'a str,
}

/// Messages for a single locale, grouped by namespace.
///
/// # Examples
///
/// ```rust
/// use parlance::dictionary::{DEFAULT_NAMESPACE, Dictionary};
///
/// let mut dictionary = Dictionary::new();
/// dictionary.insert(DEFAULT_NAMESPACE, "hello", "hola");
/// dictionary.insert("menu", "open", "abrir");
///
/// assert_eq!(dictionary.get(DEFAULT_NAMESPACE, "hello"), Some("hola"));
/// assert_eq!(dictionary.get("menu", "hello"), None);
/// assert_eq!(dictionary.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `template` for `id` in `namespace`.
    ///
    /// Returns the template previously stored under the same key, if any.
    /// Later insertions replace earlier ones.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        id: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(id.into(), template.into())
    }

    /// Look up the template for `id` in `namespace`.
    #[must_use]
    pub fn get(&self, namespace: &str, id: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)
            .and_then(|messages| messages.get(id))
            .map(String::as_str)
    }

    /// Whether `namespace` holds a template for `id`.
    #[must_use]
    pub fn contains(&self, namespace: &str, id: &str) -> bool {
        self.get(namespace, id).is_some()
    }

    /// Total number of messages across all namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.values().map(HashMap::len).sum()
    }

    /// Whether the dictionary holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.values().all(HashMap::is_empty)
    }

    /// Remove every message.
    pub fn clear(&mut self) {
        self.namespaces.clear();
    }

    /// Namespaces that hold at least one message, sorted.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(name, _)| name.as_str())
            .sorted_unstable()
    }

    /// All entries sorted by namespace, then message id.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.namespaces
            .iter()
            .flat_map(|(namespace, messages)| {
                messages.iter().map(move |(id, template)| Entry {
                    namespace: namespace.as_str(),
                    id: id.as_str(),
                    template: template.as_str(),
                })
            })
            .sorted_unstable()
    }
}
