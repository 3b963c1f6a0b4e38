//! Line-oriented parser for locale dictionary files.
//!
//! A locale file is read one line at a time. Three directives are
//! recognised, each of which must start at the first column:
//!
//! ```text
//! ns: menu
//! msgid: open
//! msgstr: Abrir
//! ```
//!
//! - `ns:` selects the namespace for every following message until the next
//!   `ns:` line. An empty name selects [`DEFAULT_NAMESPACE`].
//! - `msgid:` declares the id of the next message.
//! - `msgstr:` supplies the template for the pending `msgid:`.
//!
//! Leading spaces after the directive prefix are dropped; the rest of the
//! line is kept verbatim. Parsing never fails: malformed sequences are
//! skipped and reported through [`ParseOutcome::diagnostics`] so a damaged
//! file degrades to missing translations instead of an error.

use std::fmt;

use crate::dictionary::{DEFAULT_NAMESPACE, Dictionary};

const NAMESPACE_PREFIX: &str = "ns:";
const MSGID_PREFIX: &str = "msgid:";
const MSGSTR_PREFIX: &str = "msgstr:";

/// Why a line did not contribute a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// A `msgid:` was never followed by a `msgstr:`.
    DanglingMsgId,
    /// A `msgstr:` appeared without a pending `msgid:`.
    OrphanMsgStr,
    /// The line is not a known directive.
    Unrecognized,
    /// A later `msgstr:` replaced an earlier value for the same id.
    Overwritten,
}

impl SkipReason {
    /// Whether the diagnostic indicates lost content rather than an
    /// informational note.
    #[must_use]
    pub const fn is_lossy(self) -> bool {
        !matches!(self, Self::Overwritten)
    }

    /// Stable label used in tool output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DanglingMsgId => "msgid without msgstr",
            Self::OrphanMsgStr => "msgstr without msgid",
            Self::Unrecognized => "unrecognized line",
            Self::Overwritten => "duplicate msgid overwritten",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A line the parser dropped or flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// One-based line number in the source text.
    pub line: usize,
    /// Raw line content without its terminator.
    pub text: String,
    /// Classification of the problem.
    pub reason: SkipReason,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.line, self.reason, self.text)
    }
}

/// Result of parsing a locale file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Messages recovered from the input.
    pub dictionary: Dictionary,
    /// Lines that were skipped or flagged, in input order.
    pub diagnostics: Vec<SkippedLine>,
}

impl ParseOutcome {
    /// Discard the diagnostics and keep the dictionary.
    #[must_use]
    pub fn into_dictionary(self) -> Dictionary {
        self.dictionary
    }

    /// Whether any diagnostic reports lost content.
    #[must_use]
    pub fn has_lossy_diagnostics(&self) -> bool {
        self.diagnostics.iter().any(|skip| skip.reason.is_lossy())
    }
}

/// A `msgid:` waiting for its `msgstr:`.
struct PendingId {
    id: String,
    line: usize,
    text: String,
}

#[derive(Default)]
struct ParserState {
    namespace: Option<String>,
    pending: Option<PendingId>,
    outcome: ParseOutcome,
}

impl ParserState {
    fn skip(&mut self, line: usize, text: &str, reason: SkipReason) {
        tracing::trace!(line, reason = %reason, "skipping locale line");
        self.outcome.diagnostics.push(SkippedLine {
            line,
            text: text.to_owned(),
            reason,
        });
    }

    fn drop_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.skip(pending.line, &pending.text, SkipReason::DanglingMsgId);
        }
    }

    fn namespace(&mut self, name: &str) {
        self.drop_pending();
        self.namespace = (!name.is_empty()).then(|| name.to_owned());
    }

    fn msgid(&mut self, line: usize, text: &str, id: &str) {
        self.drop_pending();
        self.pending = Some(PendingId {
            id: id.to_owned(),
            line,
            text: text.to_owned(),
        });
    }

    fn msgstr(&mut self, line: usize, text: &str, template: &str) {
        let Some(pending) = self.pending.take() else {
            self.skip(line, text, SkipReason::OrphanMsgStr);
            return;
        };
        let namespace = self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE);
        if self
            .outcome
            .dictionary
            .insert(namespace, pending.id, template)
            .is_some()
        {
            self.skip(line, text, SkipReason::Overwritten);
        }
    }

    fn finish(mut self) -> ParseOutcome {
        self.drop_pending();
        self.outcome.diagnostics.sort_by_key(|skip| skip.line);
        self.outcome
    }
}

/// Strip `prefix` and any spaces that follow it.
fn directive<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)
        .map(|rest| rest.trim_start_matches(' '))
}

/// Parse locale file contents into a [`Dictionary`].
///
/// # Examples
///
/// ```rust
/// use parlance::dictionary::DEFAULT_NAMESPACE;
/// use parlance::parser::parse_dictionary;
///
/// let outcome = parse_dictionary("msgid: hello\nmsgstr: world\nns: greetings\nmsgid: hi\nmsgstr: yo\n");
/// assert_eq!(outcome.dictionary.get(DEFAULT_NAMESPACE, "hello"), Some("world"));
/// assert_eq!(outcome.dictionary.get("greetings", "hi"), Some("yo"));
/// assert!(outcome.diagnostics.is_empty());
/// ```
#[must_use]
pub fn parse_dictionary(contents: &str) -> ParseOutcome {
    let mut state = ParserState::default();
    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim_end_matches('\r');
        if let Some(name) = directive(text, NAMESPACE_PREFIX) {
            state.namespace(name);
        } else if let Some(id) = directive(text, MSGID_PREFIX) {
            state.msgid(line, text, id);
        } else if let Some(template) = directive(text, MSGSTR_PREFIX) {
            state.msgstr(line, text, template);
        } else if !text.trim().is_empty() {
            state.skip(line, text, SkipReason::Unrecognized);
        }
    }
    state.finish()
}
