//! Error types for the runner module.
//!
//! This submodule isolates derive-macro-affected code to scope lint suppressions
//! narrowly.

// Scoped suppression for version-dependent lint false positives from
// miette/thiserror derive macros.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use crate::format::FormatError;
use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised during command execution.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// The resolved template did not accept the supplied arguments.
    #[error("failed to format message '{id}'")]
    #[diagnostic(
        code(parlance::runner::format),
        help("check the placeholders in the template against the arguments given")
    )]
    Format {
        /// Message id that was translated.
        id: String,
        /// Formatting failure.
        #[source]
        source: FormatError,
    },

    /// A locale file path has no file name component.
    #[error("'{path}' does not name a file")]
    #[diagnostic(code(parlance::runner::not_a_file))]
    NotAFile {
        /// The offending path.
        path: Utf8PathBuf,
    },

    /// `check --strict` found lines that would be dropped.
    #[error("{count} locale line(s) would be dropped")]
    #[diagnostic(code(parlance::runner::check_failed))]
    CheckFailed {
        /// Number of lossy diagnostics across all checked files.
        count: usize,
    },
}
