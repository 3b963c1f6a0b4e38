//! Error formatting helpers for assertions on error chains.

use std::error::Error;

/// Render an error followed by each of its sources, separated by `": "`.
///
/// Useful for asserting on [`parlance::config::ConfigError`] values, whose
/// `Display` only describes the outermost failure.
pub fn display_error_chain(err: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(err), |&current| current.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn joins_sources_outermost_first() {
        #[derive(Debug)]
        struct Outer(io::Error);
        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("outer")
            }
        }
        impl Error for Outer {
            fn source(&self) -> Option<&(dyn Error + 'static)> {
                Some(&self.0)
            }
        }
        let err = Outer(io::Error::other("inner"));
        assert_eq!(display_error_chain(&err), "outer: inner");
    }
}
