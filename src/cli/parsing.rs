//! CLI parsing helpers for clap value parsers.

use crate::format::FormatArg;

/// Convert a command-line value into a typed [`FormatArg`].
///
/// `true` and `false` become booleans, values that parse as integers become
/// [`FormatArg::Int`] (or [`FormatArg::UInt`] above `i64::MAX`), values with
/// digits that parse as floats become [`FormatArg::Float`], and anything
/// else is passed through as text.
///
/// # Errors
///
/// Never fails; the `Result` satisfies clap's value parser signature.
///
/// # Examples
///
/// ```rust
/// use parlance::cli::parse_format_arg;
/// use parlance::format::FormatArg;
///
/// assert_eq!(parse_format_arg("42"), Ok(FormatArg::Int(42)));
/// assert_eq!(parse_format_arg("0.5"), Ok(FormatArg::Float(0.5)));
/// assert_eq!(parse_format_arg("inf"), Ok(FormatArg::from("inf")));
/// ```
pub fn parse_format_arg(s: &str) -> Result<FormatArg, String> {
    if let Ok(flag) = s.parse::<bool>() {
        return Ok(FormatArg::Bool(flag));
    }
    if let Ok(value) = s.parse::<i64>() {
        return Ok(FormatArg::Int(value));
    }
    if let Ok(value) = s.parse::<u64>() {
        return Ok(FormatArg::UInt(value));
    }
    if s.chars().any(|c| c.is_ascii_digit())
        && let Ok(value) = s.parse::<f64>()
    {
        return Ok(FormatArg::Float(value));
    }
    Ok(FormatArg::from(s))
}

/// Validate a locale name supplied via CLI flags.
///
/// Locale names become file names, so they must be non-empty and free of
/// path separators.
pub(super) fn parse_locale(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("locale must not be empty".to_owned());
    }
    if trimmed.contains(['/', '\\']) || trimmed == ".." {
        return Err(format!("locale '{trimmed}' must not contain path separators"));
    }
    Ok(trimmed.to_owned())
}
