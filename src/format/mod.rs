//! Positional template formatting.
//!
//! Templates use the positional subset of Rust's `format!` syntax, evaluated
//! at runtime against a slice of [`FormatArg`] values:
//!
//! - `{}` takes the next argument in order, `{N}` takes argument `N`.
//! - `{{` and `}}` produce literal braces.
//! - `{N:spec}` applies `[[fill]align][+][#][0][width][.precision][type]`,
//!   where `type` is one of `?`, `x`, `X`, `o`, `b`, `e` or `E`. Widths and
//!   precisions above 65535 are rejected, as in `std`. For numbers the `0`
//!   flag overrides fill and alignment.
//!
//! Surplus arguments are ignored. Every other mismatch between the template
//! and the arguments is reported as a [`FormatError`].

mod spec;

use thiserror::Error;

use self::spec::Spec;

/// A typed value substituted into a template.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    /// Text.
    Str(String),
    /// A single character.
    Char(char),
    /// A boolean rendered as `true` or `false`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating-point number.
    Float(f64),
}

impl FormatArg {
    /// Human-readable name of the argument's type.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Char(_) => "char",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<char> for FormatArg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for FormatArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident, $target:ty, $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_lossless!(Int, i64, i8, i16, i32, i64);
impl_from_lossless!(UInt, u64, u8, u16, u32, u64);

impl From<isize> for FormatArg {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::UInt)
    }
}

/// Errors raised when a template does not agree with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A placeholder refers to an argument that was not supplied.
    #[error("placeholder refers to argument {index} but only {supplied} supplied")]
    MissingArgument {
        /// Zero-based argument index requested by the template.
        index: usize,
        /// Number of arguments supplied.
        supplied: usize,
    },
    /// A `{` was never closed.
    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder {
        /// Byte offset of the opening brace.
        position: usize,
    },
    /// A lone `}` outside a placeholder.
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedCloseBrace {
        /// Byte offset of the closing brace.
        position: usize,
    },
    /// The placeholder index is not a non-negative integer.
    #[error("invalid argument index in placeholder '{placeholder}'")]
    InvalidIndex {
        /// The placeholder text including braces.
        placeholder: String,
    },
    /// The format specification could not be parsed.
    #[error("invalid format specification '{spec}'")]
    InvalidSpec {
        /// The specification text after the colon.
        spec: String,
    },
    /// The presentation type does not apply to the argument.
    #[error("format type '{spec_type}' cannot be applied to a {kind} argument")]
    TypeMismatch {
        /// The requested presentation type.
        spec_type: char,
        /// The argument's type name.
        kind: &'static str,
    },
    /// A precision was given for an argument that does not support one.
    #[error("precision is not allowed for a {kind} argument")]
    PrecisionNotAllowed {
        /// The argument's type name.
        kind: &'static str,
    },
}

/// A parsed `{index:spec}` placeholder.
struct Placeholder {
    index: usize,
    spec: Spec,
}

impl Placeholder {
    fn parse(body: &str, next_auto: &mut usize) -> Result<Self, FormatError> {
        let (index_text, spec_text) = body.split_once(':').unwrap_or((body, ""));
        let index = if index_text.is_empty() {
            let auto = *next_auto;
            *next_auto += 1;
            auto
        } else {
            index_text
                .parse::<usize>()
                .map_err(|_| FormatError::InvalidIndex {
                    placeholder: format!("{{{body}}}"),
                })?
        };
        Ok(Self {
            index,
            spec: Spec::parse(spec_text)?,
        })
    }
}

/// Substitute `args` into `template`.
///
/// # Errors
///
/// Returns a [`FormatError`] when the template is malformed, refers to an
/// argument that was not supplied, or requests a presentation the argument
/// type does not support.
///
/// # Examples
///
/// ```rust
/// use parlance::format::{FormatArg, FormatError, format};
///
/// let greeting = format("Hello, {0}", &[FormatArg::from("Ann")])?;
/// assert_eq!(greeting, "Hello, Ann");
///
/// let padded = format("[{:>5}] {:#x}", &[FormatArg::from(42), FormatArg::from(255_u32)])?;
/// assert_eq!(padded, "[   42] 0xff");
///
/// assert!(matches!(
///     format("Hello, {0}", &[]),
///     Err(FormatError::MissingArgument { index: 0, supplied: 0 })
/// ));
/// # Ok::<(), FormatError>(())
/// ```
pub fn format(template: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    let mut next_auto = 0;
    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }
                let mut body = String::new();
                let mut closed = false;
                for (_, next) in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    body.push(next);
                }
                if !closed {
                    return Err(FormatError::UnclosedPlaceholder { position });
                }
                let placeholder = Placeholder::parse(&body, &mut next_auto)?;
                let arg = args
                    .get(placeholder.index)
                    .ok_or(FormatError::MissingArgument {
                        index: placeholder.index,
                        supplied: args.len(),
                    })?;
                placeholder.spec.render(arg, &mut out)?;
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(FormatError::UnmatchedCloseBrace { position });
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests;
