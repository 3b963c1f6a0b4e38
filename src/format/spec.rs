//! Format specification parsing and rendering.

use super::{FormatArg, FormatError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '<' => Some(Self::Left),
            '^' => Some(Self::Center),
            '>' => Some(Self::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presentation {
    Display,
    Debug,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
    LowerExp,
    UpperExp,
}

impl Presentation {
    fn parse(text: &str) -> Option<Self> {
        Some(match text {
            "" => Self::Display,
            "?" => Self::Debug,
            "x" => Self::LowerHex,
            "X" => Self::UpperHex,
            "o" => Self::Octal,
            "b" => Self::Binary,
            "e" => Self::LowerExp,
            "E" => Self::UpperExp,
            _ => return None,
        })
    }

    const fn symbol(self) -> char {
        match self {
            Self::Display => ' ',
            Self::Debug => '?',
            Self::LowerHex => 'x',
            Self::UpperHex => 'X',
            Self::Octal => 'o',
            Self::Binary => 'b',
            Self::LowerExp => 'e',
            Self::UpperExp => 'E',
        }
    }
}

/// Rendered pieces of one argument before padding.
struct Rendered {
    sign: &'static str,
    prefix: &'static str,
    digits: String,
    numeric: bool,
}

impl Rendered {
    const fn text(digits: String) -> Self {
        Self {
            sign: "",
            prefix: "",
            digits,
            numeric: false,
        }
    }

    fn width(&self) -> usize {
        self.sign.len() + self.prefix.len() + self.digits.chars().count()
    }
}

/// Parsed `[[fill]align][+][#][0][width][.precision][type]` specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Spec {
    fill: char,
    align: Option<Align>,
    plus: bool,
    alternate: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    presentation: Presentation,
}

impl Default for Spec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            plus: false,
            alternate: false,
            zero: false,
            width: None,
            precision: None,
            presentation: Presentation::Display,
        }
    }
}

/// Largest width or precision accepted, matching `std::fmt`.
const MAX_COUNT: usize = 65_535;

fn take_number(chars: &[char], pos: &mut usize) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.get(*pos).and_then(|ch| ch.to_digit(10)) {
        let current = value.unwrap_or(0);
        value = Some(
            current
                .checked_mul(10)
                .and_then(|scaled| scaled.checked_add(usize::try_from(digit).ok()?))?,
        );
        *pos += 1;
    }
    value
}

impl Spec {
    pub(super) fn parse(text: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidSpec {
            spec: text.to_owned(),
        };
        let chars: Vec<char> = text.chars().collect();
        let mut spec = Self::default();
        let mut pos = 0;

        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            spec.fill = chars.first().copied().ok_or_else(invalid)?;
            spec.align = Some(align);
            pos = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            spec.align = Some(align);
            pos = 1;
        }
        if chars.get(pos) == Some(&'+') {
            spec.plus = true;
            pos += 1;
        }
        if chars.get(pos) == Some(&'#') {
            spec.alternate = true;
            pos += 1;
        }
        if chars.get(pos) == Some(&'0') {
            spec.zero = true;
            pos += 1;
        }
        spec.width = take_number(&chars, &mut pos);
        if chars.get(pos) == Some(&'.') {
            pos += 1;
            spec.precision = Some(take_number(&chars, &mut pos).ok_or_else(invalid)?);
        }
        if [spec.width, spec.precision]
            .into_iter()
            .flatten()
            .any(|count| count > MAX_COUNT)
        {
            return Err(invalid());
        }
        let rest: String = chars.iter().skip(pos).collect();
        spec.presentation = Presentation::parse(&rest).ok_or_else(invalid)?;
        Ok(spec)
    }

    pub(super) fn render(&self, arg: &FormatArg, out: &mut String) -> Result<(), FormatError> {
        let rendered = match arg {
            FormatArg::Str(text) => self.render_text(arg, text, &format!("{text:?}"))?,
            FormatArg::Char(ch) => self.render_text(arg, &ch.to_string(), &format!("{ch:?}"))?,
            FormatArg::Bool(flag) => {
                let text = flag.to_string();
                self.render_text(arg, &text, &text)?
            }
            FormatArg::Int(value) => {
                self.render_integer(arg, value.is_negative(), value.unsigned_abs(), *value)?
            }
            FormatArg::UInt(value) => self.render_integer(arg, false, *value, *value)?,
            FormatArg::Float(value) => self.render_float(arg, *value)?,
        };
        self.pad(&rendered, out);
        Ok(())
    }

    fn mismatch(&self, arg: &FormatArg) -> FormatError {
        FormatError::TypeMismatch {
            spec_type: self.presentation.symbol(),
            kind: arg.kind(),
        }
    }

    fn render_text(
        &self,
        arg: &FormatArg,
        display: &str,
        debug: &str,
    ) -> Result<Rendered, FormatError> {
        let text = match self.presentation {
            Presentation::Display => display,
            Presentation::Debug => debug,
            _ => return Err(self.mismatch(arg)),
        };
        let digits = match self.precision {
            Some(limit) => text.chars().take(limit).collect(),
            None => text.to_owned(),
        };
        Ok(Rendered::text(digits))
    }

    fn render_integer<T>(
        &self,
        arg: &FormatArg,
        negative: bool,
        magnitude: u64,
        raw: T,
    ) -> Result<Rendered, FormatError>
    where
        T: std::fmt::LowerHex + std::fmt::UpperHex + std::fmt::Octal + std::fmt::Binary,
    {
        if self.precision.is_some() {
            return Err(FormatError::PrecisionNotAllowed { kind: arg.kind() });
        }
        let (prefix, digits, signed) = match self.presentation {
            Presentation::Display | Presentation::Debug => ("", magnitude.to_string(), true),
            Presentation::LowerExp => ("", format!("{magnitude:e}"), true),
            Presentation::UpperExp => ("", format!("{magnitude:E}"), true),
            Presentation::LowerHex => ("0x", format!("{raw:x}"), false),
            Presentation::UpperHex => ("0x", format!("{raw:X}"), false),
            Presentation::Octal => ("0o", format!("{raw:o}"), false),
            Presentation::Binary => ("0b", format!("{raw:b}"), false),
        };
        let sign = if signed && negative {
            "-"
        } else if self.plus && !negative {
            "+"
        } else {
            ""
        };
        Ok(Rendered {
            sign,
            prefix: if self.alternate { prefix } else { "" },
            digits,
            numeric: true,
        })
    }

    fn render_float(&self, arg: &FormatArg, value: f64) -> Result<Rendered, FormatError> {
        if value.is_nan() {
            return Ok(Rendered {
                sign: "",
                prefix: "",
                digits: "NaN".to_owned(),
                numeric: true,
            });
        }
        let magnitude = value.abs();
        let digits = match (self.presentation, self.precision) {
            (Presentation::Display, None) => format!("{magnitude}"),
            (Presentation::Display, Some(precision)) => format!("{magnitude:.precision$}"),
            (Presentation::Debug, None) => format!("{magnitude:?}"),
            (Presentation::Debug, Some(precision)) => format!("{magnitude:.precision$?}"),
            (Presentation::LowerExp, None) => format!("{magnitude:e}"),
            (Presentation::LowerExp, Some(precision)) => format!("{magnitude:.precision$e}"),
            (Presentation::UpperExp, None) => format!("{magnitude:E}"),
            (Presentation::UpperExp, Some(precision)) => format!("{magnitude:.precision$E}"),
            _ => return Err(self.mismatch(arg)),
        };
        let sign = if value.is_sign_negative() {
            "-"
        } else if self.plus {
            "+"
        } else {
            ""
        };
        Ok(Rendered {
            sign,
            prefix: "",
            digits,
            numeric: true,
        })
    }

    fn pad(&self, rendered: &Rendered, out: &mut String) {
        let padding = self
            .width
            .map_or(0, |width| width.saturating_sub(rendered.width()));
        if self.zero && rendered.numeric {
            out.push_str(rendered.sign);
            out.push_str(rendered.prefix);
            out.extend(std::iter::repeat_n('0', padding));
            out.push_str(&rendered.digits);
            return;
        }
        let align = self.align.unwrap_or(if rendered.numeric {
            Align::Right
        } else {
            Align::Left
        });
        let (before, after) = match align {
            Align::Left => (0, padding),
            Align::Right => (padding, 0),
            Align::Center => {
                let before = padding.div_euclid(2);
                (before, padding - before)
            }
        };
        out.extend(std::iter::repeat_n(self.fill, before));
        out.push_str(rendered.sign);
        out.push_str(rendered.prefix);
        out.push_str(&rendered.digits);
        out.extend(std::iter::repeat_n(self.fill, after));
    }
}
