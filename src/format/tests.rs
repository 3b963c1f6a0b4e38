//! Unit tests for positional formatting.

use super::*;
use rstest::rstest;

fn args(values: impl IntoIterator<Item = FormatArg>) -> Vec<FormatArg> {
    values.into_iter().collect()
}

#[rstest]
#[case("Hello, {0}", vec![FormatArg::from("Ann")], "Hello, Ann")]
#[case("{} and {}", vec![FormatArg::from("a"), FormatArg::from("b")], "a and b")]
#[case("{1} before {0}", vec![FormatArg::from("a"), FormatArg::from("b")], "b before a")]
#[case("{0}{0}", vec![FormatArg::from('x')], "xx")]
#[case("{{literal}} {}", vec![FormatArg::from(true)], "{literal} true")]
#[case("no placeholders", vec![], "no placeholders")]
#[case("unused {0}", vec![FormatArg::from(1), FormatArg::from(2)], "unused 1")]
#[case("{} {0} {}", vec![FormatArg::from("a"), FormatArg::from("b")], "a a b")]
fn substitutes_positional_arguments(
    #[case] template: &str,
    #[case] values: Vec<FormatArg>,
    #[case] expected: &str,
) {
    assert_eq!(format(template, &values).as_deref(), Ok(expected));
}

#[rstest]
#[case("{:>5}", FormatArg::from(42), "   42")]
#[case("{:<5}|", FormatArg::from(42), "42   |")]
#[case("{:^6}", FormatArg::from("ab"), "  ab  ")]
#[case("{:*^7}", FormatArg::from("ab"), "**ab***")]
#[case("{:5}|", FormatArg::from("ab"), "ab   |")]
#[case("{:5}", FormatArg::from(7_u8), "    7")]
#[case("{:05}", FormatArg::from(-42), "-0042")]
#[case("{:+}", FormatArg::from(3), "+3")]
#[case("{:x}", FormatArg::from(255), "ff")]
#[case("{:#X}", FormatArg::from(255_u64), "0xFF")]
#[case("{:#010b}", FormatArg::from(5_u8), "0b00000101")]
#[case("{:o}", FormatArg::from(8), "10")]
#[case("{:.2}", FormatArg::from(1.23456), "1.23")]
#[case("{:8.3}", FormatArg::from(-2.5), "  -2.500")]
#[case("{:e}", FormatArg::from(1500.0), "1.5e3")]
#[case("{:.3}", FormatArg::from("truncate"), "tru")]
#[case("{:?}", FormatArg::from("quoted"), "\"quoted\"")]
#[case("{:?}", FormatArg::from(1.0), "1.0")]
#[case("{:<05}", FormatArg::from(1), "00001")]
#[case("{:*>+06}", FormatArg::from(7), "+00007")]
fn applies_format_specifications(
    #[case] template: &str,
    #[case] value: FormatArg,
    #[case] expected: &str,
) {
    assert_eq!(format(template, &args([value])).as_deref(), Ok(expected));
}

#[rstest]
#[case("Hello, {0}", 0, FormatError::MissingArgument { index: 0, supplied: 0 })]
#[case("{} {} {}", 2, FormatError::MissingArgument { index: 2, supplied: 2 })]
#[case("{3}", 1, FormatError::MissingArgument { index: 3, supplied: 1 })]
#[case("oops {0", 1, FormatError::UnclosedPlaceholder { position: 5 })]
#[case("oops }", 1, FormatError::UnmatchedCloseBrace { position: 5 })]
#[case("{name}", 1, FormatError::InvalidIndex { placeholder: "{name}".to_owned() })]
#[case("{0:.}", 1, FormatError::InvalidSpec { spec: ".".to_owned() })]
#[case("{0:z}", 1, FormatError::InvalidSpec { spec: "z".to_owned() })]
#[case("{0:65536}", 1, FormatError::InvalidSpec { spec: "65536".to_owned() })]
#[case(
    "{0:18446744073709551615}",
    1,
    FormatError::InvalidSpec { spec: "18446744073709551615".to_owned() }
)]
#[case("{0:.70000}", 1, FormatError::InvalidSpec { spec: ".70000".to_owned() })]
fn reports_template_errors(
    #[case] template: &str,
    #[case] supplied: usize,
    #[case] expected: FormatError,
) {
    let values = args(std::iter::repeat_n(FormatArg::from("v"), supplied));
    assert_eq!(format(template, &values), Err(expected));
}

#[rstest]
#[case("{:x}", FormatArg::from("text"), FormatError::TypeMismatch { spec_type: 'x', kind: "string" })]
#[case("{:b}", FormatArg::from(1.5), FormatError::TypeMismatch { spec_type: 'b', kind: "float" })]
#[case("{:e}", FormatArg::from(false), FormatError::TypeMismatch { spec_type: 'e', kind: "bool" })]
#[case("{:.2}", FormatArg::from(10), FormatError::PrecisionNotAllowed { kind: "integer" })]
fn reports_type_mismatches(
    #[case] template: &str,
    #[case] value: FormatArg,
    #[case] expected: FormatError,
) {
    assert_eq!(format(template, &args([value])), Err(expected));
}

#[rstest]
fn oversized_float_precision_is_rejected() {
    assert_eq!(
        format("{0:.70000}", &args([FormatArg::from(1.5)])),
        Err(FormatError::InvalidSpec {
            spec: ".70000".to_owned()
        })
    );
}

#[rstest]
fn multibyte_text_pads_by_characters() {
    assert_eq!(
        format("[{:>4}]", &args([FormatArg::from("né")])).as_deref(),
        Ok("[  né]")
    );
}

#[rstest]
fn conversions_pick_matching_variants() {
    assert_eq!(FormatArg::from(3_usize), FormatArg::UInt(3));
    assert_eq!(FormatArg::from(-3_isize), FormatArg::Int(-3));
    assert_eq!(FormatArg::from(2.5_f32), FormatArg::Float(2.5));
    assert_eq!(FormatArg::from(String::from("s")).kind(), "string");
}
