// Copyright 2024 The Strata Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! Per-type rendering: turns a resolved [`Value`] and [`Specifier`] into
//! text written to a [`Sink`].
//!
//! Floating-point presentation delegates to Rust's own `core::fmt` number
//! formatting (`{}`, `{:e}`, `{:.N}`) rather than reimplementing Grisu/Ryu —
//! the one presentation Rust has no native form for, hex float, is hand
//! rolled from the value's bit pattern.

use crate::specifier::{Alignment, Case, PresentationType, Sign, Specifier};
use crate::unicode::Decoder;
use crate::value::{StringValue, Value};
use status::Result;

/// A destination for rendered text. Implemented for [`String`] directly,
/// and for any [`stream::Write`] through [`WriteSink`].
pub trait Sink {
    /// Appends `s` to the output.
    fn write_str(&mut self, s: &str) -> Result<()>;
}

impl Sink for String {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }
}

/// Adapts any [`stream::Write`] byte sink into a [`Sink`].
pub struct WriteSink<'a, W: stream::Write> {
    writer: &'a mut W,
}

impl<'a, W: stream::Write> WriteSink<'a, W> {
    /// Wraps `writer` as a [`Sink`].
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: stream::Write> Sink for WriteSink<'a, W> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.writer.write_all(s.as_bytes())
    }
}

/// The width and precision a replacement field resolved to, after any
/// nested `{}`/`{n}` argument has been looked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolved {
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

/// Carries the active specifier and output sink through a user-defined
/// value's own [`Format`](crate::value::Format) implementation.
pub struct Renderer<'a> {
    sink: &'a mut dyn Sink,
    specifier: &'a Specifier,
    resolved: Resolved,
}

impl<'a> Renderer<'a> {
    /// The specifier in effect for the field currently being rendered.
    pub fn specifier(&self) -> &Specifier {
        self.specifier
    }

    /// The resolved width, if any.
    pub fn width(&self) -> Option<usize> {
        self.resolved.width
    }

    /// The resolved precision, if any.
    pub fn precision(&self) -> Option<usize> {
        self.resolved.precision
    }

    /// Writes `s` directly to the output, without applying alignment.
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.sink.write_str(s)
    }

    /// Writes `s` to the output, applying this field's fill, alignment, and
    /// width, with strings aligning left by default.
    pub fn write_aligned(&mut self, s: &str) -> Result<()> {
        pad_and_write(self.sink, s, self.specifier, self.resolved.width, Alignment::Left)
    }
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

fn pad_and_write(
    sink: &mut dyn Sink,
    body: &str,
    specifier: &Specifier,
    width: Option<usize>,
    default_alignment: Alignment,
) -> Result<()> {
    let width = width.unwrap_or(0);
    let len = char_count(body);

    if len >= width {
        return sink.write_str(body);
    }

    let fill = specifier.fill.unwrap_or(' ');
    let alignment = if specifier.alignment == Alignment::Default {
        default_alignment
    } else {
        specifier.alignment
    };

    let total_padding = width - len;
    let (left, right) = match alignment {
        Alignment::Left => (0, total_padding),
        Alignment::Right | Alignment::Default => (total_padding, 0),
        Alignment::Center => (total_padding / 2, total_padding - total_padding / 2),
    };

    for _ in 0..left {
        sink.write_str(&fill.to_string())?;
    }
    sink.write_str(body)?;
    for _ in 0..right {
        sink.write_str(&fill.to_string())?;
    }
    Ok(())
}

fn zero_pad_and_write(
    sink: &mut dyn Sink,
    sign: &str,
    prefix: &str,
    digits: &str,
    specifier: &Specifier,
    width: Option<usize>,
) -> Result<()> {
    let width = width.unwrap_or(0);
    let body_len = sign.len() + prefix.len() + digits.chars().count();

    if specifier.zero_padding && specifier.alignment == Alignment::Default && body_len < width {
        sink.write_str(sign)?;
        sink.write_str(prefix)?;
        for _ in 0..(width - body_len) {
            sink.write_str("0")?;
        }
        return sink.write_str(digits);
    }

    let mut combined = String::with_capacity(body_len);
    combined.push_str(sign);
    combined.push_str(prefix);
    combined.push_str(digits);
    pad_and_write(sink, &combined, specifier, Some(width), Alignment::Right)
}

fn sign_str(is_negative: bool, sign: Sign) -> &'static str {
    match (is_negative, sign) {
        (true, _) => "-",
        (false, Sign::Always) => "+",
        (false, Sign::NegativeOnlyWithPositivePadding) => " ",
        (false, Sign::Default) => "",
    }
}

fn case_digits(digits: String, case: Case) -> String {
    match case {
        Case::Upper => digits.to_uppercase(),
        Case::Lower => digits,
    }
}

fn render_integral(
    value: i128,
    specifier: &Specifier,
    resolved: Resolved,
    sink: &mut dyn Sink,
) -> Result<()> {
    let is_negative = value < 0;
    let magnitude = value.unsigned_abs();

    let (radix, prefix): (u32, &str) = match specifier.presentation_type {
        PresentationType::Binary => (2, if specifier.alternate_form { "0b" } else { "" }),
        PresentationType::Octal => (8, if specifier.alternate_form { "0" } else { "" }),
        PresentationType::Hex => (16, if specifier.alternate_form { "0x" } else { "" }),
        PresentationType::Character => {
            // An out-of-range code unit is a runtime failure, not a parse
            // error: it degrades to empty output for this field rather
            // than aborting the rest of the format string.
            let rendered = char::from_u32(magnitude as u32).map(|ch| ch.to_string()).unwrap_or_default();
            return pad_and_write(sink, &rendered, specifier, resolved.width, Alignment::Left);
        }
        _ => (10, ""),
    };

    let digits = case_digits(to_radix_string(magnitude, radix), specifier.case);
    let sign = sign_str(is_negative, specifier.sign);
    zero_pad_and_write(sink, sign, prefix, &digits, specifier, resolved.width)
}

fn to_radix_string(mut value: u128, radix: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let digit = (value % radix as u128) as u32;
        digits.push(core::char::from_digit(digit, radix).unwrap());
        value /= radix as u128;
    }
    digits.iter().rev().collect()
}

fn render_float(
    value: f64,
    specifier: &Specifier,
    resolved: Resolved,
    sink: &mut dyn Sink,
) -> Result<()> {
    let is_negative = value.is_sign_negative();
    let magnitude = value.abs();
    let sign = sign_str(is_negative, specifier.sign);

    let body = match specifier.presentation_type {
        PresentationType::Fixed => match resolved.precision {
            Some(p) => format!("{magnitude:.p$}"),
            None => format!("{magnitude:.6}"),
        },
        PresentationType::Scientific => match resolved.precision {
            Some(p) => format!("{magnitude:.p$e}"),
            None => format!("{magnitude:e}"),
        },
        PresentationType::HexFloat => render_hex_float(magnitude, resolved.precision),
        PresentationType::General | _ => match resolved.precision {
            Some(p) => {
                let s = format!("{magnitude:.p$}");
                if specifier.alternate_form { s } else { trim_trailing_zeros(s) }
            }
            None => format!("{magnitude}"),
        },
    };

    let body = if specifier.alternate_form && !body.contains('.') {
        format!("{body}.")
    } else {
        body
    };

    let body = case_digits(body, specifier.case);
    zero_pad_and_write(sink, sign, "", &body, specifier, resolved.width)
}

fn trim_trailing_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0');
    trimmed.trim_end_matches('.').to_string()
}

fn render_hex_float(value: f64, precision: Option<usize>) -> String {
    if value == 0.0 {
        return "0x0p+0".to_string();
    }
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64 - 1023;
    let mantissa = bits & 0x000f_ffff_ffff_ffff;
    let mantissa_hex = format!("{mantissa:013x}");
    let mantissa_hex = match precision {
        Some(p) => {
            let mut hex = mantissa_hex;
            hex.truncate(p.min(hex.len()));
            hex
        }
        None => mantissa_hex.trim_end_matches('0').to_string(),
    };
    if mantissa_hex.is_empty() {
        format!("0x1p{exponent:+}")
    } else {
        format!("0x1.{mantissa_hex}p{exponent:+}")
    }
}

fn render_string(value: StringValue<'_>, specifier: &Specifier, resolved: Resolved, sink: &mut dyn Sink) -> Result<()> {
    // Malformed Unicode in an argument is a runtime failure, not a parse
    // error: it degrades to empty output for this field rather than
    // aborting the rest of the format string.
    let decoded = match value {
        StringValue::Utf8(s) => Decoder::Utf8(s.as_bytes()).transcode_to_utf8(),
        StringValue::Utf16(units) => Decoder::Utf16(units).transcode_to_utf8(),
        StringValue::Utf32(units) => Decoder::Utf32(units).transcode_to_utf8(),
    }
    .unwrap_or_default();

    let truncated: String = match resolved.precision {
        Some(limit) => decoded.chars().take(limit).collect(),
        None => decoded,
    };

    pad_and_write(sink, &truncated, specifier, resolved.width, Alignment::Left)
}

fn render_pointer(address: usize, specifier: &Specifier, resolved: Resolved, sink: &mut dyn Sink) -> Result<()> {
    let body = format!("0x{address:x}");
    pad_and_write(sink, &body, specifier, resolved.width, Alignment::Right)
}

fn render_bool(value: bool, specifier: &Specifier, resolved: Resolved, sink: &mut dyn Sink) -> Result<()> {
    match specifier.presentation_type {
        PresentationType::None | PresentationType::String => {
            let body = if value { "true" } else { "false" };
            pad_and_write(sink, body, specifier, resolved.width, Alignment::Left)
        }
        _ => render_integral(value as i128, specifier, resolved, sink),
    }
}

/// Renders `value` under `specifier`, writing into `sink`. `resolved` holds
/// the concrete width and precision after any nested replacement field has
/// already been looked up by the caller.
pub fn render_value(
    value: &Value<'_>,
    specifier: &Specifier,
    resolved: Resolved,
    sink: &mut dyn Sink,
) -> Result<()> {
    match *value {
        Value::Character(ch) => match specifier.presentation_type {
            PresentationType::None | PresentationType::Character => {
                pad_and_write(sink, &ch.to_string(), specifier, resolved.width, Alignment::Left)
            }
            _ => render_integral(ch as i128, specifier, resolved, sink),
        },
        Value::String(s) => render_string(s, specifier, resolved, sink),
        Value::Pointer(address) => render_pointer(address, specifier, resolved, sink),
        Value::SignedInt(v) => render_integral(v as i128, specifier, resolved, sink),
        Value::UnsignedInt(v) => render_integral(v as i128, specifier, resolved, sink),
        Value::Float(v) => render_float(v, specifier, resolved, sink),
        Value::Bool(v) => render_bool(v, specifier, resolved, sink),
        Value::UserDefined(formattable) => {
            let mut renderer = Renderer { sink, specifier, resolved };
            formattable.format(&mut renderer)
        }
    }
}

/// Renders a parse error the way the driver surfaces it: `"Ignored invalid
/// formatter: " + message`.
pub fn render_error(message: &str, sink: &mut dyn Sink) -> Result<()> {
    sink.write_str("Ignored invalid formatter: ")?;
    sink.write_str(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specifier::SizeOption;

    fn spec() -> Specifier {
        Specifier::default()
    }

    fn render(value: &Value<'_>, specifier: &Specifier, resolved: Resolved) -> String {
        let mut out = String::new();
        render_value(value, specifier, resolved, &mut out).unwrap();
        out
    }

    #[test]
    fn plain_integer_renders_decimal() {
        assert_eq!(render(&Value::SignedInt(42), &spec(), Resolved::default()), "42");
    }

    #[test]
    fn hex_with_alternate_form_and_zero_padding() {
        let mut specifier = spec();
        specifier.presentation_type = PresentationType::Hex;
        specifier.alternate_form = true;
        specifier.zero_padding = true;
        let resolved = Resolved { width: Some(6), precision: None };
        assert_eq!(render(&Value::UnsignedInt(0x41), &specifier, resolved), "0x0041");
    }

    #[test]
    fn fill_and_right_alignment_pads_a_float() {
        let mut specifier = spec();
        specifier.fill = Some('*');
        specifier.alignment = Alignment::Right;
        specifier.sign = Sign::Always;
        specifier.presentation_type = PresentationType::General;
        let resolved = Resolved { width: Some(6), precision: None };
        assert_eq!(render(&Value::Float(3.14), &specifier, resolved), "*+3.14");
    }

    #[test]
    fn general_alternate_form_keeps_trailing_zeros() {
        let mut specifier = spec();
        specifier.presentation_type = PresentationType::General;
        specifier.alternate_form = true;
        let resolved = Resolved { width: None, precision: Some(4) };
        assert_eq!(render(&Value::Float(1.5), &specifier, resolved), "1.5000");
    }

    #[test]
    fn general_without_alternate_form_strips_trailing_zeros() {
        let mut specifier = spec();
        specifier.presentation_type = PresentationType::General;
        let resolved = Resolved { width: None, precision: Some(4) };
        assert_eq!(render(&Value::Float(1.5), &specifier, resolved), "1.5");
    }

    #[test]
    fn an_out_of_range_character_code_point_degrades_to_empty_output() {
        let mut specifier = spec();
        specifier.presentation_type = PresentationType::Character;
        assert_eq!(render(&Value::UnsignedInt(0xd800), &specifier, Resolved::default()), "");
    }

    #[test]
    fn negative_binary_renders_twos_complement_free_magnitude() {
        let mut specifier = spec();
        specifier.presentation_type = PresentationType::Binary;
        assert_eq!(
            render(&Value::SignedInt(-128), &specifier, Resolved::default()),
            "-10000000"
        );
    }

    #[test]
    fn string_precision_truncates_by_codepoint_not_byte() {
        let mut specifier = spec();
        specifier.presentation_type = PresentationType::String;
        specifier.precision = Some(SizeOption::Literal(3));
        let resolved = Resolved { width: None, precision: Some(3) };
        let value = Value::String(StringValue::Utf8("abcdef"));
        assert_eq!(render(&value, &specifier, resolved), "abc");
    }

    #[test]
    fn fixed_precision_renders_expected_decimal_places() {
        let mut specifier = spec();
        specifier.presentation_type = PresentationType::Fixed;
        let resolved = Resolved { width: None, precision: Some(2) };
        assert_eq!(render(&Value::Float(3.14159), &specifier, resolved), "3.14");
    }

    #[test]
    fn error_rendering_prefixes_the_message() {
        let mut out = String::new();
        render_error("Invalid position", &mut out).unwrap();
        assert_eq!(out, "Ignored invalid formatter: Invalid position");
    }
}
