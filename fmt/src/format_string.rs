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

//! [`FormatString`], the public value type a format string literal is
//! turned into: a once-parsed segment list plus any error encountered,
//! generic over the character width of the text it will render.

use core::marker::PhantomData;

use crate::context::ParseContext;
use crate::error::FormatError;
use crate::parser::ParsedFormat;
use crate::render::{Resolved, Sink, WriteSink};
use crate::specifier::SizeOption;
use crate::value::Value;

/// Seals [`Utf8`], [`Utf16`], and [`Utf32`] as the only character widths a
/// [`FormatString`] may be parameterized over.
pub trait CharWidth: private::Sealed {
    /// The code unit this width stores text as (`u8`, `u16`, or `u32`).
    type Unit: Copy;

    /// A short name for diagnostics (`"UTF-8"`, `"UTF-16"`, `"UTF-32"`).
    fn width_name() -> &'static str;
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Utf8 {}
    impl Sealed for super::Utf16 {}
    impl Sealed for super::Utf32 {}
}

/// Marker for ordinary `&str`/`String` text (this crate's common case).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8;

/// Marker for text stored as `u16` code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16;

/// Marker for text stored as `u32` code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf32;

impl CharWidth for Utf8 {
    type Unit = u8;
    fn width_name() -> &'static str {
        "UTF-8"
    }
}

impl CharWidth for Utf16 {
    type Unit = u16;
    fn width_name() -> &'static str {
        "UTF-16"
    }
}

impl CharWidth for Utf32 {
    type Unit = u32;
    fn width_name() -> &'static str {
        "UTF-32"
    }
}

/// A format string literal parsed once into a segment list.
///
/// The format-string source itself is always ordinary UTF-8 text (this
/// crate has no notion of a UTF-16/UTF-32 *source* dialect); `W` instead
/// describes the width of the *arguments* `format`/`format_to` are later
/// called with, matching spec's cross-width rendering scenarios (a UTF-8
/// format string substituting UTF-16 string arguments, and so on).
///
/// `fmt_macros` validates a literal against `W` and the caller's argument
/// types at macro-expansion time; constructing one directly with
/// [`FormatString::new`] defers that check to first use, as `pw_format`
/// does for non-const-evaluable targets.
///
/// Parsing a replacement field (its fill/align/sign/width/precision/
/// presentation type) depends on the *kind* of the argument at that
/// position — a `{:x}` is valid for an integer and invalid for a string,
/// for instance — so [`FormatString::new`] takes a representative `args`
/// slice of the argument kinds the format string will always be called
/// with (spec's `Ts…`). Later calls to [`FormatString::format`]/
/// [`FormatString::format_to`] may pass a different `args` slice of
/// matching kinds to substitute different values on each call.
#[derive(Debug, Clone)]
pub struct FormatString<W: CharWidth = Utf8> {
    parsed: ParsedFormat,
    _width: PhantomData<W>,
}

impl<W: CharWidth> FormatString<W> {
    /// Parses `source` into a [`FormatString`], using `args` to resolve
    /// each replacement field's argument kind. Never panics; a malformed
    /// string is recorded in [`FormatString::error`] rather than returned
    /// as a `Result`, matching this crate's parse-time error model.
    pub fn new(source: &str, args: &[Value<'_>]) -> Self {
        let mut context = ParseContext::new(source, args);
        let parsed = ParsedFormat::parse(&mut context);
        Self { parsed, _width: PhantomData }
    }

    /// The first parse error encountered, if any.
    pub fn error(&self) -> Option<&FormatError> {
        self.parsed.error.as_ref()
    }

    /// Renders this format string against `args`, returning an owned
    /// `String`.
    pub fn format(&self, args: &[Value<'_>]) -> String {
        let mut out = String::new();
        let _ = self.format_to(&mut out, args);
        out
    }

    /// Renders this format string against `args`, writing into `writer`.
    pub fn format_to<Writer: stream::Write>(
        &self,
        writer: &mut Writer,
        args: &[Value<'_>],
    ) -> status::Result<()> {
        let mut sink = WriteSink::new(writer);
        self.render(args, &mut sink)
    }

    fn render(&self, args: &[Value<'_>], sink: &mut dyn Sink) -> status::Result<()> {
        use crate::parser::Segment;

        for segment in &self.parsed.segments {
            match segment {
                Segment::Literal(text) => sink.write_str(text)?,
                Segment::Field(specifier) => {
                    let resolved = Resolved {
                        width: resolve(args, specifier.width),
                        precision: resolve(args, specifier.precision),
                    };
                    let value = args.get(specifier.position).ok_or(status::Error::OutOfRange)?;
                    crate::render::render_value(value, specifier, resolved, sink)?;
                }
            }
        }

        if let Some(error) = &self.parsed.error {
            crate::render::render_error(error.message(), sink)?;
        }

        Ok(())
    }
}

fn resolve(args: &[Value<'_>], option: Option<SizeOption>) -> Option<usize> {
    match option? {
        SizeOption::Literal(n) => Some(n),
        SizeOption::Argument(position) => args.get(position).and_then(Value::as_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::IntoValue;

    #[test]
    fn renders_through_the_default_utf8_width() {
        let values = [1i32.into_value(), 2i32.into_value()];
        let format_string = FormatString::<Utf8>::new("{0} {1}", &values);
        assert_eq!(format_string.format(&values), "1 2");
    }

    #[test]
    fn a_later_format_call_may_substitute_different_values_of_the_same_kind() {
        let template = [0i32.into_value(), 0i32.into_value()];
        let format_string = FormatString::<Utf8>::new("{0} {1}", &template);

        let first = [1i32.into_value(), 2i32.into_value()];
        let second = [3i32.into_value(), 4i32.into_value()];
        assert_eq!(format_string.format(&first), "1 2");
        assert_eq!(format_string.format(&second), "3 4");
    }

    #[test]
    fn records_a_parse_error_instead_of_panicking() {
        let format_string = FormatString::<Utf8>::new("{", &[]);
        assert!(format_string.error().is_some());
    }

    #[test]
    fn width_name_identifies_each_marker() {
        assert_eq!(Utf8::width_name(), "UTF-8");
        assert_eq!(Utf16::width_name(), "UTF-16");
        assert_eq!(Utf32::width_name(), "UTF-32");
    }
}
