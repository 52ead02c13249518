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

//! A compile-time-checkable string formatting engine in the mold of
//! `std::format`.
//!
//! A format string such as `"{0:*>+6.2f}"` is parsed once into a sequence
//! of literal spans and replacement fields (see [`parser`]), each field
//! carrying a [`specifier::Specifier`] describing its fill, alignment,
//! sign, width, precision, and presentation type. Arguments are type-erased
//! into [`value::Value`]s and matched against each field's position before
//! [`render`] dispatches per-type rendering.
//!
//! Parsing never panics. A malformed format string — an unclosed field, a
//! sign on a string argument, a position past the end of the argument list
//! — is instead recorded and surfaces as `"Ignored invalid formatter: ..."`
//! in the rendered output, matching everything parsed successfully before
//! the error.
//!
//! The `fmt_macros` crate builds on this at compile time, checking a format
//! string's fields against the argument types passed to the `format!`
//! macro before any of this runs.

#![deny(missing_docs)]

pub mod classifier;
pub mod context;
pub mod error;
pub mod format_string;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod specifier;
pub mod unicode;
pub mod value;

use context::ParseContext;
use parser::Segment;
use render::{Resolved, Sink, WriteSink};
use specifier::SizeOption;
use value::Value;

pub use error::FormatError;
pub use format_string::{CharWidth, FormatString, Utf16, Utf32, Utf8};
pub use parser::ParsedFormat;
pub use render::Renderer;
pub use value::{Format, IntoValue, ParameterKind, StringValue, UserDefined};

fn resolve(args: &[Value<'_>], option: Option<SizeOption>) -> Option<usize> {
    match option? {
        SizeOption::Literal(n) => Some(n),
        SizeOption::Argument(position) => args.get(position).and_then(Value::as_size),
    }
}

fn render_parsed(parsed: &ParsedFormat, args: &[Value<'_>], sink: &mut dyn Sink) -> status::Result<()> {
    for segment in &parsed.segments {
        match segment {
            Segment::Literal(text) => sink.write_str(text)?,
            Segment::Field(specifier) => {
                let resolved = Resolved {
                    width: resolve(args, specifier.width),
                    precision: resolve(args, specifier.precision),
                };
                let value = args.get(specifier.position).ok_or(status::Error::OutOfRange)?;
                render::render_value(value, specifier, resolved, sink)?;
            }
        }
    }

    if let Some(error) = &parsed.error {
        render::render_error(error.message(), sink)?;
    }

    Ok(())
}

/// Parses `source` as a format string and renders it against `args`,
/// returning the result as an owned `String`.
///
/// A parse error never panics; it is rendered inline as `"Ignored invalid
/// formatter: ..."` after everything parsed before it.
pub fn format(source: &str, args: &[Value<'_>]) -> String {
    let mut context = ParseContext::new(source, args);
    let parsed = ParsedFormat::parse(&mut context);

    let mut out = String::new();
    // A `String` sink never fails, so a render error here would only come
    // from an out-of-range argument position, which parsing already
    // guards against.
    let _ = render_parsed(&parsed, args, &mut out);
    out
}

/// Parses `source` as a format string and renders it against `args`,
/// writing the result into `writer`.
pub fn format_to<W: stream::Write>(
    writer: &mut W,
    source: &str,
    args: &[Value<'_>],
) -> status::Result<()> {
    let mut context = ParseContext::new(source, args);
    let parsed = ParsedFormat::parse(&mut context);

    let mut sink = WriteSink::new(writer);
    render_parsed(&parsed, args, &mut sink)
}
