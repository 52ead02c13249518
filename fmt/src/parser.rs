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

//! Walks a format string's literal text and replacement fields into a
//! sequence of [`Segment`]s, stopping at the first parse error.

use crate::context::ParseContext;
use crate::error::FormatError;
use crate::lexer::Lexer;
use crate::specifier::Specifier;

/// The maximum number of replacement fields a single format string may
/// contain.
pub const MAX_SPECIFIERS: usize = 64;

/// One piece of a parsed format string: either literal text to copy
/// verbatim, or a replacement field to substitute.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, with `{{`/`}}` already collapsed to `{`/`}`.
    Literal(String),
    /// A parsed replacement field.
    Field(Specifier),
}

/// The parsed form of a format string: an ordered list of segments, and the
/// first parse error encountered (if any). Segments after the error are not
/// produced — the driver renders everything before the error, then the
/// error message, and stops.
#[derive(Debug, Clone, Default)]
pub struct ParsedFormat {
    pub segments: Vec<Segment>,
    pub error: Option<FormatError>,
}

impl ParsedFormat {
    /// Parses the entirety of `context`'s source text.
    pub fn parse(context: &mut ParseContext<'_, '_>) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut field_count = 0usize;
        let mut error = None;

        loop {
            match context.lexer().peek(0) {
                None => break,
                Some('{') if context.lexer().peek(1) == Some('{') => {
                    context.lexer().consume();
                    context.lexer().consume();
                    literal.push('{');
                }
                Some('}') if context.lexer().peek(1) == Some('}') => {
                    context.lexer().consume();
                    context.lexer().consume();
                    literal.push('}');
                }
                Some('{') => {
                    context.lexer().consume();
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(core::mem::take(&mut literal)));
                    }

                    match Self::parse_field(context) {
                        Ok(specifier) => {
                            field_count += 1;
                            if field_count > MAX_SPECIFIERS {
                                error = Some(FormatError::TooManySpecifiers);
                                break;
                            }
                            segments.push(Segment::Field(specifier));
                        }
                        Err(e) => {
                            error = Some(e);
                            break;
                        }
                    }
                }
                Some('}') => {
                    error = Some(FormatError::UnescapedClosingBrace);
                    break;
                }
                Some(ch) => {
                    context.lexer().consume();
                    literal.push(ch);
                }
            }
        }

        if error.is_none() && !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments, error }
    }

    /// Returns the number of arguments `source` requires, without needing to
    /// know their types.
    ///
    /// This is a syntactic pass over positions only (no fill/align/sign/width
    /// validation) — it exists so a proc macro can check a caller passed
    /// enough arguments to a format string literal before any of those
    /// arguments' types are known. The full [`ParsedFormat::parse`] pass,
    /// which does need argument kinds, still runs at format time.
    pub fn required_argument_count(source: &str) -> Result<usize, FormatError> {
        enum Slot {
            Unknown,
            Automatic,
            Manual,
        }

        fn resolve(explicit: Option<usize>, mode: &mut Slot, next_auto: &mut usize) -> Result<usize, FormatError> {
            match (explicit, &*mode) {
                (Some(_), Slot::Automatic) => Err(FormatError::PositionMismatch),
                (None, Slot::Manual) => Err(FormatError::PositionMismatch),
                (Some(position), _) => {
                    *mode = Slot::Manual;
                    Ok(position)
                }
                (None, _) => {
                    *mode = Slot::Automatic;
                    let position = *next_auto;
                    *next_auto += 1;
                    Ok(position)
                }
            }
        }

        let mut lexer = Lexer::new(source);
        let mut mode = Slot::Unknown;
        let mut next_auto = 0usize;
        let mut max_position: Option<usize> = None;
        fn note(position: usize, max_position: &mut Option<usize>) {
            *max_position = Some(max_position.map_or(position, |m| m.max(position)));
        }

        loop {
            match lexer.peek(0) {
                None => break,
                Some('{') if lexer.peek(1) == Some('{') => {
                    lexer.consume();
                    lexer.consume();
                }
                Some('}') if lexer.peek(1) == Some('}') => {
                    lexer.consume();
                    lexer.consume();
                }
                Some('{') => {
                    lexer.consume();
                    let explicit = lexer.consume_number().map(|n| n as usize);
                    let position = resolve(explicit, &mut mode, &mut next_auto)?;
                    note(position, &mut max_position);

                    loop {
                        match lexer.peek(0) {
                            Some('}') => {
                                lexer.consume();
                                break;
                            }
                            Some('{') => {
                                lexer.consume();
                                let nested = lexer.consume_number().map(|n| n as usize);
                                if !lexer.consume_if('}') {
                                    return Err(FormatError::UnclosedFormatString);
                                }
                                let nested_position = resolve(nested, &mut mode, &mut next_auto)?;
                                note(nested_position, &mut max_position);
                            }
                            Some(_) => {
                                lexer.consume();
                            }
                            None => return Err(FormatError::UnclosedFormatString),
                        }
                    }
                }
                Some('}') => return Err(FormatError::UnescapedClosingBrace),
                Some(_) => {
                    lexer.consume();
                }
            }
        }

        Ok(max_position.map_or(0, |m| m + 1))
    }

    fn parse_field(context: &mut ParseContext<'_, '_>) -> Result<Specifier, FormatError> {
        let explicit_position = context.lexer().consume_number().map(|n| n as usize);
        let position = context.resolve_position(explicit_position)?;
        let parameter_kind = context.parameter_kind(position)?;

        let mut specifier = Specifier::parse(context, parameter_kind)?;
        specifier.position = position;

        if !context.lexer().consume_if('}') {
            return Err(FormatError::UnclosedFormatString);
        }

        Ok(specifier)
    }
}
