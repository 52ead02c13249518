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

//! Replacement-field specifiers: `{[position][:[[fill]align][sign]["#"]["0"][width]["."precision]["L"][type]]}`.

use crate::context::ParseContext;
use crate::error::{FormatError, Result};
use crate::lexer::Lexer;
use crate::value::ParameterKind;

/// How a field's content is aligned within its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No alignment was specified; the formatter picks a type-appropriate
    /// default (left for strings, right for everything else).
    #[default]
    Default,
    /// `<` — align to the start of the available space.
    Left,
    /// `>` — align to the end of the available space.
    Right,
    /// `^` — center within the available space.
    Center,
}

/// How the sign of a numeric value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// `-` (the default) — a sign only for negative values.
    #[default]
    Default,
    /// `+` — a sign for both negative and non-negative values.
    Always,
    /// ` ` — a sign for negative values, a leading space otherwise.
    NegativeOnlyWithPositivePadding,
}

/// The presentation type requested for a replacement field, or inferred
/// from the parameter's kind when none was specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationType {
    /// No type specified and none inferred yet.
    #[default]
    None,
    Character,
    String,
    Pointer,
    Binary,
    Octal,
    Decimal,
    Hex,
    HexFloat,
    Scientific,
    Fixed,
    General,
}

impl PresentationType {
    fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            'c' => Self::Character,
            's' => Self::String,
            'p' => Self::Pointer,
            'b' | 'B' => Self::Binary,
            'o' => Self::Octal,
            'd' => Self::Decimal,
            'x' | 'X' => Self::Hex,
            'a' | 'A' => Self::HexFloat,
            'e' | 'E' => Self::Scientific,
            'f' | 'F' => Self::Fixed,
            'g' | 'G' => Self::General,
            _ => return None,
        })
    }

    /// Returns whether this type renders a number in some base (binary,
    /// octal, decimal, or hex).
    pub const fn is_integral_presentation(&self) -> bool {
        matches!(self, Self::Binary | Self::Octal | Self::Decimal | Self::Hex)
    }

    const fn is_floating_point_presentation(&self) -> bool {
        matches!(
            self,
            Self::HexFloat | Self::Scientific | Self::Fixed | Self::General
        )
    }
}

/// Whether a letter-based presentation type (`x`, `X`, `b`, `B`, `e`, `E`,
/// ...) renders in upper or lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    #[default]
    Lower,
    Upper,
}

/// A width or precision value: either a literal number parsed from the
/// source, or a nested replacement field resolved against an argument at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeOption {
    /// A literal decimal number.
    Literal(usize),
    /// A nested `{}` or `{n}` field, already resolved to an argument
    /// position (manual or automatic, per the same rule as top-level
    /// fields).
    Argument(usize),
}

/// A fully parsed replacement field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Specifier {
    /// The argument position this field refers to.
    pub position: usize,
    /// The fill character used to pad the field, if any.
    pub fill: Option<char>,
    pub alignment: Alignment,
    pub sign: Sign,
    pub alternate_form: bool,
    pub zero_padding: bool,
    pub width: Option<SizeOption>,
    pub precision: Option<SizeOption>,
    pub locale_specific_form: bool,
    pub presentation_type: PresentationType,
    pub case: Case,
}

impl Specifier {
    /// Parses a standard replacement field's formatting options (the part
    /// following the optional position, up to but not including the
    /// closing `}`), assuming `parameter_type` is the kind of the argument
    /// this field refers to.
    pub fn parse(context: &mut ParseContext<'_, '_>, parameter_type: ParameterKind) -> Result<Self> {
        let mut specifier = Specifier::default();

        if !context.lexer().consume_if(':') {
            specifier.infer_type(parameter_type);
            return Ok(specifier);
        }

        specifier.parse_fill_and_alignment(context.lexer())?;
        specifier.parse_sign(context.lexer(), parameter_type)?;
        specifier.parse_alternate_form_and_zero_padding(context.lexer(), parameter_type)?;
        specifier.parse_width(context)?;
        specifier.parse_precision(context, parameter_type)?;
        specifier.parse_locale_specific_form(context.lexer(), parameter_type)?;
        specifier.parse_type(context.lexer(), parameter_type)?;

        Ok(specifier)
    }

    fn parse_fill_and_alignment(&mut self, lexer: &mut Lexer<'_>) -> Result<()> {
        let alignment_of = |ch: char| match ch {
            '<' => Some(Alignment::Left),
            '>' => Some(Alignment::Right),
            '^' => Some(Alignment::Center),
            _ => None,
        };

        if let Some(next) = lexer.peek(1) {
            if let Some(alignment) = alignment_of(next) {
                let fill = lexer.peek(0).unwrap();
                if fill == '{' || fill == '}' || !fill.is_ascii() {
                    return Err(FormatError::BadFill);
                }
                lexer.consume();
                lexer.consume();
                self.fill = Some(fill);
                self.alignment = alignment;
                return Ok(());
            }
        }

        if let Some(ch) = lexer.peek(0) {
            if let Some(alignment) = alignment_of(ch) {
                lexer.consume();
                self.alignment = alignment;
            }
        }

        Ok(())
    }

    fn parse_sign(&mut self, lexer: &mut Lexer<'_>, parameter_type: ParameterKind) -> Result<()> {
        let sign = match lexer.peek(0) {
            Some('+') => Some(Sign::Always),
            Some('-') => Some(Sign::Default),
            Some(' ') => Some(Sign::NegativeOnlyWithPositivePadding),
            _ => None,
        };

        if let Some(sign) = sign {
            if !matches!(parameter_type, ParameterKind::Integral | ParameterKind::FloatingPoint) {
                return Err(FormatError::BadSign);
            }
            lexer.consume();
            self.sign = sign;
        }

        Ok(())
    }

    fn parse_alternate_form_and_zero_padding(
        &mut self,
        lexer: &mut Lexer<'_>,
        parameter_type: ParameterKind,
    ) -> Result<()> {
        if lexer.consume_if('#') {
            if !matches!(parameter_type, ParameterKind::Integral | ParameterKind::FloatingPoint) {
                return Err(FormatError::BadAlternateForm);
            }
            self.alternate_form = true;
        }

        if lexer.peek(0) == Some('0') {
            if !matches!(parameter_type, ParameterKind::Integral | ParameterKind::FloatingPoint) {
                return Err(FormatError::BadZeroPadding);
            }
            lexer.consume();
            if self.alignment == Alignment::Default {
                self.zero_padding = true;
            }
        }

        Ok(())
    }

    fn parse_width(&mut self, context: &mut ParseContext<'_, '_>) -> Result<()> {
        if let Some(size) = Self::parse_size_option(context, FormatError::BadWidth)? {
            if let SizeOption::Literal(0) = size {
                return Err(FormatError::BadWidth);
            }
            self.width = Some(size);
        }
        Ok(())
    }

    fn parse_precision(
        &mut self,
        context: &mut ParseContext<'_, '_>,
        parameter_type: ParameterKind,
    ) -> Result<()> {
        if !context.lexer().consume_if('.') {
            return Ok(());
        }

        if !matches!(parameter_type, ParameterKind::String | ParameterKind::FloatingPoint) {
            return Err(FormatError::BadPrecision);
        }

        match Self::parse_size_option(context, FormatError::BadPrecision)? {
            Some(size) => {
                self.precision = Some(size);
                Ok(())
            }
            None => Err(FormatError::BadPrecision),
        }
    }

    /// A width or precision value is either a decimal number, or a nested
    /// `{}`/`{n}` field. A nested field is restricted to position only (no
    /// fill, alignment, or further options) and must refer to an integral
    /// argument; it participates in the same manual/automatic position
    /// sequence as top-level fields.
    fn parse_size_option(
        context: &mut ParseContext<'_, '_>,
        on_bad_argument: FormatError,
    ) -> Result<Option<SizeOption>> {
        if context.lexer().peek(0) == Some('{') {
            context.lexer().consume();
            let explicit = context.lexer().consume_number().map(|n| n as usize);
            if !context.lexer().consume_if('}') {
                return Err(on_bad_argument.clone());
            }

            let position = context.resolve_position(explicit)?;
            if context.parameter_kind(position)? != ParameterKind::Integral {
                return Err(on_bad_argument);
            }

            return Ok(Some(SizeOption::Argument(position)));
        }

        if let Some(number) = context.lexer().consume_number() {
            return Ok(Some(SizeOption::Literal(number as usize)));
        }

        Ok(None)
    }

    fn parse_locale_specific_form(
        &mut self,
        lexer: &mut Lexer<'_>,
        parameter_type: ParameterKind,
    ) -> Result<()> {
        if lexer.consume_if('L') {
            if !matches!(
                parameter_type,
                ParameterKind::Integral | ParameterKind::FloatingPoint | ParameterKind::Boolean
            ) {
                return Err(FormatError::BadLocaleSpecificForm);
            }
            self.locale_specific_form = true;
        }
        Ok(())
    }

    fn parse_type(&mut self, lexer: &mut Lexer<'_>, parameter_type: ParameterKind) -> Result<()> {
        let ch = match lexer.peek(0) {
            Some(ch) if ch != '}' => ch,
            _ => {
                self.infer_type(parameter_type);
                return Ok(());
            }
        };

        let presentation = match PresentationType::from_char(ch) {
            Some(presentation) => presentation,
            None => {
                self.infer_type(parameter_type);
                return Ok(());
            }
        };
        lexer.consume();

        self.case = if ch.is_ascii_uppercase() { Case::Upper } else { Case::Lower };
        self.presentation_type = presentation;
        self.validate_type(parameter_type)
    }

    fn infer_type(&mut self, parameter_type: ParameterKind) {
        self.presentation_type = match parameter_type {
            ParameterKind::Character => PresentationType::Character,
            ParameterKind::String => PresentationType::String,
            ParameterKind::Pointer => PresentationType::Pointer,
            ParameterKind::Integral => PresentationType::Decimal,
            ParameterKind::FloatingPoint => PresentationType::General,
            ParameterKind::Boolean | ParameterKind::UserDefined => PresentationType::None,
        };
    }

    fn validate_type(&self, parameter_type: ParameterKind) -> Result<()> {
        let valid = match parameter_type {
            ParameterKind::Character | ParameterKind::Boolean => matches!(
                self.presentation_type,
                PresentationType::Character
                    | PresentationType::String
                    | PresentationType::Binary
                    | PresentationType::Octal
                    | PresentationType::Decimal
                    | PresentationType::Hex
            ) || parameter_type == ParameterKind::Boolean
                && self.presentation_type == PresentationType::None,
            ParameterKind::String => self.presentation_type == PresentationType::String,
            ParameterKind::Pointer => self.presentation_type == PresentationType::Pointer,
            ParameterKind::Integral => {
                self.presentation_type.is_integral_presentation()
                    || self.presentation_type == PresentationType::Character
            }
            ParameterKind::FloatingPoint => self.presentation_type.is_floating_point_presentation(),
            ParameterKind::UserDefined => false,
        };

        if valid {
            Ok(())
        } else {
            Err(FormatError::PresentationTypeMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{IntoValue, Value};

    fn parse(src: &str, kind: ParameterKind) -> Result<Specifier> {
        parse_with_args(src, kind, &[])
    }

    fn parse_with_args(src: &str, kind: ParameterKind, values: &[Value<'_>]) -> Result<Specifier> {
        let mut context = ParseContext::new(src, values);
        Specifier::parse(&mut context, kind)
    }

    #[test]
    fn empty_specifier_infers_type_from_parameter_kind() {
        let specifier = parse("", ParameterKind::Integral).unwrap();
        assert_eq!(specifier.presentation_type, PresentationType::Decimal);
    }

    #[test]
    fn fill_and_alignment_parse_together() {
        let specifier = parse(":*>6", ParameterKind::FloatingPoint).unwrap();
        assert_eq!(specifier.fill, Some('*'));
        assert_eq!(specifier.alignment, Alignment::Right);
        assert_eq!(specifier.width, Some(SizeOption::Literal(6)));
    }

    #[test]
    fn brace_fill_character_is_rejected() {
        assert_eq!(parse(":{<5", ParameterKind::Integral), Err(FormatError::BadFill));
    }

    #[test]
    fn non_ascii_fill_character_is_rejected() {
        assert_eq!(parse(":é>6", ParameterKind::Integral), Err(FormatError::BadFill));
    }

    #[test]
    fn sign_on_non_numeric_type_is_rejected() {
        assert_eq!(parse(":+s", ParameterKind::String), Err(FormatError::BadSign));
    }

    #[test]
    fn alternate_form_and_zero_padding_on_integral() {
        let specifier = parse(":#06x", ParameterKind::Integral).unwrap();
        assert!(specifier.alternate_form);
        assert!(specifier.zero_padding);
        assert_eq!(specifier.width, Some(SizeOption::Literal(6)));
        assert_eq!(specifier.presentation_type, PresentationType::Hex);
    }

    #[test]
    fn zero_padding_is_dropped_when_alignment_specified() {
        let specifier = parse(":<010", ParameterKind::Integral).unwrap();
        assert_eq!(specifier.alignment, Alignment::Left);
        assert!(!specifier.zero_padding);
        assert_eq!(specifier.width, Some(SizeOption::Literal(10)));
    }

    #[test]
    fn precision_on_string_limits_characters() {
        let specifier = parse(":.3", ParameterKind::String).unwrap();
        assert_eq!(specifier.precision, Some(SizeOption::Literal(3)));
    }

    #[test]
    fn precision_on_integral_is_rejected() {
        assert_eq!(parse(":.3", ParameterKind::Integral), Err(FormatError::BadPrecision));
    }

    #[test]
    fn nested_width_field_parses_as_argument_position() {
        let values = [1i32.into_value(), 10i32.into_value()];
        let specifier = parse_with_args(":{1}", ParameterKind::Integral, &values).unwrap();
        assert_eq!(specifier.width, Some(SizeOption::Argument(1)));
    }

    #[test]
    fn automatic_nested_precision_field_parses_with_no_position() {
        let values = [2i32.into_value()];
        let specifier =
            parse_with_args(":.{}f", ParameterKind::FloatingPoint, &values).unwrap();
        assert_eq!(specifier.precision, Some(SizeOption::Argument(0)));
        assert_eq!(specifier.presentation_type, PresentationType::Fixed);
    }

    #[test]
    fn presentation_type_mismatch_is_rejected() {
        assert_eq!(
            parse(":p", ParameterKind::Integral),
            Err(FormatError::PresentationTypeMismatch)
        );
    }

    #[test]
    fn uppercase_presentation_letter_sets_upper_case() {
        let specifier = parse(":X", ParameterKind::Integral).unwrap();
        assert_eq!(specifier.case, Case::Upper);
        assert_eq!(specifier.presentation_type, PresentationType::Hex);
    }
}
