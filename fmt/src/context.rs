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

//! The state threaded through parsing a format string: the lexer, the
//! parameter-type table, and whether replacement fields are being indexed
//! manually or automatically.

use crate::error::{FormatError, Result};
use crate::lexer::Lexer;
use crate::value::{ParameterKind, Value};

/// Whether replacement fields in the format string specify their own
/// position, or rely on automatic left-to-right indexing. A format string
/// may not mix the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionMode {
    Unknown,
    Automatic,
    Manual,
}

/// Parsing state for a single `format!`/`format_to!` call: the lexer over
/// the source text, the type of each provided argument, and the automatic
/// position counter.
pub struct ParseContext<'src, 'val> {
    lexer: Lexer<'src>,
    values: &'val [Value<'val>],
    next_position: usize,
    mode: PositionMode,
}

impl<'src, 'val> ParseContext<'src, 'val> {
    /// Creates a context over `source`, with `values` as the arguments
    /// available for substitution.
    pub fn new(source: &'src str, values: &'val [Value<'val>]) -> Self {
        Self {
            lexer: Lexer::new(source),
            values,
            next_position: 0,
            mode: PositionMode::Unknown,
        }
    }

    /// Returns a mutable reference to the lexer over the source text.
    pub fn lexer(&mut self) -> &mut Lexer<'src> {
        &mut self.lexer
    }

    /// Returns the number of arguments available for substitution.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether there are no substitutable arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the [`ParameterKind`] of the argument at `position`.
    pub fn parameter_kind(&self, position: usize) -> Result<ParameterKind> {
        self.values
            .get(position)
            .map(Value::kind)
            .ok_or(FormatError::ArgumentPositionExceedsProvidedArguments)
    }

    /// Returns the value at `position`.
    pub fn value(&self, position: usize) -> Result<&Value<'val>> {
        self.values
            .get(position)
            .ok_or(FormatError::ArgumentPositionExceedsProvidedArguments)
    }

    /// Resolves the position for a replacement field. `explicit` is the
    /// position parsed directly out of the field, if any; `None` means
    /// automatic indexing should be used.
    ///
    /// Returns an error if this field's positioning style (manual or
    /// automatic) conflicts with an earlier field's.
    pub fn resolve_position(&mut self, explicit: Option<usize>) -> Result<usize> {
        match (explicit, self.mode) {
            (Some(_), PositionMode::Automatic) => Err(FormatError::PositionMismatch),
            (None, PositionMode::Manual) => Err(FormatError::PositionMismatch),
            (Some(position), _) => {
                self.mode = PositionMode::Manual;
                Ok(position)
            }
            (None, _) => {
                self.mode = PositionMode::Automatic;
                let position = self.next_position;
                self.next_position += 1;
                Ok(position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::IntoValue;

    #[test]
    fn automatic_positions_increment_on_each_call() {
        let values = [1i32.into_value(), 2i32.into_value()];
        let mut context = ParseContext::new("", &values);
        assert_eq!(context.resolve_position(None), Ok(0));
        assert_eq!(context.resolve_position(None), Ok(1));
    }

    #[test]
    fn manual_position_after_automatic_is_a_mismatch() {
        let values = [1i32.into_value()];
        let mut context = ParseContext::new("", &values);
        assert_eq!(context.resolve_position(None), Ok(0));
        assert_eq!(context.resolve_position(Some(0)), Err(FormatError::PositionMismatch));
    }

    #[test]
    fn automatic_position_after_manual_is_a_mismatch() {
        let values = [1i32.into_value()];
        let mut context = ParseContext::new("", &values);
        assert_eq!(context.resolve_position(Some(0)), Ok(0));
        assert_eq!(context.resolve_position(None), Err(FormatError::PositionMismatch));
    }

    #[test]
    fn parameter_kind_out_of_range_is_an_error() {
        let values: [Value<'_>; 0] = [];
        let context = ParseContext::new("", &values);
        assert_eq!(
            context.parameter_kind(0),
            Err(FormatError::ArgumentPositionExceedsProvidedArguments)
        );
    }
}
