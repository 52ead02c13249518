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

//! Parse-time errors raised while interpreting a format string.
//!
//! Every error here is discovered while parsing; there are no runtime
//! formatting failures. A format string that fails to parse is not
//! rejected at the call site — the error is recorded and surfaces as
//! rendered text ("Ignored invalid formatter: ...") when the string is
//! formatted, mirroring how a `const`-evaluated parser in the source
//! language would report failures without unwinding.

use core::fmt;

/// A single parse-time failure, along with enough context to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A replacement field's opening `{` was never closed with `}`.
    UnclosedFormatString,
    /// A literal `}` appeared without a matching `{`.
    UnescapedClosingBrace,
    /// More than the maximum supported number of replacement fields were
    /// found in one format string.
    TooManySpecifiers,
    /// A position value referred to an argument that doesn't exist.
    BadPosition,
    /// Some replacement fields specified a position and others didn't.
    PositionMismatch,
    /// The fill character was a brace or otherwise not permitted.
    BadFill,
    /// A sign was specified for a non-numeric parameter.
    BadSign,
    /// Alternate form was specified for a type that doesn't support it.
    BadAlternateForm,
    /// Zero-padding was specified for a non-numeric parameter.
    BadZeroPadding,
    /// The width option was zero, non-numeric, or otherwise malformed.
    BadWidth,
    /// Precision was specified for a type that doesn't support it, or was
    /// malformed.
    BadPrecision,
    /// The locale-specific form option was specified for a type that
    /// doesn't support it.
    BadLocaleSpecificForm,
    /// The presentation type is not valid for the corresponding parameter's
    /// kind.
    PresentationTypeMismatch,
    /// The parameter has no applicable formatter (a user-defined value
    /// without a `Format` implementation reaching the driver).
    NonStreamableParameter,
    /// An argument's position exceeds the number of arguments provided to
    /// the call.
    ArgumentPositionExceedsProvidedArguments,
}

impl FormatError {
    /// The human-readable message the driver appends after `"Ignored
    /// invalid formatter: "` when this error reaches rendering.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::UnclosedFormatString => "Expected closing brace",
            Self::UnescapedClosingBrace => "Unescaped closing brace",
            Self::TooManySpecifiers => "Too many specifiers in format string",
            Self::BadPosition => "Invalid position",
            Self::PositionMismatch => "Cannot mix manual and automatic positioning",
            Self::BadFill => "Invalid fill character",
            Self::BadSign => "Invalid sign for non-numeric type",
            Self::BadAlternateForm => "Invalid alternate form for the given type",
            Self::BadZeroPadding => "Invalid zero-padding for the given type",
            Self::BadWidth => "Invalid width",
            Self::BadPrecision => "Invalid precision for the given type",
            Self::BadLocaleSpecificForm => "Invalid locale-specific form for the given type",
            Self::PresentationTypeMismatch => "Invalid presentation type for the given type",
            Self::NonStreamableParameter => "Type is not streamable",
            Self::ArgumentPositionExceedsProvidedArguments => {
                "Argument position exceeds number of provided arguments"
            }
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// The result type used while parsing a format string.
pub type Result<T> = core::result::Result<T, FormatError>;
