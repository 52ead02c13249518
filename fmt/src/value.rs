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

//! Type-erased storage for a single format argument.
//!
//! Each argument is reduced to a [`Value`] that carries just enough to
//! render it: a tag plus either an inline scalar or a borrowed slice. A
//! user-defined type erases behind a `&dyn Format` trait object rather than
//! a hand-rolled function-pointer thunk — the trait-object vtable already
//! does exactly that job.

use crate::render::Renderer;
use status::Result;

/// The kind of parameter a [`Value`] holds, used to validate and infer
/// presentation types for a replacement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// A value formatted through a user's own [`Format`] implementation.
    UserDefined,
    /// A single character.
    Character,
    /// A string, in any of the three Unicode encodings.
    String,
    /// A raw address, rendered as `0x...`.
    Pointer,
    /// A signed or unsigned integer.
    Integral,
    /// A 32- or 64-bit float.
    FloatingPoint,
    /// A boolean.
    Boolean,
}

/// A borrowed string in one of the three encodings a format argument may
/// carry.
#[derive(Debug, Clone, Copy)]
pub enum StringValue<'a> {
    Utf8(&'a str),
    Utf16(&'a [u16]),
    Utf32(&'a [u32]),
}

/// Implemented by types that know how to render themselves into a
/// replacement field. The blanket `IntoValue` impls cover every primitive
/// and string-like type directly; implement this trait instead for your
/// own types.
pub trait Format {
    /// Renders `self` using the active specifier and output sink in
    /// `renderer`.
    fn format(&self, renderer: &mut Renderer<'_>) -> Result<()>;
}

/// A single type-erased format argument.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    UserDefined(&'a dyn Format),
    Character(char),
    String(StringValue<'a>),
    Pointer(usize),
    SignedInt(i64),
    UnsignedInt(u64),
    Float(f64),
    Bool(bool),
}

impl<'a> Value<'a> {
    /// Returns this value's [`ParameterKind`], used to validate and infer a
    /// replacement field's presentation type.
    pub const fn kind(&self) -> ParameterKind {
        match self {
            Self::UserDefined(_) => ParameterKind::UserDefined,
            Self::Character(_) => ParameterKind::Character,
            Self::String(_) => ParameterKind::String,
            Self::Pointer(_) => ParameterKind::Pointer,
            Self::SignedInt(_) | Self::UnsignedInt(_) => ParameterKind::Integral,
            Self::Float(_) => ParameterKind::FloatingPoint,
            Self::Bool(_) => ParameterKind::Boolean,
        }
    }

    /// Resolves this value as a `usize`, for use as a nested width or
    /// precision argument. Returns `None` for non-integral values or
    /// negative integers.
    pub fn as_size(&self) -> Option<usize> {
        match *self {
            Self::SignedInt(v) if v >= 0 => Some(v as usize),
            Self::UnsignedInt(v) => Some(v as usize),
            _ => None,
        }
    }
}

/// Converts a reference to `Self` into a type-erased [`Value`]. Implemented
/// for every type the driver accepts as a format argument.
pub trait IntoValue<'a> {
    /// Produces the type-erased view of `self`.
    fn into_value(&'a self) -> Value<'a>;
}

macro_rules! signed_into_value {
    ($($t:ty),*) => {
        $(impl<'a> IntoValue<'a> for $t {
            fn into_value(&'a self) -> Value<'a> {
                Value::SignedInt(*self as i64)
            }
        })*
    };
}

macro_rules! unsigned_into_value {
    ($($t:ty),*) => {
        $(impl<'a> IntoValue<'a> for $t {
            fn into_value(&'a self) -> Value<'a> {
                Value::UnsignedInt(*self as u64)
            }
        })*
    };
}

signed_into_value!(i8, i16, i32, i64, isize);
unsigned_into_value!(u8, u16, u32, u64, usize);

impl<'a> IntoValue<'a> for f32 {
    fn into_value(&'a self) -> Value<'a> {
        Value::Float(*self as f64)
    }
}

impl<'a> IntoValue<'a> for f64 {
    fn into_value(&'a self) -> Value<'a> {
        Value::Float(*self)
    }
}

impl<'a> IntoValue<'a> for bool {
    fn into_value(&'a self) -> Value<'a> {
        Value::Bool(*self)
    }
}

impl<'a> IntoValue<'a> for char {
    fn into_value(&'a self) -> Value<'a> {
        Value::Character(*self)
    }
}

impl<'a> IntoValue<'a> for str {
    fn into_value(&'a self) -> Value<'a> {
        Value::String(StringValue::Utf8(self))
    }
}

impl<'a> IntoValue<'a> for String {
    fn into_value(&'a self) -> Value<'a> {
        Value::String(StringValue::Utf8(self.as_str()))
    }
}

impl<'a> IntoValue<'a> for [u16] {
    fn into_value(&'a self) -> Value<'a> {
        Value::String(StringValue::Utf16(self))
    }
}

impl<'a> IntoValue<'a> for [u32] {
    fn into_value(&'a self) -> Value<'a> {
        Value::String(StringValue::Utf32(self))
    }
}

impl<'a, T> IntoValue<'a> for *const T {
    fn into_value(&'a self) -> Value<'a> {
        Value::Pointer(*self as usize)
    }
}

impl<'a, T> IntoValue<'a> for *mut T {
    fn into_value(&'a self) -> Value<'a> {
        Value::Pointer(*self as usize)
    }
}

/// A value that formats through a user-supplied [`Format`] implementation
/// rather than one of the built-in kinds.
pub struct UserDefined<'a, T: Format>(pub &'a T);

impl<'a, T: Format> IntoValue<'a> for UserDefined<'a, T> {
    fn into_value(&'a self) -> Value<'a> {
        Value::UserDefined(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_carry_their_signedness_into_the_value() {
        assert!(matches!(5i32.into_value(), Value::SignedInt(5)));
        assert!(matches!(5u32.into_value(), Value::UnsignedInt(5)));
    }

    #[test]
    fn kind_reports_the_right_parameter_kind_for_each_variant() {
        assert_eq!(5i32.into_value().kind(), ParameterKind::Integral);
        assert_eq!(5.0f64.into_value().kind(), ParameterKind::FloatingPoint);
        assert_eq!(true.into_value().kind(), ParameterKind::Boolean);
        assert_eq!('a'.into_value().kind(), ParameterKind::Character);
        assert_eq!("hi".into_value().kind(), ParameterKind::String);
    }

    #[test]
    fn as_size_rejects_negative_and_non_integral_values() {
        assert_eq!(Value::SignedInt(-1).as_size(), None);
        assert_eq!(Value::SignedInt(4).as_size(), Some(4));
        assert_eq!(Value::Bool(true).as_size(), None);
    }
}
