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

//! Unicode transcoding between UTF-8, UTF-16, and UTF-32.
//!
//! Argument values may arrive encoded in any of the three forms; the format
//! string itself is always UTF-8 (it is a Rust `&str` literal). This module
//! decodes any of the three into codepoints, re-encodes codepoints into any
//! of the three, and escapes/unescapes codepoints for debug-style rendering.

use status::{Error, Result};

/// The highest codepoint the Unicode standard assigns.
pub const MAX_CODEPOINT: u32 = 0x0010_ffff;

const HIGH_SURROGATE_MIN: u32 = 0xd800;
const HIGH_SURROGATE_MAX: u32 = 0xdbff;
const LOW_SURROGATE_MIN: u32 = 0xdc00;
const LOW_SURROGATE_MAX: u32 = 0xdfff;

/// Returns whether `codepoint` is neither reserved for surrogate encoding nor
/// beyond [`MAX_CODEPOINT`].
pub const fn is_valid_codepoint(codepoint: u32) -> bool {
    codepoint <= MAX_CODEPOINT
        && !(codepoint >= HIGH_SURROGATE_MIN && codepoint <= LOW_SURROGATE_MAX)
}

/// A read cursor over one of the three Unicode encodings, borrowed from an
/// argument value. Each call to [`Decoder::decode_next`] advances the cursor
/// past exactly one decoded codepoint.
#[derive(Debug)]
pub enum Decoder<'a> {
    /// UTF-8 code units.
    Utf8(&'a [u8]),
    /// UTF-16 code units, possibly containing surrogate pairs.
    Utf16(&'a [u16]),
    /// UTF-32 code units, one per codepoint.
    Utf32(&'a [u32]),
}

impl<'a> Decoder<'a> {
    /// Returns whether every code unit has been consumed.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Utf8(units) => units.is_empty(),
            Self::Utf16(units) => units.is_empty(),
            Self::Utf32(units) => units.is_empty(),
        }
    }

    /// Decodes and consumes the next codepoint.
    pub fn decode_next(&mut self) -> Result<u32> {
        match self {
            Self::Utf8(units) => decode_utf8(units),
            Self::Utf16(units) => decode_utf16(units),
            Self::Utf32(units) => decode_utf32(units),
        }
    }

    /// Validates that every remaining code unit forms a well-formed sequence
    /// of codepoints, without retaining them.
    pub fn validate(mut self) -> bool {
        while !self.is_empty() {
            if self.decode_next().is_err() {
                return false;
            }
        }
        true
    }

    /// Decodes every remaining codepoint and re-encodes it as UTF-8.
    pub fn transcode_to_utf8(mut self) -> Result<String> {
        let mut out = String::new();
        while !self.is_empty() {
            encode_utf8(self.decode_next()?, &mut out)?;
        }
        Ok(out)
    }

    /// Decodes every remaining codepoint and re-encodes it as UTF-16.
    pub fn transcode_to_utf16(mut self) -> Result<Vec<u16>> {
        let mut out = Vec::new();
        while !self.is_empty() {
            encode_utf16(self.decode_next()?, &mut out)?;
        }
        Ok(out)
    }

    /// Decodes every remaining codepoint and re-encodes it as UTF-32.
    pub fn transcode_to_utf32(mut self) -> Result<Vec<u32>> {
        let mut out = Vec::new();
        while !self.is_empty() {
            out.push(self.decode_next()?);
        }
        Ok(out)
    }
}

/// Leading-byte descriptor for a UTF-8 codepoint length, mirroring the
/// leading-byte table used by the reference decoder.
struct Utf8LeadingByte {
    pattern: u8,
    mask: u8,
    data_bits: u8,
    len: usize,
    min_codepoint: u32,
}

const UTF8_LEADING_BYTES: [Utf8LeadingByte; 4] = [
    Utf8LeadingByte { pattern: 0b0000_0000, mask: 0b1000_0000, data_bits: 0b0111_1111, len: 1, min_codepoint: 0x0000 },
    Utf8LeadingByte { pattern: 0b1100_0000, mask: 0b1110_0000, data_bits: 0b0001_1111, len: 2, min_codepoint: 0x0080 },
    Utf8LeadingByte { pattern: 0b1110_0000, mask: 0b1111_0000, data_bits: 0b0000_1111, len: 3, min_codepoint: 0x0800 },
    Utf8LeadingByte { pattern: 0b1111_0000, mask: 0b1111_1000, data_bits: 0b0000_0111, len: 4, min_codepoint: 0x1_0000 },
];

const UTF8_CONTINUATION_PATTERN: u8 = 0b1000_0000;
const UTF8_CONTINUATION_MASK: u8 = 0b1100_0000;
const UTF8_CONTINUATION_DATA: u8 = 0b0011_1111;

fn decode_utf8(units: &mut &[u8]) -> Result<u32> {
    let (&leading, rest) = units.split_first().ok_or(Error::DataLoss)?;

    let descriptor = UTF8_LEADING_BYTES
        .iter()
        .find(|d| leading & d.mask == d.pattern)
        .ok_or(Error::DataLoss)?;

    if rest.len() < descriptor.len - 1 {
        return Err(Error::DataLoss);
    }

    let mut codepoint = (leading & descriptor.data_bits) as u32;

    for &continuation in &rest[..descriptor.len - 1] {
        if continuation & UTF8_CONTINUATION_MASK != UTF8_CONTINUATION_PATTERN {
            return Err(Error::DataLoss);
        }
        codepoint = (codepoint << 6) | (continuation & UTF8_CONTINUATION_DATA) as u32;
    }

    if codepoint < descriptor.min_codepoint || !is_valid_codepoint(codepoint) {
        return Err(Error::DataLoss);
    }

    *units = &rest[descriptor.len - 1..];
    Ok(codepoint)
}

fn decode_utf16(units: &mut &[u16]) -> Result<u32> {
    let (&first, rest) = units.split_first().ok_or(Error::DataLoss)?;
    let first = first as u32;

    if (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&first) {
        return Err(Error::DataLoss);
    }

    if !(HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&first) {
        *units = rest;
        return Ok(first);
    }

    let (&second, rest) = rest.split_first().ok_or(Error::DataLoss)?;
    let second = second as u32;
    if !(LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&second) {
        return Err(Error::DataLoss);
    }

    let codepoint = 0x1_0000 + ((first - HIGH_SURROGATE_MIN) << 10) + (second - LOW_SURROGATE_MIN);
    *units = rest;
    Ok(codepoint)
}

fn decode_utf32(units: &mut &[u32]) -> Result<u32> {
    let (&codepoint, rest) = units.split_first().ok_or(Error::DataLoss)?;
    if !is_valid_codepoint(codepoint) {
        return Err(Error::DataLoss);
    }
    *units = rest;
    Ok(codepoint)
}

/// Encodes `codepoint` as UTF-8 and appends it to `out`.
pub fn encode_utf8(codepoint: u32, out: &mut String) -> Result<()> {
    if !is_valid_codepoint(codepoint) {
        return Err(Error::OutOfRange);
    }
    out.push(char::from_u32(codepoint).ok_or(Error::OutOfRange)?);
    Ok(())
}

/// Encodes `codepoint` as one or two UTF-16 code units and appends them to
/// `out`.
pub fn encode_utf16(codepoint: u32, out: &mut Vec<u16>) -> Result<()> {
    if !is_valid_codepoint(codepoint) {
        return Err(Error::OutOfRange);
    }
    if codepoint < 0x1_0000 {
        out.push(codepoint as u16);
    } else {
        let adjusted = codepoint - 0x1_0000;
        out.push(HIGH_SURROGATE_MIN as u16 + (adjusted >> 10) as u16);
        out.push(LOW_SURROGATE_MIN as u16 + (adjusted & 0x3ff) as u16);
    }
    Ok(())
}

/// Encodes `codepoint` as a single UTF-32 code unit and appends it to `out`.
pub fn encode_utf32(codepoint: u32, out: &mut Vec<u32>) -> Result<()> {
    if !is_valid_codepoint(codepoint) {
        return Err(Error::OutOfRange);
    }
    out.push(codepoint);
    Ok(())
}

/// The prefix character controlling how codepoints above `U+FFFF` are
/// escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapePrefix {
    /// Escape with `\u` surrogate pairs for codepoints above `U+FFFF`.
    Lower,
    /// Escape with a single `\U` sequence for codepoints above `U+FFFF`.
    Upper,
}

/// Escapes a single codepoint. ASCII printable characters (`U+0020` through
/// `U+007E`) pass through unescaped; everything else is rendered as `\unnnn`,
/// a `\unnnn\unnnn` surrogate pair, or `\Unnnnnnnn` depending on its range
/// and `prefix`.
pub fn escape_codepoint(codepoint: u32, prefix: EscapePrefix) -> Result<String> {
    if !is_valid_codepoint(codepoint) {
        return Err(Error::OutOfRange);
    }

    if (0x20..=0x7e).contains(&codepoint) {
        let mut out = String::new();
        encode_utf8(codepoint, &mut out)?;
        return Ok(out);
    }

    if codepoint <= 0xffff {
        return Ok(format!("\\u{codepoint:04x}"));
    }

    match prefix {
        EscapePrefix::Upper => Ok(format!("\\U{codepoint:08x}")),
        EscapePrefix::Lower => {
            let adjusted = codepoint - 0x1_0000;
            let high = HIGH_SURROGATE_MIN + (adjusted >> 10);
            let low = LOW_SURROGATE_MIN + (adjusted & 0x3ff);
            Ok(format!("\\u{high:04x}\\u{low:04x}"))
        }
    }
}

/// Unescapes a single codepoint sequence starting at the head of `input`.
/// Returns the decoded codepoint and the number of bytes of `input`
/// consumed. Accepts `\unnnn`, `\unnnn\unnnn` surrogate pairs, and
/// `\Unnnnnnnn`.
pub fn unescape_codepoint(input: &str) -> Result<(u32, usize)> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'\\') {
        return Err(Error::InvalidArgument);
    }

    match bytes.get(1) {
        Some(b'u') => {
            let high = parse_hex4(input, 2)?;
            if (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&high) {
                if bytes.get(6) == Some(&b'\\') && bytes.get(7) == Some(&b'u') {
                    let low = parse_hex4(input, 8)?;
                    if (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&low) {
                        let codepoint =
                            0x1_0000 + ((high - HIGH_SURROGATE_MIN) << 10) + (low - LOW_SURROGATE_MIN);
                        return Ok((codepoint, 12));
                    }
                }
                return Err(Error::DataLoss);
            }
            if !is_valid_codepoint(high) {
                return Err(Error::DataLoss);
            }
            Ok((high, 6))
        }
        Some(b'U') => {
            let codepoint = parse_hex8(input, 2)?;
            if !is_valid_codepoint(codepoint) {
                return Err(Error::DataLoss);
            }
            Ok((codepoint, 10))
        }
        _ => Err(Error::InvalidArgument),
    }
}

fn parse_hex4(input: &str, offset: usize) -> Result<u32> {
    let digits = input.as_bytes().get(offset..offset + 4).ok_or(Error::DataLoss)?;
    let digits = core::str::from_utf8(digits).map_err(|_| Error::DataLoss)?;
    u32::from_str_radix(digits, 16).map_err(|_| Error::DataLoss)
}

fn parse_hex8(input: &str, offset: usize) -> Result<u32> {
    let digits = input.as_bytes().get(offset..offset + 8).ok_or(Error::DataLoss)?;
    let digits = core::str::from_utf8(digits).map_err(|_| Error::DataLoss)?;
    u32::from_str_radix(digits, 16).map_err(|_| Error::DataLoss)
}
