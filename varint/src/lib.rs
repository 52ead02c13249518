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

//! `varint` encodes and decodes variable length integers. Small values take
//! less space than a fixed-width encoding would use. Signed integers are
//! zig-zag encoded first so small negative numbers stay small.
//!
//! The wire format is compatible with Protocol Buffers' varint encoding.
//!
//! # Example
//!
//! ```
//! use varint::{VarintDecode, VarintEncode};
//!
//! let mut buffer = [0u8; 64];
//! let encoded_len = (-1i64).varint_encode(&mut buffer).unwrap();
//! let (decoded_len, val) = i64::varint_decode(&buffer).unwrap();
//! assert_eq!(encoded_len, decoded_len);
//! assert_eq!(val, -1i64);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

use core::num::Wrapping;

use status::{Error, Result};

/// A trait for types that can be decoded from a varint.
pub trait VarintDecode: Sized {
    /// Decodes a value from a varint-encoded byte slice, returning the
    /// number of bytes consumed along with the value.
    ///
    /// Signed values are implicitly zig-zag decoded.
    fn varint_decode(data: &[u8]) -> Result<(usize, Self)>;
}

/// A trait for types that can be encoded into a varint.
pub trait VarintEncode: Sized {
    /// Encodes `self` into `data`, returning the number of bytes written.
    ///
    /// Signed values are implicitly zig-zag encoded.
    fn varint_encode(self, data: &mut [u8]) -> Result<usize>;
}

macro_rules! unsigned_varint_impl {
    ($t:ty) => {
        impl VarintDecode for $t {
            fn varint_decode(data: &[u8]) -> Result<(usize, Self)> {
                let (len, val) = decode_u64(data)?;
                Ok((len, val as Self))
            }
        }

        impl VarintEncode for $t {
            fn varint_encode(self, data: &mut [u8]) -> Result<usize> {
                encode_u64(data, self as u64)
            }
        }
    };
}

macro_rules! signed_varint_impl {
    ($t:ty) => {
        impl VarintDecode for $t {
            fn varint_decode(data: &[u8]) -> Result<(usize, Self)> {
                let (len, val) = decode_u64(data)?;
                Ok((len, zig_zag_decode(val) as Self))
            }
        }

        impl VarintEncode for $t {
            fn varint_encode(self, data: &mut [u8]) -> Result<usize> {
                encode_u64(data, zig_zag_encode(self as i64))
            }
        }
    };
}

unsigned_varint_impl!(u8);
unsigned_varint_impl!(u16);
unsigned_varint_impl!(u32);
unsigned_varint_impl!(u64);

signed_varint_impl!(i8);
signed_varint_impl!(i16);
signed_varint_impl!(i32);
signed_varint_impl!(i64);

fn decode_u64(data: &[u8]) -> Result<(usize, u64)> {
    let mut value: u64 = 0;
    for (i, d) in data.iter().enumerate() {
        value |= (*d as u64 & 0x7f) << (i * 7);
        if (*d & 0x80) == 0 {
            return Ok((i + 1, value));
        }
    }
    Err(Error::OutOfRange)
}

fn encode_u64(data: &mut [u8], value: u64) -> Result<usize> {
    let mut value = value;
    for (i, d) in data.iter_mut().enumerate() {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value > 0 {
            byte |= 0x80;
        }
        *d = byte;
        if value == 0 {
            return Ok(i + 1);
        }
    }
    Err(Error::OutOfRange)
}

// ZigZag maps small negative numbers to small unsigned ones, moving the sign
// bit from the most-significant bit to the least-significant:
//   (n << 1) ^ (n >> (k - 1))
// https://developers.google.com/protocol-buffers/docs/encoding#types
fn zig_zag_encode(value: i64) -> u64 {
    ((value as u64) << 1) ^ ((value >> (i64::BITS - 1)) as u64)
}

fn zig_zag_decode(value: u64) -> i64 {
    let value = Wrapping(value);
    ((value >> 1) ^ (!(value & Wrapping(1)) + Wrapping(1))).0 as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_unsigned_values_round_trip() {
        for v in [0u32, 1, 2, 0x3f, 0x40, 0x7e, 0x7f, 128, 129, 150] {
            let mut buf = [0u8; 8];
            let len = v.varint_encode(&mut buf).unwrap();
            assert_eq!(u32::varint_decode(&buf[..len]), Ok((len, v)));
        }
    }

    #[test]
    fn small_signed_values_round_trip() {
        for v in [0i32, -1, 1, -2, 2, -63, 63, -64, 64, -65, 65] {
            let mut buf = [0u8; 8];
            let len = v.varint_encode(&mut buf).unwrap();
            assert_eq!(i32::varint_decode(&buf[..len]), Ok((len, v)));
        }
    }

    #[test]
    fn extremes_round_trip() {
        let mut buf = [0u8; 10];
        let len = u64::MAX.varint_encode(&mut buf).unwrap();
        assert_eq!(u64::varint_decode(&buf[..len]), Ok((len, u64::MAX)));

        let len = i32::MIN.varint_encode(&mut buf).unwrap();
        assert_eq!(i32::varint_decode(&buf[..len]), Ok((len, i32::MIN)));
    }

    #[test]
    fn truncated_input_is_out_of_range() {
        assert_eq!(u16::varint_decode(&[0x96]), Err(Error::OutOfRange));
    }

    #[test]
    fn buffer_too_small_to_encode_is_out_of_range() {
        let mut buf = [0u8; 1];
        assert_eq!(300u32.varint_encode(&mut buf), Err(Error::OutOfRange));
    }

    // From protobuf.dev's encoding guide.
    #[test]
    fn protobuf_reference_vector() {
        assert_eq!(u32::varint_decode(&[0x96, 0x01]), Ok((2, 150)));
    }
}
