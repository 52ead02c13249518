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

use status::Result;

/// A trait for reading integers from a stream.
///
/// Allows reading signed and unsigned integers from 8 to 128 bits in either
/// big or little endian byte order.
///
/// # Example
///
/// ```
/// use stream::{Cursor, ReadInteger};
///
/// let mut cursor = Cursor::new([0x3, 0x4, 0x5, 0x80]);
/// let value = cursor.read_u32_le().unwrap();
/// assert_eq!(value, 0x8005_0403);
/// ```
pub trait ReadInteger {
    /// Reads a little-endian i8.
    fn read_i8_le(&mut self) -> Result<i8>;
    /// Reads a little-endian u8.
    fn read_u8_le(&mut self) -> Result<u8>;
    /// Reads a big-endian i8.
    fn read_i8_be(&mut self) -> Result<i8>;
    /// Reads a big-endian u8.
    fn read_u8_be(&mut self) -> Result<u8>;
    /// Reads a little-endian i16.
    fn read_i16_le(&mut self) -> Result<i16>;
    /// Reads a little-endian u16.
    fn read_u16_le(&mut self) -> Result<u16>;
    /// Reads a big-endian i16.
    fn read_i16_be(&mut self) -> Result<i16>;
    /// Reads a big-endian u16.
    fn read_u16_be(&mut self) -> Result<u16>;
    /// Reads a little-endian i32.
    fn read_i32_le(&mut self) -> Result<i32>;
    /// Reads a little-endian u32.
    fn read_u32_le(&mut self) -> Result<u32>;
    /// Reads a big-endian i32.
    fn read_i32_be(&mut self) -> Result<i32>;
    /// Reads a big-endian u32.
    fn read_u32_be(&mut self) -> Result<u32>;
    /// Reads a little-endian i64.
    fn read_i64_le(&mut self) -> Result<i64>;
    /// Reads a little-endian u64.
    fn read_u64_le(&mut self) -> Result<u64>;
    /// Reads a big-endian i64.
    fn read_i64_be(&mut self) -> Result<i64>;
    /// Reads a big-endian u64.
    fn read_u64_be(&mut self) -> Result<u64>;
    /// Reads a little-endian i128.
    fn read_i128_le(&mut self) -> Result<i128>;
    /// Reads a little-endian u128.
    fn read_u128_le(&mut self) -> Result<u128>;
    /// Reads a big-endian i128.
    fn read_i128_be(&mut self) -> Result<i128>;
    /// Reads a big-endian u128.
    fn read_u128_be(&mut self) -> Result<u128>;
}

/// A trait for writing integers to a stream.
///
/// Allows writing signed and unsigned integers from 8 to 128 bits in either
/// big or little endian byte order.
///
/// # Example
///
/// ```
/// use stream::{Cursor, WriteInteger};
///
/// let mut cursor = Cursor::new([0u8; 8]);
/// cursor.write_u32_le(&0x8005_0403).unwrap();
/// let buffer = cursor.into_inner();
/// assert_eq!(buffer, [0x3, 0x4, 0x5, 0x80, 0x0, 0x0, 0x0, 0x0]);
/// ```
pub trait WriteInteger {
    /// Writes a little-endian i8.
    fn write_i8_le(&mut self, value: &i8) -> Result<()>;
    /// Writes a little-endian u8.
    fn write_u8_le(&mut self, value: &u8) -> Result<()>;
    /// Writes a big-endian i8.
    fn write_i8_be(&mut self, value: &i8) -> Result<()>;
    /// Writes a big-endian u8.
    fn write_u8_be(&mut self, value: &u8) -> Result<()>;
    /// Writes a little-endian i16.
    fn write_i16_le(&mut self, value: &i16) -> Result<()>;
    /// Writes a little-endian u16.
    fn write_u16_le(&mut self, value: &u16) -> Result<()>;
    /// Writes a big-endian i16.
    fn write_i16_be(&mut self, value: &i16) -> Result<()>;
    /// Writes a big-endian u16.
    fn write_u16_be(&mut self, value: &u16) -> Result<()>;
    /// Writes a little-endian i32.
    fn write_i32_le(&mut self, value: &i32) -> Result<()>;
    /// Writes a little-endian u32.
    fn write_u32_le(&mut self, value: &u32) -> Result<()>;
    /// Writes a big-endian i32.
    fn write_i32_be(&mut self, value: &i32) -> Result<()>;
    /// Writes a big-endian u32.
    fn write_u32_be(&mut self, value: &u32) -> Result<()>;
    /// Writes a little-endian i64.
    fn write_i64_le(&mut self, value: &i64) -> Result<()>;
    /// Writes a little-endian u64.
    fn write_u64_le(&mut self, value: &u64) -> Result<()>;
    /// Writes a big-endian i64.
    fn write_i64_be(&mut self, value: &i64) -> Result<()>;
    /// Writes a big-endian u64.
    fn write_u64_be(&mut self, value: &u64) -> Result<()>;
    /// Writes a little-endian i128.
    fn write_i128_le(&mut self, value: &i128) -> Result<()>;
    /// Writes a little-endian u128.
    fn write_u128_le(&mut self, value: &u128) -> Result<()>;
    /// Writes a big-endian i128.
    fn write_i128_be(&mut self, value: &i128) -> Result<()>;
    /// Writes a big-endian u128.
    fn write_u128_be(&mut self, value: &u128) -> Result<()>;
}

/// A trait for reading varint-encoded integers from a stream.
///
/// The API is limited to `u64`/`i64` to reduce code size.
///
/// # Example
///
/// ```
/// use stream::{Cursor, ReadVarint};
///
/// let mut cursor = Cursor::new(vec![0xfe, 0xff, 0xff, 0xff, 0x0f]);
/// let unsigned_value = cursor.read_varint().unwrap();
/// assert_eq!(unsigned_value, 0xffff_fffe);
/// ```
pub trait ReadVarint {
    /// Read an unsigned varint from the stream.
    fn read_varint(&mut self) -> Result<u64>;
    /// Read a signed varint from the stream.
    fn read_signed_varint(&mut self) -> Result<i64>;
}

/// A trait for writing varint-encoded integers to a stream.
///
/// The API is limited to `u64`/`i64` to reduce code size.
pub trait WriteVarint {
    /// Write an unsigned varint to the stream.
    fn write_varint(&mut self, value: u64) -> Result<()>;
    /// Write a signed varint to the stream.
    fn write_signed_varint(&mut self, value: i64) -> Result<()>;
}
