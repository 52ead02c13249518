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

use core::cmp::min;

use paste::paste;
use status::{Error, Result};
use varint::{VarintDecode, VarintEncode};

use super::{Read, Seek, SeekFrom, Write};

/// Wraps an <code>[AsRef]<[u8]></code> in a container implementing
/// [`Read`], [`Write`], and [`Seek`].
///
/// [`Write`] support requires the inner type also implement
/// <code>[AsMut]<[u8]></code>.
pub struct Cursor<T>
where
    T: AsRef<[u8]>,
{
    inner: T,
    pos: usize,
}

impl<T: AsRef<[u8]>> Cursor<T> {
    /// Create a new Cursor wrapping `inner` with an initial position of 0.
    ///
    /// Semantics match [`std::io::Cursor::new()`].
    pub fn new(inner: T) -> Self {
        Self { inner, pos: 0 }
    }

    /// Consumes the cursor and returns the inner wrapped data.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Returns the number of remaining bytes in the Cursor.
    pub fn remaining(&self) -> usize {
        self.len() - self.pos
    }

    /// Returns the total length of the Cursor.
    pub fn len(&self) -> usize {
        self.inner.as_ref().len()
    }

    /// Returns whether the Cursor is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns current IO position of the Cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining_slice(&self) -> &[u8] {
        &self.inner.as_ref()[self.pos..]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Cursor<T> {
    pub(crate) fn remaining_mut(&mut self) -> &mut [u8] {
        &mut self.inner.as_mut()[self.pos..]
    }
}

// Concrete (non-generic) read/write helpers avoid extra monomorphization.
fn read_impl(inner: &[u8], pos: &mut usize, buf: &mut [u8]) -> Result<usize> {
    let remaining = inner.len() - *pos;
    let read_len = min(remaining, buf.len());
    buf[..read_len].copy_from_slice(&inner[*pos..(*pos + read_len)]);
    *pos += read_len;
    Ok(read_len)
}

impl<T: AsRef<[u8]>> Read for Cursor<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        read_impl(self.inner.as_ref(), &mut self.pos, buf)
    }
}

fn write_impl(inner: &mut [u8], pos: &mut usize, buf: &[u8]) -> Result<usize> {
    let remaining = inner.len() - *pos;
    let write_len = min(remaining, buf.len());
    inner[*pos..(*pos + write_len)].copy_from_slice(&buf[0..write_len]);
    *pos += write_len;
    Ok(write_len)
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Write for Cursor<T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        write_impl(self.inner.as_mut(), &mut self.pos, buf)
    }

    fn flush(&mut self) -> Result<()> {
        // Cursor does not buffer, so flush is a no-op.
        Ok(())
    }
}

impl<T: AsRef<[u8]>> Seek for Cursor<T> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let new_pos = match pos {
            SeekFrom::Start(pos) => pos,
            SeekFrom::Current(pos) => (self.pos as u64)
                .checked_add_signed(pos)
                .ok_or(Error::OutOfRange)?,
            SeekFrom::End(pos) => (self.len() as u64)
                .checked_add_signed(-pos)
                .ok_or(Error::OutOfRange)?,
        };

        let new_pos: usize = new_pos.try_into().map_err(|_| Error::OutOfRange)?;

        if new_pos > self.len() {
            Err(Error::OutOfRange)
        } else {
            self.pos = new_pos;
            Ok(new_pos as u64)
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.pos = 0;
        Ok(())
    }

    fn stream_len(&mut self) -> Result<u64> {
        Ok(self.len() as u64)
    }

    fn stream_position(&mut self) -> Result<u64> {
        Ok(self.pos as u64)
    }
}

macro_rules! cursor_read_type_impl {
    ($ty:ident, $endian:ident) => {
        paste! {
          fn [<read_ $ty _ $endian>](&mut self) -> Result<$ty> {
            const NUM_BYTES: usize = $ty::BITS as usize / 8;
            if NUM_BYTES > self.remaining() {
                return Err(Error::ResourceExhausted);
            }
            let sub_slice = self
                .inner
                .as_ref()
                .get(self.pos..self.pos + NUM_BYTES)
                .ok_or(Error::Unknown)?;
            let sub_array: [u8; NUM_BYTES] = sub_slice.try_into().map_err(|_| Error::Unknown)?;
            let value = $ty::[<from_ $endian _bytes>](sub_array);

            self.pos += NUM_BYTES;
            Ok(value)
          }
        }
    };
}

macro_rules! cursor_read_bits_impl {
    ($bits:literal) => {
        paste! {
          cursor_read_type_impl!([<i $bits>], le);
          cursor_read_type_impl!([<u $bits>], le);
          cursor_read_type_impl!([<i $bits>], be);
          cursor_read_type_impl!([<u $bits>], be);
        }
    };
}

macro_rules! cursor_write_type_impl {
    ($ty:ident, $endian:ident) => {
        paste! {
          fn [<write_ $ty _ $endian>](&mut self, value: &$ty) -> Result<()> {
            const NUM_BYTES: usize = $ty::BITS as usize / 8;
            if NUM_BYTES > self.remaining() {
                return Err(Error::ResourceExhausted);
            }
            let value_bytes = $ty::[<to_ $endian _bytes>](*value);
            let sub_slice = self
                .inner
                .as_mut()
                .get_mut(self.pos..self.pos + NUM_BYTES)
                .ok_or(Error::Unknown)?;

            sub_slice.copy_from_slice(&value_bytes[..]);

            self.pos += NUM_BYTES;
            Ok(())
          }
        }
    };
}

macro_rules! cursor_write_bits_impl {
    ($bits:literal) => {
        paste! {
          cursor_write_type_impl!([<i $bits>], le);
          cursor_write_type_impl!([<u $bits>], le);
          cursor_write_type_impl!([<i $bits>], be);
          cursor_write_type_impl!([<u $bits>], be);
        }
    };
}

impl<T: AsRef<[u8]>> crate::ReadInteger for Cursor<T> {
    cursor_read_bits_impl!(8);
    cursor_read_bits_impl!(16);
    cursor_read_bits_impl!(32);
    cursor_read_bits_impl!(64);
    cursor_read_bits_impl!(128);
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> crate::WriteInteger for Cursor<T> {
    cursor_write_bits_impl!(8);
    cursor_write_bits_impl!(16);
    cursor_write_bits_impl!(32);
    cursor_write_bits_impl!(64);
    cursor_write_bits_impl!(128);
}

impl<T: AsRef<[u8]>> crate::ReadVarint for Cursor<T> {
    fn read_varint(&mut self) -> Result<u64> {
        let (len, value) = u64::varint_decode(self.remaining_slice())?;
        self.pos += len;
        Ok(value)
    }

    fn read_signed_varint(&mut self) -> Result<i64> {
        let (len, value) = i64::varint_decode(self.remaining_slice())?;
        self.pos += len;
        Ok(value)
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> crate::WriteVarint for Cursor<T> {
    fn write_varint(&mut self, value: u64) -> Result<()> {
        let encoded_len = value.varint_encode(self.remaining_mut())?;
        self.pos += encoded_len;
        Ok(())
    }

    fn write_signed_varint(&mut self, value: i64) -> Result<()> {
        let encoded_len = value.varint_encode(self.remaining_mut())?;
        self.pos += encoded_len;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::*, ReadInteger, ReadVarint, WriteInteger, WriteVarint};

    #[test]
    fn cursor_len_returns_total_bytes() {
        let cursor = Cursor::new(&[0u8; 64]);
        assert_eq!(cursor.len(), 64);
    }

    #[test]
    fn cursor_read_of_partial_buffer_reads_correct_data() {
        let mut cursor = Cursor::new(&[1, 2, 3, 4, 5, 6, 7, 8]);
        cursor.seek(SeekFrom::Start(4)).unwrap();
        let mut buf = [0u8; 8];
        assert_eq!(cursor.read(&mut buf), Ok(4));
        assert_eq!(buf, [5, 6, 7, 8, 0, 0, 0, 0]);
    }

    #[test]
    fn cursor_write_of_partial_buffer_writes_correct_data() {
        let mut cursor = Cursor::new([0, 0, 0, 0, 0, 0, 0, 0]);
        cursor.seek(SeekFrom::Start(4)).unwrap();
        let buf = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(cursor.write(&buf), Ok(4));
        assert_eq!(cursor.into_inner(), [0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn cursor_rewind_resets_position_to_zero() {
        test_rewind_resets_position_to_zero::<64, _>(Cursor::new(&[0u8; 64]));
    }

    #[test]
    fn cursor_stream_pos_reports_correct_position() {
        test_stream_pos_reports_correct_position::<64, _>(Cursor::new(&[0u8; 64]));
    }

    #[test]
    fn cursor_stream_len_reports_correct_length() {
        test_stream_len_reports_correct_length::<64, _>(Cursor::new(&[0u8; 64]));
    }

    #[test]
    fn cursor_reads_32_bit_integers() {
        let bytes = [0x3u8, 0x4, 0x5, 0x80];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_u32_le(), Ok(0x8005_0403));
    }

    #[test]
    fn cursor_writes_32_bit_integers() {
        let mut cursor = Cursor::new([0u8; 4]);
        cursor.write_u32_le(&0x8005_0403).unwrap();
        assert_eq!(cursor.into_inner(), [0x3, 0x4, 0x5, 0x80]);
    }

    #[test]
    pub fn read_varint_unpacks_data_correctly() {
        let mut cursor = Cursor::new(vec![0xfe, 0xff, 0xff, 0xff, 0x0f, 0x0, 0x0, 0x0]);
        let value = cursor.read_varint().unwrap();
        assert_eq!(value, 0xffff_fffe);
    }

    #[test]
    pub fn read_signed_varint_unpacks_data_correctly() {
        let mut cursor = Cursor::new(vec![0xff, 0xff, 0xff, 0xff, 0x0f, 0x0, 0x0, 0x0]);
        let value = cursor.read_signed_varint().unwrap();
        assert_eq!(value, i32::MIN.into());
    }

    #[test]
    pub fn write_varint_packs_data_correctly() {
        let mut cursor = Cursor::new(vec![0u8; 8]);
        cursor.write_varint(0xffff_fffe).unwrap();
        let buf = cursor.into_inner();
        assert_eq!(buf, vec![0xfe, 0xff, 0xff, 0xff, 0x0f, 0x0, 0x0, 0x0]);
    }
}
