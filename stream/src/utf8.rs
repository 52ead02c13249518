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

use status::{Error, Result};

use crate::Read;

/// Wraps an underlying byte [`Read`]er and decodes it one UTF-8 scalar value
/// at a time, hiding the fact that a character may span more than one byte.
///
/// This mirrors the role of a `std::basic_istream` wrapper that lets a parser
/// work in terms of characters without caring how many bytes each one
/// occupies.
pub struct Utf8Stream<R: Read> {
    inner: R,
    eof: bool,
}

impl<R: Read> Utf8Stream<R> {
    /// Wraps `inner` in a `Utf8Stream`.
    pub fn new(inner: R) -> Self {
        Self { inner, eof: false }
    }

    /// Returns whether the stream has been exhausted.
    pub fn eof(&self) -> bool {
        self.eof
    }

    fn read_one_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        let len = self.inner.read(&mut buf)?;
        if len == 0 {
            self.eof = true;
            Ok(None)
        } else {
            Ok(Some(buf[0]))
        }
    }

    fn continuation_byte(&mut self) -> Result<u32> {
        match self.read_one_byte()? {
            Some(byte) if (byte & 0xc0) == 0x80 => Ok((byte & 0x3f) as u32),
            Some(_) => Err(Error::DataLoss),
            None => Err(Error::DataLoss),
        }
    }

    /// Decodes and extracts the next Unicode scalar value from the stream.
    ///
    /// Returns `Ok(None)` at end of stream and `Err(Error::DataLoss)` if the
    /// next bytes are not valid UTF-8.
    pub fn read_char(&mut self) -> Result<Option<char>> {
        let Some(leading) = self.read_one_byte()? else {
            return Ok(None);
        };

        let codepoint = if leading & 0x80 == 0 {
            leading as u32
        } else if leading & 0xe0 == 0xc0 {
            let mut cp = (leading & 0x1f) as u32;
            cp = (cp << 6) | self.continuation_byte()?;
            cp
        } else if leading & 0xf0 == 0xe0 {
            let mut cp = (leading & 0x0f) as u32;
            cp = (cp << 6) | self.continuation_byte()?;
            cp = (cp << 6) | self.continuation_byte()?;
            cp
        } else if leading & 0xf8 == 0xf0 {
            let mut cp = (leading & 0x07) as u32;
            cp = (cp << 6) | self.continuation_byte()?;
            cp = (cp << 6) | self.continuation_byte()?;
            cp = (cp << 6) | self.continuation_byte()?;
            cp
        } else {
            return Err(Error::DataLoss);
        };

        char::from_u32(codepoint).map(Some).ok_or(Error::DataLoss)
    }

    /// Reads characters into `result` until a newline or end-of-file is
    /// reached. The newline itself is not appended.
    ///
    /// Returns whether any characters were read.
    pub fn read_line(&mut self, result: &mut String) -> Result<bool> {
        let mut read_any = false;

        while let Some(ch) = self.read_char()? {
            read_any = true;
            if ch == '\n' {
                break;
            }
            result.push(ch);
        }

        Ok(read_any)
    }
}
