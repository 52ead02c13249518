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

//! `bytes` is a small collection of `const`-context utilities for
//! manipulating binary data, used by crates in this workspace (notably
//! `base64`) to build lookup tables at compile time.
//!
//! # Examples
//! ```
//! use bytes::concat_const_u8_slices;
//!
//! const SLICE_A: &[u8] = b"abc";
//! const SLICE_B: &[u8] = b"def";
//! const SLICE_AB: &[u8] = concat_const_u8_slices!(SLICE_A, SLICE_B);
//! assert_eq!(SLICE_AB, b"abcdef");
//! ```
#![no_std]
#![deny(missing_docs)]

/// Concatenates multiple `const [u8]`s into one.
///
/// Returns a `const [u8]`
#[macro_export]
macro_rules! concat_const_u8_slices {
  ($($slice:expr),+) => {{
      // `+` is not a valid repetition separator, so the expansion starts
      // with a literal 0 and folds with `+` inside the repetition instead.
      const TOTAL_LEN: usize = 0 $(+ $slice.len())+;
      const ARRAY: [u8; TOTAL_LEN] = {
          let mut array = [0u8; TOTAL_LEN];
          let mut array_index = 0;

          $({
              // `while` instead of `for`: `for` loops aren't allowed in const fn.
              let mut slice_index = 0;
              while slice_index < $slice.len() {
                  array[array_index] = $slice[slice_index];
                  array_index += 1;
                  slice_index += 1;
              }
          })+;

          array
      };
      &ARRAY
  }}
}

/// Concatenates multiple `const &'static str`s into one.
///
/// Returns a `const &'static str`
#[macro_export]
macro_rules! concat_static_strs {
  ($($string:expr),+) => {{
    // Safety: every input is a valid utf8 `&str`, so the concatenated byte
    // array is valid utf8 too.
    unsafe{
      core::str::from_utf8_unchecked($crate::concat_const_u8_slices!($($string.as_bytes()),+))
    }
  }}
}

#[cfg(test)]
mod tests {
    #[test]
    fn one_const_slice_concatenates_correctly() {
        const SLICE_A: &[u8] = b"abc";
        const SLICE_A_PRIME: &[u8] = concat_const_u8_slices!(SLICE_A);
        assert_eq!(SLICE_A_PRIME, b"abc");
    }

    #[test]
    fn two_const_slices_concatenates_correctly() {
        const SLICE_A: &[u8] = b"abc";
        const SLICE_B: &[u8] = b"def";
        const SLICE_AB: &[u8] = concat_const_u8_slices!(SLICE_A, SLICE_B);
        assert_eq!(SLICE_AB, b"abcdef");
    }

    #[test]
    fn empty_middle_const_slice_concatenates_correctly() {
        const SLICE_A: &[u8] = b"abc";
        const SLICE_B: &[u8] = b"";
        const SLICE_C: &[u8] = b"ghi";
        const SLICE_ABC: &[u8] = concat_const_u8_slices!(SLICE_A, SLICE_B, SLICE_C);
        assert_eq!(SLICE_ABC, b"abcghi");
    }

    #[test]
    fn strings_concatenate_correctly() {
        const STR_A: &str = "abc";
        const STR_B: &str = "def";
        const STR_AB: &str = concat_static_strs!(STR_A, STR_B);
        assert_eq!(STR_AB, "abcdef");
    }
}
