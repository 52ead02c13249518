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

use fmt_macros::{format, format_to};

#[test]
fn format_expands_to_a_rendered_string() {
    assert_eq!(format!("{} and {}", 1, 2), "1 and 2");
}

#[test]
fn format_reuses_a_manual_position_twice() {
    assert_eq!(format!("{0} {1} {0}", "a", "b"), "a b a");
}

#[test]
fn format_to_writes_into_a_byte_stream() {
    let mut buf = [0u8; 8];
    let mut cursor = stream::Cursor::new(&mut buf[..]);
    format_to!(&mut cursor, "{:#x}", 255).unwrap();
    let written = cursor.position();
    assert_eq!(&buf[..written], b"0xff");
}
