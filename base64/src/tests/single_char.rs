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

// Spot checks across the byte range rather than all 256 values.
pub fn test_cases() -> Vec<(&'static [u8], &'static str)> {
    vec![
        (&b"\x00"[..], "AA=="),
        (&b"\x01"[..], "AQ=="),
        (&b"\x1f"[..], "Hw=="),
        (&b"\x20"[..], "IA=="),
        (&b"\x41"[..], "QQ=="),
        (&b"\x42"[..], "Qg=="),
        (&b"\x61"[..], "YQ=="),
        (&b"\x7a"[..], "eg=="),
        (&b"\x80"[..], "gA=="),
        (&b"\xff"[..], "/w=="),
    ]
}
