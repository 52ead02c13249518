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

//! A single captured log point.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::level::Level;

/// The source location a log point was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    /// The source file, as given by `file!()`.
    pub file: &'static str,
    /// The enclosing function's name.
    pub function: &'static str,
    /// The source line, as given by `line!()`.
    pub line: u32,
}

static NEXT_INDEX: AtomicU64 = AtomicU64::new(0);

/// A single log point: a monotonically increasing index, its level, the
/// call site, and the rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The order this record was created in, relative to every other record
    /// made by this process.
    pub index: u64,
    /// The record's severity.
    pub level: Level,
    /// Where the record was made.
    pub trace: Trace,
    /// The rendered message, already truncated to the logger's configured
    /// maximum message size.
    pub message: String,
}

impl Record {
    /// Creates a record, assigning it the next monotonic index.
    pub fn new(level: Level, trace: Trace, message: String) -> Self {
        Self {
            index: NEXT_INDEX.fetch_add(1, Ordering::Relaxed),
            level,
            trace,
            message,
        }
    }
}
