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

//! Logger configuration. There is no file-based configuration format here —
//! just the handful of constructor parameters the original logging
//! subsystem exposed.

/// Tunables shared by every sink a [`crate::Logger`] owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Messages longer than this are truncated before being handed to a
    /// sink.
    pub max_message_size: usize,
    /// A [`crate::FileSink`] rotates to a new file once its current file
    /// reaches this size, in bytes.
    pub max_file_size: u64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_message_size: 4096,
            max_file_size: 10 * 1024 * 1024,
        }
    }
}
