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

//! The interface a log destination implements.

use status::Result;

use crate::record::Record;

/// Receives log records and streams them however the implementation sees
/// fit (to a terminal, a file, ...).
///
/// Implementations need not be thread-safe; a [`crate::Logger`] owns its
/// sinks exclusively.
pub trait Sink {
    /// Prepares the sink to receive records. Called once, before the first
    /// [`stream`](Sink::stream) call.
    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Formats and streams `record`. If this returns an error, the owning
    /// [`crate::Logger`] stops accepting new records.
    fn stream(&mut self, record: &Record) -> Result<()>;
}
