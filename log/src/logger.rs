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

//! The orchestrator that fans a log point out to every configured sink.

use status::Result;

use crate::config::LoggerConfig;
use crate::level::Level;
use crate::record::{Record, Trace};
use crate::sink::Sink;

/// Owns a set of [`Sink`]s and dispatches records to all of them.
///
/// If initializing a sink fails, that sink is dropped and never receives
/// records. If streaming to a sink later fails, that sink is stopped: it is
/// removed from rotation and receives no further records, matching the
/// contract [`Sink::stream`] documents. Once every sink has stopped, the
/// logger itself is considered stopped and silently drops records, rather
/// than returning an error from every subsequent call.
pub struct Logger {
    config: LoggerConfig,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    /// Creates a logger with no sinks. Use [`Logger::add_sink`] to attach
    /// destinations before logging anything.
    pub fn new(config: LoggerConfig) -> Self {
        Self { config, sinks: Vec::new() }
    }

    /// Initializes `sink` and, if that succeeds, adds it to the logger.
    ///
    /// A sink that fails to initialize is dropped and never receives
    /// records, matching [`fly::LogSink::initialize`]'s contract that a
    /// failed initialization keeps the logger from starting that sink.
    pub fn add_sink(&mut self, mut sink: Box<dyn Sink>) -> Result<()> {
        sink.initialize()?;
        self.sinks.push(sink);
        Ok(())
    }

    /// Whether the logger has at least one live sink.
    pub fn is_stopped(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Builds a record from `level`/`trace`/`message` (truncating the
    /// message to [`LoggerConfig::max_message_size`]) and streams it to
    /// every live sink, dropping any sink whose `stream` call fails.
    pub fn log(&mut self, level: Level, trace: Trace, mut message: String) {
        message.truncate(self.config.max_message_size);
        let record = Record::new(level, trace, message);

        self.sinks.retain_mut(|sink| sink.stream(&record).is_ok());
    }
}
