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

//! A sink that streams records to the terminal, styled by level.
//!
//! Informational-level records go to standard output; error-level records
//! (`Error`, `Critical`, `Fatal`) go to standard error, so a shell's normal
//! redirection separates the two the way a terminal user expects.

use fmt_macros::format;
use status::Result;

use crate::level::Level;
use crate::record::Record;
use crate::sink::Sink;

const RESET: &str = "\x1b[0m";

const fn ansi_color(level: Level) -> &'static str {
    match level {
        Level::Debug => "\x1b[2m",
        Level::Info => "\x1b[0m",
        Level::Warn => "\x1b[33m",
        Level::Error => "\x1b[31m",
        Level::Critical | Level::Fatal => "\x1b[1;31m",
    }
}

/// Streams log records to stdout/stderr, optionally colored by level.
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    /// Creates a sink that colors its output with ANSI escapes.
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Creates a sink that writes plain, uncolored text.
    pub fn without_color() -> Self {
        Self { color: false }
    }

    fn render(&self, record: &Record) -> String {
        let line = format!(
            "#{} [{}] {}:{} ({}): {}",
            record.index,
            record.level.tag(),
            record.trace.file,
            record.trace.line,
            record.trace.function,
            record.message
        );

        if self.color {
            format!("{}{}{}", ansi_color(record.level), line, RESET)
        } else {
            line
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn stream(&mut self, record: &Record) -> Result<()> {
        let rendered = self.render(record);
        if record.level.is_error() {
            eprintln!("{rendered}");
        } else {
            println!("{rendered}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Trace;

    #[test]
    fn uncolored_rendering_contains_the_level_tag_and_message() {
        let sink = ConsoleSink::without_color();
        let trace = Trace { file: "main.rs", function: "run", line: 7 };
        let record = Record::new(Level::Warn, trace, "disk nearly full".to_string());
        let rendered = sink.render(&record);
        assert!(rendered.contains("[WRN]"));
        assert!(rendered.contains("main.rs:7"));
        assert!(rendered.contains("disk nearly full"));
        assert!(!rendered.contains('\x1b'));
    }

    #[test]
    fn colored_rendering_wraps_the_line_in_an_ansi_escape() {
        let sink = ConsoleSink::new();
        let trace = Trace { file: "main.rs", function: "run", line: 7 };
        let record = Record::new(Level::Error, trace, "oops".to_string());
        let rendered = sink.render(&record);
        assert!(rendered.starts_with("\x1b["));
        assert!(rendered.ends_with(RESET));
    }
}
