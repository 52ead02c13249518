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

//! A sink that streams records to a size-rotated file.

use std::fs::{File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;

use fmt_macros::format;
use status::{Error, Result};

use crate::config::LoggerConfig;
use crate::record::Record;
use crate::sink::Sink;

fn io_err(_: std::io::Error) -> Error {
    Error::Internal
}

/// Streams log records to a file under `logger_directory`, rotating to a
/// freshly numbered file once the current one exceeds
/// [`LoggerConfig::max_file_size`].
pub struct FileSink {
    config: LoggerConfig,
    directory: PathBuf,
    file: Option<File>,
    written: u64,
    index: u32,
}

impl FileSink {
    /// Creates a sink writing under `logger_directory`. No file is created
    /// until [`Sink::initialize`] is called.
    pub fn new(config: LoggerConfig, logger_directory: impl Into<PathBuf>) -> Self {
        Self {
            config,
            directory: logger_directory.into(),
            file: None,
            written: 0,
            index: 0,
        }
    }

    fn path_for(&self, index: u32) -> PathBuf {
        self.directory.join(format!("log.{index}.txt"))
    }

    fn create_log_file(&mut self) -> Result<()> {
        self.index += 1;
        let path = self.path_for(self.index);

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(io_err)?;

        self.file = Some(file);
        self.written = 0;
        Ok(())
    }

    /// The path of the file currently being written to, if any.
    pub fn current_path(&self) -> Option<PathBuf> {
        (self.index > 0).then(|| self.path_for(self.index))
    }
}

impl Sink for FileSink {
    fn initialize(&mut self) -> Result<()> {
        std::fs::create_dir_all(&self.directory).map_err(io_err)?;
        self.create_log_file()
    }

    fn stream(&mut self, record: &Record) -> Result<()> {
        if self.file.is_none() {
            self.create_log_file()?;
        }

        let mut line = format!(
            "#{} [{}] {}:{} ({}): {}\n",
            record.index,
            record.level.tag(),
            record.trace.file,
            record.trace.line,
            record.trace.function,
            record.message
        );
        line.truncate(self.config.max_message_size);

        let file = self.file.as_mut().expect("checked above");
        file.write_all(line.as_bytes()).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        self.written += line.len() as u64;

        if self.written >= self.config.max_file_size {
            self.create_log_file()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::record::Trace;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("fmt-log-test-{name}-{}", std::process::id()));
        dir
    }

    #[test]
    fn initialize_creates_the_first_log_file() {
        let dir = temp_dir("init");
        let config = LoggerConfig::default();
        let mut sink = FileSink::new(config, &dir);
        sink.initialize().unwrap();
        assert!(sink.current_path().unwrap().exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn streaming_appends_to_the_current_file() {
        let dir = temp_dir("stream");
        let config = LoggerConfig::default();
        let mut sink = FileSink::new(config, &dir);
        sink.initialize().unwrap();

        let trace = Trace { file: "a.rs", function: "f", line: 1 };
        sink.stream(&Record::new(Level::Info, trace, "hello".to_string())).unwrap();

        let contents = std::fs::read_to_string(sink.current_path().unwrap()).unwrap();
        assert!(contents.contains("hello"));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn exceeding_max_file_size_rotates_to_a_new_file() {
        let dir = temp_dir("rotate");
        let config = LoggerConfig { max_message_size: 4096, max_file_size: 8 };
        let mut sink = FileSink::new(config, &dir);
        sink.initialize().unwrap();

        let trace = Trace { file: "a.rs", function: "f", line: 1 };
        sink.stream(&Record::new(Level::Info, trace, "first message".to_string())).unwrap();
        assert_eq!(sink.index, 2, "exceeding max_file_size rotates within the same call");

        sink.stream(&Record::new(Level::Info, trace, "second message".to_string())).unwrap();
        assert_eq!(sink.index, 3);

        std::fs::remove_dir_all(&dir).ok();
    }
}
