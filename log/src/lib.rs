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

//! A small logging facade: a process-wide [`Logger`] fed by per-level
//! macros (`logf!`, `debugf!`, `infof!`, ...) that accept `fmt`-style
//! format strings, the same way [`fmt_macros::format!`] does.
//!
//! ```
//! use log::{init, infof, console::ConsoleSink};
//!
//! init(Default::default());
//! log::with_logger(|logger| logger.add_sink(Box::new(ConsoleSink::new())).unwrap());
//! infof!("listening on port {}", 8080);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub mod config;
pub mod console;
pub mod file;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

pub use config::LoggerConfig;
pub use level::Level;
pub use logger::Logger;
pub use record::{Record, Trace};
pub use sink::Sink;

use std::cell::RefCell;

thread_local! {
    static LOGGER: RefCell<Option<Logger>> = const { RefCell::new(None) };
}

/// Installs the process-wide (thread-local) logger, replacing any logger
/// installed earlier on this thread. No sinks are attached; call
/// [`with_logger`] with [`Logger::add_sink`] to attach them.
pub fn init(config: LoggerConfig) {
    LOGGER.with(|cell| *cell.borrow_mut() = Some(Logger::new(config)));
}

/// Runs `f` against the installed logger, if one has been [`init`]ialized.
/// Does nothing if no logger has been installed on this thread.
pub fn with_logger(f: impl FnOnce(&mut Logger)) {
    LOGGER.with(|cell| {
        if let Some(logger) = cell.borrow_mut().as_mut() {
            f(logger);
        }
    });
}

#[doc(hidden)]
pub mod __private {
    pub use crate::*;
    pub use fmt_macros;
}

/// Emits a log message at `level`, formatted the way [`fmt_macros::format!`]
/// formats its arguments. Does nothing if no logger has been [`init`]ialized
/// on the calling thread.
#[macro_export]
macro_rules! logf {
    ($level:expr, $format_string:literal $(, $args:expr)* $(,)?) => {{
        use $crate::__private as __log_crate;
        let message = __log_crate::fmt_macros::format!($format_string $(, $args)*);
        __log_crate::with_logger(|logger| {
            logger.log(
                $level,
                __log_crate::Trace { file: file!(), function: module_path!(), line: line!() },
                message,
            )
        });
    }};
}

/// Emits a [`Level::Debug`] log message.
#[macro_export]
macro_rules! debugf {
    ($($args:tt)*) => {{
        use $crate::__private as __log_crate;
        __log_crate::logf!(__log_crate::Level::Debug, $($args)*)
    }};
}

/// Emits a [`Level::Info`] log message.
#[macro_export]
macro_rules! infof {
    ($($args:tt)*) => {{
        use $crate::__private as __log_crate;
        __log_crate::logf!(__log_crate::Level::Info, $($args)*)
    }};
}

/// Emits a [`Level::Warn`] log message.
#[macro_export]
macro_rules! warnf {
    ($($args:tt)*) => {{
        use $crate::__private as __log_crate;
        __log_crate::logf!(__log_crate::Level::Warn, $($args)*)
    }};
}

/// Emits a [`Level::Error`] log message.
#[macro_export]
macro_rules! errorf {
    ($($args:tt)*) => {{
        use $crate::__private as __log_crate;
        __log_crate::logf!(__log_crate::Level::Error, $($args)*)
    }};
}

/// Emits a [`Level::Critical`] log message.
#[macro_export]
macro_rules! criticalf {
    ($($args:tt)*) => {{
        use $crate::__private as __log_crate;
        __log_crate::logf!(__log_crate::Level::Critical, $($args)*)
    }};
}

/// Emits a [`Level::Fatal`] log message. Unlike its name, this does not
/// panic; it only logs.
#[macro_export]
macro_rules! fatalf {
    ($($args:tt)*) => {{
        use $crate::__private as __log_crate;
        __log_crate::logf!(__log_crate::Level::Fatal, $($args)*)
    }};
}
