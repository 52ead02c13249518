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

//! The severity of a single log point.

/// How severe a log point is.
///
/// `Debug`/`Info`/`Warn`/`Error` are the levels a logger subsystem carries;
/// `Critical`/`Fatal` are additionally recognized so every one of the
/// facade macros (`logf!`, `criticalf!`, ...) maps to a distinct level. The
/// discriminant gap at 6 is deliberate, left open for a level this
/// repository doesn't need.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Critical = 5,
    Fatal = 7,
}

impl Level {
    /// A fixed-width tag used when rendering a log line, e.g. `"INF"`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DBG",
            Self::Info => "INF",
            Self::Warn => "WRN",
            Self::Error => "ERR",
            Self::Critical => "CRT",
            Self::Fatal => "FTL",
        }
    }

    /// Whether this level should be considered an error condition when
    /// choosing which stream a console sink writes to.
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error | Self::Critical | Self::Fatal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_three_characters() {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Critical,
            Level::Fatal,
        ] {
            assert_eq!(level.tag().len(), 3);
        }
    }

    #[test]
    fn only_error_and_above_are_error_conditions() {
        assert!(!Level::Debug.is_error());
        assert!(!Level::Info.is_error());
        assert!(!Level::Warn.is_error());
        assert!(Level::Error.is_error());
        assert!(Level::Critical.is_error());
        assert!(Level::Fatal.is_error());
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert!(Level::Critical < Level::Fatal);
    }
}
