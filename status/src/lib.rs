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

//! `status` provides a small status-code style error type shared by the
//! ambient crates in this workspace (`stream`, `varint`, `base64`, `net`).
//!
//! Unlike a typical application error enum, every variant here maps to a
//! stable numeric code so that errors survive crossing an FFI or wire
//! boundary. `OK` is a constant rather than an enum variant: the success case
//! has no associated error data.

#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;

/// The status code reserved for success.
pub const OK: u32 = 0;

/// A status-code style error.
///
/// Numeric values are stable and may be relied on by callers that need to
/// transmit a status across a boundary that can't carry the enum itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Error::Cancelled => "CANCELLED",
            Error::Unknown => "UNKNOWN",
            Error::InvalidArgument => "INVALID_ARGUMENT",
            Error::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Error::NotFound => "NOT_FOUND",
            Error::AlreadyExists => "ALREADY_EXISTS",
            Error::PermissionDenied => "PERMISSION_DENIED",
            Error::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Error::FailedPrecondition => "FAILED_PRECONDITION",
            Error::Aborted => "ABORTED",
            Error::OutOfRange => "OUT_OF_RANGE",
            Error::Unimplemented => "UNIMPLEMENTED",
            Error::Internal => "INTERNAL",
            Error::Unavailable => "UNAVAILABLE",
            Error::DataLoss => "DATA_LOSS",
            Error::Unauthenticated => "UNAUTHENTICATED",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The `Result` type used throughout the ambient crates of this workspace.
pub type Result<T> = core::result::Result<T, Error>;

/// Converts a [`Result`] into its numeric status code.
pub trait StatusCode {
    /// Returns [`OK`] for `Ok(_)`, or the error's numeric code otherwise.
    fn status_code(&self) -> u32;
}

impl<T> StatusCode for Result<T> {
    fn status_code(&self) -> u32 {
        match self {
            Ok(_) => OK,
            Err(e) => *e as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_has_zero_status_code() {
        let result: Result<()> = Ok(());
        assert_eq!(result.status_code(), OK);
    }

    #[test]
    fn every_variant_round_trips_its_status_code() {
        let cases: &[(Error, u32)] = &[
            (Error::Cancelled, 1),
            (Error::Unknown, 2),
            (Error::InvalidArgument, 3),
            (Error::DeadlineExceeded, 4),
            (Error::NotFound, 5),
            (Error::AlreadyExists, 6),
            (Error::PermissionDenied, 7),
            (Error::ResourceExhausted, 8),
            (Error::FailedPrecondition, 9),
            (Error::Aborted, 10),
            (Error::OutOfRange, 11),
            (Error::Unimplemented, 12),
            (Error::Internal, 13),
            (Error::Unavailable, 14),
            (Error::DataLoss, 15),
            (Error::Unauthenticated, 16),
        ];

        for (err, code) in cases {
            let result: Result<()> = Err(*err);
            assert_eq!(result.status_code(), *code);
        }
    }
}
