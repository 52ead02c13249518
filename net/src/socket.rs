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

//! Shared socket vocabulary types.

/// Whether a socket's IO calls block the calling thread.
///
/// Only [`IOMode::Synchronous`] is implemented; [`IOMode::Asynchronous`] is
/// accepted by the constructors for API parity with the original but is
/// not currently backed by a non-blocking implementation (see the `net`
/// crate's Non-goals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IOMode {
    /// IO calls block until they complete.
    Synchronous,
    /// IO calls return immediately; readiness is reported separately.
    Asynchronous,
}

/// Whether a listening socket may bind to an address already in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode {
    /// Fail to bind if the address is already in use.
    SingleUse,
    /// Allow binding to an address already in use by another socket.
    AllowReuse,
}

/// A TCP socket's connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectedState {
    /// Not connected to a remote endpoint.
    Disconnected,
    /// A connection attempt is in progress.
    Connecting,
    /// Connected to a remote endpoint.
    Connected,
}
