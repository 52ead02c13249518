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

//! A connection-oriented streaming socket.

use std::io::{Read, Write};
use std::net::TcpStream;

use status::{Error, Result};

use crate::endpoint::Endpoint;
use crate::ipv4::IPv4Address;
use crate::socket::{ConnectedState, IOMode};

fn io_err(_: std::io::Error) -> Error {
    Error::Unavailable
}

/// A TCP socket connected to (or in the process of connecting to) a
/// remote IPv4 endpoint.
///
/// Only [`IOMode::Synchronous`] is implemented; constructing with
/// [`IOMode::Asynchronous`] is accepted but every operation returns
/// [`Error::Unimplemented`], matching this crate's Non-goal of not
/// implementing a full async/poll-based socket stack.
pub struct TcpSocket {
    mode: IOMode,
    stream: Option<TcpStream>,
    state: ConnectedState,
}

impl TcpSocket {
    /// Creates an unconnected socket in synchronous IO mode.
    pub fn new() -> Self {
        Self::with_mode(IOMode::Synchronous)
    }

    /// Creates an unconnected socket in the given IO mode.
    pub fn with_mode(mode: IOMode) -> Self {
        Self { mode, stream: None, state: ConnectedState::Disconnected }
    }

    fn from_stream(stream: TcpStream, mode: IOMode) -> Self {
        Self { mode, stream: Some(stream), state: ConnectedState::Connected }
    }

    /// The socket's current connection state.
    pub fn state(&self) -> ConnectedState {
        self.state
    }

    /// Whether the socket is connected to a remote endpoint.
    pub fn is_connected(&self) -> bool {
        self.state == ConnectedState::Connected
    }

    /// Connects to `endpoint`.
    pub fn connect(&mut self, endpoint: Endpoint<IPv4Address>) -> Result<ConnectedState> {
        if self.mode != IOMode::Synchronous {
            return Err(Error::Unimplemented);
        }

        let stream = TcpStream::connect(std::net::SocketAddr::from(endpoint)).map_err(io_err)?;
        self.stream = Some(stream);
        self.state = ConnectedState::Connected;
        Ok(self.state)
    }

    /// The remote endpoint this socket is connected to, if any.
    pub fn remote_endpoint(&self) -> Option<Endpoint<IPv4Address>> {
        let stream = self.stream.as_ref()?;
        match stream.peer_addr().ok()? {
            std::net::SocketAddr::V4(addr) => Some(addr.into()),
            std::net::SocketAddr::V6(_) => None,
        }
    }

    /// Sends `message` to the connected remote socket, returning the
    /// number of bytes transmitted.
    pub fn send(&mut self, message: &[u8]) -> Result<usize> {
        let stream = self.stream.as_mut().ok_or(Error::FailedPrecondition)?;
        stream.write(message).map_err(io_err)
    }

    /// Receives up to `buffer.len()` bytes from the connected remote
    /// socket, returning the number of bytes read.
    pub fn receive(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let stream = self.stream.as_mut().ok_or(Error::FailedPrecondition)?;
        stream.read(buffer).map_err(io_err)
    }

    /// Closes the socket, leaving it in a disconnected state.
    pub fn close(&mut self) {
        self.stream = None;
        self.state = ConnectedState::Disconnected;
    }

    pub(crate) fn from_accepted(stream: TcpStream) -> Self {
        Self::from_stream(stream, IOMode::Synchronous)
    }
}

impl Default for TcpSocket {
    fn default() -> Self {
        Self::new()
    }
}
