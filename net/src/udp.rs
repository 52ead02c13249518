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

//! A connectionless datagram socket.

use std::net::UdpSocket as StdUdpSocket;

use status::{Error, Result};

use crate::endpoint::Endpoint;
use crate::ipv4::IPv4Address;
use crate::socket::IOMode;

fn io_err(_: std::io::Error) -> Error {
    Error::Unavailable
}

/// A UDP socket bound to a local endpoint.
///
/// Only [`IOMode::Synchronous`] is implemented; see [`crate::tcp::TcpSocket`]
/// for the same restriction's rationale.
pub struct UdpSocket {
    mode: IOMode,
    socket: StdUdpSocket,
}

impl UdpSocket {
    /// Binds a socket to `endpoint` in synchronous IO mode. A port of `0`
    /// asks the OS to choose an available port.
    pub fn bind(endpoint: Endpoint<IPv4Address>) -> Result<Self> {
        Self::bind_with_mode(endpoint, IOMode::Synchronous)
    }

    /// Binds a socket to `endpoint` in the given IO mode.
    pub fn bind_with_mode(endpoint: Endpoint<IPv4Address>, mode: IOMode) -> Result<Self> {
        let socket = StdUdpSocket::bind(std::net::SocketAddr::from(endpoint)).map_err(io_err)?;
        Ok(Self { mode, socket })
    }

    /// The endpoint this socket is bound to.
    pub fn local_endpoint(&self) -> Result<Endpoint<IPv4Address>> {
        match self.socket.local_addr().map_err(io_err)? {
            std::net::SocketAddr::V4(addr) => Ok(addr.into()),
            std::net::SocketAddr::V6(_) => Err(Error::Internal),
        }
    }

    /// Transmits `message` to `endpoint`, returning the number of bytes
    /// sent.
    pub fn send_to(&self, endpoint: Endpoint<IPv4Address>, message: &[u8]) -> Result<usize> {
        if self.mode != IOMode::Synchronous {
            return Err(Error::Unimplemented);
        }
        self.socket.send_to(message, std::net::SocketAddr::from(endpoint)).map_err(io_err)
    }

    /// Receives a datagram into `buffer`, returning the number of bytes
    /// read and the endpoint it was received from.
    pub fn receive(&self, buffer: &mut [u8]) -> Result<(usize, Endpoint<IPv4Address>)> {
        let (read, from) = self.socket.recv_from(buffer).map_err(io_err)?;
        match from {
            std::net::SocketAddr::V4(addr) => Ok((read, addr.into())),
            std::net::SocketAddr::V6(_) => Err(Error::Internal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_datagram_round_trips_between_two_sockets() {
        let server = UdpSocket::bind(Endpoint::new(IPv4Address::in_addr_loopback(), 0)).unwrap();
        let client = UdpSocket::bind(Endpoint::new(IPv4Address::in_addr_loopback(), 0)).unwrap();

        let server_endpoint = server.local_endpoint().unwrap();
        client.send_to(server_endpoint, b"hello").unwrap();

        let mut buffer = [0u8; 16];
        let (read, from) = server.receive(&mut buffer).unwrap();
        assert_eq!(&buffer[..read], b"hello");
        assert_eq!(from, client.local_endpoint().unwrap());
    }
}
