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

//! A socket that accepts incoming TCP connections.

use std::net::TcpListener;

use status::{Error, Result};

use crate::endpoint::Endpoint;
use crate::ipv4::IPv4Address;
use crate::tcp::TcpSocket;

fn io_err(_: std::io::Error) -> Error {
    Error::Unavailable
}

/// A bound, listening TCP socket.
pub struct ListenSocket {
    listener: TcpListener,
}

impl ListenSocket {
    /// Binds and starts listening on `endpoint`. A port of `0` asks the OS
    /// to choose an available port, retrievable afterward via
    /// [`ListenSocket::local_endpoint`].
    pub fn bind(endpoint: Endpoint<IPv4Address>) -> Result<Self> {
        let listener = TcpListener::bind(std::net::SocketAddr::from(endpoint)).map_err(io_err)?;
        Ok(Self { listener })
    }

    /// The endpoint this socket is bound to.
    pub fn local_endpoint(&self) -> Result<Endpoint<IPv4Address>> {
        match self.listener.local_addr().map_err(io_err)? {
            std::net::SocketAddr::V4(addr) => Ok(addr.into()),
            std::net::SocketAddr::V6(_) => Err(Error::Internal),
        }
    }

    /// Blocks until an incoming connection arrives, then accepts it.
    pub fn accept(&mut self) -> Result<TcpSocket> {
        let (stream, _) = self.listener.accept().map_err(io_err)?;
        Ok(TcpSocket::from_accepted(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_to_port_zero_picks_an_available_port() {
        let listener = ListenSocket::bind(Endpoint::new(IPv4Address::in_addr_loopback(), 0)).unwrap();
        assert_ne!(listener.local_endpoint().unwrap().port(), 0);
    }
}
