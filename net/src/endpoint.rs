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

//! A version-independent pairing of an IP address and a port.

use fmt::{Format, Renderer};
use status::Result;

use crate::ipv4::IPv4Address;
use crate::ipv6::IPv6Address;

/// A socket port number.
pub type PortType = u16;

/// Implemented by the two address types an [`Endpoint`] may be generic
/// over, so [`Endpoint::from_string`] can ask each for its own parser and
/// textual form.
pub trait Address: Copy {
    /// Parses this address type from its plain string form (no brackets,
    /// no port).
    fn from_string(address: &str) -> Option<Self>;

    /// Renders this address type in its plain string form.
    fn to_string(&self) -> String;
}

impl Address for IPv4Address {
    fn from_string(address: &str) -> Option<Self> {
        IPv4Address::from_string(address)
    }

    fn to_string(&self) -> String {
        IPv4Address::to_string(self)
    }
}

impl Address for IPv6Address {
    fn from_string(address: &str) -> Option<Self> {
        IPv6Address::from_string(address)
    }

    fn to_string(&self) -> String {
        IPv6Address::to_string(self)
    }
}

/// An IP address paired with a port, generic over the address family.
///
/// IPv6 endpoints render with the address bracketed (`"[::1]:80"`), since
/// an IPv6 address may itself contain colons that would otherwise be
/// ambiguous with the port separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<A: Address> {
    address: A,
    port: PortType,
}

impl<A: Address> Endpoint<A> {
    /// Creates an endpoint from an address and a port.
    pub const fn new(address: A, port: PortType) -> Self {
        Self { address, port }
    }

    /// The endpoint's address.
    pub const fn address(&self) -> &A {
        &self.address
    }

    /// The endpoint's port.
    pub const fn port(&self) -> PortType {
        self.port
    }

    /// Sets the endpoint's address.
    pub fn set_address(&mut self, address: A) {
        self.address = address;
    }

    /// Sets the endpoint's port.
    pub fn set_port(&mut self, port: PortType) {
        self.port = port;
    }
}

impl Endpoint<IPv4Address> {
    /// Parses an IPv4 endpoint from `"address:port"`.
    pub fn from_string(endpoint: &str) -> Option<Self> {
        let (address, port) = endpoint.rsplit_once(':')?;
        Some(Self::new(IPv4Address::from_string(address)?, port.parse().ok()?))
    }
}

impl Endpoint<IPv6Address> {
    /// Parses an IPv6 endpoint from `"[address]:port"`.
    pub fn from_string(endpoint: &str) -> Option<Self> {
        let rest = endpoint.strip_prefix('[')?;
        let (address, port) = rest.split_once("]:")?;
        Some(Self::new(IPv6Address::from_string(address)?, port.parse().ok()?))
    }
}

impl From<Endpoint<IPv4Address>> for std::net::SocketAddr {
    fn from(endpoint: Endpoint<IPv4Address>) -> Self {
        std::net::SocketAddr::V4(std::net::SocketAddrV4::new(endpoint.address.into(), endpoint.port))
    }
}

impl From<Endpoint<IPv6Address>> for std::net::SocketAddr {
    fn from(endpoint: Endpoint<IPv6Address>) -> Self {
        std::net::SocketAddr::V6(std::net::SocketAddrV6::new(endpoint.address.into(), endpoint.port, 0, 0))
    }
}

impl From<std::net::SocketAddrV4> for Endpoint<IPv4Address> {
    fn from(addr: std::net::SocketAddrV4) -> Self {
        Self::new((*addr.ip()).into(), addr.port())
    }
}

impl From<std::net::SocketAddrV6> for Endpoint<IPv6Address> {
    fn from(addr: std::net::SocketAddrV6) -> Self {
        Self::new((*addr.ip()).into(), addr.port())
    }
}

impl Format for Endpoint<IPv4Address> {
    fn format(&self, renderer: &mut Renderer<'_>) -> Result<()> {
        renderer.write_aligned(&std::format!("{}:{}", self.address.to_string(), self.port))
    }
}

impl Format for Endpoint<IPv6Address> {
    fn format(&self, renderer: &mut Renderer<'_>) -> Result<()> {
        renderer.write_aligned(&std::format!("[{}]:{}", self.address.to_string(), self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_ipv4_endpoint() {
        let endpoint = Endpoint::<IPv4Address>::from_string("127.0.0.1:8080").unwrap();
        assert_eq!(endpoint.address(), &IPv4Address::from_string("127.0.0.1").unwrap());
        assert_eq!(endpoint.port(), 8080);
    }

    #[test]
    fn parses_a_bracketed_ipv6_endpoint() {
        let endpoint = Endpoint::<IPv6Address>::from_string("[::1]:80").unwrap();
        assert_eq!(endpoint.address(), &IPv6Address::in_addr_loopback());
        assert_eq!(endpoint.port(), 80);
    }

    #[test]
    fn rejects_an_ipv6_endpoint_missing_brackets() {
        assert!(Endpoint::<IPv6Address>::from_string("::1:80").is_none());
    }

    #[test]
    fn renders_an_ipv4_endpoint_through_fmt() {
        let endpoint = Endpoint::new(IPv4Address::from_string("10.0.0.1").unwrap(), 443);
        let rendered = fmt_macros::format!("{}", fmt::UserDefined(&endpoint));
        assert_eq!(rendered, "10.0.0.1:443");
    }

    #[test]
    fn renders_an_ipv6_endpoint_bracketed() {
        let endpoint = Endpoint::new(IPv6Address::in_addr_loopback(), 80);
        let rendered = fmt_macros::format!("{}", fmt::UserDefined(&endpoint));
        assert_eq!(rendered, "[::1]:80");
    }
}
