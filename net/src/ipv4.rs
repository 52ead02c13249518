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

//! IPv4 addresses in dot-decimal notation.

use std::net::Ipv4Addr;

use nom::character::complete::digit1;
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::bytes::complete::tag;
use nom::IResult;

use fmt::{Format, Renderer};
use status::Result;

fn dot_decimal_parts(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(tag("."), digit1))(input)
}

/// A 4-octet IPv4 address, stored in dot-decimal order (octet 0 is the
/// first octet of the address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IPv4Address {
    octets: [u8; 4],
}

impl IPv4Address {
    /// Creates an address from a 4-part octet array.
    pub const fn new(octets: [u8; 4]) -> Self {
        Self { octets }
    }

    /// `0.0.0.0`.
    pub const fn in_addr_any() -> Self {
        Self::new([0, 0, 0, 0])
    }

    /// `255.255.255.255`.
    pub const fn in_addr_broadcast() -> Self {
        Self::new([255, 255, 255, 255])
    }

    /// `127.0.0.1`.
    pub const fn in_addr_loopback() -> Self {
        Self::new([127, 0, 0, 1])
    }

    /// Parses an address from dot-decimal notation.
    ///
    /// The string must contain between one and four dot-separated parts.
    /// If fewer than four parts are given, the last part is treated as an
    /// integer spanning as many bytes as are needed to fill out the
    /// address to four octets: `"127.65530"` parses to `127.0.255.250`,
    /// since `65530` occupies the remaining three octets in big-endian
    /// order.
    pub fn from_string(address: &str) -> Option<Self> {
        let (_, parts) = dot_decimal_parts(address).ok()?;
        if parts.is_empty() || parts.len() > 4 {
            return None;
        }

        let mut octets = [0u8; 4];
        let (leading, last) = parts.split_at(parts.len() - 1);

        for (octet, part) in octets.iter_mut().zip(leading) {
            *octet = part.parse::<u8>().ok()?;
        }

        let remaining = 4 - leading.len();
        let max_value: u64 = (1u64 << (remaining * 8)) - 1;
        let value: u64 = last[0].parse().ok()?;
        if value > max_value {
            return None;
        }

        let bytes = value.to_be_bytes();
        octets[leading.len()..].copy_from_slice(&bytes[8 - remaining..]);

        Some(Self { octets })
    }

    /// The address as a four-octet array.
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Renders the address in dot-decimal notation.
    pub fn to_string(&self) -> String {
        let [a, b, c, d] = self.octets;
        std::format!("{a}.{b}.{c}.{d}")
    }

    /// The address as a big-endian (network order) 32-bit integer.
    pub const fn network_order(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// The address as a native-endian 32-bit integer, matching the layout
    /// the octets would have in memory on the host.
    pub const fn host_order(&self) -> u32 {
        u32::from_ne_bytes(self.octets)
    }
}

impl Default for IPv4Address {
    fn default() -> Self {
        Self::in_addr_any()
    }
}

impl From<Ipv4Addr> for IPv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr.octets())
    }
}

impl From<IPv4Address> for Ipv4Addr {
    fn from(addr: IPv4Address) -> Self {
        Ipv4Addr::from(addr.octets)
    }
}

impl Format for IPv4Address {
    fn format(&self, renderer: &mut Renderer<'_>) -> Result<()> {
        renderer.write_aligned(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_dotted_quad() {
        let address = IPv4Address::from_string("192.168.1.10").unwrap();
        assert_eq!(address.octets(), [192, 168, 1, 10]);
    }

    #[test]
    fn fills_out_a_shorthand_last_octet() {
        let address = IPv4Address::from_string("127.65530").unwrap();
        assert_eq!(address.octets(), [127, 0, 255, 250]);
    }

    #[test]
    fn a_single_part_is_read_as_a_32_bit_integer() {
        let address = IPv4Address::from_string("16909060").unwrap();
        assert_eq!(address.octets(), [1, 2, 3, 4]);
    }

    #[test]
    fn rejects_an_out_of_range_octet() {
        assert!(IPv4Address::from_string("256.0.0.1").is_none());
    }

    #[test]
    fn rejects_more_than_four_parts() {
        assert!(IPv4Address::from_string("1.2.3.4.5").is_none());
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(IPv4Address::from_string("not.an.ip.address").is_none());
    }

    #[test]
    fn renders_in_dot_decimal_notation() {
        let address = IPv4Address::new([10, 0, 0, 1]);
        assert_eq!(address.to_string(), "10.0.0.1");
    }

    #[test]
    fn well_known_addresses_are_correct() {
        assert_eq!(IPv4Address::in_addr_any().octets(), [0, 0, 0, 0]);
        assert_eq!(IPv4Address::in_addr_broadcast().octets(), [255, 255, 255, 255]);
        assert_eq!(IPv4Address::in_addr_loopback().octets(), [127, 0, 0, 1]);
    }

    #[test]
    fn formats_through_the_fmt_crate() {
        let address = IPv4Address::new([1, 2, 3, 4]);
        let rendered = fmt_macros::format!("{}", fmt::UserDefined(&address));
        assert_eq!(rendered, "1.2.3.4");
    }
}
