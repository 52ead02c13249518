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

//! IPv6 addresses, including the `"::"` shorthand for a run of zeros.

use std::net::Ipv6Addr;

use fmt::{Format, Renderer};
use status::Result;

/// A 16-octet IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IPv6Address {
    octets: [u8; 16],
}

fn parse_hextet(group: &str) -> Option<u16> {
    if group.is_empty() || group.len() > 4 {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}

impl IPv6Address {
    /// Creates an address from a 16-part octet array.
    pub const fn new(octets: [u8; 16]) -> Self {
        Self { octets }
    }

    /// `::`.
    pub const fn in_addr_any() -> Self {
        Self::new([0; 16])
    }

    /// `::1`.
    pub const fn in_addr_loopback() -> Self {
        let mut octets = [0u8; 16];
        octets[15] = 1;
        Self::new(octets)
    }

    /// Parses an address from its string form, either fully written out
    /// (eight colon-separated hexadectets) or in shorthand, where each
    /// hexadectet may drop leading zeros and at most one run of
    /// consecutive all-zero hexadectets may be collapsed to `"::"`.
    pub fn from_string(address: &str) -> Option<Self> {
        let mut halves = address.splitn(2, "::");
        let head = halves.next()?;
        let tail = halves.next();

        if address.matches("::").count() > 1 {
            return None;
        }

        let parse_groups = |s: &str| -> Option<Vec<u16>> {
            if s.is_empty() {
                return Some(Vec::new());
            }
            s.split(':').map(parse_hextet).collect()
        };

        let head_groups = parse_groups(head)?;

        let groups: Vec<u16> = match tail {
            None => {
                if head_groups.len() != 8 {
                    return None;
                }
                head_groups
            }
            Some(tail) => {
                let tail_groups = parse_groups(tail)?;
                let filled = 8usize.checked_sub(head_groups.len() + tail_groups.len())?;
                let mut groups = head_groups;
                groups.extend(std::iter::repeat(0u16).take(filled));
                groups.extend(tail_groups);
                groups
            }
        };

        if groups.len() != 8 {
            return None;
        }

        let mut octets = [0u8; 16];
        for (chunk, group) in octets.chunks_exact_mut(2).zip(groups) {
            chunk.copy_from_slice(&group.to_be_bytes());
        }
        Some(Self { octets })
    }

    /// The address as a 16-octet array.
    pub const fn octets(&self) -> [u8; 16] {
        self.octets
    }

    fn hextets(&self) -> [u16; 8] {
        let mut hextets = [0u16; 8];
        for (hextet, chunk) in hextets.iter_mut().zip(self.octets.chunks_exact(2)) {
            *hextet = u16::from_be_bytes([chunk[0], chunk[1]]);
        }
        hextets
    }

    /// Renders the address in shorthand form: leading zeros dropped from
    /// each hexadectet, and the longest run of two or more consecutive
    /// all-zero hexadectets collapsed to `"::"`.
    pub fn to_string(&self) -> String {
        let hextets = self.hextets();

        let mut best: Option<(usize, usize)> = None;
        let mut run_start = None;
        for (i, &h) in hextets.iter().enumerate() {
            if h == 0 {
                run_start.get_or_insert(i);
            } else if let Some(start) = run_start.take() {
                let len = i - start;
                if len > 1 && best.map_or(true, |(_, blen)| len > blen) {
                    best = Some((start, len));
                }
            }
        }
        if let Some(start) = run_start {
            let len = hextets.len() - start;
            if len > 1 && best.map_or(true, |(_, blen)| len > blen) {
                best = Some((start, len));
            }
        }

        match best {
            Some((start, len)) => {
                let before: Vec<String> = hextets[..start].iter().map(|h| std::format!("{h:x}")).collect();
                let after: Vec<String> = hextets[start + len..].iter().map(|h| std::format!("{h:x}")).collect();
                std::format!("{}::{}", before.join(":"), after.join(":"))
            }
            None => hextets.iter().map(|h| std::format!("{h:x}")).collect::<Vec<_>>().join(":"),
        }
    }
}

impl Default for IPv6Address {
    fn default() -> Self {
        Self::in_addr_any()
    }
}

impl From<Ipv6Addr> for IPv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr.octets())
    }
}

impl From<IPv6Address> for Ipv6Addr {
    fn from(addr: IPv6Address) -> Self {
        Ipv6Addr::from(addr.octets)
    }
}

impl Format for IPv6Address {
    fn format(&self, renderer: &mut Renderer<'_>) -> Result<()> {
        renderer.write_aligned(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_fully_written_address() {
        let address = IPv6Address::from_string("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(address.to_string(), "2001:db8::1");
    }

    #[test]
    fn parses_the_shorthand_form() {
        let address = IPv6Address::from_string("1::1").unwrap();
        assert_eq!(address.octets()[0..2], [0, 1]);
        assert_eq!(address.octets()[14..16], [0, 1]);
    }

    #[test]
    fn parses_the_unspecified_address() {
        let address = IPv6Address::from_string("::").unwrap();
        assert_eq!(address, IPv6Address::in_addr_any());
    }

    #[test]
    fn rejects_more_than_one_double_colon() {
        assert!(IPv6Address::from_string("1::2::3").is_none());
    }

    #[test]
    fn rejects_too_few_groups_without_shorthand() {
        assert!(IPv6Address::from_string("1:2:3:4:5:6:7").is_none());
    }

    #[test]
    fn rejects_a_hexadectet_out_of_range() {
        assert!(IPv6Address::from_string("abcde::1").is_none());
    }

    #[test]
    fn collapses_the_longest_run_of_zeros() {
        let address = IPv6Address::from_string("1:0:0:2:0:0:0:3").unwrap();
        assert_eq!(address.to_string(), "1:0:0:2::3");
    }

    #[test]
    fn well_known_addresses_round_trip() {
        assert_eq!(IPv6Address::in_addr_any().to_string(), "::");
        assert_eq!(IPv6Address::in_addr_loopback().to_string(), "::1");
    }

    #[test]
    fn formats_through_the_fmt_crate() {
        let address = IPv6Address::in_addr_loopback();
        let rendered = fmt_macros::format!("{}", fmt::UserDefined(&address));
        assert_eq!(rendered, "::1");
    }
}
