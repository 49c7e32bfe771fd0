//! Hostnames that carry an IPv4 address in their labels.
//!
//! Two shapes are recognized below the zone apex:
//!
//! * direct: `[prefix.]o1.o2.o3.o4.<apex>` answers `o1.o2.o3.o4`
//! * reverse: `[prefix.]o1.o2.o3.o4.reverse.<apex>` answers `o4.o3.o2.o1`
//!
//! Both are checked against the label sequence of an already normalized
//! name. The reverse shape requires the `reverse` label right before the apex
//! while the direct shape requires a digit label there, so a name can only
//! ever match one of them.

use std::net::Ipv4Addr;

const REVERSE_LABEL: &str = "reverse";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressEncoding {
    Direct,
    Reverse,
}

impl AddressEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressEncoding::Direct => "direct",
            AddressEncoding::Reverse => "reverse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAddress<'a> {
    /// Labels in front of the octets, if any (`foo.bar` in `foo.bar.1.2.3.4.<apex>`).
    pub prefix: Option<&'a str>,

    /// Octets in the order they appear in the name.
    pub octets: [u8; 4],

    pub encoding: AddressEncoding,
}

impl<'a> EncodedAddress<'a> {
    /// Matches `name` against both shapes under `apex`.
    ///
    /// Both arguments must already be normalized (lower case, no trailing dot).
    pub fn parse(name: &'a str, apex: &str) -> Option<Self> {
        let head = strip_apex(name, apex)?;

        if let Some(rest) = strip_last_label(head, REVERSE_LABEL) {
            return Self::parse_octets(rest, AddressEncoding::Reverse);
        }

        Self::parse_octets(head, AddressEncoding::Direct)
    }

    fn parse_octets(head: &'a str, encoding: AddressEncoding) -> Option<Self> {
        let mut labels = head.rsplitn(5, '.');

        let o4 = parse_octet(labels.next()?)?;
        let o3 = parse_octet(labels.next()?)?;
        let o2 = parse_octet(labels.next()?)?;
        let o1 = parse_octet(labels.next()?)?;

        let prefix = match labels.next() {
            Some("") => return None,
            Some(prefix) => Some(prefix),
            None => None,
        };

        Some(Self {
            prefix,
            octets: [o1, o2, o3, o4],
            encoding,
        })
    }

    /// The address to answer with, in the order the encoding prescribes.
    pub fn address(&self) -> Ipv4Addr {
        let [o1, o2, o3, o4] = self.octets;
        match self.encoding {
            AddressEncoding::Direct => Ipv4Addr::new(o1, o2, o3, o4),
            AddressEncoding::Reverse => Ipv4Addr::new(o4, o3, o2, o1),
        }
    }
}

/// Returns everything before `.<apex>`, or `None` if `name` is not strictly below it.
fn strip_apex<'a>(name: &'a str, apex: &str) -> Option<&'a str> {
    name.strip_suffix(apex)?.strip_suffix('.')
}

fn strip_last_label<'a>(head: &'a str, label: &str) -> Option<&'a str> {
    if head == label {
        return Some("");
    }
    head.strip_suffix(label)?.strip_suffix('.')
}

fn parse_octet(label: &str) -> Option<u8> {
    if label.is_empty() || label.len() > 3 || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    label.parse().ok()
}
