//! Network types for Wake-on-LAN communication.
//!
//! This module provides ergonomic types for working with IP addresses and
//! endpoints in a `no_std` environment, plus the transport abstraction used
//! by the wake sender.

use core::fmt;

pub mod transport;

pub mod mock_transport;

#[cfg(any(feature = "embassy-rp", feature = "embassy-rp-usb"))]
pub mod embassy_adapter;

/// IPv4 address representation.
///
/// A lightweight wrapper around a 4-byte array that provides
/// ergonomic conversions from various input types.
///
/// # Examples
///
/// ```
/// use wol_pico::net::Ipv4Addr;
///
/// // From array
/// let addr = Ipv4Addr::from([192, 168, 1, 10]);
///
/// // From tuple
/// let addr = Ipv4Addr::from((192, 168, 1, 10));
///
/// // From raw bytes
/// let addr = Ipv4Addr::new(192, 168, 1, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ipv4Addr {
    octets: [u8; 4],
}

impl Ipv4Addr {
    /// Create a new IPv4 address from individual octets.
    #[inline]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    /// Returns the four octets that make up this address.
    #[inline]
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// The unspecified IPv4 address (0.0.0.0).
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0, 0);

    /// The localhost IPv4 address (127.0.0.1).
    pub const LOCALHOST: Self = Self::new(127, 0, 0, 1);

    /// The limited broadcast address (255.255.255.255).
    ///
    /// Default destination for magic packets when the local subnet
    /// is not known.
    pub const BROADCAST: Self = Self::new(255, 255, 255, 255);
}

impl From<[u8; 4]> for Ipv4Addr {
    #[inline]
    fn from(octets: [u8; 4]) -> Self {
        Self { octets }
    }
}

impl From<(u8, u8, u8, u8)> for Ipv4Addr {
    #[inline]
    fn from((a, b, c, d): (u8, u8, u8, u8)) -> Self {
        Self::new(a, b, c, d)
    }
}

impl From<Ipv4Addr> for [u8; 4] {
    #[inline]
    fn from(addr: Ipv4Addr) -> [u8; 4] {
        addr.octets
    }
}

impl From<u32> for Ipv4Addr {
    #[inline]
    fn from(ip: u32) -> Self {
        Self {
            octets: ip.to_be_bytes(),
        }
    }
}

impl From<Ipv4Addr> for u32 {
    #[inline]
    fn from(addr: Ipv4Addr) -> u32 {
        u32::from_be_bytes(addr.octets)
    }
}

impl fmt::Display for Ipv4Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3]
        )
    }
}

impl core::str::FromStr for Ipv4Addr {
    type Err = crate::error::WolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut octets = [0u8; 4];

        for octet in &mut octets {
            let part = parts
                .next()
                .ok_or_else(crate::error::WolError::invalid_ip_address)?;
            *octet = part
                .parse()
                .map_err(|_| crate::error::WolError::invalid_ip_address())?;
        }

        // Ensure no extra parts
        if parts.next().is_some() {
            return Err(crate::error::WolError::invalid_ip_address());
        }

        Ok(Self { octets })
    }
}

/// IPv4 endpoint: address plus UDP port.
///
/// # Examples
///
/// ```
/// use wol_pico::net::{IpEndpoint, Ipv4Addr};
///
/// let ep = IpEndpoint::new(Ipv4Addr::BROADCAST, 9);
/// assert_eq!(ep.port, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IpEndpoint {
    /// IPv4 address
    pub addr: Ipv4Addr,
    /// UDP port
    pub port: u16,
}

impl IpEndpoint {
    /// Create a new endpoint.
    #[inline]
    pub const fn new(addr: Ipv4Addr, port: u16) -> Self {
        Self { addr, port }
    }

    /// The unspecified endpoint (0.0.0.0:0).
    pub const UNSPECIFIED: Self = Self::new(Ipv4Addr::UNSPECIFIED, 0);
}

impl fmt::Display for IpEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.addr, self.port)
    }
}

/// Calculate the directed broadcast address for a given IP and prefix length.
///
/// Used by the firmware to derive the wake destination from the DHCP
/// configuration instead of falling back to the limited broadcast.
pub fn subnet_broadcast(ip: impl Into<Ipv4Addr>, prefix_len: u8) -> Ipv4Addr {
    let ip = ip.into();
    if prefix_len >= 32 {
        return ip;
    }

    let host_bits = 32 - prefix_len;
    let mask = !((1u32 << host_bits) - 1);

    let ip_u32 = u32::from(ip);
    Ipv4Addr::from(ip_u32 | !mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let addr = Ipv4Addr::new(192, 168, 1, 10);
        assert_eq!(addr.octets(), [192, 168, 1, 10]);
    }

    #[test]
    fn test_from_array() {
        let addr = Ipv4Addr::from([192, 168, 1, 10]);
        assert_eq!(addr.octets(), [192, 168, 1, 10]);
    }

    #[test]
    fn test_from_tuple() {
        let addr = Ipv4Addr::from((192, 168, 1, 10));
        assert_eq!(addr.octets(), [192, 168, 1, 10]);
    }

    #[test]
    fn test_from_u32() {
        let addr = Ipv4Addr::from(0xC0A8010A); // 192.168.1.10
        assert_eq!(addr.octets(), [192, 168, 1, 10]);
    }

    #[test]
    fn test_to_u32() {
        let addr = Ipv4Addr::new(192, 168, 1, 10);
        assert_eq!(u32::from(addr), 0xC0A8010A);
    }

    #[test]
    fn test_display() {
        let addr = Ipv4Addr::new(192, 168, 1, 10);
        assert_eq!(format!("{}", addr), "192.168.1.10");
    }

    #[test]
    fn test_from_str() {
        let addr: Ipv4Addr = "192.168.1.10".parse().unwrap();
        assert_eq!(addr.octets(), [192, 168, 1, 10]);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("192.168.1".parse::<Ipv4Addr>().is_err());
        assert!("192.168.1.256".parse::<Ipv4Addr>().is_err());
        assert!("192.168.1.10.5".parse::<Ipv4Addr>().is_err());
        assert!("a.b.c.d".parse::<Ipv4Addr>().is_err());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Ipv4Addr::UNSPECIFIED.octets(), [0, 0, 0, 0]);
        assert_eq!(Ipv4Addr::LOCALHOST.octets(), [127, 0, 0, 1]);
        assert_eq!(Ipv4Addr::BROADCAST.octets(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_endpoint_display() {
        let ep = IpEndpoint::new(Ipv4Addr::new(192, 168, 1, 255), 9);
        assert_eq!(format!("{}", ep), "192.168.1.255:9");
    }

    #[test]
    fn test_subnet_broadcast() {
        // /24 network
        assert_eq!(
            subnet_broadcast([192, 168, 1, 29], 24),
            Ipv4Addr::new(192, 168, 1, 255)
        );

        // /16 network
        assert_eq!(
            subnet_broadcast([10, 0, 5, 10], 16),
            Ipv4Addr::new(10, 0, 255, 255)
        );

        // /32 is the host itself
        assert_eq!(
            subnet_broadcast([10, 0, 5, 10], 32),
            Ipv4Addr::new(10, 0, 5, 10)
        );
    }
}
