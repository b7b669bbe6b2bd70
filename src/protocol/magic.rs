//! Magic packet construction and parsing.
//!
//! This module provides allocation-free building and zero-copy validation
//! of Wake-on-LAN magic packets.
//!
//! ## Packet Structure
//!
//! ```text
//! ┌─────────────────────────────┐
//! │  Sync stream (6 bytes)      │
//! │  - FF FF FF FF FF FF        │
//! ├─────────────────────────────┤
//! │  Target MAC x 16 (96 bytes) │
//! ├─────────────────────────────┤
//! │  SecureOn password          │
//! │  (optional, 4 or 6 bytes)   │
//! └─────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use wol_pico::protocol::magic::{MagicPacket, MagicPacketBuilder};
//! use wol_pico::MacAddress;
//!
//! let mac = MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
//!
//! // Build into a caller-provided buffer
//! let mut buf = [0u8; 102];
//! let len = MagicPacketBuilder::new(mac).build(&mut buf)?;
//!
//! // Parse an incoming packet (zero-copy)
//! let packet = MagicPacket::parse(&buf[..len])?;
//! assert_eq!(packet.target_mac(), mac);
//! # Ok::<(), wol_pico::WolError>(())
//! ```

use crate::addressing::MacAddress;
use crate::error::{Result, WolError};
use crate::protocol::constants::{
    MAC_REPETITIONS, MAGIC_PACKET_SIZE, MAGIC_PACKET_SIZE_PW4, MAGIC_PACKET_SIZE_PW6,
    SYNC_STREAM_SIZE,
};

/// SecureOn password appended to a magic packet.
///
/// Some NICs can be configured to ignore magic packets that do not carry
/// this secret. Both the 4-byte and the more common 6-byte form are
/// supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Password {
    /// 4-byte password
    Four([u8; 4]),
    /// 6-byte password (same length as a MAC address)
    Six([u8; 6]),
}

impl Password {
    /// Parse a password from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `WolError::Protocol` if the slice is not 4 or 6 bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        match data.len() {
            4 => {
                let mut pw = [0u8; 4];
                pw.copy_from_slice(data);
                Ok(Self::Four(pw))
            }
            6 => {
                let mut pw = [0u8; 6];
                pw.copy_from_slice(data);
                Ok(Self::Six(pw))
            }
            _ => Err(WolError::invalid_password()),
        }
    }

    /// The password bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Four(pw) => pw,
            Self::Six(pw) => pw,
        }
    }

    /// Size of the password in bytes (4 or 6).
    pub const fn size(&self) -> usize {
        match self {
            Self::Four(_) => 4,
            Self::Six(_) => 6,
        }
    }
}

/// Builder for creating magic packets.
///
/// Writes the packet into a caller-provided buffer; no allocation.
#[derive(Debug, Clone, Copy)]
pub struct MagicPacketBuilder {
    mac: MacAddress,
    password: Option<Password>,
}

impl MagicPacketBuilder {
    /// Create a new builder for the given target MAC.
    pub const fn new(mac: MacAddress) -> Self {
        Self {
            mac,
            password: None,
        }
    }

    /// Append a SecureOn password to the packet.
    #[must_use]
    pub const fn with_password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Calculate the total packet size.
    pub const fn size(&self) -> usize {
        match self.password {
            Some(pw) => MAGIC_PACKET_SIZE + pw.size(),
            None => MAGIC_PACKET_SIZE,
        }
    }

    /// Build the packet into a buffer.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `WolError::Transport` with a buffer-too-small kind if the
    /// buffer cannot hold the packet.
    pub fn build(&self, buf: &mut [u8]) -> Result<usize> {
        let total = self.size();

        if buf.len() < total {
            return Err(WolError::buffer_too_small());
        }

        // Sync stream
        buf[..SYNC_STREAM_SIZE].fill(0xFF);

        // 16 repetitions of the target MAC
        let octets = self.mac.octets();
        for rep in 0..MAC_REPETITIONS {
            let start = SYNC_STREAM_SIZE + rep * MacAddress::SIZE;
            buf[start..start + MacAddress::SIZE].copy_from_slice(&octets);
        }

        // Optional SecureOn password
        if let Some(password) = self.password {
            buf[MAGIC_PACKET_SIZE..total].copy_from_slice(password.as_bytes());
        }

        Ok(total)
    }
}

/// Zero-copy view of a validated magic packet.
///
/// `parse` checks the full structure once; the accessors then read
/// directly out of the underlying buffer.
#[derive(Debug)]
pub struct MagicPacket<'a> {
    data: &'a [u8],
}

impl<'a> MagicPacket<'a> {
    /// Parse a magic packet from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Length is not 102, 106, or 108 bytes
    /// - The sync stream is not six bytes of `0xFF`
    /// - The 16 MAC repetitions are not identical
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        match data.len() {
            MAGIC_PACKET_SIZE | MAGIC_PACKET_SIZE_PW4 | MAGIC_PACKET_SIZE_PW6 => {}
            n if n > MAGIC_PACKET_SIZE_PW6 => return Err(WolError::payload_too_large()),
            _ => return Err(WolError::invalid_packet()),
        }

        // Sync stream: six bytes of 0xFF
        if data[..SYNC_STREAM_SIZE] != [0xFF; SYNC_STREAM_SIZE] {
            return Err(WolError::invalid_sync_stream());
        }

        // All 16 repetitions must carry the same MAC
        let first = &data[SYNC_STREAM_SIZE..SYNC_STREAM_SIZE + MacAddress::SIZE];
        for rep in 1..MAC_REPETITIONS {
            let start = SYNC_STREAM_SIZE + rep * MacAddress::SIZE;
            if &data[start..start + MacAddress::SIZE] != first {
                return Err(WolError::repetition_mismatch());
            }
        }

        Ok(Self { data })
    }

    /// The target hardware address carried by this packet.
    pub fn target_mac(&self) -> MacAddress {
        // Structure validated in parse(), the slice is exactly 6 bytes
        let mut octets = [0u8; 6];
        octets.copy_from_slice(&self.data[SYNC_STREAM_SIZE..SYNC_STREAM_SIZE + MacAddress::SIZE]);
        MacAddress::new(octets)
    }

    /// The SecureOn password, if the packet carries one.
    pub fn password(&self) -> Option<Password> {
        let trailer = &self.data[MAGIC_PACKET_SIZE..];
        // Trailer length validated in parse() to be 0, 4 or 6
        Password::from_bytes(trailer).ok()
    }

    /// The complete packet data.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::SYNC_STREAM;

    const MAC: MacAddress = MacAddress::new([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);

    #[test]
    fn test_build_plain() {
        let mut buf = [0u8; 128];
        let len = MagicPacketBuilder::new(MAC).build(&mut buf).unwrap();

        assert_eq!(len, 102);
        assert_eq!(&buf[..6], &SYNC_STREAM);
        for rep in 0..16 {
            let start = 6 + rep * 6;
            assert_eq!(&buf[start..start + 6], &MAC.octets());
        }
    }

    #[test]
    fn test_build_with_password() {
        let pw = Password::Six(*b"secret");
        let builder = MagicPacketBuilder::new(MAC).with_password(pw);
        assert_eq!(builder.size(), 108);

        let mut buf = [0u8; 128];
        let len = builder.build(&mut buf).unwrap();

        assert_eq!(len, 108);
        assert_eq!(&buf[102..108], b"secret");
    }

    #[test]
    fn test_build_buffer_too_small() {
        let mut buf = [0u8; 101];
        let result = MagicPacketBuilder::new(MAC).build(&mut buf);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_roundtrip() {
        let mut buf = [0u8; 102];
        let len = MagicPacketBuilder::new(MAC).build(&mut buf).unwrap();

        let packet = MagicPacket::parse(&buf[..len]).unwrap();
        assert_eq!(packet.target_mac(), MAC);
        assert!(packet.password().is_none());
    }

    #[test]
    fn test_parse_password_roundtrip() {
        let pw = Password::Four([1, 2, 3, 4]);
        let mut buf = [0u8; 128];
        let len = MagicPacketBuilder::new(MAC)
            .with_password(pw)
            .build(&mut buf)
            .unwrap();

        let packet = MagicPacket::parse(&buf[..len]).unwrap();
        assert_eq!(packet.target_mac(), MAC);
        assert_eq!(packet.password(), Some(pw));
    }

    #[test]
    fn test_parse_broadcast_target_is_valid() {
        let mut buf = [0u8; 102];
        let len = MagicPacketBuilder::new(MacAddress::BROADCAST)
            .build(&mut buf)
            .unwrap();

        let packet = MagicPacket::parse(&buf[..len]).unwrap();
        assert!(packet.target_mac().is_broadcast());
    }

    #[test]
    fn test_parse_bad_length() {
        assert!(MagicPacket::parse(&[0xFF; 101]).is_err());
        assert!(MagicPacket::parse(&[0xFF; 103]).is_err());
        assert!(MagicPacket::parse(&[]).is_err());
    }

    #[test]
    fn test_parse_bad_sync_stream() {
        let mut buf = [0u8; 102];
        MagicPacketBuilder::new(MAC).build(&mut buf).unwrap();
        buf[3] = 0x00;

        let err = MagicPacket::parse(&buf).unwrap_err();
        match err {
            WolError::Protocol(e) => assert!(e.is_invalid_sync_stream()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_repetition_mismatch() {
        let mut buf = [0u8; 102];
        MagicPacketBuilder::new(MAC).build(&mut buf).unwrap();
        // Corrupt the 9th repetition
        buf[6 + 8 * 6] ^= 0x01;

        let err = MagicPacket::parse(&buf).unwrap_err();
        match err {
            WolError::Protocol(e) => assert!(e.is_repetition_mismatch()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_password_from_bytes() {
        assert_eq!(
            Password::from_bytes(&[1, 2, 3, 4]).unwrap(),
            Password::Four([1, 2, 3, 4])
        );
        assert_eq!(
            Password::from_bytes(b"abcdef").unwrap(),
            Password::Six(*b"abcdef")
        );
        assert!(Password::from_bytes(&[1, 2, 3]).is_err());
        assert!(Password::from_bytes(&[]).is_err());
    }
}
