//! Wake-relay command decoding.
//!
//! The firmware's relay accepts a UDP datagram and turns it into a magic
//! packet broadcast on the local subnet. Three encodings are recognized,
//! tried from most to least specific:
//!
//! 1. A complete magic packet (102/106/108 bytes) - the target MAC and
//!    SecureOn password are lifted out and re-broadcast. This lets the
//!    device act as a sleep proxy for wake tools that cannot reach the
//!    target subnet themselves.
//! 2. A raw 6-byte MAC address.
//! 3. ASCII text containing a MAC in colon or dash form, with optional
//!    surrounding whitespace (so `echo AA:BB:.. | nc -u` works).
//!
//! ## Example
//!
//! ```
//! use wol_pico::WakeCommand;
//!
//! let cmd = WakeCommand::parse(b"00:1A:2B:3C:4D:5E\n")?;
//! assert_eq!(cmd.mac().octets(), [0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);
//! # Ok::<(), wol_pico::WolError>(())
//! ```

use crate::addressing::MacAddress;
use crate::error::{Result, WolError};
use crate::protocol::constants::{
    MAGIC_PACKET_SIZE, MAGIC_PACKET_SIZE_PW4, MAGIC_PACKET_SIZE_PW6,
};
use crate::protocol::magic::{MagicPacket, Password};

/// A decoded wake request: which machine to wake, and with which
/// SecureOn password, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WakeCommand {
    mac: MacAddress,
    password: Option<Password>,
}

impl WakeCommand {
    /// Create a wake command for a target MAC.
    pub const fn new(mac: MacAddress) -> Self {
        Self {
            mac,
            password: None,
        }
    }

    /// Attach a SecureOn password.
    #[must_use]
    pub const fn with_password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// The machine to wake.
    pub const fn mac(&self) -> MacAddress {
        self.mac
    }

    /// The SecureOn password to forward, if any.
    pub const fn password(&self) -> Option<Password> {
        self.password
    }

    /// Decode a relay datagram into a wake command.
    ///
    /// # Errors
    ///
    /// Returns an unknown-command protocol error if the datagram matches
    /// none of the recognized encodings. A datagram that looks like a
    /// magic packet but is structurally invalid reports the underlying
    /// protocol error instead.
    pub fn parse(data: &[u8]) -> Result<Self> {
        // Full magic packet: exact sizes, checked first so a packet is
        // never misread as text.
        if matches!(
            data.len(),
            MAGIC_PACKET_SIZE | MAGIC_PACKET_SIZE_PW4 | MAGIC_PACKET_SIZE_PW6
        ) {
            let packet = MagicPacket::parse(data)?;
            let mut command = Self::new(packet.target_mac());
            command.password = packet.password();
            return Ok(command);
        }

        // Raw 6-byte MAC
        if data.len() == MacAddress::SIZE {
            return Ok(Self::new(MacAddress::from_bytes(data)?));
        }

        // ASCII text form, tolerating trailing newline from shell tools
        if let Ok(text) = core::str::from_utf8(data) {
            if let Ok(mac) = text.trim().parse::<MacAddress>() {
                return Ok(Self::new(mac));
            }
        }

        Err(WolError::unknown_command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::magic::MagicPacketBuilder;

    const MAC: MacAddress = MacAddress::new([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);

    #[test]
    fn test_parse_magic_packet() {
        let mut buf = [0u8; 102];
        let len = MagicPacketBuilder::new(MAC).build(&mut buf).unwrap();

        let cmd = WakeCommand::parse(&buf[..len]).unwrap();
        assert_eq!(cmd.mac(), MAC);
        assert!(cmd.password().is_none());
    }

    #[test]
    fn test_parse_magic_packet_with_password() {
        let pw = Password::Six(*b"secret");
        let mut buf = [0u8; 108];
        let len = MagicPacketBuilder::new(MAC)
            .with_password(pw)
            .build(&mut buf)
            .unwrap();

        let cmd = WakeCommand::parse(&buf[..len]).unwrap();
        assert_eq!(cmd.mac(), MAC);
        assert_eq!(cmd.password(), Some(pw));
    }

    #[test]
    fn test_parse_raw_mac() {
        let cmd = WakeCommand::parse(&[0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]).unwrap();
        assert_eq!(cmd.mac(), MAC);
    }

    #[test]
    fn test_parse_ascii_mac() {
        let cmd = WakeCommand::parse(b"00:1A:2B:3C:4D:5E").unwrap();
        assert_eq!(cmd.mac(), MAC);

        // Shell tools append a newline
        let cmd = WakeCommand::parse(b"00-1a-2b-3c-4d-5e\n").unwrap();
        assert_eq!(cmd.mac(), MAC);

        // Surrounding whitespace
        let cmd = WakeCommand::parse(b"  00:1A:2B:3C:4D:5E \r\n").unwrap();
        assert_eq!(cmd.mac(), MAC);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(WakeCommand::parse(b"").is_err());
        assert!(WakeCommand::parse(b"wake up please").is_err());
        assert!(WakeCommand::parse(&[0x00; 10]).is_err());
        // Text of the right shape but bad digits
        assert!(WakeCommand::parse(b"ZZ:ZZ:ZZ:ZZ:ZZ:ZZ").is_err());
    }

    #[test]
    fn test_parse_prefers_magic_packet_over_text() {
        // A 102-byte datagram is parsed as a packet, not as text,
        // even though it is not valid UTF-8 anyway.
        let mut buf = [0u8; 102];
        MagicPacketBuilder::new(MacAddress::BROADCAST)
            .build(&mut buf)
            .unwrap();

        let cmd = WakeCommand::parse(&buf).unwrap();
        assert!(cmd.mac().is_broadcast());
    }

    #[test]
    fn test_parse_corrupt_magic_packet_reports_protocol_error() {
        let mut buf = [0u8; 102];
        MagicPacketBuilder::new(MAC).build(&mut buf).unwrap();
        buf[0] = 0x00; // break the sync stream

        let err = WakeCommand::parse(&buf).unwrap_err();
        match err {
            WolError::Protocol(e) => assert!(e.is_invalid_sync_stream()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_builder_style() {
        let pw = Password::Four([9, 9, 9, 9]);
        let cmd = WakeCommand::new(MAC).with_password(pw);
        assert_eq!(cmd.password(), Some(pw));
    }
}
