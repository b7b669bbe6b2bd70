//! Wake-on-LAN protocol constants and well-known ports.

/// Length of the synchronization stream that opens every magic packet.
pub const SYNC_STREAM_SIZE: usize = 6;

/// The synchronization stream: six bytes of `0xFF`.
pub const SYNC_STREAM: [u8; SYNC_STREAM_SIZE] = [0xFF; SYNC_STREAM_SIZE];

/// Number of times the target MAC is repeated after the sync stream.
pub const MAC_REPETITIONS: usize = 16;

/// Size of a magic packet without a SecureOn password (102 bytes).
pub const MAGIC_PACKET_SIZE: usize = SYNC_STREAM_SIZE + MAC_REPETITIONS * 6;

/// Size of a magic packet with a 4-byte SecureOn password.
pub const MAGIC_PACKET_SIZE_PW4: usize = MAGIC_PACKET_SIZE + 4;

/// Size of a magic packet with a 6-byte SecureOn password.
pub const MAGIC_PACKET_SIZE_PW6: usize = MAGIC_PACKET_SIZE + 6;

/// Largest magic packet this crate will build or accept.
pub const MAX_MAGIC_PACKET_SIZE: usize = MAGIC_PACKET_SIZE_PW6;

// =============================================================================
// Well-Known Ports
// =============================================================================

// Magic packets are read straight off the link layer, so any UDP port
// works. These three are the conventional choices.

/// Reserved port 0, used by some early implementations.
pub const WOL_PORT_RESERVED: u16 = 0;

/// Echo protocol port 7.
pub const WOL_PORT_ECHO: u16 = 7;

/// Discard protocol port 9, the most common choice.
pub const WOL_PORT_DISCARD: u16 = 9;

/// Default destination port for outgoing magic packets.
pub const DEFAULT_WOL_PORT: u16 = WOL_PORT_DISCARD;

// =============================================================================
// Wake Relay
// =============================================================================

/// Default UDP port the firmware's wake relay listens on.
pub const DEFAULT_RELAY_PORT: u16 = 4950;

/// Receive buffer size for relay datagrams.
pub const MAX_DATAGRAM_SIZE: usize = 512;

/// Default number of copies of each magic packet sent per wake.
///
/// WoL is fire-and-forget UDP; a small burst covers single-datagram loss.
pub const DEFAULT_BURST: usize = 3;
