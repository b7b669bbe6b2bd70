//! High-level wake sender.
//!
//! [`WolClient`] layers the magic packet builder over an
//! [`AsyncTransport`], so the same wake logic runs against an Embassy UDP
//! socket on hardware and against the mock transport in tests.
//!
//! Wake-on-LAN has no acknowledgement: a wake is a small burst of
//! identical datagrams sent to a broadcast address, and that is all.
//!
//! ## Example
//!
//! ```
//! use wol_pico::net::mock_transport::MockTransport;
//! use wol_pico::{MacAddress, WolClient};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let mut client = WolClient::new(MockTransport::new());
//!
//! let mac: MacAddress = "00:11:22:33:44:55".parse()?;
//! client.wake(mac).await?;
//! # Ok::<(), wol_pico::WolError>(())
//! # }).unwrap();
//! ```

use crate::addressing::MacAddress;
use crate::error::Result;
use crate::net::transport::AsyncTransport;
use crate::net::{IpEndpoint, Ipv4Addr};
use crate::protocol::constants::{DEFAULT_BURST, DEFAULT_WOL_PORT, MAX_MAGIC_PACKET_SIZE};
use crate::protocol::magic::{MagicPacketBuilder, Password};

/// High-level Wake-on-LAN client.
///
/// Owns a transport and a default destination endpoint. The default
/// destination is the limited broadcast `255.255.255.255:9`, which works
/// without any knowledge of the local subnet; the firmware narrows it to
/// the subnet-directed broadcast once DHCP configuration is known.
pub struct WolClient<T: AsyncTransport> {
    /// Underlying datagram transport
    transport: T,
    /// Default wake destination
    destination: IpEndpoint,
    /// Copies of each packet sent per wake
    burst: usize,
    /// Scratch buffer for packet construction
    tx_buffer: [u8; MAX_MAGIC_PACKET_SIZE],
}

impl<T: AsyncTransport> WolClient<T> {
    /// Create a new client with the default destination
    /// (`255.255.255.255:9`) and burst size.
    pub fn new(transport: T) -> Self {
        Self::with_destination(
            transport,
            IpEndpoint::new(Ipv4Addr::BROADCAST, DEFAULT_WOL_PORT),
        )
    }

    /// Create a new client with an explicit default destination.
    pub fn with_destination(transport: T, destination: IpEndpoint) -> Self {
        Self {
            transport,
            destination,
            burst: DEFAULT_BURST,
            tx_buffer: [0u8; MAX_MAGIC_PACKET_SIZE],
        }
    }

    /// Set the number of packet copies sent per wake.
    ///
    /// Values below 1 are clamped to 1.
    pub fn set_burst(&mut self, burst: usize) {
        self.burst = burst.max(1);
    }

    /// Change the default wake destination.
    pub fn set_destination(&mut self, destination: IpEndpoint) {
        self.destination = destination;
    }

    /// The current default wake destination.
    pub const fn destination(&self) -> IpEndpoint {
        self.destination
    }

    /// Wake a machine via the default destination.
    pub async fn wake(&mut self, mac: MacAddress) -> Result<()> {
        let destination = self.destination;
        self.send_burst(MagicPacketBuilder::new(mac), destination)
            .await
    }

    /// Wake a machine whose NIC requires a SecureOn password.
    pub async fn wake_with_password(
        &mut self,
        mac: MacAddress,
        password: Password,
    ) -> Result<()> {
        let destination = self.destination;
        self.send_burst(
            MagicPacketBuilder::new(mac).with_password(password),
            destination,
        )
        .await
    }

    /// Wake a machine via an explicit destination (directed broadcast or
    /// unicast to a sleep proxy).
    pub async fn wake_to(&mut self, mac: MacAddress, destination: IpEndpoint) -> Result<()> {
        self.send_burst(MagicPacketBuilder::new(mac), destination)
            .await
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport.
    ///
    /// The firmware's relay loop receives wake requests on the same
    /// socket it sends bursts from.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the client and return the underlying transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Build the packet once and send `burst` copies.
    async fn send_burst(
        &mut self,
        builder: MagicPacketBuilder,
        destination: IpEndpoint,
    ) -> Result<()> {
        let len = builder.build(&mut self.tx_buffer)?;

        for _ in 0..self.burst {
            self.transport
                .send_to(&self.tx_buffer[..len], destination)
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::mock_transport::MockTransport;
    use crate::protocol::magic::MagicPacket;

    const MAC: MacAddress = MacAddress::new([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);

    #[tokio::test]
    async fn test_wake_sends_burst_of_valid_packets() {
        let mut client = WolClient::new(MockTransport::new());

        client.wake(MAC).await.unwrap();

        let mock = client.into_transport();
        assert_eq!(mock.sent_packets().len(), DEFAULT_BURST);

        for (data, dest) in mock.sent_packets() {
            let packet = MagicPacket::parse(data).unwrap();
            assert_eq!(packet.target_mac(), MAC);
            assert_eq!(*dest, IpEndpoint::new(Ipv4Addr::BROADCAST, 9));
        }
    }

    #[tokio::test]
    async fn test_wake_with_password() {
        let pw = Password::Six(*b"secret");
        let mut client = WolClient::new(MockTransport::new());
        client.set_burst(1);

        client.wake_with_password(MAC, pw).await.unwrap();

        let mock = client.into_transport();
        let (data, _) = mock.last_sent().unwrap();
        let packet = MagicPacket::parse(data).unwrap();
        assert_eq!(packet.password(), Some(pw));
    }

    #[tokio::test]
    async fn test_wake_to_overrides_destination() {
        let directed = IpEndpoint::new(Ipv4Addr::new(192, 168, 1, 255), 7);
        let mut client = WolClient::new(MockTransport::new());
        client.set_burst(1);

        client.wake_to(MAC, directed).await.unwrap();

        let mock = client.into_transport();
        assert_eq!(mock.last_sent().unwrap().1, directed);
    }

    #[tokio::test]
    async fn test_burst_clamped_to_one() {
        let mut client = WolClient::new(MockTransport::new());
        client.set_burst(0);

        client.wake(MAC).await.unwrap();

        assert_eq!(client.transport().sent_packets().len(), 1);
    }

    #[tokio::test]
    async fn test_wake_propagates_transport_failure() {
        let mut mock = MockTransport::new();
        mock.set_send_failure(true);
        let mut client = WolClient::new(mock);

        let err = client.wake(MAC).await.unwrap_err();
        match err {
            crate::error::WolError::Transport(e) => assert!(e.is_send_failed()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_destination() {
        let client = WolClient::new(MockTransport::new());
        assert_eq!(
            client.destination(),
            IpEndpoint::new(Ipv4Addr::BROADCAST, 9)
        );
    }
}
