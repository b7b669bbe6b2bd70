//! Embassy UDP socket adapter for `AsyncTransport`.
//!
//! This module provides an adapter that wraps `embassy_net::udp::UdpSocket`
//! to implement the `AsyncTransport` trait, enabling its use with
//! [`WolClient`](crate::wol_client::WolClient) and other transport-agnostic
//! components.
//!
//! ## Example
//!
//! ```ignore
//! use wol_pico::net::embassy_adapter::EmbassyUdpTransport;
//!
//! let mut transport = EmbassyUdpTransport::new(
//!     stack,
//!     &mut rx_meta,
//!     &mut rx_buffer,
//!     &mut tx_meta,
//!     &mut tx_buffer,
//! );
//!
//! transport.bind(0)?;  // Bind to any port
//! transport.send_to(&packet, broadcast_endpoint).await?;
//! ```

use crate::error::{Result, WolError};
use crate::net::transport::AsyncTransport;
use crate::net::{IpEndpoint, Ipv4Addr};
use embassy_net::{
    udp::{PacketMetadata, UdpSocket},
    IpAddress, IpEndpoint as EmbassyEndpoint, Stack,
};

/// Adapter for `embassy_net::udp::UdpSocket` implementing `AsyncTransport`.
///
/// This adapter wraps an Embassy UDP socket and provides the
/// `AsyncTransport` interface, allowing it to be used with any component
/// that depends on the transport abstraction.
///
/// # Lifetimes
///
/// - `'a` - Lifetime of the network stack and the metadata/buffer arrays
pub struct EmbassyUdpTransport<'a> {
    socket: UdpSocket<'a>,
    bound: bool,
}

impl<'a> EmbassyUdpTransport<'a> {
    /// Create a new Embassy UDP transport adapter.
    ///
    /// # Arguments
    ///
    /// * `stack` - Embassy network stack
    /// * `rx_meta` - Receive metadata buffer (typically 4-8 entries)
    /// * `rx_buffer` - Receive data buffer (typically 512 bytes)
    /// * `tx_meta` - Transmit metadata buffer (typically 4-8 entries)
    /// * `tx_buffer` - Transmit data buffer (typically 512 bytes)
    pub fn new(
        stack: Stack<'a>,
        rx_meta: &'a mut [PacketMetadata],
        rx_buffer: &'a mut [u8],
        tx_meta: &'a mut [PacketMetadata],
        tx_buffer: &'a mut [u8],
    ) -> Self {
        let socket = UdpSocket::new(stack, rx_meta, rx_buffer, tx_meta, tx_buffer);
        Self {
            socket,
            bound: false,
        }
    }
}

impl AsyncTransport for EmbassyUdpTransport<'_> {
    fn bind(&mut self, port: u16) -> Result<()> {
        self.socket
            .bind(port)
            .map_err(|_| WolError::socket_error())?;
        self.bound = true;
        Ok(())
    }

    async fn send_to(&mut self, data: &[u8], addr: IpEndpoint) -> Result<()> {
        if !self.bound {
            return Err(WolError::not_bound());
        }

        // Convert our IpEndpoint to embassy IpEndpoint
        let embassy_addr = convert_to_embassy_endpoint(addr);

        self.socket
            .send_to(data, embassy_addr)
            .await
            .map_err(|_| WolError::send_failed())
    }

    async fn recv_from(&mut self, buf: &mut [u8]) -> Result<(usize, IpEndpoint)> {
        let (n, meta) = self
            .socket
            .recv_from(buf)
            .await
            .map_err(|_| WolError::receive_failed())?;

        // Convert embassy IpEndpoint to our IpEndpoint
        let addr = convert_from_embassy_endpoint(meta.endpoint);

        Ok((n, addr))
    }

    fn is_ready(&self) -> bool {
        self.bound
    }

    fn close(&mut self) {
        self.socket.close();
        self.bound = false;
    }
}

/// Convert from our `IpEndpoint` to embassy `IpEndpoint`.
#[inline]
fn convert_to_embassy_endpoint(endpoint: IpEndpoint) -> EmbassyEndpoint {
    let octets = endpoint.addr.octets();
    EmbassyEndpoint::new(
        IpAddress::v4(octets[0], octets[1], octets[2], octets[3]),
        endpoint.port,
    )
}

/// Convert from embassy `IpEndpoint` to our `IpEndpoint`.
#[inline]
fn convert_from_embassy_endpoint(endpoint: EmbassyEndpoint) -> IpEndpoint {
    match endpoint.addr {
        IpAddress::Ipv4(addr) => {
            let octets = addr.octets();
            IpEndpoint::new(Ipv4Addr::from(octets), endpoint.port)
        }
        // Wake-on-LAN does not use IPv6
        _ => IpEndpoint::UNSPECIFIED,
    }
}
