//! Network transport abstraction for Wake-on-LAN communication.
//!
//! This module provides the `AsyncTransport` trait that abstracts the
//! underlying network transport mechanism, enabling:
//! - Testability through mock implementations
//! - Flexibility to support different transport types (UDP, serial, USB, etc.)
//!
//! High-level components ([`WolClient`](crate::wol_client::WolClient))
//! depend on this abstraction rather than on a concrete socket type, so the
//! same wake logic runs against a real Embassy UDP socket on hardware and
//! against [`MockTransport`](crate::net::mock_transport::MockTransport) in
//! unit tests.

use crate::error::Result;
use crate::net::IpEndpoint;

/// Asynchronous network transport abstraction.
///
/// This trait defines the interface for any network transport mechanism
/// that can send and receive UDP-like datagrams. Implementations can be
/// real network sockets, mock objects for testing, or alternative
/// transports.
///
/// The trait is kept minimal to support embedded constraints:
/// - No heap allocations in trait methods
/// - Async/await compatible
/// - Works with `no_std`
///
/// # Examples
///
/// ```
/// use wol_pico::net::mock_transport::MockTransport;
/// use wol_pico::net::transport::AsyncTransport;
///
/// let transport = MockTransport::new();
/// assert!(transport.is_ready());
/// ```
#[allow(async_fn_in_trait)]
pub trait AsyncTransport {
    /// Bind the transport to a local port.
    ///
    /// # Arguments
    ///
    /// * `port` - Local port to bind to (0 = any available port)
    ///
    /// # Errors
    ///
    /// Returns error if the port is already in use or binding fails.
    ///
    /// Default implementation does nothing (no-op). Override if your
    /// transport requires explicit binding before sending/receiving.
    fn bind(&mut self, _port: u16) -> Result<()> {
        Ok(())
    }

    /// Send data to a specific network endpoint.
    ///
    /// # Arguments
    ///
    /// * `data` - The data to send (typically a magic packet)
    /// * `addr` - The destination endpoint (IP + port)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network is unavailable
    /// - Send buffer is full
    /// - Transport is closed
    async fn send_to(&mut self, data: &[u8], addr: IpEndpoint) -> Result<()>;

    /// Receive data from the network.
    ///
    /// This method blocks until data is available or an error occurs.
    ///
    /// # Arguments
    ///
    /// * `buf` - Buffer to store received data
    ///
    /// # Returns
    ///
    /// A tuple of:
    /// - Number of bytes received
    /// - Source endpoint (IP + port)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Receive operation fails
    /// - Buffer is too small
    /// - Transport is closed
    async fn recv_from(&mut self, buf: &mut [u8]) -> Result<(usize, IpEndpoint)>;

    /// Check if the transport is currently ready to send.
    ///
    /// Default implementation returns `true`. Override if your transport
    /// has connection state to track.
    fn is_ready(&self) -> bool {
        true
    }

    /// Close the transport and release resources.
    ///
    /// Default implementation does nothing. Override if your transport
    /// needs cleanup.
    fn close(&mut self) {
        // Default: no-op
    }
}
