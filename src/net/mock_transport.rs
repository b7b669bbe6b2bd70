//! Mock transport implementation for testing.
//!
//! This module provides a mock implementation of `AsyncTransport` that can
//! be used in unit tests to simulate network behavior without requiring
//! actual network hardware.
//!
//! ## Example
//!
//! ```
//! use wol_pico::net::mock_transport::MockTransport;
//!
//! let mut mock = MockTransport::new();
//! mock.add_response(vec![0xFF; 102]);
//! assert!(mock.has_responses());
//! ```

use crate::error::Result;
use crate::net::transport::AsyncTransport;
use crate::net::IpEndpoint;

#[cfg(feature = "std")]
use std::collections::VecDeque;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Mock transport for testing wake logic without a real network.
///
/// This mock transport allows you to:
/// - Pre-program responses that will be returned by `recv_from()`
/// - Inspect packets sent via `send_to()`
/// - Simulate network errors
/// - Test protocol logic in isolation
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Queue of pre-programmed responses to return from recv_from()
    responses: VecDeque<(Vec<u8>, IpEndpoint)>,
    /// Record of all packets sent via send_to()
    sent_packets: Vec<(Vec<u8>, IpEndpoint)>,
    /// Whether the transport is "ready" (simulates binding)
    ready: bool,
    /// Simulated failure flags
    fail_bind: bool,
    fail_send: bool,
    fail_recv: bool,
}

impl MockTransport {
    /// Create a new mock transport.
    pub fn new() -> Self {
        Self {
            responses: VecDeque::new(),
            sent_packets: Vec::new(),
            ready: true, // Start ready by default
            fail_bind: false,
            fail_send: false,
            fail_recv: false,
        }
    }

    /// Add a response that will be returned by the next `recv_from()` call.
    ///
    /// Responses are returned in FIFO order. The source endpoint defaults
    /// to a host on the local subnet.
    pub fn add_response(&mut self, data: Vec<u8>) {
        self.add_response_from(data, IpEndpoint::new([192, 168, 1, 20].into(), 4950));
    }

    /// Add a response with a specific source endpoint.
    pub fn add_response_from(&mut self, data: Vec<u8>, from: IpEndpoint) {
        self.responses.push_back((data, from));
    }

    /// Get all packets that were sent via `send_to()`.
    ///
    /// Returns a slice of `(data, destination)` tuples.
    pub fn sent_packets(&self) -> &[(Vec<u8>, IpEndpoint)] {
        &self.sent_packets
    }

    /// Get the last packet that was sent.
    ///
    /// Returns `None` if no packets have been sent.
    pub fn last_sent(&self) -> Option<&(Vec<u8>, IpEndpoint)> {
        self.sent_packets.last()
    }

    /// Clear all sent packets from the history.
    ///
    /// Useful for resetting state between test phases.
    pub fn clear_sent(&mut self) {
        self.sent_packets.clear();
    }

    /// Clear all pending responses.
    pub fn clear_responses(&mut self) {
        self.responses.clear();
    }

    /// Set whether the transport should report as "ready".
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Make the next `bind()` call fail.
    pub fn set_bind_failure(&mut self, fail: bool) {
        self.fail_bind = fail;
    }

    /// Make `send_to()` calls fail.
    pub fn set_send_failure(&mut self, fail: bool) {
        self.fail_send = fail;
    }

    /// Make `recv_from()` calls fail instead of timing out.
    pub fn set_recv_failure(&mut self, fail: bool) {
        self.fail_recv = fail;
    }

    /// Check if there are pending responses.
    pub fn has_responses(&self) -> bool {
        !self.responses.is_empty()
    }

    /// Get the number of pending responses.
    pub fn pending_responses(&self) -> usize {
        self.responses.len()
    }
}

impl AsyncTransport for MockTransport {
    fn bind(&mut self, _port: u16) -> Result<()> {
        if self.fail_bind {
            return Err(crate::error::WolError::socket_error());
        }
        self.ready = true;
        Ok(())
    }

    async fn send_to(&mut self, data: &[u8], addr: IpEndpoint) -> Result<()> {
        if !self.ready {
            return Err(crate::error::WolError::not_bound());
        }
        if self.fail_send {
            return Err(crate::error::WolError::send_failed());
        }

        // Record the sent packet
        self.sent_packets.push((data.to_vec(), addr));
        Ok(())
    }

    async fn recv_from(&mut self, buf: &mut [u8]) -> Result<(usize, IpEndpoint)> {
        if self.fail_recv {
            return Err(crate::error::WolError::receive_failed());
        }

        // Return the next pre-programmed response
        if let Some((data, from)) = self.responses.pop_front() {
            let len = data.len().min(buf.len());
            buf[..len].copy_from_slice(&data[..len]);
            Ok((len, from))
        } else {
            // No more responses - simulate timeout/error
            Err(crate::error::WolError::Timeout)
        }
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn close(&mut self) {
        self.ready = false;
        self.responses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_receive() {
        let mut mock = MockTransport::new();

        // Add response
        mock.add_response(vec![0x01, 0x02, 0x03]);

        // Send data
        let dest = IpEndpoint::new([192, 168, 1, 255].into(), 9);
        mock.send_to(&[0xAA, 0xBB], dest).await.unwrap();

        // Check sent
        assert_eq!(mock.sent_packets().len(), 1);
        assert_eq!(mock.sent_packets()[0].0, vec![0xAA, 0xBB]);
        assert_eq!(mock.sent_packets()[0].1, dest);

        // Receive response
        let mut buf = [0u8; 10];
        let (n, _) = mock.recv_from(&mut buf).await.unwrap();
        assert_eq!(n, 3);
        assert_eq!(&buf[..3], &[0x01, 0x02, 0x03]);
    }

    #[tokio::test]
    async fn test_mock_no_response_returns_error() {
        let mut mock = MockTransport::new();

        // No responses programmed
        let mut buf = [0u8; 10];
        let result = mock.recv_from(&mut buf).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_fifo_order() {
        let mut mock = MockTransport::new();

        mock.add_response(vec![0x01]);
        mock.add_response(vec![0x02]);
        mock.add_response(vec![0x03]);

        let mut buf = [0u8; 10];

        let (_n, _) = mock.recv_from(&mut buf).await.unwrap();
        assert_eq!(buf[0], 0x01);

        let (_n, _) = mock.recv_from(&mut buf).await.unwrap();
        assert_eq!(buf[0], 0x02);

        let (_n, _) = mock.recv_from(&mut buf).await.unwrap();
        assert_eq!(buf[0], 0x03);
    }

    #[tokio::test]
    async fn test_mock_simulated_failures() {
        let mut mock = MockTransport::new();
        let dest = IpEndpoint::new([192, 168, 1, 255].into(), 9);

        mock.set_bind_failure(true);
        assert!(mock.bind(4950).is_err());
        mock.set_bind_failure(false);
        assert!(mock.bind(4950).is_ok());

        mock.set_send_failure(true);
        assert!(mock.send_to(&[0xFF], dest).await.is_err());
        mock.set_send_failure(false);
        assert!(mock.send_to(&[0xFF], dest).await.is_ok());

        mock.add_response(vec![0x01]);
        mock.set_recv_failure(true);
        let mut buf = [0u8; 10];
        assert!(mock.recv_from(&mut buf).await.is_err());
        mock.set_recv_failure(false);
        assert!(mock.recv_from(&mut buf).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_closed_rejects_send() {
        let mut mock = MockTransport::new();
        mock.close();

        let dest = IpEndpoint::new([192, 168, 1, 255].into(), 9);
        let result = mock.send_to(&[0xFF], dest).await;
        assert!(result.is_err());
        assert!(mock.sent_packets().is_empty());
    }

    #[test]
    fn test_mock_ready_state() {
        let mut mock = MockTransport::new();
        assert!(mock.is_ready());

        mock.set_ready(false);
        assert!(!mock.is_ready());

        mock.close();
        assert!(!mock.is_ready());
    }
}
