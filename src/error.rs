//! Error types for Wake-on-LAN operations.
//!
//! This module provides structured error types with backtraces (when std is
//! enabled) and helper methods for error information.

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for Wake-on-LAN operations.
pub type Result<T> = core::result::Result<T, WolError>;

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// Protocol error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum ProtocolErrorKind {
    InvalidPacket,
    InvalidSyncStream,
    RepetitionMismatch,
    InvalidPassword,
    PayloadTooLarge,
    UnknownCommand,
}

/// Transport error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum TransportErrorKind {
    SendFailed,
    ReceiveFailed,
    BufferTooSmall,
    NotBound,
    SocketError,
}

/// Addressing error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum AddressingErrorKind {
    InvalidMacAddress,
    InvalidIpAddress,
}

/// Configuration error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum ConfigErrorKind {
    MissingField,
    InvalidValue,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// Wake-on-LAN error types.
///
/// This is the main error type returned by all operations in this crate.
/// It contains a backtrace (when the std feature is enabled) and detailed
/// error information through helper methods.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WolError {
    /// Protocol-related errors (packet structure, sync stream, etc.)
    Protocol(ProtocolError),
    /// Transport-related errors (socket, send, receive, etc.)
    Transport(TransportError),
    /// Addressing errors (invalid MAC or IP format)
    Addressing(AddressingError),
    /// Configuration errors (missing or malformed template fields)
    Config(ConfigError),
    /// Operation timed out
    Timeout,
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Protocol error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProtocolError {
    kind: ProtocolErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl ProtocolError {
    pub(crate) fn new(kind: ProtocolErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if this is an invalid packet error
    pub fn is_invalid_packet(&self) -> bool {
        matches!(self.kind, ProtocolErrorKind::InvalidPacket)
    }

    /// Check if the sync stream was malformed
    pub fn is_invalid_sync_stream(&self) -> bool {
        matches!(self.kind, ProtocolErrorKind::InvalidSyncStream)
    }

    /// Check if the MAC repetitions disagreed
    pub fn is_repetition_mismatch(&self) -> bool {
        matches!(self.kind, ProtocolErrorKind::RepetitionMismatch)
    }

    /// Check if a datagram was not a recognizable wake command
    pub fn is_unknown_command(&self) -> bool {
        matches!(self.kind, ProtocolErrorKind::UnknownCommand)
    }
}

/// Transport error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportError {
    kind: TransportErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl TransportError {
    pub(crate) fn new(kind: TransportErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if buffer is too small
    pub fn is_buffer_too_small(&self) -> bool {
        matches!(self.kind, TransportErrorKind::BufferTooSmall)
    }

    /// Check if this is a socket error
    pub fn is_socket_error(&self) -> bool {
        matches!(self.kind, TransportErrorKind::SocketError)
    }

    /// Check if a send failed
    pub fn is_send_failed(&self) -> bool {
        matches!(self.kind, TransportErrorKind::SendFailed)
    }
}

/// Addressing error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressingError {
    kind: AddressingErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl AddressingError {
    pub(crate) fn new(kind: AddressingErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if this is an invalid MAC address error
    pub fn is_invalid_mac(&self) -> bool {
        matches!(self.kind, AddressingErrorKind::InvalidMacAddress)
    }
}

/// Configuration error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigError {
    kind: ConfigErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl ConfigError {
    pub(crate) fn new(kind: ConfigErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if a configuration field was missing
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind, ConfigErrorKind::MissingField)
    }
}

// =============================================================================
// Convenience Constructors for WolError
// =============================================================================

impl WolError {
    // Protocol errors
    #[inline]
    pub(crate) const fn invalid_packet() -> Self {
        Self::Protocol(ProtocolError { kind: ProtocolErrorKind::InvalidPacket, #[cfg(feature = "std")] backtrace: Backtrace::disabled() })
    }

    #[inline]
    pub(crate) const fn invalid_sync_stream() -> Self {
        Self::Protocol(ProtocolError { kind: ProtocolErrorKind::InvalidSyncStream, #[cfg(feature = "std")] backtrace: Backtrace::disabled() })
    }

    #[inline]
    pub(crate) const fn repetition_mismatch() -> Self {
        Self::Protocol(ProtocolError { kind: ProtocolErrorKind::RepetitionMismatch, #[cfg(feature = "std")] backtrace: Backtrace::disabled() })
    }

    #[inline]
    pub(crate) const fn payload_too_large() -> Self {
        Self::Protocol(ProtocolError { kind: ProtocolErrorKind::PayloadTooLarge, #[cfg(feature = "std")] backtrace: Backtrace::disabled() })
    }

    pub(crate) fn invalid_password() -> Self {
        Self::Protocol(ProtocolError::new(ProtocolErrorKind::InvalidPassword))
    }

    pub(crate) fn unknown_command() -> Self {
        Self::Protocol(ProtocolError::new(ProtocolErrorKind::UnknownCommand))
    }

    // Transport errors
    pub(crate) fn buffer_too_small() -> Self {
        Self::Transport(TransportError::new(TransportErrorKind::BufferTooSmall))
    }

    pub(crate) fn socket_error() -> Self {
        Self::Transport(TransportError::new(TransportErrorKind::SocketError))
    }

    pub(crate) fn send_failed() -> Self {
        Self::Transport(TransportError::new(TransportErrorKind::SendFailed))
    }

    pub(crate) fn receive_failed() -> Self {
        Self::Transport(TransportError::new(TransportErrorKind::ReceiveFailed))
    }

    pub(crate) fn not_bound() -> Self {
        Self::Transport(TransportError::new(TransportErrorKind::NotBound))
    }

    // Addressing errors
    pub(crate) fn invalid_mac_address() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::InvalidMacAddress))
    }

    pub(crate) fn invalid_ip_address() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::InvalidIpAddress))
    }

    // Configuration errors
    pub(crate) fn config_missing_field() -> Self {
        Self::Config(ConfigError::new(ConfigErrorKind::MissingField))
    }

    pub(crate) fn config_invalid_value() -> Self {
        Self::Config(ConfigError::new(ConfigErrorKind::InvalidValue))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for WolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WolError::Protocol(e) => write!(f, "Protocol error: {:?}", e.kind),
            WolError::Transport(e) => write!(f, "Transport error: {:?}", e.kind),
            WolError::Addressing(e) => write!(f, "Addressing error: {:?}", e.kind),
            WolError::Config(e) => write!(f, "Configuration error: {:?}", e.kind),
            WolError::Timeout => write!(f, "Operation timeout"),
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for WolError {}
