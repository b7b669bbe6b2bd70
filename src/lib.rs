#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # wol-pico
//!
//! Wake-on-LAN magic packet sender for embedded systems.
//!
//! This crate provides a `no_std` implementation of the Wake-on-LAN
//! protocol, designed for use with the Embassy async runtime on embedded
//! microcontrollers.
//!
//! ## Features
//!
//! - Magic packet construction and validation
//! - MAC address parsing with compile-time validated literals
//! - Transport abstraction with mock and Embassy UDP implementations
//! - Wake-relay command parsing (magic packet, raw MAC, ASCII MAC)
//! - Zero-copy parsing, no allocations on the packet path

pub mod addressing;
pub mod configuration;
pub mod error;
pub mod net;
pub mod protocol;
pub mod utility;
pub mod wol_client;

// Macro modules (must be declared before use)
#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

// Re-export commonly used types
#[doc(inline)]
pub use addressing::MacAddress;
#[doc(inline)]
pub use error::{Result, WolError};
#[doc(inline)]
pub use net::{IpEndpoint, Ipv4Addr};
#[doc(inline)]
pub use protocol::command::WakeCommand;
#[doc(inline)]
pub use protocol::magic::{MagicPacket, MagicPacketBuilder, Password};
#[doc(inline)]
pub use wol_client::WolClient;
