//! Wake-on-LAN protocol implementation.
//!
//! - [`constants`] - Wire format constants and well-known ports
//! - [`magic`] - Magic packet construction and zero-copy parsing
//! - [`command`] - Wake-relay command decoding

pub mod command;
pub mod constants;
pub mod magic;
