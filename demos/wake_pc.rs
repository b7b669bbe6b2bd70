//! Send a Wake-on-LAN magic packet from the host
//!
//! ```bash
//! cargo run --example wake_pc --features std -- AA:BB:CC:DD:EE:FF
//!
//! # Directed broadcast and explicit port:
//! cargo run --example wake_pc --features std -- AA:BB:CC:DD:EE:FF 192.168.1.255 9
//! ```

use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

use wol_pico::protocol::constants::{DEFAULT_BURST, DEFAULT_WOL_PORT};
use wol_pico::{MacAddress, MagicPacketBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let Some(mac_arg) = args.next() else {
        eprintln!("Usage: wake_pc <MAC> [broadcast-ip] [port]");
        std::process::exit(1);
    };

    let mac: MacAddress = mac_arg.parse()?;
    let ip: Ipv4Addr = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(Ipv4Addr::BROADCAST);
    let port: u16 = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(DEFAULT_WOL_PORT);

    let destination = SocketAddrV4::new(ip, port);

    // Build the packet
    let mut packet = [0u8; 102];
    let len = MagicPacketBuilder::new(mac).build(&mut packet)?;
    println!("✅ Built magic packet for {} ({} bytes)", mac, len);

    // Send a small burst
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.set_broadcast(true)?;

    for _ in 0..DEFAULT_BURST {
        socket.send_to(&packet[..len], destination)?;
    }
    println!("📤 Sent {} copies to {}", DEFAULT_BURST, destination);

    Ok(())
}
