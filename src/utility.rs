//! Utility functions for configuration parsing

use crate::addressing::MacAddress;
use crate::configuration::CONFIG;
use crate::error::{Result, WolError};
use crate::protocol::constants::DEFAULT_RELAY_PORT;

/// Look up a `KEY=value` line in the configuration template.
fn config_value(key: &str) -> Option<&'static str> {
    CONFIG
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
}

/// Extracts the WiFi SSID from configuration.
///
/// # Returns
/// * `&str` - WiFi network SSID
pub fn get_ssid() -> &'static str {
    config_value("WIFI_NETWORK").unwrap_or("your_wifi_ssid_here")
}

/// Extracts the WiFi password from configuration.
///
/// # Returns
/// * `&str` - WiFi network password
pub fn get_wifi_password() -> &'static str {
    config_value("WIFI_PASSWORD").unwrap_or("your_wifi_password_here")
}

/// Extracts the raw default wake target from configuration.
///
/// # Returns
/// * `&str` - target hardware address in textual form
pub fn get_target_mac() -> &'static str {
    config_value("TARGET_MAC").unwrap_or("")
}

/// The default wake target as a parsed address.
///
/// # Errors
///
/// Returns a configuration error if the `TARGET_MAC` field is missing or
/// not a valid hardware address.
pub fn target_mac() -> Result<MacAddress> {
    let raw = config_value("TARGET_MAC").ok_or_else(WolError::config_missing_field)?;
    raw.trim()
        .parse()
        .map_err(|_| WolError::config_invalid_value())
}

/// The UDP port the wake relay listens on.
///
/// Falls back to the default relay port if the field is missing or
/// malformed.
pub fn get_wake_port() -> u16 {
    config_value("WAKE_PORT")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_RELAY_PORT)
}

/// Parse IP address string "a.b.c.d" into `[u8; 4]` array.
///
/// # Arguments
/// * `ip_str` - IP address string in dotted decimal format
///
/// # Returns
/// * `[u8; 4]` - IP address as byte array, defaults to [255, 255, 255, 255] on parse error
pub fn parse_ip(ip_str: &str) -> [u8; 4] {
    let parts: heapless::Vec<&str, 4> = ip_str.split('.').collect();
    if parts.len() == 4 {
        [
            parts[0].parse().unwrap_or(255),
            parts[1].parse().unwrap_or(255),
            parts[2].parse().unwrap_or(255),
            parts[3].parse().unwrap_or(255),
        ]
    } else {
        [255, 255, 255, 255] // Limited broadcast fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The template must define both credential values, non-empty.
    #[test]
    fn test_credentials_present_and_non_empty() {
        assert!(!get_ssid().is_empty());
        assert!(!get_wifi_password().is_empty());
    }

    #[test]
    fn test_target_mac_parses() {
        let mac = target_mac().unwrap();
        assert_eq!(mac.octets(), [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(get_target_mac(), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_wake_port() {
        assert_eq!(get_wake_port(), 4950);
    }

    #[test]
    fn test_parse_ip() {
        assert_eq!(parse_ip("192.168.1.255"), [192, 168, 1, 255]);
        assert_eq!(parse_ip("not an ip"), [255, 255, 255, 255]);
        assert_eq!(parse_ip("10.0.0"), [255, 255, 255, 255]);
    }
}
